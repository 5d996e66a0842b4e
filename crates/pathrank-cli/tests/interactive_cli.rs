use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn interactive() -> Command {
    let mut cmd = cargo_bin_cmd!("pathrank");
    cmd.env("NO_COLOR", "1")
        .env("RUST_LOG", "error")
        .args(["--no-logo", "interactive"]);
    cmd
}

#[test]
fn two_rounds_until_end_of_input() {
    let input = "4\n1\n4\n2\n1\n5\n1\n1\n4\n\
                 3\n2\n0\n2\n1\n3\n";
    interactive()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("How many vertices does your graph have? "))
        .stdout(predicate::str::contains("MINIMUM WEIGHT PATH: [1, 4] with weight 2."))
        .stdout(predicate::str::contains("1 possible paths from vertex 1 to vertex 3:"))
        .stdout(predicate::str::contains("MINIMUM WEIGHT PATH: [1, 2, 3] with weight 4."))
        .stdout(predicate::function(|out: &str| {
            out.lines().filter(|line| line.starts_with("*****")).count() == 2
        }));
}

#[test]
fn quit_stops_the_session() {
    interactive()
        .write_stdin("quit\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the weight").not());
}

#[test]
fn bad_vertex_is_reported_in_session() {
    interactive()
        .write_stdin("3\n1\n1\n1\n1\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ERROR: invalid vertex 9"));
}
