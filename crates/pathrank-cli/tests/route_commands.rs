use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .join(name)
        .canonicalize()
        .expect("fixture matrix present")
}

fn route(matrix: &str, from: usize, to: usize) -> Command {
    let mut cmd = cargo_bin_cmd!("pathrank");
    cmd.env("NO_COLOR", "1")
        .env("RUST_LOG", "error")
        .env_remove("PATHRANK_STRATEGY")
        .env_remove("PATHRANK_TIMEOUT_MS")
        .env_remove("PATHRANK_MAX_VERTICES")
        .arg("--no-logo")
        .arg("route")
        .arg("--matrix")
        .arg(fixture_path(matrix))
        .arg("--from")
        .arg(from.to_string())
        .arg("--to")
        .arg(to.to_string());
    cmd
}

#[test]
fn sample_graph_lists_all_paths_with_minimum() {
    route("four_vertex.txt", 1, 4)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "5 possible paths from vertex 1 to vertex 4:",
        ))
        .stdout(predicate::str::contains(
            "MINIMUM WEIGHT PATH: [1, 4] with weight 2.",
        ))
        .stdout(predicate::str::contains("[1, 2, 3, 4] with weight 3."))
        .stdout(predicate::str::contains("[1, 3, 2, 4] with weight 10."));
}

#[test]
fn json_matrix_is_accepted() {
    route("four_vertex.json", 4, 1)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "MINIMUM WEIGHT PATH: [4, 1] with weight 2.",
        ));
}

#[test]
fn every_strategy_produces_the_same_listing() {
    let baseline = route("hexagon.txt", 1, 4).output().expect("run pathrank");
    assert!(baseline.status.success());

    for strategy in ["permutation", "parallel"] {
        let mut cmd = route("hexagon.txt", 1, 4);
        cmd.arg("--strategy").arg(strategy);
        let output = cmd.output().expect("run pathrank");
        assert!(output.status.success());
        let listing = |bytes: &[u8]| {
            String::from_utf8_lossy(bytes)
                .lines()
                .filter(|line| line.contains("with weight"))
                .map(str::to_owned)
                .collect::<Vec<_>>()
        };
        assert_eq!(listing(&output.stdout), listing(&baseline.stdout), "{strategy}");
    }
}

#[test]
fn table_format_marks_minimum() {
    let mut cmd = cargo_bin_cmd!("pathrank");
    cmd.env("NO_COLOR", "1")
        .env("RUST_LOG", "error")
        .args(["--no-logo", "--format", "table", "route", "--matrix"])
        .arg(fixture_path("hexagon.txt"))
        .args(["--from", "1", "--to", "4"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("RANK  WEIGHT  HOPS  PATH"))
        .stdout(predicate::str::contains("   1     5.5     3  [1, 6, 5, 4]  *"));
}

#[test]
fn json_format_emits_report_without_decorations() {
    let mut cmd = cargo_bin_cmd!("pathrank");
    cmd.env("RUST_LOG", "error")
        .args(["--format", "json", "route", "--matrix"])
        .arg(fixture_path("four_vertex.txt"))
        .args(["--from", "1", "--to", "4"]);

    let output = cmd.output().expect("run pathrank");
    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is a JSON document");
    assert_eq!(report["path_count"], 5);
    assert_eq!(report["minimum"]["path"], serde_json::json!([1, 4]));
    assert_eq!(report["strategy"], "backtracking");
}

#[test]
fn disconnected_vertices_are_unreachable() {
    route("split.txt", 1, 3)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No path connects vertex 1 to vertex 3.",
        ));
}

#[test]
fn min_only_prints_just_the_minimum() {
    let mut cmd = route("hexagon.txt", 1, 4);
    cmd.arg("--min-only");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "MINIMUM WEIGHT PATH: [1, 6, 5, 4] with weight 5.5.",
        ))
        .stdout(predicate::str::contains("possible paths").not());
}

#[test]
fn out_of_range_vertex_fails() {
    route("four_vertex.txt", 1, 5)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid vertex 5"));
}

#[test]
fn asymmetric_matrix_fails_with_context() {
    route("asymmetric.txt", 1, 2)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid adjacency matrix"))
        .stderr(predicate::str::contains("not symmetric"));
}

#[test]
fn vertex_ceiling_from_environment() {
    let mut cmd = route("hexagon.txt", 1, 4);
    cmd.env("PATHRANK_MAX_VERTICES", "5");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the configured limit of 5"));
}

#[test]
fn missing_matrix_file_is_reported() {
    let temp = tempdir().expect("create temp dir");
    let missing = temp.path().join("absent.txt");

    let mut cmd = cargo_bin_cmd!("pathrank");
    cmd.env("RUST_LOG", "error")
        .args(["--no-logo", "route", "--matrix"])
        .arg(&missing)
        .args(["--from", "1", "--to", "2"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read matrix"));
}

#[test]
fn comma_separated_matrix_from_temp_file() {
    let temp = tempdir().expect("create temp dir");
    let path = temp.path().join("triangle.csv");
    fs::write(&path, "0,4,1\n4,0,1\n1,1,0\n").expect("write matrix");

    let mut cmd = cargo_bin_cmd!("pathrank");
    cmd.env("NO_COLOR", "1")
        .env("RUST_LOG", "error")
        .args(["--no-logo", "route", "--matrix"])
        .arg(&path)
        .args(["--from", "1", "--to", "2"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "MINIMUM WEIGHT PATH: [1, 3, 2] with weight 2.",
        ))
        .stdout(predicate::str::contains("[1, 2] with weight 4."));
}
