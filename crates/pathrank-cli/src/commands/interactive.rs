//! Interactive session: build a graph edge by edge and rank paths.
//!
//! Each round asks for the vertex count, the weight of every edge above the
//! diagonal (mirrored below it), then the two endpoints. The session ends on
//! end of input or when `quit` is entered at any prompt.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use tracing::debug;

use pathrank_lib::{
    check_vertex_count, compute_routes_with, format_matrix, Graph, RouteQuery, RouteReport,
    SearchConfig, VertexId, Weight,
};

use crate::output::{write_report, OutputFormat};
use crate::terminal::ColorPalette;

/// Printed after every round.
pub const SEPARATOR: &str =
    "*********************************************************************";

/// Handle the interactive subcommand on stdin and stdout.
pub fn handle_interactive_command(format: OutputFormat) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_session(
        stdin.lock(),
        &mut out,
        &SearchConfig::from_env(),
        format,
        &ColorPalette::detect(),
    )
}

/// Run rounds until the input is exhausted or the user quits.
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    config: &SearchConfig,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<()> {
    let mut rounds = 0usize;
    while run_round(&mut input, out, config, format, palette)? {
        rounds += 1;
        writeln!(out, "{}{}{}", palette.muted, SEPARATOR, palette.reset)?;
        writeln!(out)?;
    }
    debug!("interactive session ended after {} rounds", rounds);
    Ok(())
}

/// One round; `false` once the session should stop.
fn run_round<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &SearchConfig,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<bool> {
    let Some(vertex_count) =
        ask::<usize, _, _>(input, out, "How many vertices does your graph have? ")?
    else {
        return Ok(false);
    };
    writeln!(out)?;

    if let Err(err) = check_vertex_count(vertex_count, config.max_vertices) {
        writeln!(out, "{}ERROR: {}{}", palette.error, err, palette.reset)?;
        return Ok(true);
    }

    let mut matrix = vec![vec![0.0; vertex_count]; vertex_count];
    for i in 0..vertex_count {
        for j in (i + 1)..vertex_count {
            let text = format!(
                "Enter the weight of the edge connecting vertices {} and {}: ",
                i + 1,
                j + 1
            );
            let Some(weight) = ask::<Weight, _, _>(input, out, &text)? else {
                return Ok(false);
            };
            matrix[i][j] = weight;
            matrix[j][i] = weight;
        }
    }
    writeln!(out)?;
    write!(out, "{}", format_matrix(&matrix))?;
    writeln!(out)?;

    let graph = match Graph::from_matrix(matrix) {
        Ok(graph) => graph,
        Err(err) => {
            writeln!(out, "{}ERROR: {}{}", palette.error, err, palette.reset)?;
            return Ok(true);
        }
    };

    let Some(start) = ask::<VertexId, _, _>(input, out, "What is the starting vertex? ")? else {
        return Ok(false);
    };
    let Some(end) = ask::<VertexId, _, _>(input, out, "What is the ending vertex? ")? else {
        return Ok(false);
    };
    writeln!(out)?;

    let query = RouteQuery::new(start, end).with_config(config.clone());
    match compute_routes_with(&graph, &query) {
        Ok(result) => write_report(out, &RouteReport::from_result(&result), format, palette)?,
        Err(err) => writeln!(out, "{}ERROR: {}{}", palette.error, err, palette.reset)?,
    }
    Ok(true)
}

/// Prompt until a value parses; `None` on end of input or `quit`.
fn ask<T, R, W>(input: &mut R, out: &mut W, prompt: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    R: BufRead,
    W: Write,
{
    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }
        let answer = line.trim();
        if answer.eq_ignore_ascii_case("quit") || answer.eq_ignore_ascii_case("exit") {
            return Ok(None);
        }
        match answer.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(err) => writeln!(out, "'{}' was not understood ({}); try again.", answer, err)?,
        }
    }
}
