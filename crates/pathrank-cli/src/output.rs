//! Output formatting for query reports.
//!
//! This module renders library reports in the format selected with
//! `--format` and prints the banner and footer around them.

use std::io::{self, Write};
use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;

use pathrank_lib::{
    format_matrix, format_path, format_weight, GraphStats, Matrix, MinimumPath,
    ReportRenderMode, RouteReport, VertexId,
};

use crate::terminal::{colors, supports_color, supports_unicode, ColorPalette};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One line per path, minimum marked.
    #[default]
    Text,
    /// Markdown list with the minimum in bold.
    Rich,
    /// Fixed-width columns.
    Table,
    /// Pretty-printed JSON document.
    Json,
}

impl OutputFormat {
    /// Library render mode for textual formats; `None` for JSON.
    pub fn report_mode(self) -> Option<ReportRenderMode> {
        match self {
            OutputFormat::Text => Some(ReportRenderMode::PlainText),
            OutputFormat::Rich => Some(ReportRenderMode::RichText),
            OutputFormat::Table => Some(ReportRenderMode::Table),
            OutputFormat::Json => None,
        }
    }

    /// Whether banner and footer decorations belong around the output.
    pub fn is_decorated(self) -> bool {
        !matches!(self, OutputFormat::Json)
    }
}

/// Print the CLI logo banner.
///
/// Uses box-drawing characters when the locale advertises UTF-8.
pub fn print_logo() {
    let (orange, cyan, reset) = if supports_color() {
        (colors::ORANGE, colors::CYAN, colors::RESET)
    } else {
        ("", "", "")
    };

    if supports_unicode() {
        println!(
            "{cyan}╭──────────────────────────────────────╮{reset}
{cyan}│{orange}  P A T H R A N K                     {cyan}│{reset}
{cyan}│{orange}  every simple path, weighed & ranked {cyan}│{reset}
{cyan}╰──────────────────────────────────────╯{reset}"
        );
    } else {
        println!(
            "{orange}+--------------------------------------+
|  PATHRANK                            |
|  >> SIMPLE PATH RANKING              |
+--------------------------------------+{reset}"
        );
    }
}

/// Print the footer with elapsed time.
pub fn print_footer(elapsed: Duration) {
    let (gray, reset) = if supports_color() {
        (colors::GRAY, colors::RESET)
    } else {
        ("", "")
    };

    let elapsed_ms = elapsed.as_millis();
    let time_str = if elapsed_ms < 1000 {
        format!("{}ms", elapsed_ms)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    };

    println!("\n{gray}Completed in {}{reset}", time_str);
}

/// Write a full ranking report.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &RouteReport,
    format: OutputFormat,
    palette: &ColorPalette,
) -> io::Result<()> {
    let Some(mode) = format.report_mode() else {
        return write_json(out, report);
    };

    for line in report.render(mode).lines() {
        if is_minimum_line(line) {
            writeln!(out, "{}", palette.highlight(line))?;
        } else {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

fn is_minimum_line(line: &str) -> bool {
    line.starts_with("MINIMUM WEIGHT PATH: ") || line.ends_with("  *") || line.ends_with("(minimum)")
}

#[derive(Serialize)]
struct MinimumDocument<'a> {
    start: VertexId,
    end: VertexId,
    #[serde(flatten)]
    minimum: &'a MinimumPath,
}

/// Write only the minimum-weight path.
pub fn write_minimum<W: Write>(
    out: &mut W,
    start: VertexId,
    end: VertexId,
    minimum: &MinimumPath,
    format: OutputFormat,
    palette: &ColorPalette,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(
            out,
            &MinimumDocument {
                start,
                end,
                minimum,
            },
        );
    }

    match minimum {
        MinimumPath::Found(best) => {
            let line = format!(
                "MINIMUM WEIGHT PATH: {} with weight {}.",
                format_path(&best.path),
                format_weight(best.weight)
            );
            writeln!(out, "{}", palette.highlight(&line))
        }
        MinimumPath::Unreachable => writeln!(
            out,
            "No path connects vertex {} to vertex {}.",
            start, end
        ),
    }
}

/// Outcome of `inspect`: the parsed matrix and, when valid, its statistics.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatrixInspection {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<GraphStats>,
    pub matrix: Matrix,
}

/// Write an inspection summary.
pub fn write_inspection<W: Write>(
    out: &mut W,
    inspection: &MatrixInspection,
    format: OutputFormat,
    palette: &ColorPalette,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, inspection);
    }

    write!(out, "{}", format_matrix(&inspection.matrix))?;
    writeln!(out)?;

    match (&inspection.stats, &inspection.error) {
        (Some(stats), _) => {
            writeln!(out, "{}Valid adjacency matrix.{}", palette.heading, palette.reset)?;
            writeln!(out, "Vertices: {}", stats.vertex_count)?;
            writeln!(out, "Edges: {}", stats.edge_count)?;
            for (index, degree) in stats.degrees.iter().enumerate() {
                writeln!(out, "  vertex {}: degree {}", index + 1, degree)?;
            }
        }
        (None, error) => {
            writeln!(
                out,
                "{}ERROR: {}{}",
                palette.error,
                error.as_deref().unwrap_or("invalid adjacency matrix"),
                palette.reset
            )?;
        }
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}
