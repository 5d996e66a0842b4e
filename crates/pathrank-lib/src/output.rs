use std::fmt::Write;

use serde::Serialize;

use crate::enumerate::EnumerationStrategy;
use crate::graph::{VertexId, Weight};
use crate::query::QueryResult;
use crate::rank::MinimumPath;

/// Presentation style for turning a [`RouteReport`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportRenderMode {
    PlainText,
    RichText,
    Table,
}

/// One ranked path within a report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportEntry {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub weight: Weight,
    pub hops: usize,
    pub path: Vec<VertexId>,
    /// Set on every path whose weight equals the minimum weight.
    pub is_minimum: bool,
}

/// Structured representation of a query result that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteReport {
    pub start: VertexId,
    pub end: VertexId,
    pub strategy: EnumerationStrategy,
    pub path_count: usize,
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<ReportEntry>,
    pub paths: Vec<ReportEntry>,
}

impl RouteReport {
    /// Convert a [`QueryResult`] into a report.
    ///
    /// `minimum` is the first ranked entry; paths tied with it are flagged too.
    pub fn from_result(result: &QueryResult) -> Self {
        let best = result.minimum.as_path().map(|best| best.weight);
        let paths: Vec<ReportEntry> = result
            .ranked
            .iter()
            .enumerate()
            .map(|(index, entry)| ReportEntry {
                rank: index + 1,
                weight: entry.weight,
                hops: entry.hop_count(),
                path: entry.path.clone(),
                is_minimum: best.is_some_and(|best| entry.weight == best),
            })
            .collect();
        let minimum = paths.iter().find(|entry| entry.is_minimum).cloned();

        Self {
            start: result.start,
            end: result.end,
            strategy: result.strategy,
            path_count: paths.len(),
            reachable: !matches!(result.minimum, MinimumPath::Unreachable),
            minimum,
            paths,
        }
    }

    /// Render the report using the requested textual mode.
    pub fn render(&self, mode: ReportRenderMode) -> String {
        if !self.reachable {
            return format!(
                "No path connects vertex {} to vertex {}.\n",
                self.start, self.end
            );
        }
        match mode {
            ReportRenderMode::PlainText => self.render_plain(),
            ReportRenderMode::RichText => self.render_rich(),
            ReportRenderMode::Table => self.render_table(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "{} possible paths from vertex {} to vertex {}:",
            self.path_count, self.start, self.end
        );
        for entry in &self.paths {
            let prefix = if entry.is_minimum {
                "MINIMUM WEIGHT PATH: "
            } else {
                ""
            };
            let _ = writeln!(
                buffer,
                "{}{} with weight {}.",
                prefix,
                format_path(&entry.path),
                format_weight(entry.weight)
            );
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Paths** — _{} → {}_ ({} found, strategy: `{}`)",
            self.start, self.end, self.path_count, self.strategy
        );
        for entry in &self.paths {
            if entry.is_minimum {
                let _ = writeln!(
                    buffer,
                    "* {:>2}. **{}** — weight **{}** (minimum)",
                    entry.rank,
                    format_path(&entry.path),
                    format_weight(entry.weight)
                );
            } else {
                let _ = writeln!(
                    buffer,
                    "* {:>2}. {} — weight {}",
                    entry.rank,
                    format_path(&entry.path),
                    format_weight(entry.weight)
                );
            }
        }
        buffer
    }

    fn render_table(&self) -> String {
        let weights: Vec<String> = self
            .paths
            .iter()
            .map(|entry| format_weight(entry.weight))
            .collect();
        let weight_width = weights
            .iter()
            .map(String::len)
            .chain(std::iter::once("WEIGHT".len()))
            .max()
            .unwrap_or(0);

        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "{:>4}  {:>width$}  {:>4}  PATH",
            "RANK",
            "WEIGHT",
            "HOPS",
            width = weight_width
        );
        for (entry, weight) in self.paths.iter().zip(&weights) {
            let marker = if entry.is_minimum { "  *" } else { "" };
            let _ = writeln!(
                buffer,
                "{:>4}  {:>width$}  {:>4}  {}{}",
                entry.rank,
                weight,
                entry.hops,
                format_path(&entry.path),
                marker,
                width = weight_width
            );
        }
        buffer
    }
}

/// Format a weight, dropping the fractional part when it is zero.
pub fn format_weight(weight: Weight) -> String {
    if weight.fract() == 0.0 && weight.abs() < 1e15 {
        format!("{}", weight as i64)
    } else {
        format!("{}", weight)
    }
}

/// Format a path as `[1, 2, 4]`.
pub fn format_path(path: &[VertexId]) -> String {
    let joined = path
        .iter()
        .map(|vertex| vertex.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

/// Format a matrix as right-aligned columns, one row per line.
pub fn format_matrix(matrix: &[Vec<Weight>]) -> String {
    let cells: Vec<Vec<String>> = matrix
        .iter()
        .map(|row| row.iter().map(|&w| format_weight(w)).collect())
        .collect();
    let width = cells.iter().flatten().map(String::len).max().unwrap_or(1);

    let mut buffer = String::new();
    for row in &cells {
        let line = row
            .iter()
            .map(|cell| format!("{:>width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(buffer, "[{}]", line);
    }
    buffer
}
