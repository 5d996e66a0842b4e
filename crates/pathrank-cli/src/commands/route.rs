//! Route command handler for ranking paths between two vertices.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use pathrank_lib::{
    compute_routes_with, load_matrix, minimum_route, EnumerationStrategy, Graph, RouteQuery,
    RouteReport, SearchConfig, VertexId,
};

use crate::output::{write_minimum, write_report, OutputFormat};
use crate::terminal::ColorPalette;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Adjacency matrix file.
    pub matrix: PathBuf,
    /// Starting vertex (1-based).
    pub from: VertexId,
    /// Ending vertex (1-based).
    pub to: VertexId,
    /// Enumeration strategy; falls back to the environment, then backtracking.
    pub strategy: Option<EnumerationStrategy>,
    /// Search deadline in milliseconds.
    pub timeout_ms: Option<u64>,
    /// Refuse graphs with more vertices than this.
    pub max_vertices: Option<usize>,
    /// Report only the minimum-weight path.
    pub min_only: bool,
}

impl RouteCommandArgs {
    /// Overlay command-line settings on top of `base`.
    pub fn to_query(&self, base: SearchConfig) -> RouteQuery {
        let mut config = base;
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(ms) = self.timeout_ms {
            config.timeout = Some(Duration::from_millis(ms));
        }
        if let Some(limit) = self.max_vertices {
            config.max_vertices = Some(limit);
        }
        RouteQuery::new(self.from, self.to).with_config(config)
    }
}

/// Handle the route subcommand.
///
/// Loads and validates the matrix, then prints the ranking (or only the
/// minimum with `--min-only`) in the requested format.
pub fn handle_route_command(args: &RouteCommandArgs, format: OutputFormat) -> Result<()> {
    let matrix = load_matrix(&args.matrix)
        .with_context(|| format!("failed to read matrix from {}", args.matrix.display()))?;
    let graph = Graph::from_matrix(matrix)
        .with_context(|| format!("{} is not a valid adjacency matrix", args.matrix.display()))?;
    let query = args.to_query(SearchConfig::from_env());
    debug!(?query, "running route query");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_route(&mut out, &graph, &query, args.min_only, format, &ColorPalette::detect())?;
    out.flush()?;
    Ok(())
}

/// Run `query` against `graph` and write the outcome.
pub fn run_route<W: Write>(
    out: &mut W,
    graph: &Graph,
    query: &RouteQuery,
    min_only: bool,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<()> {
    let failure = || format!("failed to rank paths from {} to {}", query.start, query.end);

    if min_only {
        let minimum = minimum_route(graph, query).with_context(failure)?;
        write_minimum(out, query.start, query.end, &minimum, format, palette)?;
    } else {
        let result = compute_routes_with(graph, query).with_context(failure)?;
        write_report(out, &RouteReport::from_result(&result), format, palette)?;
    }
    Ok(())
}
