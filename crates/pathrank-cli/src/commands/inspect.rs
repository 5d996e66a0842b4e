//! Inspect command handler: validate a matrix and summarise its graph.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use pathrank_lib::{load_matrix, Graph, Matrix};

use crate::output::{write_inspection, MatrixInspection, OutputFormat};
use crate::terminal::ColorPalette;

/// Validate `matrix` without failing on an invalid one.
pub fn inspect_matrix(matrix: Matrix) -> MatrixInspection {
    match Graph::from_matrix(matrix.clone()) {
        Ok(graph) => MatrixInspection {
            valid: true,
            error: None,
            stats: Some(graph.stats()),
            matrix,
        },
        Err(err) => {
            warn!("matrix rejected: {}", err);
            MatrixInspection {
                valid: false,
                error: Some(err.to_string()),
                stats: None,
                matrix,
            }
        }
    }
}

/// Handle the inspect subcommand.
///
/// The report is printed for invalid matrices too; the command then fails
/// so scripts can rely on the exit status.
pub fn handle_inspect_command(path: &Path, format: OutputFormat) -> Result<()> {
    let matrix = load_matrix(path)
        .with_context(|| format!("failed to read matrix from {}", path.display()))?;
    let inspection = inspect_matrix(matrix);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_inspection(&mut out, &inspection, format, &ColorPalette::detect())?;
    out.flush()?;

    if !inspection.valid {
        anyhow::bail!("{} is not a valid adjacency matrix", path.display());
    }
    Ok(())
}
