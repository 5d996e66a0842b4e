use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Matrix, Weight};

/// Load an adjacency matrix from disk.
///
/// Files ending in `.json` are read as an array of number arrays; anything
/// else uses the text format accepted by [`parse_matrix`]. The matrix is not
/// validated here; pass it to [`crate::Graph::from_matrix`].
pub fn load_matrix(path: &Path) -> Result<Matrix> {
    let contents = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let matrix = if is_json {
        parse_matrix_json(&contents)?
    } else {
        parse_matrix(&contents)?
    };
    debug!("loaded {} matrix rows from {}", matrix.len(), path.display());
    Ok(matrix)
}

/// Parse a whitespace- or comma-separated matrix, one row per line.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_matrix(input: &str) -> Result<Matrix> {
    let mut rows = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let row = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| parse_weight(token, index + 1))
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
    }

    Ok(rows)
}

/// Parse a JSON array of number arrays.
pub fn parse_matrix_json(input: &str) -> Result<Matrix> {
    Ok(serde_json::from_str(input)?)
}

fn parse_weight(token: &str, line: usize) -> Result<Weight> {
    token.parse::<Weight>().map_err(|err| Error::MatrixParse {
        line,
        message: format!("'{}' is not a number ({})", token, err),
    })
}
