//! Distance-matrix text reader.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::LoadError;
use crate::distance::DistanceMatrix;

/// Loads a distance matrix from a file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file can't be opened or read, and the
/// other [`LoadError`] variants for malformed content.
pub fn load_matrix(path: impl AsRef<Path>) -> Result<DistanceMatrix, LoadError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let dm = parse_matrix(&contents)?;
    debug!(path = %path.display(), n = dm.size(), "loaded distance matrix");
    Ok(dm)
}

/// Reads a distance matrix from any reader.
pub fn read_matrix(mut reader: impl Read) -> Result<DistanceMatrix, LoadError> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    parse_matrix(&contents)
}

/// Parses the whitespace-separated text format.
///
/// The first token is the node count `n`, followed by exactly `n * n`
/// distances in row-major order. Line breaks carry no meaning.
///
/// # Examples
///
/// ```
/// use u_twoopt::io::parse_matrix;
///
/// let dm = parse_matrix("2\n0 1.5\n1.5 0\n").unwrap();
/// assert_eq!(dm.size(), 2);
/// assert_eq!(dm.get(1, 0), 1.5);
///
/// assert!(parse_matrix("2\n0 1.5 1.5").is_err());
/// ```
pub fn parse_matrix(input: &str) -> Result<DistanceMatrix, LoadError> {
    let mut tokens = input.split_whitespace();

    let first = tokens.next().ok_or(LoadError::MissingNodeCount)?;
    let n: usize = first
        .parse()
        .map_err(|_| LoadError::InvalidNodeCount(first.to_string()))?;
    let len = n
        .checked_mul(n)
        .ok_or_else(|| LoadError::InvalidNodeCount(first.to_string()))?;

    let mut data = Vec::with_capacity(len.min(input.len()));
    for pos in 0..len {
        let (row, col) = (pos / n, pos % n);
        let token = tokens.next().ok_or(LoadError::MissingDistance { row, col })?;
        let value: f64 = token.parse().map_err(|_| LoadError::InvalidDistance {
            row,
            col,
            token: token.to_string(),
        })?;
        data.push(value);
    }

    if let Some(extra) = tokens.next() {
        return Err(LoadError::TrailingData(extra.to_string()));
    }

    Ok(DistanceMatrix::from_data(n, data)?)
}
