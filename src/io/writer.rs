//! Distance-matrix text writer.

use std::io::Write;

use crate::distance::DistanceMatrix;

/// Writes `distances` in the text format read by [`parse_matrix`].
///
/// The node count goes on the first line, then one row per line. Values use
/// Rust's shortest round-trip float formatting, so reading the output back
/// yields an identical matrix.
///
/// [`parse_matrix`]: super::parse_matrix
///
/// # Examples
///
/// ```
/// use u_twoopt::distance::DistanceMatrix;
/// use u_twoopt::io::write_matrix;
///
/// let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (3.0, 4.0)]);
/// let mut out = Vec::new();
/// write_matrix(&dm, &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "2\n0 5\n5 0\n");
/// ```
pub fn write_matrix(distances: &DistanceMatrix, mut writer: impl Write) -> std::io::Result<()> {
    let n = distances.size();
    writeln!(writer, "{n}")?;
    for from in 0..n {
        let mut first = true;
        for value in distances.row(from) {
            if !first {
                writer.write_all(b" ")?;
            }
            write!(writer, "{value}")?;
            first = false;
        }
        writeln!(writer)?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::parse_matrix;

    #[test]
    fn test_write_then_parse() {
        let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 2.0), (7.5, 0.25), (3.3, 9.1)]);
        let mut out = Vec::new();
        write_matrix(&dm, &mut out).expect("write to vec");
        let text = String::from_utf8(out).expect("utf-8");
        assert_eq!(text.lines().count(), 5);
        assert_eq!(parse_matrix(&text).expect("parse back"), dm);
    }

    #[test]
    fn test_write_empty() {
        let dm = DistanceMatrix::from_points(&[]);
        let mut out = Vec::new();
        write_matrix(&dm, &mut out).expect("write to vec");
        assert_eq!(out, b"0\n");
    }
}
