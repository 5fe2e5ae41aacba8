use std::fmt;

use crate::config::{ALIVE_GLYPH, DEAD_GLYPH};
use crate::error::{GameError, Result};

/// Rectangular block of 0/1 cell values, indexed `[x][y]`.
///
/// Regions are plain values: reading one from a board copies the cells, and
/// later board mutations do not show through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Region {
    rows: Vec<Vec<u8>>,
}

impl Region {
    /// Build a region from byte rows, checking shape and values
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        validate(rows)?;
        Ok(Self {
            rows: rows.iter().map(|row| row.as_ref().to_vec()).collect(),
        })
    }

    /// Wrap rows already known to be rectangular and binary
    pub(crate) fn from_validated(rows: Vec<Vec<u8>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<u8>> {
        self.rows
    }

    /// Extent as `(xend, yend)`
    pub fn extent(&self) -> (usize, usize) {
        (self.rows.len(), self.rows.first().map_or(0, Vec::len))
    }

    pub fn is_empty(&self) -> bool {
        let (x, y) = self.extent();
        x == 0 || y == 0
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.rows.get(x).and_then(|row| row.get(y)).copied()
    }

    pub fn live_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|&&value| value == 1)
            .count()
    }
}

/// Check that `rows` is a rectangular grid holding only 0 and 1.
///
/// Returns the extent `(xend, yend)`. An empty slice has extent `(0, 0)`.
pub fn validate<R: AsRef<[u8]>>(rows: &[R]) -> Result<(usize, usize)> {
    let yend = rows.first().map_or(0, |row| row.as_ref().len());

    for (x, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != yend {
            return Err(GameError::InvalidState(format!(
                "row {} has length {}, expected {}",
                x,
                row.len(),
                yend
            )));
        }
        if let Some((y, value)) = row.iter().enumerate().find(|&(_, &v)| v > 1) {
            return Err(GameError::InvalidState(format!(
                "value {} at ({}, {}) is not 0 or 1",
                value, x, y
            )));
        }
    }

    Ok((rows.len(), yend))
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let line: String = row
                .iter()
                .map(|&value| if value == 1 { ALIVE_GLYPH } else { DEAD_GLYPH })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent() {
        let region = Region::from_rows(&[[0u8, 1, 0], [1, 1, 1]]).unwrap();
        assert_eq!(region.extent(), (2, 3));
        assert_eq!(region.live_count(), 4);
        assert_eq!(region.get(1, 2), Some(1));
        assert_eq!(region.get(2, 0), None);
    }

    #[test]
    fn test_empty() {
        let rows: [Vec<u8>; 0] = [];
        let region = Region::from_rows(&rows).unwrap();
        assert_eq!(region.extent(), (0, 0));
        assert!(region.is_empty());
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let rows = vec![vec![0u8, 1], vec![1]];
        assert!(matches!(
            Region::from_rows(&rows),
            Err(GameError::InvalidState(_))
        ));
    }

    #[test]
    fn test_rejects_non_binary_values() {
        let rows = vec![vec![0u8, 1], vec![1, 2]];
        let err = Region::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidState("value 2 at (1, 1) is not 0 or 1".to_string())
        );
    }

    #[test]
    fn test_display() {
        let region = Region::from_rows(&[[1u8, 0], [0, 1]]).unwrap();
        assert_eq!(region.to_string(), "#.\n.#\n");
    }
}
