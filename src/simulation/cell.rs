use crate::error::GameError;

/// State of a single board cell.
///
/// The discriminants are the values exposed in regions and snapshots:
/// 0 = dead, 1 = alive.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn from_alive(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        cell as u8
    }
}

impl TryFrom<u8> for Cell {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Dead),
            1 => Ok(Cell::Alive),
            other => Err(GameError::InvalidState(format!(
                "cell value {} is not 0 or 1",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_size() {
        assert_eq!(std::mem::size_of::<Cell>(), 1);
    }

    #[test]
    fn test_binary_values() {
        assert_eq!(u8::from(Cell::Dead), 0);
        assert_eq!(u8::from(Cell::Alive), 1);
        assert_eq!(Cell::try_from(0), Ok(Cell::Dead));
        assert_eq!(Cell::try_from(1), Ok(Cell::Alive));
    }

    #[test]
    fn test_rejects_non_binary() {
        for value in [2u8, 7, 255] {
            assert!(
                matches!(Cell::try_from(value), Err(GameError::InvalidState(_))),
                "{} should not be a valid cell",
                value
            );
        }
    }

    #[test]
    fn test_from_alive() {
        assert!(Cell::from_alive(true).is_alive());
        assert!(!Cell::from_alive(false).is_alive());
        assert_eq!(Cell::default(), Cell::Dead);
    }
}
