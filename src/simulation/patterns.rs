//! Well-known seed patterns, as byte rows ready for `Board::set_region`.

/// 2x2 still life
pub const BLOCK: &[&[u8]] = &[&[1, 1], &[1, 1]];

/// Period-2 oscillator
pub const BLINKER: &[&[u8]] = &[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]];

/// Period-2 oscillator
pub const TOAD: &[&[u8]] = &[&[0, 1, 1, 1], &[1, 1, 1, 0]];

/// Period-2 oscillator built from two blocks
pub const BEACON: &[&[u8]] = &[
    &[1, 1, 0, 0],
    &[1, 1, 0, 0],
    &[0, 0, 1, 1],
    &[0, 0, 1, 1],
];

/// Moves one cell along both axes every 4 generations
pub const GLIDER: &[&[u8]] = &[&[0, 1, 0], &[0, 0, 1], &[1, 1, 1]];

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [&'static [u8]],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern { name: "Block", cells: BLOCK },
    Pattern { name: "Blinker", cells: BLINKER },
    Pattern { name: "Toad", cells: TOAD },
    Pattern { name: "Beacon", cells: BEACON },
    Pattern { name: "Glider", cells: GLIDER },
];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::region;

    #[test]
    fn test_patterns_are_valid_regions() {
        for pattern in PATTERNS {
            assert!(
                region::validate(pattern.cells).is_ok(),
                "{} is not a rectangular 0/1 grid",
                pattern.name
            );
        }
    }

    #[test]
    fn test_find_by_name() {
        assert_eq!(find("glider").map(|p| p.name), Some("Glider"));
        assert!(find("spaceship").is_none());
    }
}
