use super::cell::Cell;

/// A 3x3 neighborhood with the subject cell at `[1][1]`
pub type Neighborhood = [[Cell; 3]; 3];

/// Classic B3/S23 transition for the center of `neighborhood`.
///
/// Live cells are counted over all nine entries. A live center discounts
/// itself and survives with 2 or 3 live neighbors; a dead center is born
/// with exactly 3.
pub fn apply_rules(neighborhood: &Neighborhood) -> Cell {
    let live = neighborhood
        .iter()
        .flatten()
        .filter(|cell| cell.is_alive())
        .count();

    match (neighborhood[1][1], live) {
        // 3 or 4 including the center = 2 or 3 neighbors
        (Cell::Alive, 3 | 4) => Cell::Alive,
        (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}
