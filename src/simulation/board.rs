use std::fmt;

use rand::Rng;

use crate::config::DEFAULT_REGION_EXTENT;
use crate::error::{GameError, Result};
use crate::simulation::cell::Cell;
use crate::simulation::region::{self, Region};
use crate::simulation::rules::{apply_rules, Neighborhood};

/// Fixed-size Game of Life board with toroidal edges.
///
/// `width` is the extent along x (the first index) and `height` the extent
/// along y. Dimensions never change after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat storage, x-major: cell (x, y) lives at `x * height + y`
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board where each cell is alive with probability `units`
    pub fn new(width: usize, height: usize, units: f64) -> Self {
        let mut rng = rand::thread_rng();
        Self::with_rng(width, height, units, &mut rng)
    }

    /// Same as [`Board::new`] but draws from the given random source.
    ///
    /// A cell is alive when a uniform draw in `[0, 1)` falls below `units`,
    /// so `0.0` gives an all-dead board and `1.0` an all-alive one.
    pub fn with_rng<R: Rng + ?Sized>(width: usize, height: usize, units: f64, rng: &mut R) -> Self {
        let cells = (0..width * height)
            .map(|_| Cell::from_alive(rng.gen::<f64>() < units))
            .collect();

        Self {
            width,
            height,
            cells,
        }
    }

    /// Create an all-dead board
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Overwrite the block starting at `(x, y)` with `state`.
    ///
    /// `state` is checked first (rectangular, values 0/1), then the offset,
    /// then that the block fits. Nothing is written unless all checks pass.
    pub fn set_region<R: AsRef<[u8]>>(&mut self, state: &[R], x: usize, y: usize) -> Result<&Self> {
        let (xend, yend) = region::validate(state)?;

        if x >= self.width || y >= self.height {
            return Err(GameError::InvalidCoord(format!(
                "offset ({}, {}) outside {}x{} board",
                x, y, self.width, self.height
            )));
        }

        if x + xend > self.width || y + yend > self.height {
            return Err(GameError::InvalidState(format!(
                "{}x{} region at ({}, {}) does not fit {}x{} board",
                xend, yend, x, y, self.width, self.height
            )));
        }

        for (dx, row) in state.iter().enumerate() {
            for (dy, &value) in row.as_ref().iter().enumerate() {
                let index = self.index(x + dx, y + dy);
                self.cells[index] = Cell::from_alive(value == 1);
            }
        }

        Ok(&*self)
    }

    /// Copy out the block `[x, xend) x [y, yend)`.
    ///
    /// `xend`/`yend` are clamped to the board. `x`/`y` are not: a start past
    /// the clamped end yields an empty axis rather than an error.
    pub fn get_region(&self, x: usize, y: usize, xend: usize, yend: usize) -> Result<Region> {
        if x > xend || y > yend {
            return Err(GameError::InvalidCoord(format!(
                "start ({}, {}) is past end ({}, {})",
                x, y, xend, yend
            )));
        }

        let xend = xend.min(self.width);
        let yend = yend.min(self.height);

        let rows = (x..xend)
            .map(|i| (y..yend).map(|j| u8::from(self.cells[self.index(i, j)])).collect())
            .collect();

        Ok(Region::from_validated(rows))
    }

    /// The conventional `(0, 0, 10, 10)` preview region
    pub fn default_region(&self) -> Region {
        self.clamped_region(DEFAULT_REGION_EXTENT, DEFAULT_REGION_EXTENT)
    }

    /// The whole board as a region
    pub fn snapshot(&self) -> Region {
        self.clamped_region(self.width, self.height)
    }

    /// Advance the board by one generation.
    ///
    /// Every neighborhood is read from a padded copy of the current state,
    /// so no cell sees a value written earlier in the same pass.
    pub fn advance(&mut self) {
        if self.cells.is_empty() {
            return;
        }

        let padded = self.padded();
        let padded_height = self.height + 2;

        let next = (0..self.width)
            .flat_map(|x| (0..self.height).map(move |y| (x, y)))
            .map(|(x, y)| apply_rules(&neighborhood(&padded, padded_height, x, y)))
            .collect();

        self.cells = next;
    }

    fn clamped_region(&self, xend: usize, yend: usize) -> Region {
        let xend = xend.min(self.width);
        let yend = yend.min(self.height);
        let rows = (0..xend)
            .map(|i| (0..yend).map(|j| u8::from(self.cells[self.index(i, j)])).collect())
            .collect();
        Region::from_validated(rows)
    }

    /// Build the (W+2)x(H+2) wrapped copy of the board.
    ///
    /// Padded row 0 is the last board row and row W+1 the first; columns
    /// likewise, so the corners come from the opposite board corners.
    fn padded(&self) -> Vec<Cell> {
        let (w, h) = (self.width, self.height);
        let mut padded = Vec::with_capacity((w + 2) * (h + 2));

        for px in 0..w + 2 {
            let x = (px + w - 1) % w;
            for py in 0..h + 2 {
                let y = (py + h - 1) % h;
                padded.push(self.cells[self.index(x, y)]);
            }
        }

        padded
    }

    fn index(&self, x: usize, y: usize) -> usize {
        x * self.height + y
    }
}

/// 3x3 block of `padded` whose top-left corner is `(x, y)`, i.e. the
/// neighborhood of board cell `(x, y)`
fn neighborhood(padded: &[Cell], padded_height: usize, x: usize, y: usize) -> Neighborhood {
    let mut block = [[Cell::Dead; 3]; 3];
    for (dx, row) in block.iter_mut().enumerate() {
        for (dy, cell) in row.iter_mut().enumerate() {
            *cell = padded[(x + dx) * padded_height + y + dy];
        }
    }
    block
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.snapshot())
    }
}
