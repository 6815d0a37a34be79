use crate::grid::CellState::{Alive, Dead};

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == Alive
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Alive
        } else {
            Dead
        }
    }
}

/// Fixed-size board stored row-major, `index = y * width + x`.
///
/// `x` is the column and `y` the row. Every accessor is bounds checked, reads
/// outside the board see dead cells and writes outside it are dropped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![Dead; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Total number of cells on the board.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<CellState> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(CellState::is_alive)
    }

    /// Returns `false` and leaves the board untouched when `(x, y)` is off the board.
    pub fn set(&mut self, x: usize, y: usize, state: CellState) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = state;
                true
            }
            None => false,
        }
    }

    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    pub fn is_all_dead(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_alive())
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Coordinates of every live cell, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(idx, _)| (idx % width, idx / width))
    }

    /// Overwrite this board with `other`. Both boards must have the same shape.
    pub fn copy_from(&mut self, other: &Grid) {
        debug_assert_eq!(self.dimensions(), other.dimensions());
        self.cells.copy_from_slice(&other.cells);
    }

    /// Count the number of alive neighbors for a cell
    pub fn alive_neighbors(&self, x: usize, y: usize) -> usize {
        let mut count = 0;

        for dy in [-1isize, 0, 1] {
            for dx in [-1isize, 0, 1] {
                if dx == 0 && dy == 0 {
                    // Skip the current cell
                    continue;
                }

                let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy))
                else {
                    continue;
                };

                if self.is_alive(nx, ny) {
                    count += 1;
                }
            }
        }

        count
    }
}
