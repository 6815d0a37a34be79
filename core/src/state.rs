use rand::Rng;

use crate::grid::CellState::{Alive, Dead};
use crate::grid::{CellState, Grid};

/// Lower and upper bound (exclusive) of the live fraction picked by [`GridState::randomize`].
pub const RANDOM_FILL_RANGE: std::ops::Range<f64> = 0.25..0.85;

/// One-shot classification flags. A run reports at most one terminal
/// configuration: nothing else fires while any flag is set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Notified {
    pub all_dead: bool,
    pub stable_static: bool,
    pub stable_oscillating: bool,
}

impl Notified {
    pub fn any(&self) -> bool {
        self.all_dead || self.stable_static || self.stable_oscillating
    }
}

/// The three boards of a simulation plus its bookkeeping.
///
/// `current` is what the user sees and edits, `next` is scratch space for the
/// generation being computed, and `reference` is the older snapshot the engine
/// compares against to spot period-2 oscillators.
#[derive(Debug, Clone)]
pub struct GridState {
    pub(crate) current: Grid,
    pub(crate) next: Grid,
    pub(crate) reference: Grid,
    pub(crate) generation: u64,
    pub(crate) notified: Notified,
    /// Advances since the last edit or clear.
    pub(crate) run_length: u64,
}

impl GridState {
    pub fn new(width: usize, height: usize) -> Self {
        GridState {
            current: Grid::new(width, height),
            next: Grid::new(width, height),
            reference: Grid::new(width, height),
            generation: 0,
            notified: Notified::default(),
            run_length: 0,
        }
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn width(&self) -> usize {
        self.current.width()
    }

    pub fn height(&self) -> usize {
        self.current.height()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn notified(&self) -> Notified {
        self.notified
    }

    pub fn is_all_dead(&self) -> bool {
        self.current.is_all_dead()
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.current.is_alive(x, y)
    }

    /// Edit one cell of the visible board. Off-board coordinates are ignored.
    ///
    /// Any edit puts the run back into the unclassified state.
    pub fn set_cell(&mut self, x: usize, y: usize, state: CellState) -> bool {
        if !self.current.set(x, y, state) {
            return false;
        }
        self.notified = Notified::default();
        self.run_length = 0;
        true
    }

    /// Kill every cell and restart the generation count.
    ///
    /// `reference` keeps its contents, it is refreshed before it is next read.
    pub fn clear(&mut self) {
        self.current.fill(Dead);
        self.next.fill(Dead);
        self.generation = 0;
        self.notified = Notified::default();
        self.run_length = 0;
        log::debug!("cleared {}x{} board", self.width(), self.height());
    }

    /// Populate the board with a random live fraction, see [`GridState::randomize_with`].
    pub fn randomize(&mut self) -> usize {
        self.randomize_with(&mut rand::rng())
    }

    /// Bring `floor(cells * f)` distinct cells to life, `f` uniform in
    /// [`RANDOM_FILL_RANGE`]. Positions are drawn uniformly and redrawn when
    /// already alive. Cells alive beforehand count towards the target, so call
    /// [`GridState::clear`] first for a fresh board. Returns the target.
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R) -> usize {
        let (width, height) = self.current.dimensions();
        let total = self.current.len();
        if total == 0 {
            return 0;
        }

        let fraction = rng.random_range(RANDOM_FILL_RANGE);
        let target = ((total as f64 * fraction).floor() as usize).min(total);

        let mut live = self.current.live_count();
        while live < target {
            let x = rng.random_range(0..width);
            let y = rng.random_range(0..height);
            if !self.current.is_alive(x, y) {
                self.current.set(x, y, Alive);
                live += 1;
            }
        }

        log::debug!(
            "randomized board to {target} live cells ({:.0}% of {total})",
            fraction * 100.0
        );
        target
    }
}
