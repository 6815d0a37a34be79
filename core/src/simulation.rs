use std::fmt;

use crate::grid::CellState::{Alive, Dead};
use crate::grid::{CellState, Grid};
use crate::state::GridState;

/// Terminal configuration reported by [`SimulationEngine::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    AllDead,
    StableStatic,
    /// Period 2: the board matches the one from two generations back.
    StableOscillating,
}

impl Classification {
    pub fn message(self) -> &'static str {
        match self {
            Classification::AllDead => "Configuration of all-dead cells",
            Classification::StableStatic => "Stable and static cell configuration",
            Classification::StableOscillating => "Stable but not static cell configuration",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Where the current run sits in its state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Evolving,
    Terminal(Classification),
}

/// How the snapshot used for period-2 detection is refreshed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OscillationCheck {
    /// Snapshot the board going into every odd generation. Oscillation is then
    /// only noticed on even generations, up to one tick late.
    #[default]
    OddSnapshot,
    /// Always compare with the board from two generations back, once two
    /// generations have passed since the last edit.
    EveryTick,
}

/// Drives a [`GridState`] one generation at a time and classifies where it ends up.
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    state: GridState,
    oscillation_check: OscillationCheck,
}

impl SimulationEngine {
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_oscillation_check(width, height, OscillationCheck::default())
    }

    pub fn with_oscillation_check(width: usize, height: usize, check: OscillationCheck) -> Self {
        SimulationEngine {
            state: GridState::new(width, height),
            oscillation_check: check,
        }
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GridState {
        &mut self.state
    }

    pub fn oscillation_check(&self) -> OscillationCheck {
        self.oscillation_check
    }

    pub fn generation(&self) -> u64 {
        self.state.generation
    }

    pub fn set_cell(&mut self, x: usize, y: usize, state: CellState) -> bool {
        self.state.set_cell(x, y, state)
    }

    pub fn clear(&mut self) {
        self.state.clear();
    }

    pub fn randomize(&mut self) -> usize {
        self.state.randomize()
    }

    pub fn is_all_dead(&self) -> bool {
        self.state.is_all_dead()
    }

    pub fn status(&self) -> Status {
        let notified = self.state.notified;
        if notified.all_dead {
            Status::Terminal(Classification::AllDead)
        } else if notified.stable_static {
            Status::Terminal(Classification::StableStatic)
        } else if notified.stable_oscillating {
            Status::Terminal(Classification::StableOscillating)
        } else {
            Status::Evolving
        }
    }

    /// Advance the board by one generation.
    ///
    /// Returns a classification the first time the run reaches a terminal
    /// configuration. Later calls return `None` until an edit or a clear.
    /// An all-dead board is left alone and does not count as a generation.
    pub fn advance(&mut self) -> Option<Classification> {
        let check = self.oscillation_check;
        let state = &mut self.state;

        if state.current.is_all_dead() {
            if state.notified.any() {
                return None;
            }
            state.notified.all_dead = true;
            log::info!("generation {}: {}", state.generation, Classification::AllDead);
            return Some(Classification::AllDead);
        }

        state.generation += 1;
        state.run_length += 1;

        state.next.copy_from(&state.current);
        if check == OscillationCheck::OddSnapshot && state.generation % 2 == 1 {
            state.reference.copy_from(&state.current);
        }

        step(&state.current, &mut state.next);

        let reference_ready = match check {
            OscillationCheck::OddSnapshot => true,
            // Until the second advance the snapshot predates the last edit.
            OscillationCheck::EveryTick => state.run_length >= 2,
        };

        let mut fired = None;
        if !state.notified.any() {
            if state.next == state.current {
                state.notified.stable_static = true;
                fired = Some(Classification::StableStatic);
            } else if reference_ready && state.next == state.reference {
                state.notified.stable_oscillating = true;
                fired = Some(Classification::StableOscillating);
            }
        }

        if check == OscillationCheck::EveryTick {
            state.reference.copy_from(&state.current);
        }
        state.current.copy_from(&state.next);

        if let Some(classification) = fired {
            log::info!("generation {}: {}", state.generation, classification);
        }
        fired
    }
}

/// Write the successor of `current` into `next`, which must start as a copy of `current`.
fn step(current: &Grid, next: &mut Grid) {
    for y in 0..current.height() {
        for x in 0..current.width() {
            let alive_neighbors = current.alive_neighbors(x, y);
            let cell = CellState::from(current.is_alive(x, y));

            // Apply Game of Life rules
            match (cell, alive_neighbors) {
                (Alive, 2..=3) => {} // Survives
                (Alive, _) => {
                    next.set(x, y, Dead); // Dies
                }
                (Dead, 3) => {
                    next.set(x, y, Alive); // Becomes alive
                }
                (Dead, _) => {} // Remains dead
            }
        }
    }
}
