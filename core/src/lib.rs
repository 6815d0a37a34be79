/**
* A live cell dies if it has fewer than two live neighbors.
* A live cell with two or three live neighbors lives on to the next generation.
* A live cell with more than three live neighbors dies.
* A dead cell will be brought back to live if it has exactly three live neighbors.
*
* The board is bounded: cells past the edge count as dead, nothing wraps around.
*/

pub mod grid;
pub mod simulation;
pub mod state;

pub use grid::{CellState, Grid};
pub use simulation::{Classification, OscillationCheck, SimulationEngine, Status};
pub use state::{GridState, Notified};
