//! Engine seam between the session and a concrete rule set.

use crate::grid::Grid;
use life_core::{Coord, Outcome};

/// Result of evaluating the board after one generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The game goes on
    Continue,
    /// The game is decided; the run loop should stop
    Finished(Outcome),
}

/// A rule set the session can drive.
///
/// Engines are synchronous, single-owner state machines. `step` never
/// mutates its input grid; the session swaps the active grid for the
/// returned one.
pub trait Engine {
    type Cell: Copy + Default + PartialEq;

    /// Produce the next generation from the pre-step grid
    fn step(&mut self, grid: &Grid<Self::Cell>) -> Grid<Self::Cell>;

    /// Handle a click on a cell during setup
    fn toggle(&mut self, grid: &mut Grid<Self::Cell>, at: Coord);

    /// Draw one cell value uniformly from this engine's valid cell set
    fn random_cell(&mut self) -> Self::Cell;

    /// Inspect the post-step grid for an end-of-game condition
    fn evaluate(&mut self, _grid: &Grid<Self::Cell>) -> Verdict {
        Verdict::Continue
    }

    /// Clear any per-game bookkeeping when the session resets
    fn on_reset(&mut self) {}
}
