//! Classic zero-player Game of Life (B3/S23) on a torus.

use crate::engine::Engine;
use crate::grid::Grid;
use life_core::{BoardConfig, CellState, Coord, Direction, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The standard Conway rule set with toroidal neighbor lookups
pub struct ClassicEngine {
    rng: ChaCha8Rng,
}

impl ClassicEngine {
    pub fn new(config: &BoardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
        })
    }

    /// Count live neighbors of a cell, wrapping around the board edges
    fn live_neighbors(grid: &Grid<CellState>, at: Coord) -> u32 {
        Direction::all()
            .iter()
            .filter(|dir| {
                let (drow, dcol) = dir.delta();
                grid.get(at.offset(drow, dcol)) == CellState::Alive
            })
            .count() as u32
    }

    /// Compute the next generation. Pure function of the input grid.
    pub fn next_generation(grid: &Grid<CellState>) -> Grid<CellState> {
        let mut next = grid.clone();
        for at in grid.coords() {
            let total = Self::live_neighbors(grid, at);
            match grid.get(at) {
                CellState::Alive => {
                    if total < 2 || total > 3 {
                        next.set(at, CellState::Dead);
                    }
                }
                CellState::Dead => {
                    if total == 3 {
                        next.set(at, CellState::Alive);
                    }
                }
            }
        }
        next
    }
}

impl Engine for ClassicEngine {
    type Cell = CellState;

    fn step(&mut self, grid: &Grid<CellState>) -> Grid<CellState> {
        Self::next_generation(grid)
    }

    fn toggle(&mut self, grid: &mut Grid<CellState>, at: Coord) {
        let flipped = match grid.get(at) {
            CellState::Dead => CellState::Alive,
            CellState::Alive => CellState::Dead,
        };
        grid.set(at, flipped);
    }

    fn random_cell(&mut self) -> CellState {
        if self.rng.gen_bool(0.5) {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}
