//! Competitive two-player variant of the Game of Life.
//!
//! Two species share the board. Each cell's fate depends on how many
//! neighbors of its own species and of the opposing species surround it,
//! and empty cells can be claimed by either side. The game ends when a
//! species goes extinct or the board stagnates.
//!
//! Unlike the classic rules, neighbor lookups here do NOT wrap around the
//! board: out-of-bounds neighbors are omitted, so edge and corner cells
//! see fewer than 8 neighbors. This asymmetry is part of the rule set.

use crate::engine::{Engine, Verdict};
use crate::grid::Grid;
use life_core::{Coord, Direction, Outcome, Phase, Player, Result, VersusCell, VersusConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// Engine for the two-player game: rule set plus turn, budget, and
/// end-of-game bookkeeping
pub struct VersusEngine {
    config: VersusConfig,
    rng: ChaCha8Rng,
    current_player: Player,
    phase: Phase,
    outcome: Option<Outcome>,
    /// Per-player counts snapshotted right before the last step, for
    /// stagnation detection
    previous_counts: Option<(usize, usize)>,
}

impl VersusEngine {
    pub fn new(config: VersusConfig) -> Result<Self> {
        config.validate()?;
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Ok(Self {
            config,
            rng,
            current_player: Player::One,
            phase: Phase::Setup,
            outcome: None,
            previous_counts: None,
        })
    }

    pub fn config(&self) -> &VersusConfig {
        &self.config
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Live-cell counts (player 1, player 2) recomputed from the grid
    pub fn counts(grid: &Grid<VersusCell>) -> (usize, usize) {
        (grid.count(VersusCell::P1), grid.count(VersusCell::P2))
    }

    /// Switch which player places cells. Turns never alternate on their
    /// own; handing the board over is always an explicit action.
    pub fn select_player(&mut self, player: Player) {
        self.current_player = player;
        if self.phase == Phase::Setup {
            self.phase = Phase::AwaitingPlacement;
        }
    }

    /// Place or remove a cell for the current player.
    ///
    /// Silent no-op when the game is over, when the target cell belongs
    /// to the opponent, or when the player has already placed their full
    /// budget. Clicking an own cell takes it back off the board.
    pub fn place_cell(&mut self, grid: &mut Grid<VersusCell>, at: Coord) {
        if self.phase == Phase::Finished {
            return;
        }

        let player = self.current_player;
        let own = player.cell();
        match grid.get(at) {
            VersusCell::Empty => {
                if grid.count(own) < self.config.placement_budget as usize {
                    grid.set(at, own);
                } else {
                    debug!(
                        %player,
                        budget = self.config.placement_budget,
                        "placement rejected, budget reached"
                    );
                }
            }
            cell if cell == own => {
                grid.set(at, VersusCell::Empty);
            }
            _ => {
                // Opponent's cell, leave it alone.
            }
        }
    }

    /// Values of the up-to-8 neighbors that exist on the board.
    /// Out-of-bounds neighbors are omitted, never wrapped.
    fn neighbors(grid: &Grid<VersusCell>, at: Coord) -> impl Iterator<Item = VersusCell> + '_ {
        Direction::all().into_iter().filter_map(move |dir| {
            let (drow, dcol) = dir.delta();
            let neighbor = at.offset(drow, dcol);
            grid.in_bounds(neighbor).then(|| grid.get(neighbor))
        })
    }

    /// Whether an occupied cell survives, given its own-species neighbor
    /// count and the opposing-species neighbor count
    fn survives(own: u32, opponent: u32) -> bool {
        let diff = (own as i32 - opponent as i32).abs();
        if diff == 2 || diff == 3 {
            true
        } else {
            diff == 1 && own > 1
        }
    }

    /// New occupant of an empty cell, given both species' neighbor counts
    fn birth(&mut self, total1: u32, total2: u32) -> VersusCell {
        match (total1 == 3, total2 == 3) {
            (true, false) => VersusCell::P1,
            (false, true) => VersusCell::P2,
            // Both species claim the cell; the coin decides.
            (true, true) => {
                if self.rng.gen_bool(0.5) {
                    VersusCell::P1
                } else {
                    VersusCell::P2
                }
            }
            (false, false) => VersusCell::Empty,
        }
    }

    /// Compute the next generation from the pre-step grid, updating every
    /// cell simultaneously
    fn next_generation(&mut self, grid: &Grid<VersusCell>) -> Grid<VersusCell> {
        let mut next = grid.clone();
        for at in grid.coords() {
            let mut total1 = 0;
            let mut total2 = 0;
            for neighbor in Self::neighbors(grid, at) {
                match neighbor {
                    VersusCell::P1 => total1 += 1,
                    VersusCell::P2 => total2 += 1,
                    VersusCell::Empty => {}
                }
            }

            let value = match grid.get(at) {
                VersusCell::P1 => {
                    if Self::survives(total1, total2) {
                        VersusCell::P1
                    } else {
                        VersusCell::Empty
                    }
                }
                VersusCell::P2 => {
                    if Self::survives(total2, total1) {
                        VersusCell::P2
                    } else {
                        VersusCell::Empty
                    }
                }
                VersusCell::Empty => self.birth(total1, total2),
            };
            next.set(at, value);
        }
        next
    }
}

impl Engine for VersusEngine {
    type Cell = VersusCell;

    fn step(&mut self, grid: &Grid<VersusCell>) -> Grid<VersusCell> {
        self.previous_counts = Some(Self::counts(grid));
        if self.phase != Phase::Finished {
            self.phase = Phase::Running;
        }
        self.next_generation(grid)
    }

    fn toggle(&mut self, grid: &mut Grid<VersusCell>, at: Coord) {
        self.place_cell(grid, at);
    }

    fn random_cell(&mut self) -> VersusCell {
        match self.rng.gen_range(0..3) {
            0 => VersusCell::Empty,
            1 => VersusCell::P1,
            _ => VersusCell::P2,
        }
    }

    fn evaluate(&mut self, grid: &Grid<VersusCell>) -> Verdict {
        let (count_p1, count_p2) = Self::counts(grid);

        let outcome = if count_p1 == 0 && count_p2 > 0 {
            Some(Outcome::PlayerTwoWins)
        } else if count_p1 > 0 && count_p2 == 0 {
            Some(Outcome::PlayerOneWins)
        } else if count_p1 == 0 && count_p2 == 0 {
            Some(Outcome::Draw)
        } else if self.previous_counts == Some((count_p1, count_p2)) {
            // Neither population changed over a full generation.
            Some(Outcome::Draw)
        } else {
            None
        };

        match outcome {
            Some(outcome) => {
                self.outcome = Some(outcome);
                self.phase = Phase::Finished;
                info!(
                    event = "game_over",
                    ?outcome,
                    count_p1,
                    count_p2,
                    "versus game decided"
                );
                Verdict::Finished(outcome)
            }
            None => Verdict::Continue,
        }
    }

    fn on_reset(&mut self) {
        self.current_player = Player::One;
        self.phase = Phase::Setup;
        self.outcome = None;
        self.previous_counts = None;
    }
}
