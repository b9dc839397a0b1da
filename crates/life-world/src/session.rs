//! Session controller bridging a presentation layer to an engine.
//!
//! The session is the single owner of all mutable game state. A
//! presentation layer holds a handle to it, feeds it commands, and
//! redraws whenever the session reports a change. The step cadence is
//! owned by the caller's scheduler; the session only exposes `step` and
//! the start/pause flag.

use crate::engine::{Engine, Verdict};
use crate::grid::Grid;
use crate::versus::VersusEngine;
use life_core::{Coord, Outcome, Player, Result};
use tracing::debug;

/// Notification delivered to the registered observer after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Some state changed; redraw
    Changed,
    /// The game was decided and the run loop should stop
    Finished(Outcome),
}

type Observer = Box<dyn FnMut(SessionEvent)>;

/// One game: a grid plus the engine driving it
pub struct Session<E: Engine> {
    grid: Grid<E::Cell>,
    engine: E,
    generation: u64,
    running: bool,
    outcome: Option<Outcome>,
    observer: Option<Observer>,
}

impl<E: Engine> Session<E> {
    pub fn new(size: i32, engine: E) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(size)?,
            engine,
            generation: 0,
            running: false,
            outcome: None,
            observer: None,
        })
    }

    /// Register the observer notified after every mutating command
    pub fn set_observer(&mut self, observer: impl FnMut(SessionEvent) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    fn notify(&mut self, event: SessionEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer(event);
        }
    }

    /// Read-only view of the board for rendering
    pub fn grid(&self) -> &Grid<E::Cell> {
        &self.grid
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Flip or place the cell at a board coordinate
    pub fn toggle_cell(&mut self, at: Coord) {
        self.engine.toggle(&mut self.grid, at);
        self.notify(SessionEvent::Changed);
    }

    /// Flip or place the cell under a pointer position. Pointers outside
    /// the board are ignored.
    pub fn toggle_at_pointer(&mut self, x: f64, y: f64) {
        if let Some(at) = Coord::from_pointer(x, y, self.grid.size()) {
            self.toggle_cell(at);
        }
    }

    /// Wipe the board and all per-game bookkeeping
    pub fn reset(&mut self) {
        self.grid.clear();
        self.engine.on_reset();
        self.generation = 0;
        self.running = false;
        self.outcome = None;
        self.notify(SessionEvent::Changed);
    }

    /// Redraw every cell uniformly at random from the engine's cell set
    pub fn randomize(&mut self) {
        let coords: Vec<Coord> = self.grid.coords().collect();
        for at in coords {
            let value = self.engine.random_cell();
            self.grid.set(at, value);
        }
        self.notify(SessionEvent::Changed);
    }

    /// Advance one generation and check for an end-of-game condition.
    /// No-op once the game is decided.
    pub fn step(&mut self) {
        if self.outcome.is_some() {
            return;
        }

        self.grid = self.engine.step(&self.grid);
        self.generation += 1;
        debug!(generation = self.generation, "stepped");

        match self.engine.evaluate(&self.grid) {
            Verdict::Finished(outcome) => {
                self.outcome = Some(outcome);
                self.running = false;
                self.notify(SessionEvent::Changed);
                self.notify(SessionEvent::Finished(outcome));
            }
            Verdict::Continue => {
                self.notify(SessionEvent::Changed);
            }
        }
    }

    /// Mark the run loop active. The external scheduler is expected to
    /// call `step` while `is_running` holds.
    pub fn start(&mut self) {
        if self.outcome.is_none() && !self.running {
            self.running = true;
            self.notify(SessionEvent::Changed);
        }
    }

    /// Stop the run loop. Idempotent; pausing a stopped session is a no-op.
    pub fn pause(&mut self) {
        if self.running {
            self.running = false;
            self.notify(SessionEvent::Changed);
        }
    }
}

impl Session<VersusEngine> {
    /// Hand the placement turn to a player
    pub fn select_player(&mut self, player: Player) {
        self.engine.select_player(player);
        self.notify(SessionEvent::Changed);
    }

    /// Live-cell counts (player 1, player 2) for display
    pub fn counts(&self) -> (usize, usize) {
        VersusEngine::counts(&self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classic::ClassicEngine;
    use life_core::{BoardConfig, CellState, VersusCell, VersusConfig};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn classic_session(size: i32) -> Session<ClassicEngine> {
        let config = BoardConfig {
            size,
            ..Default::default()
        };
        Session::new(size, ClassicEngine::new(&config).unwrap()).unwrap()
    }

    fn versus_session(size: i32, budget: u32) -> Session<VersusEngine> {
        let config = VersusConfig {
            size,
            placement_budget: budget,
            seed: 42,
        };
        Session::new(size, VersusEngine::new(config).unwrap()).unwrap()
    }

    #[test]
    fn test_toggle_and_reset() {
        let mut session = classic_session(10);
        session.toggle_cell(Coord::new(3, 3));
        assert_eq!(session.grid().count(CellState::Alive), 1);

        session.toggle_cell(Coord::new(3, 3));
        assert_eq!(session.grid().count(CellState::Alive), 0);

        session.toggle_cell(Coord::new(1, 1));
        session.reset();
        assert_eq!(session.grid().count(CellState::Alive), 0);
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn test_toggle_at_pointer() {
        let mut session = classic_session(10);
        // Pointer (0, 0) is the bottom-left cell, row 9.
        session.toggle_at_pointer(0.2, 0.7);
        assert_eq!(session.grid().get(Coord::new(9, 0)), CellState::Alive);

        // Pointers off the board are ignored.
        session.toggle_at_pointer(11.0, 0.0);
        assert_eq!(session.grid().count(CellState::Alive), 1);
    }

    #[test]
    fn test_step_advances_generation() {
        let mut session = classic_session(10);
        for at in [Coord::new(5, 4), Coord::new(5, 5), Coord::new(5, 6)] {
            session.toggle_cell(at);
        }

        session.step();
        assert_eq!(session.generation(), 1);
        assert_eq!(session.grid().count(CellState::Alive), 3);
    }

    #[test]
    fn test_start_and_pause() {
        let mut session = classic_session(5);
        assert!(!session.is_running());

        session.start();
        assert!(session.is_running());

        session.pause();
        assert!(!session.is_running());

        // Pausing again stays a no-op.
        session.pause();
        assert!(!session.is_running());
    }

    #[test]
    fn test_observer_sees_every_mutation() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();

        let mut session = classic_session(5);
        session.set_observer(move |event| sink.borrow_mut().push(event));

        session.toggle_cell(Coord::new(0, 0));
        session.randomize();
        session.step();
        session.reset();

        assert_eq!(events.borrow().len(), 4);
        assert!(events
            .borrow()
            .iter()
            .all(|&e| e == SessionEvent::Changed));
    }

    #[test]
    fn test_versus_game_over_stops_the_loop() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();

        let mut session = versus_session(5, 5);
        session.set_observer(move |event| sink.borrow_mut().push(event));
        session.start();

        // Empty board: first step double-extinguishes into a draw.
        session.step();
        assert_eq!(session.outcome(), Some(Outcome::Draw));
        assert!(!session.is_running());
        assert!(events
            .borrow()
            .contains(&SessionEvent::Finished(Outcome::Draw)));

        // Further steps and starts are no-ops once decided.
        session.step();
        assert_eq!(session.generation(), 1);
        session.start();
        assert!(!session.is_running());
    }

    #[test]
    fn test_versus_placement_through_session() {
        let mut session = versus_session(5, 2);

        session.select_player(Player::One);
        session.toggle_cell(Coord::new(0, 0));
        session.toggle_cell(Coord::new(0, 1));
        session.toggle_cell(Coord::new(0, 2));
        assert_eq!(session.counts(), (2, 0));

        session.select_player(Player::Two);
        session.toggle_cell(Coord::new(4, 4));
        assert_eq!(session.counts(), (2, 1));
    }

    #[test]
    fn test_randomize_uses_engine_cell_set() {
        let mut session = versus_session(10, 5);
        session.randomize();

        let grid = session.grid();
        let total = grid.count(VersusCell::Empty)
            + grid.count(VersusCell::P1)
            + grid.count(VersusCell::P2);
        assert_eq!(total, 100);
        // With 100 draws at seed 42 all three values show up.
        assert!(grid.count(VersusCell::P1) > 0);
        assert!(grid.count(VersusCell::P2) > 0);
        assert!(grid.count(VersusCell::Empty) > 0);
    }

    #[test]
    fn test_reset_clears_versus_outcome() {
        let mut session = versus_session(5, 5);
        session.step();
        assert!(session.outcome().is_some());

        session.reset();
        assert_eq!(session.outcome(), None);
        assert_eq!(session.counts(), (0, 0));

        // The game is playable again.
        session.select_player(Player::Two);
        session.toggle_cell(Coord::new(2, 2));
        assert_eq!(session.counts(), (0, 1));
    }
}
