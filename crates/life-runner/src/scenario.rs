//! Headless scenario execution: seed a session, drive it at a fixed
//! cadence, and collect a report.
//!
//! This module plays the role of the presentation layer's scheduler: the
//! session core never sleeps or ticks on its own.

use anyhow::Result;
use life_core::{CellState, Coord, GameMode, Outcome, Player, ScenarioConfig, StartPattern};
use life_world::{ClassicEngine, Session, SessionEvent, VersusEngine};
use serde::Serialize;
use std::time::Duration;
use tracing::info;

/// Final state of a finished scenario run
#[derive(Debug, Serialize)]
pub struct Report {
    pub mode: GameMode,
    pub generations: u64,
    /// Live cells at the end (classic mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alive: Option<usize>,
    /// Per-player live cells at the end (versus mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<(usize, usize)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
}

/// Cell offsets of a named pattern, relative to its top-left corner
fn pattern_cells(pattern: StartPattern) -> &'static [(i32, i32)] {
    match pattern {
        StartPattern::Random => &[],
        StartPattern::Blinker => &[(0, 0), (0, 1), (0, 2)],
        StartPattern::Block => &[(0, 0), (0, 1), (1, 0), (1, 1)],
        StartPattern::Glider => &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    }
}

pub fn run(config: &ScenarioConfig) -> Result<Report> {
    config.validate()?;
    match config.mode {
        GameMode::Classic => run_classic(config),
        GameMode::Versus => run_versus(config),
    }
}

fn run_classic(config: &ScenarioConfig) -> Result<Report> {
    let engine = ClassicEngine::new(&config.board)?;
    let mut session = Session::new(config.board.size, engine)?;

    match config.pattern {
        StartPattern::Random => session.randomize(),
        pattern => {
            // Drop the pattern a third of the way into the board so it
            // has room to evolve before meeting an edge.
            let origin = config.board.size / 3;
            for &(drow, dcol) in pattern_cells(pattern) {
                session.toggle_cell(Coord::new(origin + drow, origin + dcol));
            }
        }
    }

    info!(
        size = config.board.size,
        alive = session.grid().count(CellState::Alive),
        "starting classic run"
    );

    session.start();
    while session.is_running() && session.generation() < config.max_generations {
        session.step();
        if session.generation() % 10 == 0 {
            info!(
                generation = session.generation(),
                alive = session.grid().count(CellState::Alive),
                "progress"
            );
        }
        std::thread::sleep(Duration::from_millis(config.tick_interval_ms));
    }
    session.pause();

    Ok(Report {
        mode: GameMode::Classic,
        generations: session.generation(),
        alive: Some(session.grid().count(CellState::Alive)),
        counts: None,
        outcome: None,
    })
}

fn run_versus(config: &ScenarioConfig) -> Result<Report> {
    let engine = VersusEngine::new(config.versus.clone())?;
    let mut session = Session::new(config.versus.size, engine)?;
    session.set_observer(|event| {
        if let SessionEvent::Finished(outcome) = event {
            info!(?outcome, "game over");
        }
    });

    match config.pattern {
        StartPattern::Random => session.randomize(),
        pattern => {
            let n = config.versus.size;
            let cells = pattern_cells(pattern);

            // Player 1 near the top-left, player 2 mirrored through the
            // board center so the sides start symmetric.
            session.select_player(Player::One);
            let origin = n / 4;
            for &(drow, dcol) in cells {
                session.toggle_cell(Coord::new(origin + drow, origin + dcol));
            }

            session.select_player(Player::Two);
            for &(drow, dcol) in cells {
                session.toggle_cell(Coord::new(n - 1 - origin - drow, n - 1 - origin - dcol));
            }
        }
    }

    let (count_p1, count_p2) = session.counts();
    info!(size = config.versus.size, count_p1, count_p2, "starting versus run");

    session.start();
    while session.is_running() && session.generation() < config.max_generations {
        session.step();
        let (count_p1, count_p2) = session.counts();
        info!(generation = session.generation(), count_p1, count_p2, "progress");
        std::thread::sleep(Duration::from_millis(config.tick_interval_ms));
    }
    session.pause();

    Ok(Report {
        mode: GameMode::Versus,
        generations: session.generation(),
        alive: None,
        counts: Some(session.counts()),
        outcome: session.outcome(),
    })
}
