//! Configuration types for the simulation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Board configuration for the classic game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Side length of the square board
    pub size: i32,
    /// Random seed for the randomize command
    pub seed: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { size: 30, seed: 42 }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> Result<()> {
        if self.size <= 0 {
            return Err(Error::Validation(format!(
                "board size must be positive, got {}",
                self.size
            )));
        }
        Ok(())
    }
}

/// Configuration for the competitive two-player game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersusConfig {
    /// Side length of the square board
    pub size: i32,
    /// Maximum number of live cells each player may have on the board
    /// during setup
    pub placement_budget: u32,
    /// Random seed for the birth tie-break and the randomize command
    pub seed: u64,
}

impl Default for VersusConfig {
    fn default() -> Self {
        Self {
            size: 30,
            placement_budget: 10,
            seed: 42,
        }
    }
}

impl VersusConfig {
    pub fn validate(&self) -> Result<()> {
        if self.size <= 0 {
            return Err(Error::Validation(format!(
                "board size must be positive, got {}",
                self.size
            )));
        }
        if self.placement_budget == 0 {
            return Err(Error::Validation(
                "placement budget must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Game mode selector for a scenario run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    Classic,
    Versus,
}

/// Named starting pattern for a scenario run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartPattern {
    /// Uniformly random board
    Random,
    /// Period-2 oscillator, three cells in a row
    Blinker,
    /// Stable 2x2 block
    Block,
    /// Diagonally traveling 5-cell ship
    Glider,
}

/// Scenario configuration for a headless run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Which game mode to run
    pub mode: GameMode,
    /// Starting pattern placed before the run
    pub pattern: StartPattern,
    /// Maximum number of generations to step
    pub max_generations: u64,
    /// Delay between generations (milliseconds)
    pub tick_interval_ms: u64,
    /// Board configuration (classic mode)
    pub board: BoardConfig,
    /// Board configuration (versus mode)
    pub versus: VersusConfig,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Classic,
            pattern: StartPattern::Random,
            max_generations: 100,
            tick_interval_ms: 200,
            board: BoardConfig::default(),
            versus: VersusConfig::default(),
        }
    }
}

impl ScenarioConfig {
    pub fn validate(&self) -> Result<()> {
        self.board.validate()?;
        self.versus.validate()?;
        Ok(())
    }
}
