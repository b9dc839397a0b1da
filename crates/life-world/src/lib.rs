//! Game of Life simulation engines.
//!
//! This crate implements the toroidal board, the classic B3/S23 rules,
//! the competitive two-player variant, and the session controller a
//! presentation layer drives.

pub mod classic;
pub mod engine;
pub mod grid;
pub mod session;
pub mod versus;

pub use classic::ClassicEngine;
pub use engine::{Engine, Verdict};
pub use grid::Grid;
pub use session::{Session, SessionEvent};
pub use versus::VersusEngine;
