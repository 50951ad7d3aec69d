//! Game orchestration: the engine that runs one match and its report.

pub mod manager;
pub mod report;

pub use manager::Game;
pub use report::{EndReason, GameReport, GameResult};
