//! Fitness metrics and membership lifecycle core for a gym application.

pub mod config;
pub mod errors;
pub mod fitness;
pub mod logging;
pub mod membership;
pub mod recommendation;
pub mod report;
pub mod storage;

pub use errors::{AppError, AppResult};
