//! Judging commands

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use crate::{error::AppError, state::AppState};

/// Scoring and podium commands
pub fn commands() -> Vec<poise::Command<AppState, AppError>> {
    vec![handler::score(), handler::podium_show()]
}
