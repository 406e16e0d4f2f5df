//! Contest management commands

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use crate::{error::AppError, state::AppState};

/// Contest commands
pub fn commands() -> Vec<poise::Command<AppState, AppError>> {
    vec![
        handler::contest_create(),
        handler::contest_announce(),
        handler::contest_set_review(),
        handler::contest_set_podium(),
    ]
}
