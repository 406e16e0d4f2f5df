//! ContestBot - Creator Contest Discord Bot
//!
//! This library provides the core functionality for ContestBot, a Discord bot
//! that runs a level-creation contest for a community server.
//!
//! # Features
//!
//! - Contest creation and public announcement with a persistent submit button
//! - Entry intake through a modal form
//! - Best-effort mirroring of every entry to a Google spreadsheet
//! - Moderator scoring and a top-three podium
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: slash commands and interaction routing (thin layer)
//! - **Services**: contest state transitions and ranking
//! - **Sheets**: spreadsheet mirror
//! - **Models**: domain models

pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod sheets;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
