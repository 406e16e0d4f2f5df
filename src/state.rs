//! Application state management
//!
//! This module contains the shared application state that poise hands to
//! every command and event handler as its user data.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::{error::AppError, models::ContestState, sheets::MirrorWriter};

/// Poise context carrying [`AppState`]
pub type Context<'a> = poise::Context<'a, AppState, AppError>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// The contest being run; locked for the duration of one state transition
    contest: Mutex<ContestState>,

    /// Spreadsheet mirror for submissions
    mirror: MirrorWriter,
}

impl AppState {
    /// Create a new application state with no contest running
    pub fn new(mirror: MirrorWriter) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                contest: Mutex::new(ContestState::new()),
                mirror,
            }),
        }
    }

    /// Lock the contest state.
    ///
    /// Never hold the guard across Discord or spreadsheet I/O.
    pub async fn contest(&self) -> MutexGuard<'_, ContestState> {
        self.inner.contest.lock().await
    }

    /// Get a reference to the spreadsheet mirror
    pub fn mirror(&self) -> &MirrorWriter {
        &self.inner.mirror
    }
}
