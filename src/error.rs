//! Custom error types and handling
//!
//! This module defines the application's error types and turns them into
//! private replies for the invoking user through poise's `on_error` hook.

use poise::serenity_prelude as serenity;

use crate::{state::AppState, utils::validation::first_validation_message};

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Contest preconditions
    #[error("No active contest")]
    NoActiveContest,

    #[error("No entries to rank")]
    NoEntries,

    #[error("Podium channel not set")]
    PodiumChannelNotSet,

    #[error("Entry not found")]
    EntryNotFound,

    #[error("Invalid score: {0}")]
    InvalidScore(f64),

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // External service errors
    #[error("Discord error: {0}")]
    Discord(String),

    #[error("Spreadsheet error: {0}")]
    Sheets(String),

    // Internal errors
    #[error("Internal error")]
    Internal(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoActiveContest => "NO_ACTIVE_CONTEST",
            Self::NoEntries => "NO_ENTRIES",
            Self::PodiumChannelNotSet => "PODIUM_CHANNEL_NOT_SET",
            Self::EntryNotFound => "ENTRY_NOT_FOUND",
            Self::InvalidScore(_) => "INVALID_SCORE",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Discord(_) => "DISCORD_ERROR",
            Self::Sheets(_) => "SHEETS_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Whether the error is caused by the caller rather than by the bot
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::NoActiveContest
                | Self::NoEntries
                | Self::PodiumChannelNotSet
                | Self::EntryNotFound
                | Self::InvalidScore(_)
                | Self::Validation(_)
        )
    }

    /// Message shown privately to the invoking user
    pub fn user_message(&self) -> String {
        match self {
            Self::NoActiveContest => "❌ No active contest.".to_string(),
            Self::NoEntries => "❌ No entries to rank.".to_string(),
            Self::PodiumChannelNotSet => "❌ Podium channel not set.".to_string(),
            Self::EntryNotFound => "❌ Entry not found.".to_string(),
            Self::InvalidScore(_) => "❌ Score must be a finite number.".to_string(),
            Self::Validation(message) => format!("❌ {}", message),
            Self::Discord(_) | Self::Sheets(_) | Self::Internal(_) | Self::Configuration(_) => {
                "❌ Something went wrong while handling this request.".to_string()
            }
        }
    }

    /// Log the error at a level matching its cause
    pub fn log(&self, operation: &str) {
        if self.is_user_error() {
            tracing::debug!(operation, code = self.error_code(), "Request rejected: {}", self);
        } else {
            tracing::error!(operation, code = self.error_code(), "Request failed: {:?}", self);
        }
    }
}

/// Poise error hook: every failure becomes a private reply to the caller
pub async fn on_error(error: poise::FrameworkError<'_, AppState, AppError>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error.log(&ctx.command().qualified_name);
            let reply = poise::CreateReply::default()
                .content(error.user_message())
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                tracing::error!("Failed to deliver error reply: {}", e);
            }
        }
        poise::FrameworkError::MissingUserPermissions { ctx, missing_permissions, .. } => {
            tracing::info!(
                command = %ctx.command().qualified_name,
                user = %ctx.author().id,
                missing = ?missing_permissions,
                "Command rejected: missing permissions"
            );
            let reply = poise::CreateReply::default()
                .content("❌ You don't have permission to use this command.")
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                tracing::error!("Failed to deliver permission reply: {}", e);
            }
        }
        poise::FrameworkError::EventHandler { error, event, .. } => {
            error.log(event.snake_case_name());
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                tracing::error!("Error while handling framework error: {}", e);
            }
        }
    }
}

// Implement From for common error types
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::Discord(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Sheets(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppError::Sheets(format!("failed to sign service-account assertion: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(first_validation_message(&err))
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
