//! Discord command and interaction handlers
//!
//! This module contains all slash commands organized by domain, plus the global
//! event handler that routes the submission button and form.

pub mod contests;
pub mod scoring;
pub mod submissions;

use poise::serenity_prelude::{self as serenity, GuildId};

use crate::{
    constants::{SUBMIT_BUTTON_ID, SUBMIT_FORM_ID},
    error::{AppError, AppResult},
    state::{AppState, Context},
};

/// All slash commands
pub fn commands() -> Vec<poise::Command<AppState, AppError>> {
    contests::commands()
        .into_iter()
        .chain(scoring::commands())
        .collect()
}

/// Reply to the invoking user only
pub async fn reply_private(ctx: Context<'_>, content: impl Into<String>) -> AppResult<()> {
    ctx.send(
        poise::CreateReply::default()
            .content(content)
            .ephemeral(true),
    )
    .await?;
    Ok(())
}

/// Register slash commands, to a single guild when one is configured
pub async fn register_commands(
    ctx: &serenity::Context,
    commands: &[poise::Command<AppState, AppError>],
    guild_id: Option<u64>,
) -> AppResult<()> {
    match guild_id {
        Some(id) => {
            poise::builtins::register_in_guild(ctx, commands, GuildId::new(id)).await?;
            tracing::info!(guild = id, count = commands.len(), "Registered commands in guild");
        }
        None => {
            poise::builtins::register_globally(ctx, commands).await?;
            tracing::info!(count = commands.len(), "Registered commands globally");
        }
    }
    Ok(())
}

/// Global event handler
pub async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, AppState, AppError>,
    data: &AppState,
) -> AppResult<()> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            tracing::info!(
                user = %data_about_bot.user.name,
                guilds = data_about_bot.guilds.len(),
                "Connected to Discord"
            );
        }
        serenity::FullEvent::InteractionCreate { interaction } => match interaction {
            serenity::Interaction::Component(component)
                if component.data.custom_id == SUBMIT_BUTTON_ID =>
            {
                submissions::open_submission_form(ctx, component).await?;
            }
            serenity::Interaction::Modal(modal) if modal.data.custom_id == SUBMIT_FORM_ID => {
                submissions::handle_submission(ctx, data, modal).await?;
            }
            _ => {}
        },
        _ => {}
    }
    Ok(())
}

/// Collect `(<key>, max_length)` pairs from every object in a serialized builder
#[cfg(test)]
pub(crate) fn max_lengths(value: &serde_json::Value, key: &str) -> Vec<(String, u64)> {
    let mut found = Vec::new();
    match value {
        serde_json::Value::Object(map) => {
            let name = map.get(key).and_then(|v| v.as_str());
            let max = map.get("max_length").and_then(|v| v.as_u64());
            if let (Some(name), Some(max)) = (name, max) {
                found.push((name.to_string(), max));
            }
            for child in map.values() {
                found.extend(max_lengths(child, key));
            }
        }
        serde_json::Value::Array(items) => {
            for child in items {
                found.extend(max_lengths(child, key));
            }
        }
        _ => {}
    }
    found
}
