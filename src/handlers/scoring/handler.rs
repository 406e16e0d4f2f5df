//! Scoring command implementations

use poise::serenity_prelude::{self as serenity, CreateMessage};

use crate::{
    error::AppResult,
    handlers::reply_private,
    models::EntryId,
    services::ScoringService,
    state::Context,
};

use super::response::{podium_message, score_ack};

/// Score a member's contest entry
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "MANAGE_MESSAGES",
    default_member_permissions = "MANAGE_MESSAGES"
)]
pub async fn score(
    ctx: Context<'_>,
    #[description = "Member whose entry is scored"] user: serenity::User,
    #[description = "Score to add"] score: f64,
    #[description = "Entry number, when the member submitted more than one"]
    #[min = 1]
    entry: Option<u32>,
) -> AppResult<()> {
    let receipt = ScoringService::add_score(
        &mut *ctx.data().contest().await,
        user.id,
        score,
        entry.map(EntryId),
    )?;

    reply_private(ctx, score_ack(user.display_name(), &receipt)).await
}

/// Post the top three entries to the podium channel
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "ADMINISTRATOR",
    default_member_permissions = "ADMINISTRATOR"
)]
pub async fn podium_show(ctx: Context<'_>) -> AppResult<()> {
    let podium = ScoringService::podium(&*ctx.data().contest().await)?;

    podium
        .channel
        .send_message(
            ctx.serenity_context(),
            CreateMessage::new().content(podium_message(&podium)),
        )
        .await?;

    tracing::info!(
        channel = %podium.channel,
        placements = podium.placements.len(),
        "Podium posted"
    );
    reply_private(ctx, "✅ Podium posted.").await
}
