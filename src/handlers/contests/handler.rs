//! Contest command implementations

use poise::serenity_prelude::{self as serenity, CreateMessage};

use crate::{
    error::AppResult,
    handlers::reply_private,
    models::ContestDetails,
    services::ContestService,
    state::Context,
};

use super::response::{announcement_embed, submit_button_row};

/// Create a new contest (replaces any running contest and its entries)
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "ADMINISTRATOR",
    default_member_permissions = "ADMINISTRATOR"
)]
pub async fn contest_create(
    ctx: Context<'_>,
    #[description = "Contest title"]
    #[max_length = 200]
    title: String,
    #[description = "Theme entries should follow"]
    #[max_length = 1024]
    theme: String,
    #[description = "Submission deadline"]
    #[max_length = 1024]
    deadline: String,
    #[description = "Who judges and how"]
    #[max_length = 1024]
    judging: String,
) -> AppResult<()> {
    let details = ContestDetails {
        title,
        theme,
        deadline,
        judging,
    };
    let message = format!("✅ Contest '{}' has been created.", details.title);

    ContestService::create_contest(&mut *ctx.data().contest().await, details);

    reply_private(ctx, message).await
}

/// Announce the active contest with a submission button
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "ADMINISTRATOR",
    default_member_permissions = "ADMINISTRATOR"
)]
pub async fn contest_announce(
    ctx: Context<'_>,
    #[description = "Channel to post the announcement in"]
    #[channel_types("Text", "News")]
    channel: serenity::GuildChannel,
) -> AppResult<()> {
    let details = ContestService::announce(&mut *ctx.data().contest().await, channel.id)?;

    channel
        .id
        .send_message(
            ctx.serenity_context(),
            CreateMessage::new()
                .embed(announcement_embed(&details))
                .components(vec![submit_button_row()]),
        )
        .await?;

    reply_private(ctx, "✅ Announcement posted.").await
}

/// Set the channel where new entries are posted for review
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "ADMINISTRATOR",
    default_member_permissions = "ADMINISTRATOR"
)]
pub async fn contest_set_review(
    ctx: Context<'_>,
    #[description = "Review channel"]
    #[channel_types("Text")]
    channel: serenity::GuildChannel,
) -> AppResult<()> {
    ContestService::set_review_channel(&mut *ctx.data().contest().await, channel.id);
    reply_private(ctx, "✅ Review channel set.").await
}

/// Set the channel where the podium is posted
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "ADMINISTRATOR",
    default_member_permissions = "ADMINISTRATOR"
)]
pub async fn contest_set_podium(
    ctx: Context<'_>,
    #[description = "Podium channel"]
    #[channel_types("Text", "News")]
    channel: serenity::GuildChannel,
) -> AppResult<()> {
    ContestService::set_podium_channel(&mut *ctx.data().contest().await, channel.id);
    reply_private(ctx, "✅ Podium channel set.").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::{MAX_CONTEST_FIELD_LENGTH, MAX_CONTEST_TITLE_LENGTH},
        handlers::max_lengths,
    };

    #[test]
    fn test_contest_create_limits_match_embed_caps() {
        let command = contest_create()
            .create_as_slash_command()
            .expect("contest_create is a slash command");
        let json = serde_json::to_value(&command).unwrap();

        let mut limits = max_lengths(&json, "name");
        limits.sort();

        assert_eq!(
            limits,
            vec![
                ("deadline".to_string(), MAX_CONTEST_FIELD_LENGTH),
                ("judging".to_string(), MAX_CONTEST_FIELD_LENGTH),
                ("theme".to_string(), MAX_CONTEST_FIELD_LENGTH),
                ("title".to_string(), MAX_CONTEST_TITLE_LENGTH),
            ]
        );
    }
}
