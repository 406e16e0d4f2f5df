//! Submission interaction handlers
//!
//! These run from the global event handler rather than as slash commands: the
//! announcement button and the modal are routed by custom id.

use poise::{
    Modal as _,
    serenity_prelude::{
        self as serenity, CreateInteractionResponse, CreateInteractionResponseMessage,
        CreateMessage,
    },
};

use crate::{
    constants::SUBMIT_FORM_ID,
    error::{AppError, AppResult},
    models::ContestEntry,
    services::SubmissionService,
    state::AppState,
};

use super::{
    request::{SubmitEntryForm, SubmitEntryRequest},
    response::{review_embed, submission_ack},
};

/// Answer a "Submit Entry" click with the submission form
pub async fn open_submission_form(
    ctx: &serenity::Context,
    interaction: &serenity::ComponentInteraction,
) -> AppResult<()> {
    tracing::debug!(user = %interaction.user.id, "Opening submission form");
    interaction
        .create_response(ctx, SubmitEntryForm::create(None, SUBMIT_FORM_ID.to_string()))
        .await?;
    Ok(())
}

/// Handle a completed submission form.
///
/// Rejections are answered privately; only failures to answer at all are
/// returned as errors.
pub async fn handle_submission(
    ctx: &serenity::Context,
    data: &AppState,
    interaction: &serenity::ModalInteraction,
) -> AppResult<()> {
    let message = match submit(ctx, data, interaction).await {
        Ok(entry) => submission_ack(&entry),
        Err(error) => {
            error.log("submit_entry");
            error.user_message()
        }
    };

    interaction
        .create_response(
            ctx,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(message)
                    .ephemeral(true),
            ),
        )
        .await?;
    Ok(())
}

async fn submit(
    ctx: &serenity::Context,
    data: &AppState,
    interaction: &serenity::ModalInteraction,
) -> AppResult<ContestEntry> {
    let form = SubmitEntryForm::parse(interaction.data.clone())
        .map_err(|e| AppError::Validation(format!("Malformed submission form: {}", e)))?;

    let receipt = SubmissionService::submit(
        &mut *data.contest().await,
        interaction.user.id,
        &interaction.user.tag(),
        SubmitEntryRequest::from(form),
    )?;

    // Not awaited: the acknowledgment must not wait on spreadsheet retries
    data.mirror().spawn(receipt.row);

    if let Some(channel) = receipt.review_channel {
        let posted = channel
            .send_message(ctx, CreateMessage::new().embed(review_embed(&receipt.entry)))
            .await;
        if let Err(e) = posted {
            tracing::warn!(
                channel = %channel,
                entry = %receipt.entry.id,
                "Failed to post entry to review channel: {}",
                e
            );
        }
    }

    Ok(receipt.entry)
}
