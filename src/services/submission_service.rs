//! Submission service

use poise::serenity_prelude::{ChannelId, UserId};
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::submissions::request::SubmitEntryRequest,
    models::{ContestEntry, ContestState, NewEntry},
    sheets::SheetRow,
};

/// What the submission handler needs once the entry is recorded
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    /// Snapshot of the entry as stored
    pub entry: ContestEntry,
    /// Row to mirror to the spreadsheet
    pub row: SheetRow,
    /// Where to post the review notification, if anywhere
    pub review_channel: Option<ChannelId>,
}

/// Entry intake
pub struct SubmissionService;

impl SubmissionService {
    /// Record a submission.
    ///
    /// There is no duplicate check: a user may submit any number of entries and
    /// each one is tracked on its own.
    pub fn submit(
        state: &mut ContestState,
        user: UserId,
        submitter_name: &str,
        payload: SubmitEntryRequest,
    ) -> AppResult<SubmissionReceipt> {
        let payload = payload.normalized();
        payload.validate()?;

        let entry = state
            .push_entry(NewEntry {
                user,
                submitter_name: submitter_name.to_string(),
                level_id: payload.level_id,
                level_name: payload.level_name,
                description: payload.description,
                yt_link: payload.yt_link,
            })
            .clone();

        tracing::info!(
            entry = %entry.id,
            user = %user,
            level_id = %entry.level_id,
            level_name = %entry.level_name,
            "Entry submitted"
        );

        Ok(SubmissionReceipt {
            row: SheetRow::from(&entry),
            entry,
            review_channel: state.channel_review,
        })
    }
}
