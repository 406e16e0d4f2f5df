//! Scoring and podium ranking

use poise::serenity_prelude::{ChannelId, UserId};

use crate::{
    constants::{MEDALS, PODIUM_SIZE},
    error::{AppError, AppResult},
    models::{ContestEntry, ContestState, EntryId},
    utils::validate_score,
};

/// Result of a successful score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReceipt {
    pub entry_id: EntryId,
    pub average: f64,
    pub score_count: usize,
}

/// One podium line
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// 1-based position
    pub rank: usize,
    pub medal: &'static str,
    pub entry_id: EntryId,
    pub level_name: String,
    pub user: UserId,
    pub average: f64,
}

/// A ranking ready to be posted
#[derive(Debug, Clone, PartialEq)]
pub struct Podium {
    pub title: String,
    pub channel: ChannelId,
    pub placements: Vec<Placement>,
}

/// Judging
pub struct ScoringService;

impl ScoringService {
    /// Add a score to an entry of `user`.
    ///
    /// Without `entry_id` the user's first entry is scored. With it, the entry
    /// must exist and belong to `user`.
    pub fn add_score(
        state: &mut ContestState,
        user: UserId,
        score: f64,
        entry_id: Option<EntryId>,
    ) -> AppResult<ScoreReceipt> {
        validate_score(score)?;

        let entry = match entry_id {
            Some(id) => state.entry_mut(id).filter(|e| e.user == user),
            None => state.first_entry_of_mut(user),
        }
        .ok_or(AppError::EntryNotFound)?;

        entry.add_score(score);

        let receipt = ScoreReceipt {
            entry_id: entry.id,
            average: entry.average_score(),
            score_count: entry.scores.len(),
        };
        tracing::info!(
            entry = %receipt.entry_id,
            user = %user,
            score,
            average = receipt.average,
            "Score added"
        );

        Ok(receipt)
    }

    /// Build the podium for the current contest.
    ///
    /// Entries are checked before the podium channel, so an empty contest never
    /// consults the channel binding.
    pub fn podium(state: &ContestState) -> AppResult<Podium> {
        if state.entries().is_empty() {
            return Err(AppError::NoEntries);
        }

        let placements = Self::rank(state.entries())
            .into_iter()
            .enumerate()
            .map(|(i, entry)| Placement {
                rank: i + 1,
                medal: MEDALS[i],
                entry_id: entry.id,
                level_name: entry.level_name.clone(),
                user: entry.user,
                average: entry.average_score(),
            })
            .collect();

        let channel = state.channel_podium.ok_or(AppError::PodiumChannelNotSet)?;

        Ok(Podium {
            title: state.title().unwrap_or_default().to_string(),
            channel,
            placements,
        })
    }

    /// Top entries by average score, highest first.
    ///
    /// The sort is stable: tied entries keep submission order.
    pub fn rank(entries: &[ContestEntry]) -> Vec<&ContestEntry> {
        let mut ranked: Vec<(f64, &ContestEntry)> =
            entries.iter().map(|e| (e.average_score(), e)).collect();
        ranked.sort_by(|a, b| b.0.total_cmp(&a.0));
        ranked.into_iter().take(PODIUM_SIZE).map(|(_, e)| e).collect()
    }
}
