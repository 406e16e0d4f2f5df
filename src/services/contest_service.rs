//! Contest service

use poise::serenity_prelude::ChannelId;

use crate::{
    error::{AppError, AppResult},
    models::{ContestDetails, ContestState},
};

/// Contest lifecycle and channel bindings
pub struct ContestService;

impl ContestService {
    /// Create a new contest.
    ///
    /// Replaces any running contest without confirmation: details are
    /// overwritten and all entries are dropped.
    pub fn create_contest(state: &mut ContestState, details: ContestDetails) {
        let dropped = state.entries().len();
        tracing::info!(
            title = %details.title,
            replaced = state.active,
            dropped_entries = dropped,
            "Contest created"
        );
        state.reset(details);
    }

    /// Bind the announcement channel and return the details to announce
    pub fn announce(state: &mut ContestState, channel: ChannelId) -> AppResult<ContestDetails> {
        if !state.active {
            return Err(AppError::NoActiveContest);
        }
        let details = state.details.clone().ok_or(AppError::NoActiveContest)?;

        state.channel_announcement = Some(channel);
        tracing::info!(channel = %channel, title = %details.title, "Contest announced");

        Ok(details)
    }

    /// Bind the channel that receives new-entry notifications
    pub fn set_review_channel(state: &mut ContestState, channel: ChannelId) {
        state.channel_review = Some(channel);
        tracing::info!(channel = %channel, "Review channel set");
    }

    /// Bind the channel that receives the podium
    pub fn set_podium_channel(state: &mut ContestState, channel: ChannelId) {
        state.channel_podium = Some(channel);
        tracing::info!(channel = %channel, "Podium channel set");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewEntry;
    use poise::serenity_prelude::UserId;

    fn details(title: &str) -> ContestDetails {
        ContestDetails {
            title: title.to_string(),
            theme: "Underwater".to_string(),
            deadline: "June 30".to_string(),
            judging: "Moderators".to_string(),
        }
    }

    fn entry(user: u64) -> NewEntry {
        NewEntry {
            user: UserId::new(user),
            submitter_name: format!("user{}", user),
            level_id: "42".to_string(),
            level_name: "Deep Blue".to_string(),
            description: None,
            yt_link: None,
        }
    }

    #[test]
    fn test_create_contest_activates_and_resets_entries() {
        let mut state = ContestState::new();
        state.push_entry(entry(1));
        state.push_entry(entry(2));

        ContestService::create_contest(&mut state, details("Summer Jam"));

        assert!(state.active);
        assert!(state.entries().is_empty());
        assert_eq!(state.details, Some(details("Summer Jam")));
    }

    #[test]
    fn test_create_contest_overwrites_running_contest() {
        let mut state = ContestState::new();
        ContestService::create_contest(&mut state, details("First"));
        state.push_entry(entry(1));

        ContestService::create_contest(&mut state, details("Second"));

        assert!(state.active);
        assert!(state.entries().is_empty());
        assert_eq!(state.title(), Some("Second"));
    }

    #[test]
    fn test_create_contest_keeps_channel_bindings() {
        let mut state = ContestState::new();
        ContestService::set_review_channel(&mut state, ChannelId::new(10));
        ContestService::create_contest(&mut state, details("Summer Jam"));
        assert_eq!(state.channel_review, Some(ChannelId::new(10)));
    }

    #[test]
    fn test_announce_without_contest_fails_and_binds_nothing() {
        let mut state = ContestState::new();

        let result = ContestService::announce(&mut state, ChannelId::new(5));

        assert!(matches!(result, Err(AppError::NoActiveContest)));
        assert!(state.channel_announcement.is_none());
    }

    #[test]
    fn test_announce_binds_channel_and_returns_details() {
        let mut state = ContestState::new();
        ContestService::create_contest(&mut state, details("Summer Jam"));

        let announced = ContestService::announce(&mut state, ChannelId::new(5)).unwrap();

        assert_eq!(announced.title, "Summer Jam");
        assert_eq!(state.channel_announcement, Some(ChannelId::new(5)));
    }

    #[test]
    fn test_channel_bindings_overwrite_without_active_contest() {
        let mut state = ContestState::new();
        ContestService::set_review_channel(&mut state, ChannelId::new(1));
        ContestService::set_review_channel(&mut state, ChannelId::new(2));
        ContestService::set_podium_channel(&mut state, ChannelId::new(2));

        assert_eq!(state.channel_review, Some(ChannelId::new(2)));
        assert_eq!(state.channel_podium, Some(ChannelId::new(2)));
        assert!(!state.active);
    }
}
