//! Contest model

use poise::serenity_prelude::{ChannelId, UserId};

use super::entry::{ContestEntry, EntryId, NewEntry};

/// Descriptive contest fields, always replaced together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContestDetails {
    pub title: String,
    pub theme: String,
    pub deadline: String,
    pub judging: String,
}

/// The single contest this bot manages, alive for the process lifetime
#[derive(Debug, Clone, Default)]
pub struct ContestState {
    pub active: bool,
    pub details: Option<ContestDetails>,
    pub channel_announcement: Option<ChannelId>,
    pub channel_review: Option<ChannelId>,
    pub channel_podium: Option<ChannelId>,
    entries: Vec<ContestEntry>,
    next_entry_id: u32,
}

impl ContestState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new contest, discarding all previous entries
    pub fn reset(&mut self, details: ContestDetails) {
        self.active = true;
        self.details = Some(details);
        self.entries.clear();
        self.next_entry_id = 0;
    }

    pub fn title(&self) -> Option<&str> {
        self.details.as_ref().map(|d| d.title.as_str())
    }

    pub fn entries(&self) -> &[ContestEntry] {
        &self.entries
    }

    /// Append a new entry and return it
    pub fn push_entry(&mut self, new: NewEntry) -> &ContestEntry {
        self.next_entry_id += 1;
        let entry = ContestEntry::new(EntryId(self.next_entry_id), new);
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// First entry submitted by `user`
    pub fn first_entry_of_mut(&mut self, user: UserId) -> Option<&mut ContestEntry> {
        self.entries.iter_mut().find(|e| e.user == user)
    }

    pub fn entry_mut(&mut self, id: EntryId) -> Option<&mut ContestEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(title: &str) -> ContestDetails {
        ContestDetails {
            title: title.to_string(),
            theme: "Space".to_string(),
            deadline: "Friday".to_string(),
            judging: "Staff".to_string(),
        }
    }

    fn new_entry(user: u64) -> NewEntry {
        NewEntry {
            user: UserId::new(user),
            submitter_name: format!("user{}", user),
            level_id: "1".to_string(),
            level_name: "Level".to_string(),
            description: None,
            yt_link: None,
        }
    }

    #[test]
    fn test_default_is_inactive() {
        let state = ContestState::new();
        assert!(!state.active);
        assert!(state.details.is_none());
        assert!(state.entries().is_empty());
    }

    #[test]
    fn test_entry_ids_are_sequential_and_reset() {
        let mut state = ContestState::new();
        state.reset(details("First"));
        assert_eq!(state.push_entry(new_entry(1)).id, EntryId(1));
        assert_eq!(state.push_entry(new_entry(1)).id, EntryId(2));

        state.reset(details("Second"));
        assert!(state.entries().is_empty());
        assert_eq!(state.push_entry(new_entry(2)).id, EntryId(1));
        assert_eq!(state.title(), Some("Second"));
    }

    #[test]
    fn test_first_entry_of_user() {
        let mut state = ContestState::new();
        state.push_entry(new_entry(1));
        state.push_entry(new_entry(2));
        state.push_entry(new_entry(2));

        let entry = state.first_entry_of_mut(UserId::new(2)).unwrap();
        assert_eq!(entry.id, EntryId(2));
        assert!(state.first_entry_of_mut(UserId::new(3)).is_none());
    }
}
