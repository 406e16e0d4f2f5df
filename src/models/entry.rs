//! Contest entry model

use poise::serenity_prelude::UserId;

use crate::{constants::PLACEHOLDER, utils::text::round_to_hundredths};

/// Entry number within the current contest (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u32);

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single level submission and the scores it has received
#[derive(Debug, Clone)]
pub struct ContestEntry {
    pub id: EntryId,
    pub user: UserId,
    /// Submitter display text at submission time (mirrored to the spreadsheet)
    pub submitter_name: String,
    pub level_id: String,
    pub level_name: String,
    /// Free text, or [`PLACEHOLDER`] when left blank
    pub description: String,
    /// Video link, or [`PLACEHOLDER`] when left blank
    pub yt_link: String,
    /// Every score given, in order; the same judge may score more than once
    pub scores: Vec<f64>,
}

/// Data needed to record a new entry
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub user: UserId,
    pub submitter_name: String,
    pub level_id: String,
    pub level_name: String,
    pub description: Option<String>,
    pub yt_link: Option<String>,
}

impl ContestEntry {
    /// Build an entry, storing the placeholder for blank optional fields
    pub fn new(id: EntryId, new: NewEntry) -> Self {
        Self {
            id,
            user: new.user,
            submitter_name: new.submitter_name,
            level_id: new.level_id,
            level_name: new.level_name,
            description: or_placeholder(new.description),
            yt_link: or_placeholder(new.yt_link),
            scores: Vec::new(),
        }
    }

    /// Mean of all scores rounded to two decimals, 0 when unscored
    pub fn average_score(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        let total: f64 = self.scores.iter().sum();
        round_to_hundredths(total / self.scores.len() as f64)
    }

    pub fn add_score(&mut self, score: f64) {
        self.scores.push(score);
    }

    pub fn description(&self) -> Option<&str> {
        non_placeholder(&self.description)
    }

    pub fn yt_link(&self) -> Option<&str> {
        non_placeholder(&self.yt_link)
    }
}

fn or_placeholder(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn non_placeholder(value: &str) -> Option<&str> {
    (value != PLACEHOLDER).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_entry(description: Option<&str>, yt_link: Option<&str>) -> NewEntry {
        NewEntry {
            user: UserId::new(7),
            submitter_name: "maker".to_string(),
            level_id: "12345".to_string(),
            level_name: "Sky Fortress".to_string(),
            description: description.map(String::from),
            yt_link: yt_link.map(String::from),
        }
    }

    #[test]
    fn test_average_score_empty_is_zero() {
        let entry = ContestEntry::new(EntryId(1), new_entry(None, None));
        assert_eq!(entry.average_score(), 0.0);
    }

    #[test]
    fn test_average_score_mean() {
        let mut entry = ContestEntry::new(EntryId(1), new_entry(None, None));
        for score in [10.0, 8.0, 9.0] {
            entry.add_score(score);
        }
        assert_eq!(entry.average_score(), 9.0);
    }

    #[test]
    fn test_average_score_rounds_to_two_decimals() {
        let mut entry = ContestEntry::new(EntryId(1), new_entry(None, None));
        for score in [10.0, 8.0, 8.0] {
            entry.add_score(score);
        }
        assert_eq!(entry.average_score(), 8.67);
    }

    #[test]
    fn test_average_score_of_huge_score_is_finite() {
        let mut entry = ContestEntry::new(EntryId(1), new_entry(None, None));
        entry.add_score(1e307);
        let average = entry.average_score();
        assert!(average.is_finite());
        assert_eq!(average, 1e307);
    }

    #[test]
    fn test_duplicate_scores_are_counted() {
        let mut entry = ContestEntry::new(EntryId(1), new_entry(None, None));
        entry.add_score(6.0);
        entry.add_score(6.0);
        entry.add_score(9.0);
        assert_eq!(entry.scores.len(), 3);
        assert_eq!(entry.average_score(), 7.0);
    }

    #[test]
    fn test_blank_optional_fields_become_placeholder() {
        let entry = ContestEntry::new(EntryId(1), new_entry(Some("   "), None));
        assert_eq!(entry.description, "None");
        assert_eq!(entry.yt_link, "None");
        assert_eq!(entry.description(), None);
        assert_eq!(entry.yt_link(), None);
    }

    #[test]
    fn test_optional_fields_are_kept() {
        let entry = ContestEntry::new(
            EntryId(2),
            new_entry(Some("Hard demon"), Some("https://youtu.be/abc")),
        );
        assert_eq!(entry.description(), Some("Hard demon"));
        assert_eq!(entry.yt_link(), Some("https://youtu.be/abc"));
        assert_eq!(entry.id.to_string(), "#2");
    }
}
