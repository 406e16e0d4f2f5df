//! Spreadsheet mirror of contest submissions
//!
//! Every accepted entry is appended as one row to an external spreadsheet.
//! The sheet is write-only from the bot's point of view: rows are never read back.

pub mod google;
pub mod mirror;

pub use google::GoogleSheetsClient;
pub use mirror::{MirrorWriter, RetryPolicy};

use async_trait::async_trait;

use crate::{error::AppResult, models::ContestEntry};

/// One spreadsheet row: `[submitter, level name, level id, description, link]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub submitter: String,
    pub level_name: String,
    pub level_id: String,
    pub description: String,
    pub link: String,
}

impl SheetRow {
    /// Cell values in column order
    pub fn values(&self) -> [&str; 5] {
        [
            &self.submitter,
            &self.level_name,
            &self.level_id,
            &self.description,
            &self.link,
        ]
    }
}

impl From<&ContestEntry> for SheetRow {
    fn from(entry: &ContestEntry) -> Self {
        Self {
            submitter: entry.submitter_name.clone(),
            level_name: entry.level_name.clone(),
            level_id: entry.level_id.clone(),
            description: entry.description.clone(),
            link: entry.yt_link.clone(),
        }
    }
}

/// Destination for mirrored submission rows
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SheetMirror: Send + Sync {
    async fn append_row(&self, row: &SheetRow) -> AppResult<()>;
}

/// Mirror used when no spreadsheet is configured
pub struct DisabledSheet;

#[async_trait]
impl SheetMirror for DisabledSheet {
    async fn append_row(&self, row: &SheetRow) -> AppResult<()> {
        tracing::debug!(
            level_id = %row.level_id,
            "Spreadsheet mirror disabled, skipping row"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContestEntry, EntryId, NewEntry};
    use poise::serenity_prelude::UserId;

    #[test]
    fn test_row_column_order() {
        let entry = ContestEntry::new(
            EntryId(1),
            NewEntry {
                user: UserId::new(3),
                submitter_name: "maker".to_string(),
                level_id: "98765".to_string(),
                level_name: "Neon Rush".to_string(),
                description: None,
                yt_link: Some("https://youtu.be/xyz".to_string()),
            },
        );

        let row = SheetRow::from(&entry);
        assert_eq!(
            row.values(),
            ["maker", "Neon Rush", "98765", "None", "https://youtu.be/xyz"]
        );
    }

    #[tokio::test]
    async fn test_disabled_sheet_accepts_rows() {
        let row = SheetRow {
            submitter: "a".to_string(),
            level_name: "b".to_string(),
            level_id: "c".to_string(),
            description: "None".to_string(),
            link: "None".to_string(),
        };
        assert!(DisabledSheet.append_row(&row).await.is_ok());
    }
}
