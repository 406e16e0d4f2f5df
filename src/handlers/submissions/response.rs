//! Submission notifications

use poise::serenity_prelude::{CreateEmbed, CreateEmbedFooter, Mentionable};

use crate::{constants::REVIEW_COLOUR, models::ContestEntry};

/// Review embed fields as `(name, value, inline)`; placeholder fields are left out
pub fn review_fields(entry: &ContestEntry) -> Vec<(&'static str, String, bool)> {
    let mut fields = vec![
        ("👤 By", entry.user.mention().to_string(), true),
        (
            "🏷️ Level",
            format!("{} (ID: {})", entry.level_name, entry.level_id),
            false,
        ),
    ];
    if let Some(description) = entry.description() {
        fields.push(("📝 Description", description.to_string(), false));
    }
    if let Some(link) = entry.yt_link() {
        fields.push(("📺 Video", link.to_string(), false));
    }
    fields
}

pub fn review_embed(entry: &ContestEntry) -> CreateEmbed {
    CreateEmbed::new()
        .title("🧱 New Contest Entry")
        .colour(REVIEW_COLOUR)
        .fields(review_fields(entry))
        .footer(CreateEmbedFooter::new(format!("Entry {}", entry.id)))
}

/// Private acknowledgment for the submitter
pub fn submission_ack(entry: &ContestEntry) -> String {
    format!("✅ Entry submitted! (entry {})", entry.id)
}
