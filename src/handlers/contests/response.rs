//! Contest announcement messages

use poise::serenity_prelude::{
    ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter,
};

use crate::{
    constants::{ANNOUNCEMENT_COLOUR, SUBMIT_BUTTON_ID},
    models::ContestDetails,
};

pub const ANNOUNCEMENT_FOOTER: &str = "Click the button below to submit your entry!";

/// Embed fields of an announcement as `(name, value, inline)`
pub fn announcement_fields(details: &ContestDetails) -> Vec<(&'static str, String, bool)> {
    vec![
        ("🧠 Theme", details.theme.clone(), false),
        ("📆 Deadline", details.deadline.clone(), false),
        ("🧑‍⚖️ Judged by", details.judging.clone(), false),
    ]
}

pub fn announcement_embed(details: &ContestDetails) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("🎉 New Contest: {}", details.title))
        .colour(ANNOUNCEMENT_COLOUR)
        .fields(announcement_fields(details))
        .footer(CreateEmbedFooter::new(ANNOUNCEMENT_FOOTER))
}

/// The persistent "Submit Entry" button.
///
/// It carries a fixed custom id and is routed by the global interaction
/// handler, so it never expires.
pub fn submit_button_row() -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new(SUBMIT_BUTTON_ID)
            .label("Submit Entry")
            .style(ButtonStyle::Success),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_announcement_fields() {
        let details = ContestDetails {
            title: "Summer Jam".to_string(),
            theme: "Underwater".to_string(),
            deadline: "June 30".to_string(),
            judging: "Moderators".to_string(),
        };

        let fields = announcement_fields(&details);

        assert_eq!(
            fields,
            vec![
                ("🧠 Theme", "Underwater".to_string(), false),
                ("📆 Deadline", "June 30".to_string(), false),
                ("🧑‍⚖️ Judged by", "Moderators".to_string(), false),
            ]
        );
    }
}
