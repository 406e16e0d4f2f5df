//! Scoring replies and the podium message

use poise::serenity_prelude::Mentionable;

use crate::{
    services::{Podium, ScoreReceipt},
    utils::{format_score, ordinal},
};

pub fn score_ack(display_name: &str, receipt: &ScoreReceipt) -> String {
    format!(
        "✅ Score added to {} (entry {}). Current Avg: {}",
        display_name,
        receipt.entry_id,
        format_score(receipt.average)
    )
}

/// Public podium announcement, one line per placement
pub fn podium_message(podium: &Podium) -> String {
    let mut text = format!("🏆 **Contest Winners: {}**\n\n", podium.title);
    for placement in &podium.placements {
        text.push_str(&format!(
            "{} {} – “{}” by {} – {} pts\n",
            placement.medal,
            ordinal(placement.rank),
            placement.level_name,
            placement.user.mention(),
            format_score(placement.average)
        ));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::EntryId, services::Placement};
    use poise::serenity_prelude::{ChannelId, UserId};

    #[test]
    fn test_podium_message() {
        let podium = Podium {
            title: "Summer Jam".to_string(),
            channel: ChannelId::new(1),
            placements: vec![
                Placement {
                    rank: 1,
                    medal: "🥇",
                    entry_id: EntryId(2),
                    level_name: "B".to_string(),
                    user: UserId::new(20),
                    average: 9.5,
                },
                Placement {
                    rank: 2,
                    medal: "🥈",
                    entry_id: EntryId(1),
                    level_name: "A".to_string(),
                    user: UserId::new(10),
                    average: 7.0,
                },
            ],
        };

        assert_eq!(
            podium_message(&podium),
            "🏆 **Contest Winners: Summer Jam**\n\n\
             🥇 1st – “B” by <@20> – 9.5 pts\n\
             🥈 2nd – “A” by <@10> – 7.0 pts\n"
        );
    }

    #[test]
    fn test_score_ack() {
        let receipt = ScoreReceipt {
            entry_id: EntryId(3),
            average: 8.67,
            score_count: 3,
        };
        assert_eq!(
            score_ack("Maker", &receipt),
            "✅ Score added to Maker (entry #3). Current Avg: 8.67"
        );
    }
}
