use crate::commands::{CmdMessage, CmdResult, StatsReport};
use crate::error::Result;
use crate::index::Index;
use crate::model::Statistics;
use crate::session::Session;
use crate::store::DataStore;

/// Statistics for one displayed card, or summed over every displayed card.
pub fn run<S: DataStore>(session: &mut Session<S>, index: Option<Index>) -> Result<CmdResult> {
    let report = match index {
        Some(index) => {
            let card = session.card_at(index)?;
            StatsReport {
                statistics: card.stats,
                index: Some(index),
                card_count: 1,
            }
        }
        None => {
            let cards = session.displayed();
            StatsReport {
                statistics: cards
                    .iter()
                    .fold(Statistics::default(), |acc, c| acc.merge(c.stats)),
                index: None,
                card_count: cards.len(),
            }
        }
    };

    let subject = match report.index {
        Some(index) => format!("flashcard {}", index),
        None => format!("{} flashcard(s)", report.card_count),
    };
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Statistics of {}: {}",
            subject, report.statistics
        )))
        .with_stats(report))
}
