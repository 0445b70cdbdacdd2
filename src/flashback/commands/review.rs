use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlashbackError, Result};
use crate::session::Session;
use crate::store::DataStore;

/// Hands the displayed cards to the front end's review flow.
pub fn run<S: DataStore>(session: &mut Session<S>) -> Result<CmdResult> {
    let cards = session.displayed();
    if cards.is_empty() {
        return Err(FlashbackError::EmptyReview);
    }
    Ok(CmdResult::default()
        .with_message(CmdMessage::info(format!(
            "Entered review mode with {} flashcard(s)",
            cards.len()
        )))
        .with_listed(cards)
        .with_review())
}
