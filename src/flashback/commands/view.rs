use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::Index;
use crate::session::Session;
use crate::store::DataStore;

pub fn run<S: DataStore>(session: &mut Session<S>, index: Index) -> Result<CmdResult> {
    let card = session.card_at(index)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Viewing flashcard ({}): {}",
            index, card.question
        )))
        .with_view(index))
}
