use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::Index;
use crate::session::Session;
use crate::store::DataStore;

pub fn run<S: DataStore>(session: &mut Session<S>, index: Index) -> Result<CmdResult> {
    let target = session.card_at(index)?;
    let removed = session.store_mut().remove_flashcard(&target)?;
    session.commit();
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Deleted flashcard ({}): {}",
            index, removed
        )))
        .with_listed(session.displayed()))
}
