use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Flashcard;
use crate::session::Session;
use crate::store::DataStore;

pub fn run<S: DataStore>(session: &mut Session<S>, card: Flashcard) -> Result<CmdResult> {
    let message = format!("New flashcard added: {}", card);
    session.store_mut().add_flashcard(card)?;
    session.commit();
    Ok(CmdResult::default().with_message(CmdMessage::success(message)))
}
