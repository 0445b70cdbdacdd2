use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::DataStore;

pub fn run<S: DataStore>(session: &mut Session<S>) -> Result<CmdResult> {
    session.store_mut().set_flashcards(Vec::new());
    session.set_filter(None);
    session.commit();
    Ok(CmdResult::default().with_message(CmdMessage::success("Deck has been cleared!")))
}
