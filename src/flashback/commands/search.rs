//! `find` and `filter`: narrow the displayed list without touching the deck.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::query::{CardFilter, FieldFilter};
use crate::session::Session;
use crate::store::DataStore;

pub fn find<S: DataStore>(session: &mut Session<S>, keywords: Vec<String>) -> Result<CmdResult> {
    apply(session, CardFilter::Keywords(keywords))
}

pub fn filter<S: DataStore>(session: &mut Session<S>, filter: FieldFilter) -> Result<CmdResult> {
    apply(session, CardFilter::Fields(filter))
}

fn apply<S: DataStore>(session: &mut Session<S>, filter: CardFilter) -> Result<CmdResult> {
    session.set_filter(Some(filter));
    let listed = session.displayed();
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "{} flashcard(s) listed!",
            listed.len()
        )))
        .with_listed(listed))
}
