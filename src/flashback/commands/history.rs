//! `undo` and `redo`: move the history cursor and swap the stored deck.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::DataStore;

pub fn undo<S: DataStore>(session: &mut Session<S>) -> Result<CmdResult> {
    session.undo()?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Undo success!"))
        .with_listed(session.displayed()))
}

pub fn redo<S: DataStore>(session: &mut Session<S>) -> Result<CmdResult> {
    session.redo()?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Redo success!"))
        .with_listed(session.displayed()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::AliasTable;
    use crate::error::FlashbackError;
    use crate::history::HistoryError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_nothing_to_undo_or_redo_on_fresh_session() {
        let mut session = Session::new(
            StoreFixture::new().with_typical_cards().store,
            AliasTable::new(),
        );
        assert!(matches!(
            undo(&mut session),
            Err(FlashbackError::History(HistoryError::NothingToUndo))
        ));
        assert!(matches!(
            redo(&mut session),
            Err(FlashbackError::History(HistoryError::NothingToRedo))
        ));
    }

    #[test]
    fn test_undo_resets_filter() {
        let mut session = Session::new(
            StoreFixture::new().with_typical_cards().store,
            AliasTable::new(),
        );
        session.execute("delete 1").unwrap();
        session.execute("find physics").unwrap();

        let result = undo(&mut session).unwrap();
        assert!(session.filter().is_none());
        assert_eq!(result.listed.len(), 3);
    }
}
