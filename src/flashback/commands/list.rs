use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::DataStore;

/// Drops any active `find`/`filter` and shows the whole deck.
pub fn run<S: DataStore>(session: &mut Session<S>) -> Result<CmdResult> {
    session.set_filter(None);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Listed all flashcards"))
        .with_listed(session.displayed()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::AliasTable;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_resets_filter() {
        let mut session = Session::new(
            StoreFixture::new().with_typical_cards().store,
            AliasTable::new(),
        );
        session.execute("find math").unwrap();
        assert_eq!(session.displayed().len(), 1);

        let result = run(&mut session).unwrap();
        assert_eq!(result.listed.len(), 3);
        assert!(session.filter().is_none());
        assert_eq!(session.history().len(), 1);
    }
}
