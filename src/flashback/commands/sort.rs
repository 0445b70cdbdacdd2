use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::query::SortOrder;
use crate::session::Session;
use crate::store::DataStore;

/// Reorders the whole deck. The new order is a deck change and is committed.
pub fn run<S: DataStore>(session: &mut Session<S>, order: SortOrder) -> Result<CmdResult> {
    let sorted = session.store().list_flashcards(None, Some(order));
    session.store_mut().set_flashcards(sorted);
    session.commit();
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Sorted flashcards by {}", order)))
        .with_listed(session.displayed()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::AliasTable;
    use crate::fields::Priority;
    use crate::query::{Direction, SortKey};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_sorts_deck_and_is_undoable() {
        let mut session = Session::new(
            StoreFixture::new().with_typical_cards().store,
            AliasTable::new(),
        );
        let before = session.store().snapshot();

        run(
            &mut session,
            SortOrder::new(SortKey::Priority, Direction::Ascending),
        )
        .unwrap();
        let priorities: Vec<_> = session.displayed().iter().map(|c| c.priority).collect();
        assert_eq!(priorities, vec![Priority::Low, Priority::Mid, Priority::High]);

        session.execute("undo").unwrap();
        assert_eq!(session.store().snapshot(), before);
    }
}
