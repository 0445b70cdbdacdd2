use crate::commands::{Command, CommandWord};
use crate::error::{FlashbackError, Result};
use crate::query::{Direction, SortKey, SortOrder};

/// `sort CRITERION -a|-d`
pub fn parse(tail: &str) -> Result<Command> {
    let usage = CommandWord::Sort.usage();
    let parts: Vec<&str> = tail.split_whitespace().collect();
    let [key, direction] = parts.as_slice() else {
        return Err(FlashbackError::InvalidFormat(usage));
    };

    let key: SortKey = key
        .parse()
        .map_err(|_| FlashbackError::InvalidFormat(usage))?;
    let direction: Direction = direction
        .parse()
        .map_err(|_| FlashbackError::InvalidFormat(usage))?;
    Ok(Command::Sort(SortOrder::new(key, direction)))
}
