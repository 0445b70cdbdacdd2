use crate::commands::{CmdMessage, CmdResult, CommandWord};
use crate::error::Result;
use crate::session::Session;
use crate::store::DataStore;

/// Binds `alias` to `command` for the rest of the session. Not a deck change.
pub fn run<S: DataStore>(
    session: &mut Session<S>,
    alias: &str,
    command: CommandWord,
) -> Result<CmdResult> {
    if session.aliases().alias_for(command) == Some(alias) {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "Alias '{}' already refers to command '{}'",
            alias, command
        ))));
    }

    let replaced = session.aliases_mut().register(alias, command)?;
    let mut result = CmdResult::default().with_message(CmdMessage::success(format!(
        "Alias '{}' created for command '{}'",
        alias, command
    )));
    if let Some(old) = replaced {
        result.add_message(CmdMessage::warning(format!(
            "Previous alias '{}' for '{}' was removed",
            old, command
        )));
    }
    Ok(result)
}
