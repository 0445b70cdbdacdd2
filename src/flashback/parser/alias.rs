use super::args::{tokenize, PREFIX_ALIAS, PREFIX_COMMAND};
use crate::alias::AliasError;
use crate::commands::{Command, CommandWord};
use crate::error::{FlashbackError, Result};

/// `alias cmd/COMMAND al/ALIAS`
///
/// Only the shape and the target are checked here. Whether the alias clashes
/// with an existing one is decided when the command runs against the
/// session's alias table.
pub fn parse(tail: &str) -> Result<Command> {
    let usage = CommandWord::Alias.usage();
    let map = tokenize(tail, &[PREFIX_COMMAND, PREFIX_ALIAS]);
    let (Some(target), Some(alias)) = (map.value(PREFIX_COMMAND), map.value(PREFIX_ALIAS)) else {
        return Err(FlashbackError::InvalidFormat(usage));
    };
    if !map.preamble().is_empty() {
        return Err(FlashbackError::InvalidFormat(usage));
    }

    let command: CommandWord = target
        .parse()
        .map_err(|_| AliasError::UnknownTarget(target.to_string()))?;
    if alias.is_empty() || alias.chars().any(char::is_whitespace) {
        return Err(AliasError::InvalidToken.into());
    }

    Ok(Command::Alias {
        alias: alias.to_string(),
        command,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_alias() {
        assert_eq!(
            parse(" cmd/delete al/rm").unwrap(),
            Command::Alias {
                alias: "rm".into(),
                command: CommandWord::Delete
            }
        );
        assert_eq!(
            parse(" al/rm cmd/delete").unwrap(),
            Command::Alias {
                alias: "rm".into(),
                command: CommandWord::Delete
            }
        );
    }

    #[test]
    fn test_missing_parts() {
        for tail in ["", " cmd/add", " al/a", " add a", " x cmd/add al/a"] {
            assert!(
                matches!(parse(tail), Err(FlashbackError::InvalidFormat(_))),
                "tail: {:?}",
                tail
            );
        }
    }

    #[test]
    fn test_target_must_be_command_word() {
        assert!(matches!(
            parse(" cmd/bogus al/b"),
            Err(FlashbackError::Alias(AliasError::UnknownTarget(ref t))) if t == "bogus"
        ));
    }

    #[test]
    fn test_alias_must_be_single_token() {
        assert!(matches!(
            parse(" cmd/add al/a b"),
            Err(FlashbackError::Alias(AliasError::InvalidToken))
        ));
        assert!(matches!(
            parse(" cmd/add al/"),
            Err(FlashbackError::Alias(AliasError::InvalidToken))
        ));
    }
}
