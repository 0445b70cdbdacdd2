use crate::alias::AliasTable;
use crate::commands::CommandWord;
use crate::error::{FlashbackError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DECK_FILE: &str = "deck.json";

/// Configuration for flashback, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlashbackConfig {
    /// Deck file name, relative to the data directory unless absolute
    #[serde(default = "default_deck_file")]
    pub deck_file: String,

    /// Alias -> command word, loaded into the session at startup
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

fn default_deck_file() -> String {
    DEFAULT_DECK_FILE.to_string()
}

impl Default for FlashbackConfig {
    fn default() -> Self {
        Self {
            deck_file: default_deck_file(),
            aliases: BTreeMap::new(),
        }
    }
}

impl FlashbackConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FlashbackError::Io)?;
        let config: FlashbackConfig =
            serde_json::from_str(&content).map_err(FlashbackError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FlashbackError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content =
            serde_json::to_string_pretty(self).map_err(FlashbackError::Serialization)?;
        fs::write(config_path, content).map_err(FlashbackError::Io)?;
        Ok(())
    }

    pub fn deck_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        data_dir.as_ref().join(&self.deck_file)
    }

    /// Builds the boot alias table. Entries that name no command, or that the
    /// table refuses, are skipped with a warning.
    pub fn alias_table(&self) -> AliasTable {
        let mut table = AliasTable::new();
        for (alias, target) in &self.aliases {
            let command = match target.parse::<CommandWord>() {
                Ok(command) => command,
                Err(_) => {
                    warn!(alias = %alias, target = %target, "Ignoring alias for unknown command");
                    continue;
                }
            };
            if let Err(e) = table.register(alias, command) {
                warn!(alias = %alias, target = %target, "Ignoring alias: {}", e);
            }
        }
        table
    }

    /// Replaces the stored aliases with the contents of `table`.
    pub fn set_aliases(&mut self, table: &AliasTable) {
        self.aliases = table
            .iter()
            .map(|(alias, command)| (alias.to_string(), command.as_str().to_string()))
            .collect();
    }

    /// Validates a config assembled by hand.
    pub fn validate(&self) -> Result<()> {
        if self.deck_file.trim().is_empty() {
            return Err(FlashbackError::Config("deck_file cannot be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FlashbackConfig::default();
        assert_eq!(config.deck_file, "deck.json");
        assert!(config.aliases.is_empty());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = FlashbackConfig::load(temp_dir.path().join("nowhere")).unwrap();
        assert_eq!(config, FlashbackConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("data");

        let mut config = FlashbackConfig::default();
        config.deck_file = "cards.json".to_string();
        config.aliases.insert("a".to_string(), "add".to_string());
        config.save(&dir).unwrap();

        let loaded = FlashbackConfig::load(&dir).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.deck_path(&dir), dir.join("cards.json"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"aliases": {"rm": "delete"}}"#,
        )
        .unwrap();

        let config = FlashbackConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.deck_file, "deck.json");
        assert_eq!(config.aliases.get("rm").map(String::as_str), Some("delete"));
    }

    #[test]
    fn test_corrupt_file_is_serialization_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();
        assert!(matches!(
            FlashbackConfig::load(temp_dir.path()),
            Err(FlashbackError::Serialization(_))
        ));
    }

    #[test]
    fn test_alias_table_skips_invalid_entries() {
        let mut config = FlashbackConfig::default();
        config.aliases.insert("a".into(), "add".into());
        config.aliases.insert("x".into(), "bogus".into());
        config.aliases.insert("list".into(), "clear".into());
        config.aliases.insert("two words".into(), "view".into());

        let table = config.alias_table();
        assert_eq!(table.len(), 1);
        assert_eq!(table.resolve("a"), "add");
        assert_eq!(table.resolve("list"), "list");
    }

    #[test]
    fn test_set_aliases_round_trips_table() {
        let mut table = AliasTable::new();
        table.register("rm", CommandWord::Delete).unwrap();
        table.register("ls", CommandWord::List).unwrap();

        let mut config = FlashbackConfig::default();
        config.set_aliases(&table);
        assert_eq!(config.alias_table(), table);
    }

    #[test]
    fn test_validate() {
        assert!(FlashbackConfig::default().validate().is_ok());
        let config = FlashbackConfig {
            deck_file: "  ".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(FlashbackError::Config(_))));
    }
}
