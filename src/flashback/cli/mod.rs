//! The `flashback` binary: a line-oriented REPL over a [`Session`].
//!
//! All terminal I/O lives here. The library never prints.

mod print;
mod repl;
mod setup;

use directories::ProjectDirs;
use flashback::config::FlashbackConfig;
use flashback::error::{FlashbackError, Result};
use flashback::session::Session;
use flashback::store::fs::DeckFile;
use flashback::store::memory::InMemoryStore;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::info;

use clap::Parser;
use setup::Cli;

const HOME_ENV: &str = "FLASHBACK_HOME";

pub(crate) struct AppContext {
    pub session: Session<InMemoryStore>,
    pub deck_file: DeckFile,
    pub config: FlashbackConfig,
    pub data_dir: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup::init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    repl::run(&mut ctx, &mut stdin.lock(), interactive)
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "flashback", "flashback")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| FlashbackError::Config("Could not determine data directory".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = FlashbackConfig::load(&data_dir)?;
    config.validate()?;

    let deck_file = DeckFile::new(config.deck_path(&data_dir));
    let deck = deck_file.load()?;
    info!(
        data_dir = %data_dir.display(),
        cards = deck.len(),
        aliases = config.aliases.len(),
        "Session starting"
    );

    let session = Session::new(InMemoryStore::from_deck(deck), config.alias_table());
    Ok(AppContext {
        session,
        deck_file,
        config,
        data_dir,
    })
}
