//! # FlashBack Architecture
//!
//! FlashBack is a **command interpreter over a flashcard deck**. Every user
//! action, from adding a card to undoing the last edit, arrives as one line of
//! text and leaves as a structured [`commands::CmdResult`]. The binary is only
//! one client of that loop.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads lines, renders CmdResults, runs the review flow    │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs)                                       │
//! │  - Owns store, alias table, undo/redo history, view filter  │
//! │  - execute(line) = parse + run                              │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                              │
//!                 ▼                              ▼
//! ┌───────────────────────────────┐  ┌──────────────────────────┐
//! │  Parser Layer (parser/)       │  │  Command Layer           │
//! │  - Tokenizer, alias lookup    │  │  (commands/*.rs)         │
//! │  - Prefixed args (q/ a/ ...)  │─▶│  - One `run` per command │
//! │  - Field validation           │  │  - Commits on mutation   │
//! └───────────────────────────────┘  └──────────────────────────┘
//!                                                │
//!                                                ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait, snapshot/restore               │
//! │  - InMemoryStore, DeckFile (JSON persistence)               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## History
//!
//! Undo and redo never re-run a command. Each successful mutating command
//! commits a full [`model::Deck`] snapshot to a [`history::History`], and
//! undo/redo just move a cursor and restore the snapshot found there.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Everything except the binary takes plain Rust values and returns
//! `Result<CmdResult>`. Nothing in the library writes to stdout or stderr,
//! and nothing installs a tracing subscriber; that is the binary's job.
//!
//! ## Testing Strategy
//!
//! 1. **Parsers** (`parser/*.rs`): one test module per command grammar, using
//!    the argument tail exactly as the dispatcher hands it over.
//! 2. **Commands** (`commands/*.rs`): business logic against an
//!    [`store::memory::InMemoryStore`] seeded from the `fixtures` module.
//! 3. **Flows** (`tests/`): whole sessions driven by input lines, plus the
//!    binary driven through stdin.
//!
//! ## Module Overview
//!
//! - [`session`]: The entry point: parse and execute input lines
//! - [`parser`]: Tokenizer, prefixed argument extractor and per-command parsers
//! - [`commands`]: `Command`, `CmdResult` and the logic of each command
//! - [`alias`]: User-defined command aliases
//! - [`history`]: Linear undo/redo history
//! - [`fields`]: Validated card fields (`Question`, `Priority`, `Tag`, ...)
//! - [`index`]: One-based display indexes
//! - [`model`]: `Flashcard`, `Deck` and review `Statistics`
//! - [`query`]: Find/filter predicates and sort orders
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, the REPL and terminal rendering for the binary (not part of the lib API)

pub mod alias;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod history;
pub mod index;
pub mod model;
pub mod parser;
pub mod query;
pub mod session;
pub mod store;
