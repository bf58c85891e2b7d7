//! # Tandem Architecture
//!
//! Tandem is a **UI-agnostic library** for viewing and editing two parallel
//! text files (translation pairs) line by line. It is not a CLI application
//! that happens to have some library code—it's a library that happens to have
//! a CLI client, and the same core could sit behind a GUI table widget or a
//! web front-end.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, print.rs, wired by main.rs)            │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Session facade owning the loaded DocumentPair            │
//! │  - Normalizes inputs, wires storage to commands             │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over a DocumentPair                  │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract TextStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Alignment Invariant
//!
//! A [`model::DocumentPair`] holds exactly two columns that are kept the same
//! length: row `i` on the left is aligned with row `i` on the right. There is
//! no separate alignment map, only positional correspondence. Every editor
//! operation that adds or removes rows acts on **both** columns in lockstep;
//! only cell-text edits are single-sided. `commands/rows.rs` is where that
//! invariant is enforced.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): thorough unit tests of the editing,
//!    search, and statistics logic. This is where the lion's share of testing
//!    lives.
//! 2. **Storage** (`store/`): `FileStore` round-trip and failure tests against
//!    temp directories; everything else tests through `InMemoryStore`.
//! 3. **CLI** (`tests/`): integration tests driving the binary end to end.
//!
//! ## Module Overview
//!
//! - [`api`]: The `Session` facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Line`, `Column`, `DocumentPair`, `Side`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `args`/`print`: Argument parsing and terminal rendering for the binary
//!   (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
