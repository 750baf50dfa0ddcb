//! # Notz Architecture
//!
//! Notz is a **UI-agnostic note/todo library**. The CLI in `main.rs` is one
//! possible client; everything from `api.rs` inward takes normal Rust
//! values, returns normal Rust types, and never assumes a terminal.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, prompts, formats output                │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Resolves the active space, dispatches                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: item and space operations           │
//! │  - One store transaction per operation                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Embedded single-file transactional database (redb)       │
//! │  - Collections, ordered iteration, sequence counters        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Data Model
//!
//! Notes live in named **spaces**; exactly one space is selected at a time
//! and note commands target it. Checked-off notes move to a shared
//! **history** collection. A single global **todo** list exists alongside
//! the spaces with its own history. See `store/mod.rs` for the on-disk
//! layout and `model.rs` for the collection roles.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): thorough unit tests against an
//!    in-memory store. This is where the lion's share of testing lives.
//! 2. **API** (`api.rs`): dispatch-focused tests.
//! 3. **CLI**: end-to-end tests in `tests/` run the real binary against a
//!    temporary data directory.
//!
//! Development flows inside-out: implement and test command logic, expose
//! it through the facade, then wire up parsing and printing.

pub mod api;
pub mod commands;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
