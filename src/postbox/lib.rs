//! # Postbox Architecture
//!
//! Postbox is a UI-agnostic post-journal library with an interactive CLI
//! client on top. The core never touches a terminal or a file directly;
//! it talks to two small traits instead:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Binary (main.rs + cli/)                                 │
//! │  - Real widgets (dialoguer/console), colors, farewell    │
//! │  - The ONLY place that knows about stdout/stderr         │
//! └──────────────────────────────────────────────────────────┘
//!                            │ Prompt trait
//!                            ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Session (session.rs, actions/, select.rs)               │
//! │  - Menu loop, action handlers, post resolution           │
//! │  - Pure control flow over Rust types                     │
//! └──────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                        │
//! │  - PostStore over a DocumentBackend trait                │
//! │  - FsBackend (production), MemBackend (testing)          │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Both seams exist for the same reason: every session flow can run in a
//! test with a scripted prompt and an in-memory document, keystroke for
//! keystroke, without a terminal or a filesystem.
//!
//! ## Module Overview
//!
//! - [`model`]: the `Post` entity and its two-faced timestamp
//! - [`store`]: persistence (ordered collection over a JSON document)
//! - [`prompt`]: the prompt-provider trait and test script fixture
//! - [`select`]: resolving "which post" across zero/one/many
//! - [`actions`]: create / view / edit / delete handlers
//! - [`session`]: the interactive menu state machine
//! - [`error`]: error types
//! - [`cli`]: terminal prompt provider for the binary

pub mod actions;
pub mod cli;
pub mod error;
pub mod model;
pub mod prompt;
pub mod select;
pub mod session;
pub mod store;
