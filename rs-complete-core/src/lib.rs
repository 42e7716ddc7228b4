//! Character-level n-gram word completion library.
//!
//! This crate provides the core of an interactive completion assistant:
//! - A character n-gram language model trained once from a corpus
//! - Prefix-based candidate lookup and probability ranking
//! - An edit session state machine driven by key events
//! - Configuration, error types and corpus loading helpers
//!
//! Rendering and terminal input are left to the caller; the session only
//! exposes its observable state after each key event.

/// Character n-gram model, vocabulary and ranking.
pub mod model;

/// Interactive edit session (buffer, cursor, suggestion cycle, metrics).
pub mod session;

/// Completion configuration (model order, number of suggestions).
pub mod config;

/// Library error type.
pub mod error;

/// Corpus loading (single file or directory of `.txt` files).
pub mod io;

pub use config::CompletionConfig;
pub use error::{CompletionError, CompletionResult};
pub use model::language_model::LanguageModel;
pub use session::edit_session::{EditSession, SessionState};
pub use session::key_event::KeyEvent;
