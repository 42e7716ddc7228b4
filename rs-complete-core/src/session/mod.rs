//! Interactive completion session.
//!
//! - Key events understood by the session (`KeyEvent`)
//! - Usage counters and their per-word averages (`Metrics`)
//! - The buffer/cursor/suggestion state machine (`EditSession`)

/// Edit session state machine and its observable state.
pub mod edit_session;

/// Key events forwarded by the input collaborator.
pub mod key_event;

/// Typing and tab counters.
pub mod metrics;
