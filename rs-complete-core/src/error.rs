use thiserror::Error;

/// Errors raised while configuring, training or loading data for a model.
///
/// Queries and session operations never fail; only construction paths
/// return this type.
#[derive(Error, Debug)]
pub enum CompletionError {
	#[error("Invalid configuration: {0}")]
	InvalidConfiguration(String),

	#[error("Order mismatch: expected {expected}, found {found}")]
	OrderMismatch { expected: usize, found: usize },

	#[error("Merge error: {0}")]
	Merge(String),

	#[error("Corpus error: {0}")]
	Corpus(String),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("JSON parsing error: {0}")]
	Json(#[from] serde_json::Error),
}

pub type CompletionResult<T> = Result<T, CompletionError>;
