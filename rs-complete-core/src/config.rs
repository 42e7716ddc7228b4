use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CompletionError, CompletionResult};

/// Smallest n-gram order the model accepts.
pub const MIN_ORDER: usize = 2;

/// Parameters shared by the model and the edit session.
///
/// # Invariants
/// - `order >= 2` once validated
/// - `top_k` may be 0, in which case no suggestion is ever offered
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CompletionConfig {
	/// Order of the character n-gram model.
	pub order: usize,

	/// Maximum number of suggestions kept by the session.
	pub top_k: usize,
}

impl Default for CompletionConfig {
	fn default() -> Self {
		Self { order: 2, top_k: 10 }
	}
}

impl CompletionConfig {
	/// Loads a configuration from a JSON file.
	///
	/// Missing fields fall back to their defaults. The result is validated.
	pub fn from_json_file<P: AsRef<Path>>(path: P) -> CompletionResult<Self> {
		let contents = fs::read_to_string(path)?;
		let config: Self = serde_json::from_str(&contents)?;
		config.validate()?;
		Ok(config)
	}

	/// Checks that the configuration can build a model.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `order < 2`.
	pub fn validate(&self) -> CompletionResult<()> {
		check_order(self.order)
	}

	/// Sets the model order.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `order < 2`; the previous value is kept.
	pub fn set_order(&mut self, order: usize) -> CompletionResult<()> {
		check_order(order)?;
		self.order = order;
		Ok(())
	}
}

pub(crate) fn check_order(order: usize) -> CompletionResult<()> {
	if order < MIN_ORDER {
		return Err(CompletionError::InvalidConfiguration(format!(
			"order must be >= {MIN_ORDER}, got {order}"
		)));
	}
	Ok(())
}
