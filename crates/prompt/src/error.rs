use std::io;

use thiserror::Error;

/// Errors surfaced by a prompt invocation.
///
/// Every variant is fatal to the current prompt; the terminal mode and cursor
/// visibility are restored before it propagates.
#[derive(Debug, Error)]
pub enum PromptError {
	/// A terminal read or write failed, or raw mode could not be entered.
	#[error("terminal input failed: {0}")]
	Io(#[from] io::Error),

	/// The input device reached end-of-file before a selection was confirmed.
	#[error("input closed before a selection was confirmed")]
	Closed,
}
