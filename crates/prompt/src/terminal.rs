//! Scoped acquisition of shared terminal state.

use std::io;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Puts the terminal into raw mode and restores the previous mode on drop.
///
/// The guard covers error paths too: a failed read inside the guarded scope
/// still leaves the terminal in its original mode.
pub(crate) struct RawModeGuard;

impl RawModeGuard {
	pub(crate) fn enter() -> io::Result<Self> {
		enable_raw_mode()?;
		Ok(Self)
	}
}

impl Drop for RawModeGuard {
	fn drop(&mut self) {
		let _ = disable_raw_mode();
	}
}
