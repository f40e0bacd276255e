//! Raw keyboard input decoding.
//!
//! [`TerminalKeys`] reads 1 to 3 bytes per keypress from stdin while the
//! terminal is held in raw mode, and [`decode`] maps them onto the [`Key`]
//! enum through a fixed table. Arrow keys arrive as the three-byte sequences
//! `ESC [ A` through `ESC [ D`; everything else is a single byte or a UTF-8
//! encoded character.

use std::io::{self, Read};

use crate::error::PromptError;
use crate::terminal::RawModeGuard;

/// One logical input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
	/// A literal printable character.
	Char(char),
	Space,
	Backspace,
	Return,
	Tab,
	Esc,
	Up,
	Down,
	Left,
	Right,
	/// An escape sequence or byte sequence outside the fixed table.
	Unknown,
}

/// Source of decoded key events, the seam between the selection engine and
/// the input device.
pub trait KeySource {
	/// Block until one logical input unit has been consumed.
	fn read_key(&mut self) -> Result<Key, PromptError>;
}

/// Reads keys from the process's controlling terminal.
///
/// Raw mode is scoped to each individual read: it is entered just before the
/// blocking read and unconditionally restored afterwards, so the terminal is
/// never left unbuffered between events or after a failure.
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
	fn read_key(&mut self) -> Result<Key, PromptError> {
		let _raw = RawModeGuard::enter()?;
		let mut buf = [0u8; 3];
		let read = io::stdin().read(&mut buf)?;
		if read == 0 {
			return Err(PromptError::Closed);
		}
		Ok(decode(&buf[..read]))
	}
}

/// Map a raw byte sequence onto a [`Key`].
pub fn decode(bytes: &[u8]) -> Key {
	match bytes {
		[0x1b] => Key::Esc,
		[0x1b, b'[', b'A'] => Key::Up,
		[0x1b, b'[', b'B'] => Key::Down,
		[0x1b, b'[', b'C'] => Key::Right,
		[0x1b, b'[', b'D'] => Key::Left,
		// Unrecognised escape sequences (home, end, function keys) are
		// surfaced as Unknown so the engine can ignore them.
		[0x1b, ..] => Key::Unknown,
		[0x7f] | [0x08] => Key::Backspace,
		[b'\r'] | [b'\n'] => Key::Return,
		[b'\t'] => Key::Tab,
		[b' '] => Key::Space,
		_ => match std::str::from_utf8(bytes) {
			Ok(text) => text.chars().next().map_or(Key::Unknown, Key::Char),
			Err(_) => Key::Unknown,
		},
	}
}

/// Replays a fixed sequence of keys; the test stand-in for [`TerminalKeys`].
#[cfg(test)]
pub(crate) struct ScriptedKeys(std::collections::VecDeque<Key>);

#[cfg(test)]
impl ScriptedKeys {
	pub(crate) fn new(keys: impl IntoIterator<Item = Key>) -> Self {
		Self(keys.into_iter().collect())
	}
}

#[cfg(test)]
impl KeySource for ScriptedKeys {
	fn read_key(&mut self) -> Result<Key, PromptError> {
		self.0.pop_front().ok_or(PromptError::Closed)
	}
}
