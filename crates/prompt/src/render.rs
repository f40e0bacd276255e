//! Line-based rendering for the selection prompt.
//!
//! The prompt draws into the normal scrollback rather than an alternate
//! screen, so every redraw must erase exactly the lines the previous draw
//! produced. [`Renderer`] tracks that count and the cursor's parked position
//! so the terminal always looks as if a single render had happened.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveDown, MoveToColumn, MoveUp, Show};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{execute, queue};

/// Prefix for the highlighted option.
const MARKER: &str = " » ";
/// Prefix for every other option, same width as the marker.
const INDENT: &str = "   ";

pub(crate) struct Renderer<W: Write> {
	out: W,
	/// Lines printed by the previous draw, the erase obligation.
	lines: usize,
	/// Whether the cursor was left at the end of the typed text on the
	/// header line instead of below the option list.
	caret_parked: bool,
	cursor_hidden: bool,
}

impl<W: Write> Renderer<W> {
	pub(crate) fn new(out: W) -> Self {
		Self {
			out,
			lines: 0,
			caret_parked: false,
			cursor_hidden: false,
		}
	}

	/// Hide the cursor for the duration of the prompt; visibility is
	/// restored when the renderer drops, on every exit path.
	pub(crate) fn hide_cursor(&mut self) -> io::Result<()> {
		execute!(self.out, Hide)?;
		self.cursor_hidden = true;
		Ok(())
	}

	/// Erase the previously drawn block and leave the cursor at its top left.
	pub(crate) fn erase(&mut self) -> io::Result<()> {
		if self.lines == 0 {
			return Ok(());
		}
		if self.caret_parked {
			queue!(self.out, MoveToColumn(0))?;
		} else {
			queue!(self.out, MoveUp(self.lines as u16))?;
		}
		for _ in 0..self.lines {
			queue!(self.out, Clear(ClearType::CurrentLine), MoveDown(1))?;
		}
		queue!(self.out, MoveUp(self.lines as u16), MoveToColumn(0))?;
		self.out.flush()?;
		self.lines = 0;
		self.caret_parked = false;
		Ok(())
	}

	/// Draw the header with the current filter text and every option, the
	/// highlighted one distinguished by a bold marker. With `park_caret` the
	/// cursor ends up right after the typed text so the user sees where the
	/// next character lands.
	pub(crate) fn draw(
		&mut self,
		header: &str,
		filter: &str,
		options: &[String],
		index: usize,
		park_caret: bool,
	) -> io::Result<()> {
		self.erase()?;
		queue!(self.out, Print(header), Print(filter), Print("\n"))?;
		for (position, option) in options.iter().enumerate() {
			if position == index {
				queue!(
					self.out,
					PrintStyledContent(format!("{MARKER}{option}").yellow().bold()),
					Print("\n")
				)?;
			} else {
				queue!(self.out, Print(INDENT), Print(option), Print("\n"))?;
			}
		}
		self.lines = options.len() + 1;
		if park_caret {
			let column = header.chars().count() + filter.chars().count();
			queue!(
				self.out,
				MoveUp(self.lines as u16),
				MoveToColumn(column as u16)
			)?;
			self.caret_parked = true;
		}
		self.out.flush()
	}

	/// Replace the prompt with the confirmed selection only.
	pub(crate) fn draw_confirmed(&mut self, header: &str, label: &str) -> io::Result<()> {
		self.erase()?;
		queue!(
			self.out,
			Print(header),
			PrintStyledContent(label.to_string().bold()),
			Print("\n")
		)?;
		self.out.flush()
	}
}

impl<W: Write> Drop for Renderer<W> {
	fn drop(&mut self) {
		if self.cursor_hidden {
			let _ = execute!(self.out, Show);
		}
	}
}
