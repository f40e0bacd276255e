//! Free-form multi-line text capture.
//!
//! Unlike the selection prompt this reads through the terminal's ordinary
//! line-buffered mode; raw mode is never involved.

use std::io::{self, BufRead};

/// Read lines from stdin until the first empty line, which terminates the
/// capture and is not part of the result. Lines are joined with newlines.
pub fn multiline_input() -> io::Result<String> {
	read_multiline(io::stdin().lock())
}

/// [`multiline_input`] over any line-buffered reader. End-of-input also
/// terminates the capture.
pub fn read_multiline<R: BufRead>(reader: R) -> io::Result<String> {
	let mut lines = Vec::new();
	for line in reader.lines() {
		let line = line?;
		if line.is_empty() {
			break;
		}
		lines.push(line);
	}
	Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	#[test]
	fn capture_stops_at_the_first_empty_line() {
		let input = Cursor::new("a\nb\n\nc\n");
		assert_eq!(read_multiline(input).expect("read"), "a\nb");
	}

	#[test]
	fn immediate_empty_line_yields_an_empty_result() {
		let input = Cursor::new("\nrest\n");
		assert_eq!(read_multiline(input).expect("read"), "");
	}

	#[test]
	fn end_of_input_terminates_the_capture() {
		let input = Cursor::new("only line");
		assert_eq!(read_multiline(input).expect("read"), "only line");
	}
}
