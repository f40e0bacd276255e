//! The interactive selection engine.

use std::io::{self, Write};

use crate::error::PromptError;
use crate::key::{Key, KeySource, TerminalKeys};
use crate::render::Renderer;

/// Shown in place of an empty option list so the highlight always has a
/// target. Never surfaced as an error.
pub const PLACEHOLDER: &str = "---";

/// The confirmed outcome of a selection prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
	/// Free text typed while the prompt was open.
	pub filter: String,
	/// Index of the confirmed label within the caller's original list when
	/// the label is present there, otherwise its position in the last
	/// displayed list.
	pub index: usize,
	/// The confirmed label itself.
	pub label: String,
}

type UpdateFn<'a, S> = dyn FnMut(&str, usize, &mut S) -> (Vec<String>, usize) + 'a;

/// Builder for one selection prompt invocation.
///
/// The engine never inspects option content; callers reshape the displayed
/// list through [`on_update`](Select::on_update), which receives the current
/// filter text, the highlight index, and a mutable side-channel state of the
/// caller's choosing, and returns the replacement list and index.
pub struct Select<'a, S = ()> {
	options: Vec<String>,
	header: String,
	allow_typing: bool,
	wrap_above: bool,
	wrap_below: bool,
	state: S,
	on_update: Option<Box<UpdateFn<'a, S>>>,
}

impl Select<'_, ()> {
	pub fn new(
		options: impl IntoIterator<Item = impl Into<String>>,
		header: impl Into<String>,
	) -> Self {
		Self {
			options: options.into_iter().map(Into::into).collect(),
			header: header.into(),
			allow_typing: true,
			wrap_above: true,
			wrap_below: true,
			state: (),
			on_update: None,
		}
	}
}

impl<'a, S> Select<'a, S> {
	/// Install an update callback together with its side-channel state.
	///
	/// The state is created fresh for this invocation and discarded when the
	/// prompt returns; the engine passes it through untouched between calls.
	pub fn on_update<T>(
		self,
		state: T,
		callback: impl FnMut(&str, usize, &mut T) -> (Vec<String>, usize) + 'a,
	) -> Select<'a, T> {
		Select {
			options: self.options,
			header: self.header,
			allow_typing: self.allow_typing,
			wrap_above: self.wrap_above,
			wrap_below: self.wrap_below,
			state,
			on_update: Some(Box::new(callback)),
		}
	}

	/// Whether character events extend the filter text. When disallowed the
	/// cursor is hidden for the duration of the prompt.
	pub fn allow_typing(mut self, allowed: bool) -> Self {
		self.allow_typing = allowed;
		self
	}

	/// Whether pressing up at the first option wraps to the last.
	pub fn wrap_above(mut self, wrap: bool) -> Self {
		self.wrap_above = wrap;
		self
	}

	/// Whether pressing down at the last option wraps to the first.
	pub fn wrap_below(mut self, wrap: bool) -> Self {
		self.wrap_below = wrap;
		self
	}

	/// Run the prompt against the process's controlling terminal.
	pub fn run(self) -> Result<Selection, PromptError> {
		self.run_with(&mut TerminalKeys, io::stdout())
	}

	pub(crate) fn run_with<K: KeySource, W: Write>(
		mut self,
		keys: &mut K,
		out: W,
	) -> Result<Selection, PromptError> {
		let mut renderer = Renderer::new(out);
		if !self.allow_typing {
			renderer.hide_cursor()?;
		}
		match self.event_loop(keys, &mut renderer) {
			Ok(selection) => Ok(selection),
			Err(err) => {
				// Leave the scrollback clean before the failure propagates;
				// the renderer's drop restores cursor visibility.
				let _ = renderer.erase();
				Err(err)
			}
		}
	}

	fn event_loop<K: KeySource, W: Write>(
		&mut self,
		keys: &mut K,
		renderer: &mut Renderer<W>,
	) -> Result<Selection, PromptError> {
		let original = self.options.clone();
		let mut displayed = normalize(self.options.clone());
		let mut filter = String::new();
		let mut index = 0usize;

		loop {
			renderer.draw(&self.header, &filter, &displayed, index, self.allow_typing)?;

			match keys.read_key()? {
				Key::Char(c) if self.allow_typing => filter.push(c),
				Key::Space if self.allow_typing => filter.push(' '),
				Key::Backspace => {
					filter.pop();
				}
				Key::Up => {
					index = match index.checked_sub(1) {
						Some(previous) => previous,
						None if self.wrap_above => displayed.len() - 1,
						None => 0,
					};
				}
				Key::Down => {
					index += 1;
					if index >= displayed.len() {
						index = if self.wrap_below { 0 } else { displayed.len() - 1 };
					}
				}
				Key::Return => break,
				// Everything else is ignored without touching the callback.
				_ => continue,
			}

			if let Some(callback) = self.on_update.as_mut() {
				let (options, next) = callback(&filter, index, &mut self.state);
				displayed = options;
				index = next;
			}
			displayed = normalize(displayed);
			if index >= displayed.len() {
				index = 0;
			}
		}

		let label = displayed[index].clone();
		renderer.draw_confirmed(&self.header, &label)?;

		let index = original
			.iter()
			.position(|option| *option == label)
			.unwrap_or(index);
		Ok(Selection {
			filter,
			index,
			label,
		})
	}
}

/// An empty list is replaced by a single placeholder so the renderer always
/// has something to highlight.
fn normalize(options: Vec<String>) -> Vec<String> {
	if options.is_empty() {
		vec![PLACEHOLDER.to_string()]
	} else {
		options
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::filter::substring_filter;
	use crate::key::ScriptedKeys;

	fn options(labels: &[&str]) -> Vec<String> {
		labels.iter().map(|label| label.to_string()).collect()
	}

	fn run(select: Select<'_, impl Sized>, keys: impl IntoIterator<Item = Key>) -> Selection {
		let mut keys = ScriptedKeys::new(keys);
		select.run_with(&mut keys, Vec::new()).expect("selection")
	}

	#[test]
	fn down_down_return_selects_the_third_option() {
		let select = Select::new(options(&["alpha", "beta", "gamma"]), "Pick: ");
		let picked = run(select, [Key::Down, Key::Down, Key::Return]);
		assert_eq!(picked.index, 2);
		assert_eq!(picked.label, "gamma");
		assert_eq!(picked.filter, "");
	}

	#[test]
	fn index_stays_in_bounds_without_wrap() {
		let select = Select::new(options(&["a", "b", "c"]), "? ")
			.wrap_above(false)
			.wrap_below(false);
		let keys = [
			Key::Up,
			Key::Up,
			Key::Down,
			Key::Down,
			Key::Down,
			Key::Down,
			Key::Down,
			Key::Return,
		];
		let picked = run(select, keys);
		assert_eq!(picked.index, 2);
	}

	#[test]
	fn up_at_the_top_stays_without_wrap() {
		let select = Select::new(options(&["a", "b", "c"]), "? ").wrap_above(false);
		let picked = run(select, [Key::Up, Key::Return]);
		assert_eq!(picked.index, 0);
	}

	#[test]
	fn up_at_the_top_wraps_to_the_last_option() {
		let select = Select::new(options(&["a", "b", "c"]), "? ");
		let picked = run(select, [Key::Up, Key::Return]);
		assert_eq!(picked.index, 2);
		assert_eq!(picked.label, "c");
	}

	#[test]
	fn down_at_the_bottom_wraps_to_the_first_option() {
		let select = Select::new(options(&["a", "b"]), "? ");
		let picked = run(select, [Key::Down, Key::Down, Key::Return]);
		assert_eq!(picked.index, 0);
	}

	#[test]
	fn typed_characters_accumulate_and_backspace_truncates() {
		let select = Select::new(options(&["a"]), "? ");
		let keys = [
			Key::Char('a'),
			Key::Char('b'),
			Key::Space,
			Key::Char('c'),
			Key::Backspace,
			Key::Return,
		];
		let picked = run(select, keys);
		assert_eq!(picked.filter, "ab ");
	}

	#[test]
	fn backspace_on_empty_filter_is_a_no_op() {
		let select = Select::new(options(&["a"]), "? ");
		let picked = run(select, [Key::Backspace, Key::Return]);
		assert_eq!(picked.filter, "");
	}

	#[test]
	fn typing_is_ignored_when_disallowed() {
		let select = Select::new(options(&["a", "b"]), "? ").allow_typing(false);
		let picked = run(select, [Key::Char('x'), Key::Space, Key::Return]);
		assert_eq!(picked.filter, "");
		assert_eq!(picked.index, 0);
	}

	#[test]
	fn ignored_keys_do_not_invoke_the_callback() {
		let mut calls = 0usize;
		let select = Select::new(options(&["a", "b"]), "? ")
			.allow_typing(false)
			.on_update((), |_, index, _| {
				calls += 1;
				(vec!["a".to_string(), "b".to_string()], index)
			});
		let keys = [Key::Tab, Key::Esc, Key::Left, Key::Right, Key::Unknown, Key::Return];
		let picked = run(select, keys);
		assert_eq!(picked.index, 0);
		assert_eq!(calls, 0);
	}

	#[test]
	fn empty_callback_result_renders_the_placeholder() {
		let select = Select::new(options(&["a", "b"]), "? ")
			.on_update((), |_, _, _| (Vec::new(), 0));
		let picked = run(select, [Key::Char('z'), Key::Return]);
		assert_eq!(picked.label, PLACEHOLDER);
		assert_eq!(picked.index, 0);
		assert_eq!(picked.filter, "z");
	}

	#[test]
	fn out_of_range_callback_index_resets_to_zero() {
		let select = Select::new(options(&["a", "b"]), "? ")
			.on_update((), |_, _, _| (vec!["x".to_string(), "y".to_string()], 10));
		let picked = run(select, [Key::Down, Key::Return]);
		assert_eq!(picked.label, "x");
	}

	#[test]
	fn empty_input_list_is_rendered_as_placeholder() {
		let select = Select::new(Vec::<String>::new(), "? ");
		let picked = run(select, [Key::Return]);
		assert_eq!(picked.label, PLACEHOLDER);
		assert_eq!(picked.index, 0);
	}

	#[test]
	fn confirmed_label_maps_back_to_the_original_list() {
		let original = options(&["apple", "banana", "avocado"]);
		let select = Select::new(original.clone(), "? ")
			.on_update((), substring_filter(original));
		let keys = [Key::Char('a'), Key::Char('v'), Key::Return];
		let picked = run(select, keys);
		assert_eq!(picked.label, "avocado");
		// Index refers to the caller's original ordering, not the filtered view.
		assert_eq!(picked.index, 2);
		assert_eq!(picked.filter, "av");
	}

	#[test]
	fn callback_state_persists_across_events_within_one_run() {
		let select = Select::new(options(&["a"]), "? ").on_update(
			0usize,
			|_, index, seen: &mut usize| {
				*seen += 1;
				(vec![format!("call-{seen}")], index)
			},
		);
		let picked = run(select, [Key::Down, Key::Down, Key::Return]);
		assert_eq!(picked.label, "call-2");
	}

	#[test]
	fn decoder_fault_propagates_after_cleanup() {
		let select = Select::new(options(&["a"]), "? ");
		let mut keys = ScriptedKeys::new([Key::Down]);
		let err = select.run_with(&mut keys, Vec::new()).unwrap_err();
		assert!(matches!(err, PromptError::Closed));
	}
}
