//! Built-in case-insensitive substring filtering.

use crate::error::PromptError;
use crate::select::{Select, Selection};

/// Update callback narrowing `original` to the options whose text contains
/// the filter, case-insensitively.
///
/// The previously highlighted label keeps its place in the narrowed list as
/// long as it still matches; otherwise the highlight resets to the top.
pub fn substring_filter(
	original: Vec<String>,
) -> impl FnMut(&str, usize, &mut ()) -> (Vec<String>, usize) {
	let mut displayed = original.clone();
	move |filter, index, _state| {
		let previous = displayed.get(index).cloned();
		let needle = filter.to_lowercase();
		let matches: Vec<String> = original
			.iter()
			.filter(|option| option.to_lowercase().contains(&needle))
			.cloned()
			.collect();
		let index = previous
			.and_then(|label| matches.iter().position(|option| *option == label))
			.unwrap_or(0);
		displayed = matches.clone();
		(matches, index)
	}
}

/// Prompt over `options` with live substring filtering.
pub fn select_filtered(
	options: Vec<String>,
	header: impl Into<String>,
) -> Result<Selection, PromptError> {
	let filter = substring_filter(options.clone());
	Select::new(options, header).on_update((), filter).run()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn fruits() -> Vec<String> {
		["apple", "banana", "avocado"]
			.iter()
			.map(|fruit| fruit.to_string())
			.collect()
	}

	#[test]
	fn matching_is_case_insensitive_substring() {
		let mut filter = substring_filter(fruits());
		let (matched, index) = filter("A", 0, &mut ());
		assert_eq!(matched, fruits());
		assert_eq!(index, 0);

		let (matched, index) = filter("av", 0, &mut ());
		assert_eq!(matched, vec!["avocado".to_string()]);
		assert_eq!(index, 0);
	}

	#[test]
	fn repeated_identical_filter_is_idempotent() {
		let mut filter = substring_filter(fruits());
		let (first, first_index) = filter("an", 0, &mut ());
		let (second, second_index) = filter("an", first_index, &mut ());
		assert_eq!(first, second);
		assert_eq!(first_index, second_index);
	}

	#[test]
	fn surviving_selection_keeps_its_label() {
		let options: Vec<String> = ["apple", "apricot", "banana"]
			.iter()
			.map(|option| option.to_string())
			.collect();
		let mut filter = substring_filter(options);

		// Highlight apricot with no filter, then narrow to the "ap" pair.
		let (_, index) = filter("", 1, &mut ());
		assert_eq!(index, 1);
		let (matched, index) = filter("ap", index, &mut ());
		assert_eq!(matched, vec!["apple".to_string(), "apricot".to_string()]);
		assert_eq!(matched[index], "apricot");
	}

	#[test]
	fn dropped_selection_resets_to_the_top() {
		let mut filter = substring_filter(fruits());
		let (_, index) = filter("", 1, &mut ());
		assert_eq!(index, 1);
		let (matched, index) = filter("avo", index, &mut ());
		assert_eq!(matched, vec!["avocado".to_string()]);
		assert_eq!(index, 0);
	}

	#[test]
	fn no_match_yields_an_empty_list() {
		let mut filter = substring_filter(fruits());
		let (matched, index) = filter("zzz", 0, &mut ());
		assert!(matched.is_empty());
		assert_eq!(index, 0);
	}
}
