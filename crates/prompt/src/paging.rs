//! Pagination over a paged data source.
//!
//! A paged prompt shows at most [`PAGE_SIZE`] entries at a time, with a
//! trailing [`MORE`] sentinel whenever further pages exist. Moving the
//! highlight onto the sentinel advances the page cursor and refetches, so
//! "load more" costs a single keypress.

use crate::error::PromptError;
use crate::select::{Select, Selection};

/// Maximum number of entries a data source page may carry.
pub const PAGE_SIZE: usize = 7;

/// Sentinel entry signalling that more pages are available.
pub const MORE: &str = "...";

/// Side-channel state threaded through [`paged_update`] between events.
#[derive(Debug, Default)]
pub struct PageState {
	page: usize,
	filter: String,
	displayed: Vec<String>,
}

/// Update callback layering pagination on top of `fetch`.
///
/// `fetch` receives the current filter text and a start offset and returns
/// one page of options, with [`MORE`] appended when entries remain beyond it.
/// Changing the filter text restarts from the first page.
pub fn paged_update<F>(
	mut fetch: F,
) -> impl FnMut(&str, usize, &mut PageState) -> (Vec<String>, usize)
where
	F: FnMut(&str, usize) -> Vec<String>,
{
	move |filter, mut index, state| {
		if filter != state.filter {
			state.page = 0;
			state.filter = filter.to_string();
		}
		let selected = state.displayed.get(index).cloned();
		if index != 0 && selected.as_deref() == Some(MORE) {
			state.page += 1;
			index = 0;
		}
		let options = fetch(filter, state.page * PAGE_SIZE);
		let index = selected
			.filter(|label| label != MORE)
			.and_then(|label| options.iter().position(|option| *option == label))
			.unwrap_or(0);
		state.displayed = options.clone();
		(options, index)
	}
}

/// Prompt over a paged data source; `options` is the first page as the
/// caller wants it shown initially. Wrapping is disabled so the sentinel is
/// only reached deliberately.
pub fn select_paged<F>(
	options: Vec<String>,
	header: impl Into<String>,
	fetch: F,
) -> Result<Selection, PromptError>
where
	F: FnMut(&str, usize) -> Vec<String>,
{
	let state = PageState {
		displayed: options.clone(),
		..PageState::default()
	};
	Select::new(options, header)
		.wrap_above(false)
		.wrap_below(false)
		.on_update(state, paged_update(fetch))
		.run()
}

/// Cut one page out of a filtered catalog, appending the sentinel when more
/// entries remain past it.
pub fn page_slice(items: &[String], filter: &str, offset: usize) -> Vec<String> {
	let needle = filter.to_lowercase();
	let matches: Vec<&String> = items
		.iter()
		.filter(|item| item.to_lowercase().contains(&needle))
		.collect();
	let mut page: Vec<String> = matches
		.iter()
		.skip(offset)
		.take(PAGE_SIZE)
		.map(|item| (*item).clone())
		.collect();
	if offset + page.len() < matches.len() {
		page.push(MORE.to_string());
	}
	page
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::key::{Key, ScriptedKeys};

	fn catalog(count: usize) -> Vec<String> {
		(0..count).map(|n| format!("item-{n:02}")).collect()
	}

	#[test]
	fn first_page_carries_the_sentinel_when_more_remain() {
		let items = catalog(10);
		let page = page_slice(&items, "", 0);
		assert_eq!(page.len(), PAGE_SIZE + 1);
		assert_eq!(page.last().map(String::as_str), Some(MORE));
	}

	#[test]
	fn final_page_has_no_sentinel() {
		let items = catalog(10);
		let page = page_slice(&items, "", PAGE_SIZE);
		assert_eq!(page, vec!["item-07".to_string(), "item-08".to_string(), "item-09".to_string()]);
	}

	#[test]
	fn page_slice_filters_before_slicing() {
		let items = catalog(20);
		let page = page_slice(&items, "item-1", 0);
		assert_eq!(page.len(), PAGE_SIZE + 1);
		assert_eq!(page[0], "item-10");
	}

	#[test]
	fn selecting_the_sentinel_advances_the_page() {
		let items = catalog(10);
		let mut update = paged_update(move |filter, offset| page_slice(&items, filter, offset));
		let mut state = PageState {
			displayed: page_slice(&catalog(10), "", 0),
			..PageState::default()
		};

		let (options, index) = update("", PAGE_SIZE, &mut state);
		assert_eq!(options, vec!["item-07".to_string(), "item-08".to_string(), "item-09".to_string()]);
		assert_eq!(index, 0);
	}

	#[test]
	fn surviving_selection_is_preserved_across_refetch() {
		let items = catalog(10);
		let mut update = paged_update(move |filter, offset| page_slice(&items, filter, offset));
		let mut state = PageState {
			displayed: page_slice(&catalog(10), "", 0),
			..PageState::default()
		};

		// Highlight item-03, then refetch with an unchanged filter.
		let (options, index) = update("", 3, &mut state);
		assert_eq!(options[index], "item-03");
	}

	#[test]
	fn changing_the_filter_resets_the_page() {
		let items = catalog(20);
		let mut update = paged_update(move |filter, offset| page_slice(&items, filter, offset));
		let mut state = PageState {
			displayed: page_slice(&catalog(20), "", 0),
			..PageState::default()
		};

		// Walk onto the sentinel to reach page two.
		let (options, _) = update("", PAGE_SIZE, &mut state);
		assert_eq!(options[0], "item-07");
		assert_eq!(state.page, 1);

		// A changed filter restarts from the first matching page.
		let (options, index) = update("item-0", 0, &mut state);
		assert_eq!(state.page, 0);
		assert_eq!(options[0], "item-00");
		assert_eq!(index, 0);
	}

	#[test]
	fn paged_prompt_end_to_end() {
		let items = catalog(9);
		let state = PageState {
			displayed: page_slice(&items, "", 0),
			..PageState::default()
		};
		let first_page = page_slice(&items, "", 0);
		let fetch = {
			let items = items.clone();
			move |filter: &str, offset: usize| page_slice(&items, filter, offset)
		};
		let select = Select::new(first_page, "Pick: ")
			.wrap_above(false)
			.wrap_below(false)
			.on_update(state, paged_update(fetch));

		// Seven downs land on the sentinel and flip to the second page.
		let mut keys = ScriptedKeys::new(
			std::iter::repeat_n(Key::Down, PAGE_SIZE).chain([Key::Return]),
		);
		let picked = select.run_with(&mut keys, Vec::new()).expect("selection");
		assert_eq!(picked.label, "item-07");
	}
}
