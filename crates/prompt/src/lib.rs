//! Inline terminal selection prompts with live filtering and pagination.
//!
//! The central type is the [`Select`] builder: it renders a header and a list
//! of options directly into the scrollback (no alternate screen), lets the
//! user move a highlight with the arrow keys and narrow the list by typing,
//! and resolves to a [`Selection`] when return is pressed. Callers reshape
//! the list reactively through an update callback invoked after every input
//! event, which is how [`select_filtered`] and [`select_paged`] are built.
//!
//! ```no_run
//! use comet_prompt::select_filtered;
//!
//! let options = vec!["apple".to_string(), "banana".to_string()];
//! let picked = select_filtered(options, "Pick a fruit: ")?;
//! println!("{}", picked.label);
//! # Ok::<(), comet_prompt::PromptError>(())
//! ```

mod error;
mod filter;
pub mod key;
mod multiline;
mod paging;
mod render;
mod select;
mod terminal;

pub use error::PromptError;
pub use filter::{select_filtered, substring_filter};
pub use key::{Key, KeySource, TerminalKeys};
pub use multiline::{multiline_input, read_multiline};
pub use paging::{MORE, PAGE_SIZE, PageState, page_slice, paged_update, select_paged};
pub use select::{PLACEHOLDER, Select, Selection};
