//! The interactive commit composition flow.
//!
//! Each step hands the prompt engine a list of labelled strings and reads
//! back the confirmed label; all domain knowledge (what a commit type is,
//! how a scope renders) lives here, never in the engine.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use comet_prompt::{
	MORE, PLACEHOLDER, Select, multiline_input, page_slice, select_filtered, select_paged,
	substring_filter,
};

use crate::catalog;
use crate::git;
use crate::message;
use crate::settings::ResolvedConfig;

const CREATE_SCOPE: &str = "Create new scope from current input";
const NO_SCOPE: &str = "None";

/// What the flow produced.
pub(crate) struct CommitOutcome {
	/// The fully composed commit message.
	pub(crate) message: String,
	/// Whether `git commit` ran (false under `--dry-run`).
	pub(crate) committed: bool,
}

/// Coordinates the prompt sequence and the final commit invocation.
pub(crate) struct CommitWorkflow {
	config: ResolvedConfig,
}

impl CommitWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		Ok(Self { config })
	}

	pub(crate) fn run(self) -> Result<CommitOutcome> {
		let commit_type = self.pick_type()?;
		let scope = self.pick_scope()?;
		let subject = self.read_subject()?;
		let gitmoji = if self.config.use_gitmoji {
			Some(self.pick_gitmoji()?)
		} else {
			None
		};

		println!("(optional) Enter a longer description of the changes made in this commit:");
		let description = multiline_input()?;

		let footer = if self.config.include_footer {
			println!("Footer information (referenced issues, breaking changes, etc.):");
			multiline_input()?
		} else {
			String::new()
		};

		let message = message::compose(
			&commit_type,
			&scope,
			gitmoji.as_deref(),
			&subject,
			&description,
			&footer,
		);

		let committed = if self.config.dry_run {
			false
		} else {
			git::commit(&message)?;
			true
		};

		Ok(CommitOutcome { message, committed })
	}

	fn pick_type(&self) -> Result<String> {
		let types = self.config.commit_types.clone();
		let picked = select_filtered(
			types,
			"Select the type of change that you are committing: ",
		)?;
		if picked.label == PLACEHOLDER {
			bail!("no commit type matched the filter '{}'", picked.filter);
		}
		let kind = picked
			.label
			.split(':')
			.next()
			.unwrap_or(&picked.label)
			.trim();
		Ok(kind.to_string())
	}

	fn pick_scope(&self) -> Result<String> {
		let mut scopes = vec![NO_SCOPE.to_string()];
		for scope in git::recent_scopes(self.config.scan_limit) {
			if !scopes.contains(&scope) {
				scopes.push(scope);
			}
		}
		for scope in &self.config.extra_scopes {
			if !scopes.contains(scope) {
				scopes.push(scope.clone());
			}
		}
		scopes.push(CREATE_SCOPE.to_string());

		// Filter like any other list, but keep the "create new" entry
		// reachable no matter what was typed.
		let mut base = substring_filter(scopes.clone());
		let on_update = move |filter: &str, index: usize, state: &mut ()| {
			let (mut options, index) = base(filter, index, state);
			if options.last().map(String::as_str) != Some(CREATE_SCOPE) {
				options.push(CREATE_SCOPE.to_string());
			}
			(options, index)
		};

		let picked = Select::new(
			scopes,
			"Select the scope of the change that you are committing: ",
		)
		.on_update((), on_update)
		.run()?;

		let scope = if picked.label == CREATE_SCOPE {
			picked.filter.trim().to_string()
		} else {
			picked.label
		};
		if scope == NO_SCOPE || scope.is_empty() || scope == PLACEHOLDER {
			Ok(String::new())
		} else {
			Ok(format!("({scope})"))
		}
	}

	fn read_subject(&self) -> Result<String> {
		let stdin = io::stdin();
		loop {
			print!("Select commit message: ");
			io::stdout().flush()?;

			let mut line = String::new();
			let read = stdin
				.lock()
				.read_line(&mut line)
				.context("failed to read the commit message")?;
			if read == 0 {
				bail!("input closed before a commit message was entered");
			}

			match message::check_subject(line.trim_end_matches(['\r', '\n'])) {
				Ok(subject) => return Ok(subject),
				Err(err) => {
					println!("Invalid commit message format ({err}). Try again or prepend '!'.");
				}
			}
		}
	}

	fn pick_gitmoji(&self) -> Result<String> {
		let gitmojis = catalog::gitmojis();
		let first_page = page_slice(&gitmojis, "", 0);
		let fetch = move |filter: &str, offset: usize| page_slice(&gitmojis, filter, offset);

		let picked = select_paged(first_page, "Choose a gitmoji: ", fetch)?;
		if picked.label == PLACEHOLDER || picked.label == MORE {
			bail!("no gitmoji matched the filter '{}'", picked.filter);
		}

		// Entries are `<emoji> - :code: - description`; the message carries
		// the :code: form.
		picked
			.label
			.split('-')
			.nth(1)
			.map(|code| code.trim().to_string())
			.context("malformed gitmoji entry")
	}
}
