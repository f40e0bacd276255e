//! Commit subject validation and message composition.

use std::fmt;

/// Why a commit subject was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SubjectError {
	Empty,
	TrailingPeriod,
	UppercaseStart,
}

impl fmt::Display for SubjectError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SubjectError::Empty => write!(f, "subject is empty"),
			SubjectError::TrailingPeriod => write!(f, "subject ends with a period"),
			SubjectError::UppercaseStart => write!(f, "subject starts with an uppercase letter"),
		}
	}
}

/// Validate a commit subject against the conventional-commit house rules.
///
/// A leading `!` bypasses validation entirely and is stripped from the
/// result; otherwise the subject is trimmed before the checks run.
pub(crate) fn check_subject(raw: &str) -> Result<String, SubjectError> {
	if let Some(rest) = raw.strip_prefix('!') {
		return Ok(rest.to_string());
	}
	let subject = raw.trim();
	if subject.is_empty() {
		return Err(SubjectError::Empty);
	}
	if subject.ends_with('.') {
		return Err(SubjectError::TrailingPeriod);
	}
	if subject.chars().next().is_some_and(char::is_uppercase) {
		return Err(SubjectError::UppercaseStart);
	}
	Ok(subject.to_string())
}

/// Compose the full commit message.
///
/// `scope` arrives already formatted (`(scope)` or empty), matching how the
/// header line is assembled: `type(scope): :code: subject`. Description and
/// footer become blank-line separated trailing paragraphs when present.
pub(crate) fn compose(
	commit_type: &str,
	scope: &str,
	gitmoji: Option<&str>,
	subject: &str,
	description: &str,
	footer: &str,
) -> String {
	let mut message = match gitmoji {
		Some(gitmoji) => format!("{commit_type}{scope}: {gitmoji} {subject}"),
		None => format!("{commit_type}{scope}: {subject}"),
	};
	if !description.is_empty() {
		message.push_str("\n\n");
		message.push_str(description);
	}
	if !footer.is_empty() {
		message.push_str("\n\n");
		message.push_str(footer);
	}
	message
}
