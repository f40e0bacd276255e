use anyhow::Result;
use serde_json::json;

use crate::workflow::CommitOutcome;

/// Print a plain-text representation of the commit outcome.
pub(crate) fn print_plain(outcome: &CommitOutcome) {
	println!("{}", outcome.message);
	if !outcome.committed {
		println!("(no commit created)");
	}
}

/// Format the commit outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &CommitOutcome) -> Result<String> {
	let payload = json!({
		"message": outcome.message,
		"committed": outcome.committed,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the commit outcome.
pub(crate) fn print_json(outcome: &CommitOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
