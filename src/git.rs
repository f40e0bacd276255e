//! Repository log scanning and commit creation.

use std::process::Command;

use anyhow::{Context, Result, bail};

/// Scopes mined from recent commit subjects, most recent first, deduplicated.
///
/// A missing repository or empty history is not an error here; it just means
/// there are no scope suggestions to offer.
pub(crate) fn recent_scopes(limit: usize) -> Vec<String> {
	let output = Command::new("git")
		.args(["log", "--format=%s", "-n", &limit.to_string()])
		.output();
	match output {
		Ok(output) if output.status.success() => {
			parse_scopes(&String::from_utf8_lossy(&output.stdout))
		}
		_ => Vec::new(),
	}
}

/// Extract `scope` from conventional subjects shaped like `type(scope): ...`.
pub(crate) fn parse_scopes(log: &str) -> Vec<String> {
	let mut scopes: Vec<String> = Vec::new();
	for subject in log.lines() {
		let Some((head, _)) = subject.split_once(':') else {
			continue;
		};
		// `feat(ui)!:` marks a breaking change; the scope is the same.
		let head = head.strip_suffix('!').unwrap_or(head);
		let Some((_, rest)) = head.split_once('(') else {
			continue;
		};
		let Some(scope) = rest.strip_suffix(')') else {
			continue;
		};
		if scope.is_empty() || scope.contains('(') {
			continue;
		}
		if !scopes.iter().any(|known| known == scope) {
			scopes.push(scope.to_string());
		}
	}
	scopes
}

/// Create the commit with the composed message.
pub(crate) fn commit(message: &str) -> Result<()> {
	let status = Command::new("git")
		.args(["commit", "-m", message])
		.status()
		.context("failed to run git commit")?;
	if !status.success() {
		bail!("git commit exited with {status}");
	}
	Ok(())
}
