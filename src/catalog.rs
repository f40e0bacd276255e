//! Built-in commit type and gitmoji catalogs.
//!
//! Both catalogs are plain labelled strings: the prompt engine never looks
//! inside them, and the workflow recovers the interesting field by splitting
//! the confirmed label.

/// The conventional commit types, descriptions aligned for the picker.
pub(crate) fn commit_types() -> Vec<String> {
	[
		"feat:     A new feature",
		"fix:      A bug fix",
		"docs:     Documentation only changes",
		"style:    Changes that do not affect the meaning of the code (white-space, formatting, missing semi-colons, etc)",
		"refactor: A code change that neither fixes a bug nor adds a feature",
		"perf:     A code change that improves performance",
		"test:     Adding missing tests or correcting existing tests",
		"build:    Changes that affect the build system or external dependencies (example scopes: gulp, broccoli, npm)",
		"ci:       Changes to our CI configuration files and scripts (example scopes: Travis, Circle, BrowserStack, SauceLabs)",
		"chore:    Changes to the build process or auxiliary tools and libraries such as documentation generation",
		"revert:   Revert to a commit",
	]
	.iter()
	.map(|entry| entry.to_string())
	.collect()
}

/// Gitmoji entries shaped `<emoji> - :code: - description`; the picker pages
/// through these seven at a time.
pub(crate) fn gitmojis() -> Vec<String> {
	[
		"🎨 - :art: - Improve structure / format of the code.",
		"⚡️ - :zap: - Improve performance.",
		"🔥 - :fire: - Remove code or files.",
		"🐛 - :bug: - Fix a bug.",
		"🚑️ - :ambulance: - Critical hotfix.",
		"✨ - :sparkles: - Introduce new features.",
		"📝 - :memo: - Add or update documentation.",
		"🚀 - :rocket: - Deploy stuff.",
		"💄 - :lipstick: - Add or update the UI and style files.",
		"🎉 - :tada: - Begin a project.",
		"✅ - :white_check_mark: - Add, update, or pass tests.",
		"🧪 - :test_tube: - Add a failing test",
		"🔒️ - :lock: - Fix security or privacy issues.",
		"🔖 - :bookmark: - Release / Version tags.",
		"🚨 - :rotating_light: - Fix compiler / linter warnings.",
		"🚧 - :construction: - Work in progress.",
		"💚 - :green_heart: - Fix CI Build.",
		"⬇️ - :arrow_down: - Downgrade dependencies.",
		"⬆️ - :arrow_up: - Upgrade dependencies.",
		"📌 - :pushpin: - Pin dependencies to specific versions.",
		"👷 - :construction_worker: - Add or update CI build system.",
		"📈 - :chart_with_upwards_trend: - Add or update analytics or track code.",
		"♻️ - :recycle: - Refactor code.",
		"➕ - :heavy_plus_sign: - Add a dependency.",
		"➖ - :heavy_minus_sign: - Remove a dependency.",
		"🔧 - :wrench: - Add or update configuration files.",
		"🔨 - :hammer: - Add or update development scripts.",
		"🌐 - :globe_with_meridians: - Internationalization and localization.",
		"✏️ - :pencil2: - Fix typos.",
		"⏪️ - :rewind: - Revert changes.",
	]
	.iter()
	.map(|entry| entry.to_string())
	.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_commit_type_carries_a_description() {
		for entry in commit_types() {
			let (kind, description) = entry.split_once(':').expect("type separator");
			assert!(!kind.is_empty());
			assert!(!description.trim().is_empty());
		}
	}

	#[test]
	fn every_gitmoji_carries_a_code_field() {
		for entry in gitmojis() {
			let code = entry.split('-').nth(1).map(str::trim).expect("code field");
			assert!(code.starts_with(':') && code.ends_with(':'), "bad entry: {entry}");
		}
	}
}
