//! Layered configuration for the commit assistant.
//!
//! Configuration merges, lowest priority first: the user's config-directory
//! file, repo-local `comet.toml` / `.comet.toml`, any `--config` files, the
//! `COMET__` environment, and finally CLI flags.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow, ensure};
use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::app_dirs;
use crate::catalog;
use crate::cli::CliArgs;

const DEFAULT_SCAN_LIMIT: usize = 200;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	commit: CommitSection,
	scopes: ScopeSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CommitSection {
	/// Replaces the built-in commit type catalog when set.
	types: Option<Vec<String>>,
	gitmoji: Option<bool>,
	footer: Option<bool>,
	dry_run: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ScopeSection {
	/// Scopes offered in addition to the ones mined from the log.
	extra: Vec<String>,
	scan_limit: Option<usize>,
}

pub(crate) struct ResolvedConfig {
	pub(crate) commit_types: Vec<String>,
	pub(crate) use_gitmoji: bool,
	pub(crate) include_footer: bool,
	pub(crate) dry_run: bool,
	pub(crate) extra_scopes: Vec<String>,
	pub(crate) scan_limit: usize,
}

impl ResolvedConfig {
	pub(crate) fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Commit types: {}", self.commit_types.len());
		println!("  Gitmoji prompt: {}", bool_to_word(self.use_gitmoji));
		println!("  Footer prompt: {}", bool_to_word(self.include_footer));
		println!("  Dry run: {}", bool_to_word(self.dry_run));
		if !self.extra_scopes.is_empty() {
			println!("  Extra scopes: {}", self.extra_scopes.join(", "));
		}
		println!("  Scope scan limit: {}", self.scan_limit);
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "enabled" } else { "disabled" }
}

pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("comet")
			.separator("__")
			.try_parsing(true)
			.list_separator(","),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".comet.toml"));
		files.push(current_dir.join("comet.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if cli.dry_run {
			self.commit.dry_run = Some(true);
		}
		if let Some(value) = cli.gitmoji {
			self.commit.gitmoji = Some(value);
		}
		if let Some(value) = cli.footer {
			self.commit.footer = Some(value);
		}
		if let Some(value) = cli.scan_limit {
			self.scopes.scan_limit = Some(value);
		}
	}

	fn resolve(self) -> Result<ResolvedConfig> {
		let commit_types = match self.commit.types {
			Some(types) => {
				ensure!(!types.is_empty(), "commit.types must not be empty");
				ensure!(
					types.iter().all(|entry| entry.contains(':')),
					"every commit type must be shaped `type: description`"
				);
				types
			}
			None => catalog::commit_types(),
		};

		Ok(ResolvedConfig {
			commit_types,
			use_gitmoji: self.commit.gitmoji.unwrap_or(true),
			include_footer: self.commit.footer.unwrap_or(false),
			dry_run: self.commit.dry_run.unwrap_or(false),
			extra_scopes: self.scopes.extra,
			scan_limit: self.scopes.scan_limit.unwrap_or(DEFAULT_SCAN_LIMIT),
		})
	}
}
