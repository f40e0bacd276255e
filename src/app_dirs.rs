//! Resolve the configuration directory for `comet`.
//!
//! Respects an environment override while falling back to the
//! platform-appropriate location provided by the `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "comet";
const APPLICATION: &str = "comet";

const CONFIG_DIR_ENV: &str = "COMET_CONFIG_DIR";

/// Resolve an override directory from an environment variable.
///
/// An empty value is treated the same as an unset one.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Return the configuration directory used to persist user preferences.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	let dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for comet"))?;
	Ok(dirs.config_local_dir().to_path_buf())
}
