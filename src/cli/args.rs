use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		BoolishValueParser, Styles,
		styling::{AnsiColor, Effects},
	},
};

use crate::app_dirs;

/// Produce the full version banner including the config directory.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("comet {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = CliArgs::command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

#[derive(Parser, Debug)]
#[command(
	name = "comet",
	version,
	long_version = long_version(),
	about = "Interactive conventional-commit assistant",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `comet` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "COMET_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'd',
		long = "dry-run",
		help = "Compose and print the message without creating a commit"
	)]
	pub(crate) dry_run: bool,
	#[arg(
		long = "gitmoji",
		value_name = "BOOL",
		value_parser = BoolishValueParser::new(),
		help = "Prompt for a gitmoji (default: enabled)"
	)]
	pub(crate) gitmoji: Option<bool>,
	#[arg(
		long = "footer",
		value_name = "BOOL",
		value_parser = BoolishValueParser::new(),
		help = "Prompt for footer information (default: disabled)"
	)]
	pub(crate) footer: Option<bool>,
	#[arg(
		long = "scan-limit",
		value_name = "COUNT",
		help = "Number of recent commits to mine for scope suggestions (default: 200)"
	)]
	pub(crate) scan_limit: Option<usize>,
	#[arg(
		long = "print-config",
		help = "Print the effective configuration before prompting"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Output format for the composed message"
	)]
	pub(crate) output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
