use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `snipview` binary.
#[derive(Parser, Debug)]
#[command(
	name = "snipview",
	version,
	long_version = long_version(),
	about = "Search, browse and copy code snippets in the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "FILE",
		help = "Snippet collection to open, a JSON array of snippets (default: data.path)"
	)]
	pub(crate) path: Option<PathBuf>,
	#[arg(
		short = 'f',
		long = "file",
		value_name = "FILE",
		conflicts_with = "path",
		help = "Snippet collection to open, same as the positional FILE"
	)]
	pub(crate) file: Option<PathBuf>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "SNIPVIEW_CONFIG",
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
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the code pane title (default: Snippets)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name or alias (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "filter-label",
		value_name = "TEXT",
		help = "Override the placeholder shown in the empty search input"
	)]
	pub(crate) filter_label: Option<String>,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		help = "Quiet period after typing before the filter applies (default: 200)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "copy-reset-ms",
		value_name = "MS",
		help = "How long the copied marker stays visible (default: 2000)"
	)]
	pub(crate) copy_reset_ms: Option<u64>,
	#[arg(
		long = "sidebar-breakpoint",
		value_name = "COLUMNS",
		help = "Hide the index on terminals this narrow or narrower (default: 100)"
	)]
	pub(crate) sidebar_breakpoint: Option<u16>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long = "list",
		help = "Print the snippets matching --query and exit without opening the viewer"
	)]
	pub(crate) list: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}

impl CliArgs {
	/// The snippet collection named on the command line, if any.
	pub(crate) fn data_path(&self) -> Option<&PathBuf> {
		self.file.as_ref().or(self.path.as_ref())
	}
}
