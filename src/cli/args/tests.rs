use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};

use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["snipview"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.data_path().is_none());
	assert!(!parsed.list);
}

#[test]
fn positional_and_flag_paths_are_equivalent() {
	let positional = CliArgs::parse_from(["snipview", "snippets.json"]);
	let flag = CliArgs::parse_from(["snipview", "--file", "snippets.json"]);
	assert_eq!(positional.data_path(), Some(&PathBuf::from("snippets.json")));
	assert_eq!(flag.data_path(), positional.data_path());
}

#[test]
fn both_path_forms_conflict() {
	let result = CliArgs::try_parse_from(["snipview", "a.json", "--file", "b.json"]);
	assert!(result.is_err());
}

#[test]
fn timing_overrides_parse_as_numbers() {
	let cli = CliArgs::parse_from([
		"snipview",
		"--debounce-ms",
		"50",
		"--copy-reset-ms",
		"750",
		"-q",
		"curry",
		"--list",
		"-o",
		"json",
	]);
	assert_eq!(cli.debounce_ms, Some(50));
	assert_eq!(cli.copy_reset_ms, Some(750));
	assert_eq!(cli.initial_query.as_deref(), Some("curry"));
	assert!(cli.list);
	assert_eq!(cli.output, OutputFormat::Json);
}
