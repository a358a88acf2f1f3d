use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};

use crate::app_dirs;
use crate::cli::CliArgs;

pub(super) const ENV_PREFIX: &str = "snipview";

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
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
		config::Environment::with_prefix(ENV_PREFIX)
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".snipview.toml"));
		files.push(current_dir.join("snipview.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".snipview.toml")));
		assert!(files.iter().any(|path| path.ends_with("snipview.toml")));
	}

	#[test]
	fn explicit_config_files_are_merged() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("custom.toml");
		fs::write(&path, "[viewer]\ndebounce_ms = 75\n").unwrap();

		let cli = CliArgs::parse_from([
			"snipview",
			"--no-config",
			"--config",
			path.to_str().unwrap(),
		]);
		let config = build_config(&cli).unwrap();
		assert_eq!(config.get_int("viewer.debounce_ms").unwrap(), 75);
	}

	#[test]
	fn missing_explicit_config_is_an_error() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("absent.toml");
		let cli = CliArgs::parse_from([
			"snipview",
			"--no-config",
			"--config",
			path.to_str().unwrap(),
		]);
		assert!(build_config(&cli).is_err());
	}
}
