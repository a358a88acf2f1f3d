use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::cli::CliArgs;

/// Location of the snippet collection as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DataSection {
	pub(super) path: Option<PathBuf>,
}

impl DataSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.data_path() {
			self.path = Some(path.clone());
		}
	}

	/// The collection path made absolute against the working directory.
	pub(super) fn resolve(self) -> Result<PathBuf> {
		let Some(path) = self.path else {
			bail!("no snippet collection given; pass a FILE or set `data.path` in the configuration");
		};
		if path.is_absolute() {
			return Ok(path);
		}
		let cwd = env::current_dir().context("failed to determine working directory")?;
		Ok(cwd.join(path))
	}
}
