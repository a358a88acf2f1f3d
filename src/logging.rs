//! `env_logger` setup for the binary.
//!
//! The interactive viewer owns the terminal, so its log records go to a file
//! under the data directory. Headless runs log to stderr. Filtering follows
//! `SNIPVIEW_LOG` and defaults to `warn`.

use std::fs::{self, OpenOptions};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target, WriteStyle};

use crate::app_dirs;

const FILTER_ENV: &str = "SNIPVIEW_LOG";
const STYLE_ENV: &str = "SNIPVIEW_LOG_STYLE";
const LOG_FILE: &str = "snipview.log";

/// Where log records are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
	Stderr,
	File,
}

pub fn initialize(sink: Sink) -> Result<()> {
	let env = Env::new()
		.filter_or(FILTER_ENV, "warn")
		.write_style(STYLE_ENV);
	let mut builder = Builder::from_env(env);

	match sink {
		Sink::Stderr => {
			builder.target(Target::Stderr);
		}
		Sink::File => {
			let dir = app_dirs::get_data_dir()?;
			fs::create_dir_all(&dir)
				.with_context(|| format!("failed to create data directory {}", dir.display()))?;
			let path = dir.join(LOG_FILE);
			let file = OpenOptions::new()
				.create(true)
				.append(true)
				.open(&path)
				.with_context(|| format!("failed to open log file {}", path.display()))?;
			builder
				.target(Target::Pipe(Box::new(file)))
				.write_style(WriteStyle::Never);
		}
	}

	builder.try_init().context("failed to install the logger")
}
