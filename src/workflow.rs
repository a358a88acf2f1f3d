use std::path::PathBuf;

use anyhow::{Context, Result};
use snipview_core::{
	Item, MemoryClipboard, SystemClock, ViewerConfig, ViewerController, load_items,
};
use snipview_tui::{StyleConfig, UiLabels, ViewerOutcome};

use crate::settings::ResolvedConfig;

/// Coordinates loading the snippet collection and driving the viewer.
pub(crate) struct ViewerWorkflow {
	data_path: PathBuf,
	viewer: ViewerConfig,
	initial_query: String,
	style: StyleConfig,
	labels: UiLabels,
}

impl ViewerWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		let ResolvedConfig {
			data_path,
			viewer,
			initial_query,
			theme,
			labels,
		} = config;

		let style = theme
			.as_deref()
			.and_then(StyleConfig::named)
			.unwrap_or_default();

		Self {
			data_path,
			viewer,
			initial_query,
			style,
			labels,
		}
	}

	/// Open the interactive viewer and block until the user leaves it.
	pub(crate) fn run(self) -> Result<ViewerOutcome> {
		let items = self.load()?;
		let controller = ViewerController::new(
			self.viewer,
			SystemClock::new(),
			snipview_tui::system_clipboard(),
		);
		let controller = prepare(controller, items, &self.initial_query);
		log::info!(
			"opening viewer on {} ({} visible)",
			self.data_path.display(),
			controller.filtered_len()
		);
		let outcome = snipview_tui::run(controller, self.labels, self.style)?;
		log::debug!("viewer closed, accepted: {}", outcome.accepted);
		Ok(outcome)
	}

	/// Snippets matching the initial query, in collection order.
	pub(crate) fn list(self) -> Result<Vec<Item>> {
		let items = self.load()?;
		let controller = ViewerController::new(
			self.viewer,
			SystemClock::new(),
			MemoryClipboard::new(),
		);
		let mut controller = prepare(controller, items, &self.initial_query);
		let matches: Vec<Item> = controller.filtered_items().into_iter().cloned().collect();
		log::debug!(
			"query {:?} matched {} of {} snippets",
			self.initial_query,
			matches.len(),
			controller.items().len()
		);
		controller.teardown();
		Ok(matches)
	}

	fn load(&self) -> Result<Vec<Item>> {
		load_items(&self.data_path).with_context(|| {
			format!(
				"failed to load snippet collection from {}",
				self.data_path.display()
			)
		})
	}
}

fn prepare(mut controller: ViewerController, items: Vec<Item>, query: &str) -> ViewerController {
	controller.initialize(items);
	if !query.is_empty() {
		controller.set_query(query);
		controller.flush_query();
	}
	controller
}

#[cfg(test)]
mod tests {
	use std::fs;

	use tempfile::TempDir;

	use super::*;

	const COLLECTION: &str = r#"[
		{"id": "1", "title": "parse_args", "description": "Read flags", "code": "fn main() {}", "language": "rust"},
		{"id": "2", "title": "fetch", "description": "HTTP GET helper", "code": "await fetch(url)"},
		{"id": "3", "title": "backup", "description": "Copy files", "code": "rsync -a src dst", "language": "shell"}
	]"#;

	fn workflow(dir: &TempDir, query: &str) -> ViewerWorkflow {
		let path = dir.path().join("snippets.json");
		fs::write(&path, COLLECTION).expect("write collection");
		ViewerWorkflow::from_config(ResolvedConfig {
			data_path: path,
			viewer: ViewerConfig::default(),
			initial_query: query.to_string(),
			theme: Some("paper".into()),
			labels: UiLabels::default(),
		})
	}

	#[test]
	fn list_without_query_returns_everything() {
		let dir = TempDir::new().expect("tempdir");
		let items = workflow(&dir, "").list().expect("list");
		let ids: Vec<_> = items.iter().map(|item| item.id.as_str()).collect();
		assert_eq!(ids, ["1", "2", "3"]);
	}

	#[test]
	fn list_applies_the_initial_query() {
		let dir = TempDir::new().expect("tempdir");
		let items = workflow(&dir, "HTTP").list().expect("list");
		assert_eq!(items.len(), 1);
		assert_eq!(items[0].title, "fetch");
	}

	#[test]
	fn named_theme_carries_its_bat_theme() {
		let dir = TempDir::new().expect("tempdir");
		let workflow = workflow(&dir, "");
		assert_eq!(workflow.style.bat_theme.as_deref(), Some("GitHub"));
	}

	#[test]
	fn missing_collection_reports_the_path() {
		let dir = TempDir::new().expect("tempdir");
		let workflow = ViewerWorkflow::from_config(ResolvedConfig {
			data_path: dir.path().join("absent.json"),
			viewer: ViewerConfig::default(),
			initial_query: String::new(),
			theme: None,
			labels: UiLabels::default(),
		});

		let error = workflow.list().expect_err("file is missing");
		assert!(format!("{error:#}").contains("absent.json"));
	}
}
