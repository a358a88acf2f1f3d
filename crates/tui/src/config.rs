/// Textual configuration used when rendering the prompt, panes and status bar.
#[derive(Debug, Clone)]
pub struct UiLabels {
	/// Title rendered above the code pane.
	pub title: String,
	/// Placeholder text displayed in the empty filter input.
	pub filter_label: String,
	/// Title used for the snippet sidebar.
	pub sidebar_title: String,
	/// Message shown when no snippet matches the query.
	pub empty_label: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "Snippets".to_string(),
			filter_label: "Search snippets".to_string(),
			sidebar_title: "Index".to_string(),
			empty_label: "No matching snippets".to_string(),
		}
	}
}

impl UiLabels {
	/// Replace the code pane title, keeping the other labels.
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}
}
