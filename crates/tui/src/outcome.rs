use serde::Serialize;
use snipview_core::Item;

/// How the interactive viewer was left.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewerOutcome {
	/// `true` when the user accepted with Enter, `false` on Esc or Ctrl+C.
	pub accepted: bool,
	/// The query text at exit.
	pub query: String,
	/// The active snippet at exit, if any.
	pub selection: Option<Item>,
}

impl ViewerOutcome {
	#[must_use]
	pub fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			query: query.into(),
			selection: None,
		}
	}
}
