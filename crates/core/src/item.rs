//! Snippet records displayed by the viewer.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a snippet, unique within a loaded collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for ItemId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl Borrow<str> for ItemId {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl From<&str> for ItemId {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl From<String> for ItemId {
	fn from(value: String) -> Self {
		Self(value)
	}
}

/// A single code snippet with the text used for display and matching.
///
/// Items are created once by the loader and never mutated afterwards; the
/// controller only ever hands out shared references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
	pub id: ItemId,
	pub title: String,
	pub description: String,
	pub code: String,
	/// Optional syntax hint such as `"rust"` or `"js"`. When absent the
	/// language is detected from the code itself.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub language: Option<String>,
}

impl Item {
	pub fn new(
		id: impl Into<ItemId>,
		title: impl Into<String>,
		description: impl Into<String>,
		code: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			title: title.into(),
			description: description.into(),
			code: code.into(),
			language: None,
		}
	}

	#[must_use]
	pub fn with_language(mut self, language: impl Into<String>) -> Self {
		self.language = Some(language.into());
		self
	}
}
