//! Load snippet collections from JSON documents.
//!
//! A collection is a JSON array of objects carrying `id`, `title`,
//! `description` and `code` (plus an optional `language`). Shape validation is
//! left to serde; the loader additionally rejects duplicate ids because the
//! controller keys selection and copy state by id.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::item::{Item, ItemId};

#[derive(Debug, Error)]
pub enum LoadError {
	#[error("failed to read snippet file {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to parse snippets: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("snippet id '{0}' appears more than once")]
	DuplicateId(ItemId),
}

/// Read and parse the snippet collection stored at `path`.
pub fn load_items(path: &Path) -> Result<Vec<Item>, LoadError> {
	let raw = fs::read_to_string(path).map_err(|source| LoadError::Read {
		path: path.to_path_buf(),
		source,
	})?;
	let items = parse_items(&raw)?;
	log::info!("loaded {} snippets from {}", items.len(), path.display());
	Ok(items)
}

/// Parse a snippet collection from an in-memory JSON document.
pub fn parse_items(raw: &str) -> Result<Vec<Item>, LoadError> {
	let items: Vec<Item> = serde_json::from_str(raw)?;
	let mut seen = HashSet::with_capacity(items.len());
	for item in &items {
		if !seen.insert(item.id.as_str()) {
			return Err(LoadError::DuplicateId(item.id.clone()));
		}
	}
	Ok(items)
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn parses_items_in_document_order() {
		let items = parse_items(
			r#"[
				{"id": "curry", "title": "Curry", "description": "d", "code": "c"},
				{"id": "debounce", "title": "Debounce", "description": "d", "code": "c", "language": "js"}
			]"#,
		)
		.unwrap();
		let ids: Vec<_> = items.iter().map(|item| item.id.as_str()).collect();
		insta::assert_snapshot!(ids.join(","), @"curry,debounce");
		assert_eq!(items[1].language.as_deref(), Some("js"));
	}

	#[test]
	fn missing_fields_are_rejected() {
		let err = parse_items(r#"[{"id": "x", "title": "t"}]"#).unwrap_err();
		assert!(matches!(err, LoadError::Parse(_)));
	}

	#[test]
	fn duplicate_ids_are_rejected() {
		let err = parse_items(
			r#"[
				{"id": "a", "title": "", "description": "", "code": ""},
				{"id": "a", "title": "", "description": "", "code": ""}
			]"#,
		)
		.unwrap_err();
		assert_eq!(err.to_string(), "snippet id 'a' appears more than once");
	}

	#[test]
	fn load_items_reports_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("missing.json");
		let err = load_items(&path).unwrap_err();
		assert!(matches!(err, LoadError::Read { .. }));
	}

	#[test]
	fn load_items_reads_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(
			file,
			r#"[{{"id": "heap", "title": "Heap sort", "description": "", "code": "fn heap() {{}}"}}]"#
		)
		.unwrap();
		let items = load_items(file.path()).unwrap();
		assert_eq!(items.len(), 1);
		assert_eq!(items[0].title, "Heap sort");
	}
}
