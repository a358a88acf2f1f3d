//! Case-insensitive substring filtering over snippet fields.

use crate::item::Item;

/// Lower-cased copies of the searchable fields of every item, built once per
/// collection so repeated queries do not re-fold the code text.
#[derive(Debug, Default)]
pub(crate) struct SearchIndex {
	haystacks: Vec<[String; 4]>,
}

impl SearchIndex {
	pub(crate) fn build(items: &[Item]) -> Self {
		let haystacks = items
			.iter()
			.map(|item| {
				[
					item.title.to_lowercase(),
					item.description.to_lowercase(),
					item.id.as_str().to_lowercase(),
					item.code.to_lowercase(),
				]
			})
			.collect();
		Self { haystacks }
	}

	/// Indices of items matching `query`, in collection order.
	///
	/// A blank query matches every item. Otherwise the query is lower-cased
	/// but not trimmed, so surrounding spaces are part of the substring.
	pub(crate) fn filter(&self, query: &str) -> Vec<usize> {
		if query.trim().is_empty() {
			return (0..self.haystacks.len()).collect();
		}
		let needle = normalize_query(query);
		self.haystacks
			.iter()
			.enumerate()
			.filter(|(_, fields)| fields.iter().any(|field| field.contains(&needle)))
			.map(|(index, _)| index)
			.collect()
	}
}

pub(crate) fn normalize_query(query: &str) -> String {
	query.to_lowercase()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn items() -> Vec<Item> {
		vec![
			Item::new("1", "Foo", "", ""),
			Item::new("2", "bar", "", ""),
			Item::new("3", "Foobar", "", ""),
		]
	}

	#[test]
	fn filter_is_case_insensitive_and_stable() {
		let index = SearchIndex::build(&items());
		assert_eq!(index.filter("foo"), vec![0, 2]);
		assert_eq!(index.filter("FOO"), vec![0, 2]);
		assert_eq!(index.filter("fOo"), vec![0, 2]);
	}

	#[test]
	fn blank_query_matches_everything() {
		let index = SearchIndex::build(&items());
		assert_eq!(index.filter(""), vec![0, 1, 2]);
		assert_eq!(index.filter("   "), vec![0, 1, 2]);
	}

	#[test]
	fn every_searchable_field_participates() {
		let index = SearchIndex::build(&[Item::new(
			"quick-sort",
			"Sorting",
			"Divide and conquer",
			"fn partition()",
		)]);
		assert_eq!(index.filter("QUICK"), vec![0]);
		assert_eq!(index.filter("conquer"), vec![0]);
		assert_eq!(index.filter("partition"), vec![0]);
		assert_eq!(index.filter("sort"), vec![0]);
		assert!(index.filter("heap").is_empty());
	}

	#[test]
	fn surrounding_spaces_are_part_of_the_needle() {
		let index = SearchIndex::build(&[
			Item::new("1", "Foobar", "", ""),
			Item::new("2", "Foo bar", "", ""),
		]);
		assert_eq!(index.filter(" bar"), vec![1]);
		assert_eq!(index.filter("foo "), vec![1]);
		assert_eq!(index.filter("bar"), vec![0, 1]);
	}

	#[test]
	fn non_ascii_text_matches() {
		let index = SearchIndex::build(&[Item::new("curry", "函数柯里化", "实现函数柯里化功能", "")]);
		assert_eq!(index.filter("柯里化"), vec![0]);
	}
}
