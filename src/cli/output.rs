use anyhow::Result;
use serde_json::json;
use snipview_core::{Item, format_title, language_of};
use snipview_tui::ViewerOutcome;

/// Print a plain-text representation of the viewer outcome. An accepted
/// selection prints its code so it can be piped onwards.
pub(crate) fn print_plain(outcome: &ViewerOutcome) {
	if !outcome.accepted {
		println!("Viewer closed (query: '{}')", outcome.query);
		return;
	}

	match &outcome.selection {
		Some(item) => println!("{}", item.code),
		None => println!("No selection"),
	}
}

/// Format the viewer outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &ViewerOutcome) -> Result<String> {
	let selection = match &outcome.selection {
		Some(item) => item_json(item),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the viewer outcome.
pub(crate) fn print_json(outcome: &ViewerOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

/// One `id<TAB>title` line per item.
pub(crate) fn format_items_plain(items: &[Item]) -> String {
	items
		.iter()
		.map(|item| format!("{}\t{}\n", item.id, format_title(&item.title)))
		.collect()
}

pub(crate) fn print_items_plain(items: &[Item]) {
	print!("{}", format_items_plain(items));
}

pub(crate) fn format_items_json(items: &[Item]) -> Result<String> {
	let payload: Vec<_> = items.iter().map(item_json).collect();
	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_items_json(items: &[Item]) -> Result<()> {
	println!("{}", format_items_json(items)?);
	Ok(())
}

fn item_json(item: &Item) -> serde_json::Value {
	json!({
		"id": item.id,
		"title": item.title,
		"description": item.description,
		"language": language_of(item).token(),
		"code": item.code,
	})
}

#[cfg(test)]
mod tests {
	use serde_json::Value;

	use super::*;

	fn sample() -> Item {
		Item::new("curry", "curry()", "Curries a function.", "const curry = fn => fn;")
	}

	#[test]
	fn json_format_includes_the_selected_snippet() {
		let outcome = ViewerOutcome {
			accepted: true,
			query: "cur".into(),
			selection: Some(sample()),
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["selection"]["id"], "curry");
		assert_eq!(value["selection"]["language"], "js");
		assert_eq!(value["query"], "cur");
	}

	#[test]
	fn cancelled_outcomes_have_null_selection() {
		let json = format_outcome_json(&ViewerOutcome::cancelled("x")).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], false);
		assert!(value["selection"].is_null());
	}

	#[test]
	fn plain_listing_uses_formatted_titles() {
		let items = vec![sample(), Item::new("fib", "fib!", "", "def fib(n):\n    pass")];
		assert_eq!(format_items_plain(&items), "curry\tcurry\nfib\tfib\n");
	}

	#[test]
	fn json_listing_is_an_array() {
		let json = format_items_json(&[sample()]).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value.as_array().map(Vec::len), Some(1));
	}
}
