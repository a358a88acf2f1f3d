//! Snippet language detection and title clean-up.

use std::fmt;

use crate::item::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
	JavaScript,
	TypeScript,
	Rust,
	Python,
	Shell,
}

impl Language {
	/// Syntax token understood by the highlighter (a file extension).
	pub fn token(self) -> &'static str {
		match self {
			Language::JavaScript => "js",
			Language::TypeScript => "ts",
			Language::Rust => "rs",
			Language::Python => "py",
			Language::Shell => "sh",
		}
	}

	/// Map a user-supplied hint such as `"rust"`, `"rs"` or `"JavaScript"`.
	pub fn from_hint(hint: &str) -> Option<Self> {
		match hint.trim().to_ascii_lowercase().as_str() {
			"js" | "javascript" | "jsx" | "mjs" => Some(Language::JavaScript),
			"ts" | "typescript" | "tsx" => Some(Language::TypeScript),
			"rs" | "rust" => Some(Language::Rust),
			"py" | "python" => Some(Language::Python),
			"sh" | "bash" | "shell" | "zsh" => Some(Language::Shell),
			_ => None,
		}
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Language::JavaScript => "JavaScript",
			Language::TypeScript => "TypeScript",
			Language::Rust => "Rust",
			Language::Python => "Python",
			Language::Shell => "Shell",
		};
		f.write_str(name)
	}
}

/// Guess the language of `code`. Falls back to JavaScript, the language of
/// most snippet collections this viewer is used with.
pub fn detect(code: &str) -> Language {
	let first_line = code.lines().find(|line| !line.trim().is_empty());
	if first_line.is_some_and(|line| line.starts_with("#!") && line.contains("sh")) {
		return Language::Shell;
	}
	if code.contains("fn ")
		&& (code.contains("let mut ") || code.contains("->") || code.contains("impl "))
	{
		return Language::Rust;
	}
	if code.contains("def ") && code.contains("):") {
		return Language::Python;
	}
	if code.contains("interface ") || code.contains(": string") || code.contains(": number") {
		return Language::TypeScript;
	}
	Language::JavaScript
}

/// Language of an item: its explicit hint when recognised, detection otherwise.
pub fn language_of(item: &Item) -> Language {
	item.language
		.as_deref()
		.and_then(Language::from_hint)
		.unwrap_or_else(|| detect(&item.code))
}

/// Drop punctuation and symbols from a title, keeping letters, digits,
/// underscores and whitespace from any script.
///
/// Word characters are Unicode-aware rather than ASCII-only, so CJK titles
/// survive intact instead of collapsing to an empty string.
pub fn format_title(title: &str) -> String {
	title
		.chars()
		.filter(|ch| ch.is_alphanumeric() || *ch == '_' || ch.is_whitespace())
		.collect::<String>()
		.trim()
		.to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn javascript_is_the_default() {
		assert_eq!(detect("const add = (a, b) => a + b;"), Language::JavaScript);
		assert_eq!(detect(""), Language::JavaScript);
	}

	#[test]
	fn detects_other_languages() {
		assert_eq!(detect("fn main() -> Result<()> {}"), Language::Rust);
		assert_eq!(detect("def fib(n):\n    return n"), Language::Python);
		assert_eq!(detect("#!/bin/bash\necho hi"), Language::Shell);
		assert_eq!(detect("interface Point { x: number }"), Language::TypeScript);
	}

	#[test]
	fn explicit_hint_wins_over_detection() {
		let item = Item::new("x", "x", "", "fn main() -> () {}").with_language("python");
		assert_eq!(language_of(&item), Language::Python);

		let unknown = Item::new("y", "y", "", "const a = 1;").with_language("cobol");
		assert_eq!(language_of(&unknown), Language::JavaScript);
	}

	#[test]
	fn format_title_strips_symbols() {
		assert_eq!(format_title("  Promise.all (polyfill)! "), "Promiseall polyfill");
		assert_eq!(format_title("函数柯里化 - curry"), "函数柯里化  curry");
		assert_eq!(format_title("deep_clone"), "deep_clone");
	}

	#[test]
	fn format_title_keeps_non_ascii_letters() {
		assert_eq!(format_title("Café #1"), "Café 1");
		assert_eq!(format_title("【柯里化】"), "柯里化");
	}
}
