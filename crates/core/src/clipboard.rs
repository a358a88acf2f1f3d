//! Clipboard capability consumed by the controller.
//!
//! The controller sees a single [`Clipboard`]. Whether the write goes through
//! a terminal escape sequence, a native helper program, or both in turn is
//! decided by whoever builds the backend, typically with [`WithFallback`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
	#[error("no clipboard backend is available")]
	Unavailable,
	#[error("clipboard write was rejected: {0}")]
	Rejected(String),
}

pub trait Clipboard {
	fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<C: Clipboard + ?Sized> Clipboard for Box<C> {
	fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
		(**self).copy(text)
	}
}

/// Try `primary` first and fall back to `fallback` when it fails.
///
/// The fallback error is reported when both fail, since it describes the last
/// thing that was attempted.
#[derive(Debug, Clone)]
pub struct WithFallback<P, F> {
	primary: P,
	fallback: F,
}

impl<P, F> WithFallback<P, F> {
	pub fn new(primary: P, fallback: F) -> Self {
		Self { primary, fallback }
	}
}

impl<P: Clipboard, F: Clipboard> Clipboard for WithFallback<P, F> {
	fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
		match self.primary.copy(text) {
			Ok(()) => Ok(()),
			Err(err) => {
				log::debug!("primary clipboard failed ({err}), trying fallback");
				self.fallback.copy(text)
			}
		}
	}
}

/// In-process clipboard that records what was written. Used when no system
/// clipboard should be touched, and as a test double.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
	contents: Option<String>,
	fail_with: Option<ClipboardError>,
}

impl MemoryClipboard {
	pub fn new() -> Self {
		Self::default()
	}

	/// A clipboard whose every write fails with `error`.
	pub fn failing(error: ClipboardError) -> Self {
		Self {
			contents: None,
			fail_with: Some(error),
		}
	}

	pub fn contents(&self) -> Option<&str> {
		self.contents.as_deref()
	}
}

impl Clipboard for MemoryClipboard {
	fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
		if let Some(err) = &self.fail_with {
			return Err(err.clone());
		}
		self.contents = Some(text.to_string());
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fallback_is_used_when_primary_fails() {
		let mut clipboard = WithFallback::new(
			MemoryClipboard::failing(ClipboardError::Unavailable),
			MemoryClipboard::new(),
		);
		clipboard.copy("text").unwrap();
		assert_eq!(clipboard.fallback.contents(), Some("text"));
	}

	#[test]
	fn fallback_is_skipped_when_primary_succeeds() {
		let mut clipboard = WithFallback::new(MemoryClipboard::new(), MemoryClipboard::new());
		clipboard.copy("text").unwrap();
		assert_eq!(clipboard.primary.contents(), Some("text"));
		assert_eq!(clipboard.fallback.contents(), None);
	}

	#[test]
	fn both_failing_reports_the_fallback_error() {
		let mut clipboard = WithFallback::new(
			MemoryClipboard::failing(ClipboardError::Unavailable),
			MemoryClipboard::failing(ClipboardError::Rejected("denied".into())),
		);
		let err = clipboard.copy("text").unwrap_err();
		assert_eq!(err, ClipboardError::Rejected("denied".into()));
	}
}
