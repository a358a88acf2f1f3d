use std::time::Duration;

use crate::layout::LayoutConfig;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);
pub const DEFAULT_COPY_RESET: Duration = Duration::from_millis(2000);

/// Timing and layout knobs for a [`ViewerController`](super::ViewerController).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerConfig {
	/// Quiet period after the last query edit before the filter is applied.
	pub debounce: Duration,
	/// How long an item stays flagged as copied.
	pub copy_reset: Duration,
	pub layout: LayoutConfig,
}

impl Default for ViewerConfig {
	fn default() -> Self {
		Self {
			debounce: DEFAULT_DEBOUNCE,
			copy_reset: DEFAULT_COPY_RESET,
			layout: LayoutConfig::default(),
		}
	}
}
