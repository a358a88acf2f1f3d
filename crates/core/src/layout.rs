//! Responsive layout flags: sidebar visibility and the back-to-top affordance.

/// Thresholds that drive [`LayoutState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
	/// Viewports strictly wider than this show the sidebar.
	pub sidebar_breakpoint: u16,
	/// Scroll offsets strictly beyond this reveal the back-to-top affordance.
	pub back_to_top_threshold: usize,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			sidebar_breakpoint: 100,
			back_to_top_threshold: 30,
		}
	}
}

#[derive(Debug, Clone)]
pub struct LayoutState {
	config: LayoutConfig,
	width: u16,
	sidebar_visible: bool,
	show_back_to_top: bool,
}

impl LayoutState {
	pub fn new(config: LayoutConfig) -> Self {
		Self {
			config,
			width: u16::MAX,
			sidebar_visible: true,
			show_back_to_top: false,
		}
	}

	pub fn sidebar_visible(&self) -> bool {
		self.sidebar_visible
	}

	pub fn show_back_to_top(&self) -> bool {
		self.show_back_to_top
	}

	pub fn is_narrow(&self) -> bool {
		self.width <= self.config.sidebar_breakpoint
	}

	pub fn toggle_sidebar(&mut self) {
		self.sidebar_visible = !self.sidebar_visible;
	}

	/// Wide viewports always show the sidebar and narrow ones hide it.
	pub fn handle_resize(&mut self, width: u16) {
		self.width = width;
		self.sidebar_visible = !self.is_narrow();
	}

	pub fn handle_scroll(&mut self, offset: usize) {
		self.show_back_to_top = offset > self.config.back_to_top_threshold;
	}

	/// Collapse the sidebar after a selection on narrow viewports so the code
	/// pane gets the full width.
	pub fn item_selected(&mut self) {
		if self.is_narrow() {
			self.sidebar_visible = false;
		}
	}
}

impl Default for LayoutState {
	fn default() -> Self {
		Self::new(LayoutConfig::default())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn resize_follows_the_breakpoint() {
		let mut layout = LayoutState::default();
		layout.handle_resize(80);
		assert!(!layout.sidebar_visible());
		layout.handle_resize(101);
		assert!(layout.sidebar_visible());
		layout.handle_resize(100);
		assert!(!layout.sidebar_visible());
	}

	#[test]
	fn selection_collapses_sidebar_only_when_narrow() {
		let mut layout = LayoutState::default();
		layout.handle_resize(140);
		layout.item_selected();
		assert!(layout.sidebar_visible());

		layout.handle_resize(60);
		layout.toggle_sidebar();
		assert!(layout.sidebar_visible());
		layout.item_selected();
		assert!(!layout.sidebar_visible());
	}

	#[test]
	fn back_to_top_appears_past_threshold() {
		let mut layout = LayoutState::new(LayoutConfig {
			back_to_top_threshold: 10,
			..LayoutConfig::default()
		});
		layout.handle_scroll(10);
		assert!(!layout.show_back_to_top());
		layout.handle_scroll(11);
		assert!(layout.show_back_to_top());
		layout.handle_scroll(0);
		assert!(!layout.show_back_to_top());
	}
}
