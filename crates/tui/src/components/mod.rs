//! UI building blocks shared across rendering and state modules.

/// Stacked, highlighted snippet document.
pub mod code;
/// Prompt row with placeholder and match count.
pub mod prompt;
/// Scrollbar for viewports.
pub mod scrollbar;
/// Snippet index list.
pub mod sidebar;

pub use code::{CodeDocument, CodePaneContext, render_code_pane};
pub use prompt::{InputContext, render_input};
pub use scrollbar::{ScrollMetrics, point_in_rect, render_scrollbar};
pub use sidebar::{SidebarContext, SidebarRow, render_sidebar};
