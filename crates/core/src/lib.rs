//! Framework-free core of the `snipview` code snippet viewer.
//!
//! The crate holds the snippet model and loader, the [`ViewerController`]
//! state machine that filters, selects and tracks copy feedback, and the
//! small collaborator traits ([`Clock`], [`Clipboard`]) it is driven through.
//! Front-ends render the controller's derived state and never mutate items.

pub mod clipboard;
pub mod clock;
pub mod controller;
pub mod item;
pub mod language;
pub mod layout;
pub mod loader;
mod matcher;
pub mod timers;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, WithFallback};
pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{CopyError, ViewerConfig, ViewerController, ViewerEvent};
pub use item::{Item, ItemId};
pub use language::{Language, format_title, language_of};
pub use layout::{LayoutConfig, LayoutState};
pub use loader::{LoadError, load_items, parse_items};
