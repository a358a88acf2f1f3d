//! Interactive terminal front-end for `snipview`.
//!
//! This crate renders a [`snipview_core::ViewerController`] as a terminal UI:
//! a query prompt, a sidebar listing the visible snippets, and a code pane
//! with every visible snippet stacked and syntax highlighted. All filtering,
//! selection and copy feedback is owned by the controller; the UI only feeds
//! it input and redraws from its derived state.

mod app;
pub mod clipboard;
pub mod components;
mod config;
/// Syntax highlighting for snippet code.
pub mod highlight;
pub mod input;
mod outcome;
mod runtime;
pub mod style;

pub use app::App;
pub use clipboard::{CommandClipboard, Osc52Clipboard, system_clipboard};
pub use config::UiLabels;
pub use input::QueryInput;
pub use outcome::ViewerOutcome;
pub use runtime::run;

pub use crate::style::{StyleConfig, Theme, builtin_themes, default_theme};
