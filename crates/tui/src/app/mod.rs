//! Core application state and behavior for the interactive viewer.
//!
//! The [`App`] type wraps a [`snipview_core::ViewerController`] with the UI
//! state the terminal needs: the query input, the sidebar cursor and the
//! scrollable code document. Supporting modules partition the
//! implementation into input handling, code pane state and rendering.

mod actions;
mod code;
mod render;
mod state;


pub use state::App;
