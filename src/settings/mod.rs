//! Configuration loading and resolution utilities.
//!
//! Values are layered from default config files, explicit `--config` files,
//! `SNIPVIEW__*` environment variables and finally CLI flags. `load` is the
//! entry point and returns a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
