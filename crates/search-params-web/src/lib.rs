//! # search-params-web
//!
//! Browser host for [`search_params_core`].
//!
//! [`BrowserSession`] implements [`NavigationSession`] on top of
//! `window.location` and `window.history`, and [`update_search_params`] is the
//! one-call entry point UI code uses when a control changes state. Everything
//! browser-specific is compiled only for `wasm32` targets.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

#[cfg(target_arch = "wasm32")]
mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::{update_search_params, update_search_params_js, BrowserSession};

pub use search_params_core::{Error, NavigationSession, Result, UpdaterConfig};
