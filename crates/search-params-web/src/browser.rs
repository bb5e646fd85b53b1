//! `window.location` / `window.history` session.

use search_params_core::{
    Error, HistoryEntry, NavigationSession, Result, SearchParamsUpdater, UpdaterConfig,
};
use serde_json::Value;
use tracing::{debug, trace};
use wasm_bindgen::prelude::*;
use web_sys::{History, Window};

fn js_error(context: &str, err: &JsValue) -> Error {
    let detail = err.as_string().unwrap_or_else(|| format!("{err:?}"));
    Error::Session(format!("{context}: {detail}"))
}

fn state_to_js(state: &Value) -> Result<JsValue> {
    if state.is_null() {
        return Ok(JsValue::NULL);
    }
    let json = serde_json::to_string(state)?;
    js_sys::JSON::parse(&json).map_err(|e| js_error("history state", &e))
}

/// Navigation session backed by the page's `Window`.
#[derive(Debug, Clone)]
pub struct BrowserSession {
    window: Window,
}

impl BrowserSession {
    /// Wraps an existing window.
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// Session for the global `window`, or `None` outside a document
    /// (workers, non-browser hosts).
    #[must_use]
    pub fn current() -> Option<Self> {
        web_sys::window().map(Self::new)
    }

    /// Number of entries in the tab's session history.
    ///
    /// # Errors
    ///
    /// Returns an error if the history object is unavailable.
    pub fn history_length(&self) -> Result<u32> {
        self.history()?
            .length()
            .map_err(|e| js_error("history.length", &e))
    }

    fn history(&self) -> Result<History> {
        self.window
            .history()
            .map_err(|e| js_error("window.history", &e))
    }
}

impl NavigationSession for BrowserSession {
    fn current_address(&self) -> Result<String> {
        self.window
            .location()
            .href()
            .map_err(|e| js_error("location.href", &e))
    }

    fn push_state(&mut self, entry: HistoryEntry) -> Result<()> {
        let state = state_to_js(&entry.state)?;
        self.history()?
            .push_state_with_url(&state, &entry.title, Some(entry.address.as_str()))
            .map_err(|e| js_error("history.pushState", &e))
    }

    fn replace_state(&mut self, entry: HistoryEntry) -> Result<()> {
        let state = state_to_js(&entry.state)?;
        self.history()?
            .replace_state_with_url(&state, &entry.title, Some(entry.address.as_str()))
            .map_err(|e| js_error("history.replaceState", &e))
    }

    fn supports_search_params(&self) -> bool {
        js_sys::Reflect::has(&self.window, &JsValue::from_str("URLSearchParams")).unwrap_or(false)
    }
}

/// Set query parameter `name` to `value` on the page address and push a new
/// history entry with a `null` state and an empty title.
///
/// Without a `window`, or in a browser lacking `URLSearchParams`, nothing
/// happens.
///
/// # Errors
///
/// Returns an error if the browser rejects the history update.
pub fn update_search_params(name: &str, value: &str) -> Result<()> {
    let Some(mut session) = BrowserSession::current() else {
        trace!(param = name, "No window, skipping search parameter update");
        return Ok(());
    };
    let updater = SearchParamsUpdater::new(UpdaterConfig::default())?;
    updater.update_search_params(&mut session, name, value)?;
    debug!(param = name, value, "Search parameter updated");
    Ok(())
}

/// JavaScript binding for [`update_search_params`].
///
/// # Errors
///
/// Throws the error message if the browser rejects the history update.
#[wasm_bindgen(js_name = updateSearchParams)]
pub fn update_search_params_js(name: &str, value: &str) -> std::result::Result<(), JsValue> {
    update_search_params(name, value).map_err(|e| JsValue::from_str(&e.to_string()))
}
