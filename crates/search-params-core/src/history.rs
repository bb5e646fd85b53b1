//! Navigation history.
//!
//! This module provides the [`NavigationSession`] trait that stands in for the
//! host's location and history objects, the [`HistoryEntry`] records it
//! stores, and [`InMemorySession`], a deterministic host used outside the
//! browser.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::address::Address;
use crate::error::{Error, Result};

/// One entry on the navigation history stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Address shown in the address bar for this entry
    pub address: Address,
    /// State object associated with the entry
    #[serde(default)]
    pub state: Value,
    /// Title associated with the entry
    #[serde(default)]
    pub title: String,
}

impl HistoryEntry {
    /// Creates an entry with a `null` state and an empty title.
    #[must_use]
    pub const fn new(address: Address) -> Self {
        Self {
            address,
            state: Value::Null,
            title: String::new(),
        }
    }

    /// Set the state object.
    #[must_use]
    pub fn with_state(mut self, state: Value) -> Self {
        self.state = state;
        self
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Host environment handle for the current navigation session.
///
/// Implementations own the current address and the history stack. Updates
/// never reload the page or fire navigation events.
#[cfg_attr(test, mockall::automock)]
pub trait NavigationSession {
    /// Returns the current address as the host serializes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot report its location.
    fn current_address(&self) -> Result<String>;

    /// Pushes `entry` as a new history entry and makes it current.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the entry.
    fn push_state(&mut self, entry: HistoryEntry) -> Result<()>;

    /// Overwrites the current history entry with `entry`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the entry.
    fn replace_state(&mut self, entry: HistoryEntry) -> Result<()>;

    /// Whether the host exposes query-string manipulation.
    fn supports_search_params(&self) -> bool {
        true
    }
}

/// Navigation session held entirely in memory.
///
/// Behaves like a browser tab's joint session history: pushing discards any
/// forward entries, and `back`/`forward` move a cursor without touching the
/// stack.
#[derive(Debug, Clone)]
pub struct InMemorySession {
    entries: Vec<HistoryEntry>,
    index: usize,
    search_params: bool,
}

impl InMemorySession {
    /// Creates a session whose only entry is `initial`.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial` is not an absolute address.
    pub fn new(initial: &str) -> Result<Self> {
        let address = Address::parse(initial)?;
        Ok(Self {
            entries: vec![HistoryEntry::new(address)],
            index: 0,
            search_params: true,
        })
    }

    /// Simulate a host without query-string manipulation.
    #[must_use]
    pub const fn without_search_params(mut self) -> Self {
        self.search_params = false;
        self
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A session always holds its initial entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the current entry.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The current entry.
    #[must_use]
    pub fn current_entry(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.index)
    }

    /// Move one entry back. Returns false at the start of history.
    pub fn back(&mut self) -> bool {
        self.go(-1)
    }

    /// Move one entry forward. Returns false at the end of history.
    pub fn forward(&mut self) -> bool {
        self.go(1)
    }

    /// Move `delta` entries. Out-of-range moves are ignored and return false.
    pub fn go(&mut self, delta: isize) -> bool {
        let Some(target) = self.index.checked_add_signed(delta) else {
            return false;
        };
        if delta == 0 || target >= self.entries.len() {
            return false;
        }
        trace!(from = self.index, to = target, "Traversing history");
        self.index = target;
        true
    }
}

impl NavigationSession for InMemorySession {
    fn current_address(&self) -> Result<String> {
        self.current_entry()
            .map(|entry| entry.address.to_string())
            .ok_or_else(|| Error::Session("history is empty".to_string()))
    }

    fn push_state(&mut self, entry: HistoryEntry) -> Result<()> {
        self.entries.truncate(self.index + 1);
        self.entries.push(entry);
        self.index = self.entries.len() - 1;
        Ok(())
    }

    fn replace_state(&mut self, entry: HistoryEntry) -> Result<()> {
        let current = self
            .entries
            .get_mut(self.index)
            .ok_or_else(|| Error::Session("history is empty".to_string()))?;
        *current = entry;
        Ok(())
    }

    fn supports_search_params(&self) -> bool {
        self.search_params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(address: &str) -> HistoryEntry {
        HistoryEntry::new(Address::parse(address).unwrap())
    }

    #[test]
    fn test_new_session() {
        let session = InMemorySession::new("https://example.com/").unwrap();
        assert_eq!(session.len(), 1);
        assert_eq!(session.index(), 0);
        assert!(session.supports_search_params());
        assert_eq!(session.current_address().unwrap(), "https://example.com/");
    }

    #[test]
    fn test_new_session_invalid_address() {
        assert!(InMemorySession::new("example.com").is_err());
    }

    #[test]
    fn test_without_search_params() {
        let session = InMemorySession::new("https://example.com/")
            .unwrap()
            .without_search_params();
        assert!(!session.supports_search_params());
    }

    #[test]
    fn test_push_makes_entry_current() {
        let mut session = InMemorySession::new("https://example.com/a").unwrap();
        session.push_state(entry("https://example.com/b")).unwrap();

        assert_eq!(session.len(), 2);
        assert_eq!(session.index(), 1);
        assert_eq!(session.current_address().unwrap(), "https://example.com/b");
    }

    #[test]
    fn test_push_discards_forward_entries() {
        let mut session = InMemorySession::new("https://example.com/a").unwrap();
        session.push_state(entry("https://example.com/b")).unwrap();
        session.push_state(entry("https://example.com/c")).unwrap();
        assert!(session.back());
        assert!(session.back());

        session.push_state(entry("https://example.com/d")).unwrap();
        let addresses: Vec<&str> = session.entries().iter().map(|e| e.address.as_str()).collect();
        assert_eq!(addresses, vec!["https://example.com/a", "https://example.com/d"]);
        assert!(!session.forward());
    }

    #[test]
    fn test_replace_keeps_length() {
        let mut session = InMemorySession::new("https://example.com/a").unwrap();
        session
            .replace_state(entry("https://example.com/b").with_state(json!({"k": 1})))
            .unwrap();

        assert_eq!(session.len(), 1);
        let current = session.current_entry().unwrap();
        assert_eq!(current.address.as_str(), "https://example.com/b");
        assert_eq!(current.state, json!({"k": 1}));
    }

    #[test]
    fn test_go_out_of_range() {
        let mut session = InMemorySession::new("https://example.com/a").unwrap();
        session.push_state(entry("https://example.com/b")).unwrap();

        assert!(!session.go(5));
        assert!(!session.go(-5));
        assert!(!session.go(0));
        assert_eq!(session.index(), 1);
        assert!(session.go(-1));
        assert_eq!(session.current_address().unwrap(), "https://example.com/a");
    }

    #[test]
    fn test_history_entry_builder() {
        let built = entry("https://example.com/")
            .with_state(json!("saved"))
            .with_title("Home");
        assert_eq!(built.state, json!("saved"));
        assert_eq!(built.title, "Home");
    }

    #[test]
    fn test_history_entry_defaults() {
        let built = entry("https://example.com/");
        assert!(built.state.is_null());
        assert!(built.title.is_empty());
    }

    #[test]
    fn test_history_entry_deserialize_defaults() {
        let decoded: HistoryEntry =
            serde_json::from_str(r#"{"address": "https://example.com/?q=1"}"#).unwrap();
        assert!(decoded.state.is_null());
        assert_eq!(decoded.title, "");
        assert_eq!(decoded.address.get("q"), Some("1".to_string()));
    }
}
