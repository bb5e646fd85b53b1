//! Feature detection for query-string manipulation.
//!
//! The browser check `"URLSearchParams" in window` becomes a choice between two
//! [`AddressService`] implementations, made once by [`detect`]. Hosts with the
//! capability get [`UrlSearchParamsService`]; the rest get
//! [`UnsupportedAddressService`], which succeeds without doing anything.

use tracing::{debug, trace, warn};

use crate::address::Address;
use crate::config::{HistoryMode, SearchParamsSupport, UpdaterConfig};
use crate::error::Result;
use crate::history::{HistoryEntry, NavigationSession};

/// Rewrites the current address of a navigation session.
pub trait AddressService {
    /// Set `name` to `value` on the session's current address and record the
    /// result in history.
    ///
    /// # Errors
    ///
    /// Returns an error if the current address cannot be parsed or the session
    /// rejects the new entry.
    fn set_search_param(
        &self,
        session: &mut dyn NavigationSession,
        name: &str,
        value: &str,
    ) -> Result<()>;

    /// Whether calls have any effect.
    fn is_supported(&self) -> bool;
}

/// Address service for hosts with query-string manipulation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlSearchParamsService {
    mode: HistoryMode,
    title: String,
}

impl UrlSearchParamsService {
    /// Pushes entries with an empty title.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the history mode and title from `config`.
    #[must_use]
    pub fn from_config(config: &UpdaterConfig) -> Self {
        Self {
            mode: config.history_mode,
            title: config.title.clone(),
        }
    }

    /// History mode used for new entries.
    #[must_use]
    pub const fn mode(&self) -> HistoryMode {
        self.mode
    }
}

impl AddressService for UrlSearchParamsService {
    fn set_search_param(
        &self,
        session: &mut dyn NavigationSession,
        name: &str,
        value: &str,
    ) -> Result<()> {
        let current = session.current_address()?;
        let address = Address::parse(&current)?.with_search_param(name, value);
        let entry = HistoryEntry::new(address).with_title(self.title.as_str());

        debug!(
            param = name,
            value,
            address = %entry.address,
            mode = ?self.mode,
            "Recording search parameter update"
        );

        let result = match self.mode {
            HistoryMode::Push => session.push_state(entry),
            HistoryMode::Replace => session.replace_state(entry),
        };
        if let Err(err) = &result {
            warn!(error = %err, code = err.error_code(), "Navigation session rejected update");
        }
        result
    }

    fn is_supported(&self) -> bool {
        true
    }
}

/// Address service for hosts without query-string manipulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnsupportedAddressService;

impl AddressService for UnsupportedAddressService {
    fn set_search_param(
        &self,
        _session: &mut dyn NavigationSession,
        name: &str,
        _value: &str,
    ) -> Result<()> {
        trace!(param = name, "Search params unsupported, skipping update");
        Ok(())
    }

    fn is_supported(&self) -> bool {
        false
    }
}

/// Picks the address service for `session`.
///
/// [`SearchParamsSupport::Auto`] defers to
/// [`NavigationSession::supports_search_params`]; the other settings override it.
#[must_use]
pub fn detect(session: &dyn NavigationSession, config: &UpdaterConfig) -> Box<dyn AddressService> {
    let supported = match config.search_params {
        SearchParamsSupport::Auto => session.supports_search_params(),
        SearchParamsSupport::Enabled => true,
        SearchParamsSupport::Disabled => false,
    };

    if supported {
        Box::new(UrlSearchParamsService::from_config(config))
    } else {
        Box::new(UnsupportedAddressService)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::history::MockNavigationSession;
    use mockall::predicate::function;

    #[test]
    fn test_real_service_pushes_updated_entry() {
        let mut session = MockNavigationSession::new();
        session
            .expect_current_address()
            .times(1)
            .returning(|| Ok("https://example.com/search?tab=all".to_string()));
        session
            .expect_push_state()
            .with(function(|entry: &HistoryEntry| {
                entry.address.as_str() == "https://example.com/search?tab=images"
                    && entry.state.is_null()
                    && entry.title.is_empty()
            }))
            .times(1)
            .returning(|_| Ok(()));
        session.expect_replace_state().never();

        UrlSearchParamsService::new()
            .set_search_param(&mut session, "tab", "images")
            .unwrap();
    }

    #[test]
    fn test_real_service_replace_mode() {
        let mut session = MockNavigationSession::new();
        session
            .expect_current_address()
            .returning(|| Ok("https://example.com/".to_string()));
        session.expect_push_state().never();
        session
            .expect_replace_state()
            .with(function(|entry: &HistoryEntry| {
                entry.address.as_str() == "https://example.com/?q=cats" && entry.title == "Cats"
            }))
            .times(1)
            .returning(|_| Ok(()));

        let config = UpdaterConfig::default()
            .with_history_mode(HistoryMode::Replace)
            .with_title("Cats");
        let service = UrlSearchParamsService::from_config(&config);
        assert_eq!(service.mode(), HistoryMode::Replace);
        service.set_search_param(&mut session, "q", "cats").unwrap();
    }

    #[test]
    fn test_real_service_propagates_invalid_address() {
        let mut session = MockNavigationSession::new();
        session
            .expect_current_address()
            .returning(|| Ok("not an address".to_string()));
        session.expect_push_state().never();

        let result = UrlSearchParamsService::new().set_search_param(&mut session, "q", "x");
        assert!(matches!(result, Err(Error::InvalidAddress(_))));
    }

    #[test]
    fn test_real_service_propagates_session_error() {
        let mut session = MockNavigationSession::new();
        session
            .expect_current_address()
            .returning(|| Ok("https://example.com/".to_string()));
        session
            .expect_push_state()
            .returning(|_| Err(Error::Session("quota exceeded".to_string())));

        let result = UrlSearchParamsService::new().set_search_param(&mut session, "q", "x");
        assert_eq!(result, Err(Error::Session("quota exceeded".to_string())));
    }

    #[test]
    fn test_unsupported_service_touches_nothing() {
        let mut session = MockNavigationSession::new();
        session.expect_current_address().never();
        session.expect_push_state().never();
        session.expect_replace_state().never();

        let service = UnsupportedAddressService;
        assert!(!service.is_supported());
        service.set_search_param(&mut session, "q", "x").unwrap();
    }

    #[test]
    fn test_detect_auto_follows_session() {
        let mut capable = MockNavigationSession::new();
        capable.expect_supports_search_params().return_const(true);
        assert!(detect(&capable, &UpdaterConfig::default()).is_supported());

        let mut incapable = MockNavigationSession::new();
        incapable.expect_supports_search_params().return_const(false);
        assert!(!detect(&incapable, &UpdaterConfig::default()).is_supported());
    }

    #[test]
    fn test_detect_overrides() {
        let mut session = MockNavigationSession::new();
        session.expect_supports_search_params().never();

        let enabled = UpdaterConfig::default().with_search_params(SearchParamsSupport::Enabled);
        assert!(detect(&session, &enabled).is_supported());

        let disabled = UpdaterConfig::default().with_search_params(SearchParamsSupport::Disabled);
        assert!(!detect(&session, &disabled).is_supported());
    }
}
