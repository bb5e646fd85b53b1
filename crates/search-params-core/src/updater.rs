//! The search parameter update operation.
//!
//! [`update_search_params`] runs the operation against an explicit address
//! service. [`SearchParamsUpdater`] bundles a validated configuration and runs
//! the capability check on each call.

use validator::Validate;

use crate::capability::{detect, AddressService};
use crate::config::UpdaterConfig;
use crate::error::Result;
use crate::history::NavigationSession;

/// Set query parameter `name` to `value` on the session's current address and
/// record the new address in history.
///
/// With an unsupported service this is a no-op that returns `Ok(())`.
///
/// # Errors
///
/// Returns an error if the current address is malformed or the session
/// rejects the history entry.
pub fn update_search_params(
    service: &dyn AddressService,
    session: &mut dyn NavigationSession,
    name: &str,
    value: &str,
) -> Result<()> {
    service.set_search_param(session, name, value)
}

/// Configured entry point for search parameter updates.
#[derive(Debug, Clone, Default)]
pub struct SearchParamsUpdater {
    config: UpdaterConfig,
}

impl SearchParamsUpdater {
    /// Create an updater from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn new(config: UpdaterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &UpdaterConfig {
        &self.config
    }

    /// Set `name` to `value` on `session`'s current address.
    ///
    /// The capability check runs against `session` on every call.
    ///
    /// # Errors
    ///
    /// Returns an error if the current address is malformed or the session
    /// rejects the history entry.
    pub fn update_search_params(
        &self,
        session: &mut dyn NavigationSession,
        name: &str,
        value: &str,
    ) -> Result<()> {
        let service = detect(session, &self.config);
        update_search_params(service.as_ref(), session, name, value)
    }
}
