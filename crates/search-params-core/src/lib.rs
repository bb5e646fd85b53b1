//! # search-params-core
//!
//! Reflect UI state in the shareable page address.
//!
//! This crate sets a single query parameter on the current address and records
//! the result as a new navigation history entry, without reloading the page.
//! The host environment is abstracted behind [`history::NavigationSession`] so
//! that browsers and tests plug in the same way.
//!
//! ## Modules
//!
//! - [`error`] - Error types and error codes
//! - [`address`] - Parsed page addresses and query parameter updates
//! - [`history`] - History entries, the navigation session trait, and an in-memory host
//! - [`capability`] - Feature detection as real and no-op address services
//! - [`config`] - Updater configuration
//! - [`updater`] - The `update_search_params` operation

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod address;
pub mod capability;
pub mod config;
pub mod error;
pub mod history;
pub mod updater;

// Re-export commonly used types
pub use address::Address;
pub use capability::{AddressService, UnsupportedAddressService, UrlSearchParamsService};
pub use config::{HistoryMode, SearchParamsSupport, UpdaterConfig};
pub use error::{Error, Result};
pub use history::{HistoryEntry, InMemorySession, NavigationSession};
pub use updater::{update_search_params, SearchParamsUpdater};
