//! Parsed page addresses.
//!
//! [`Address`] wraps a [`Url`] and applies query parameter updates with the
//! same rules as the browser's `URLSearchParams.set`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, Result};

/// A full page location: scheme, host, path, query, and fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(Url);

impl Address {
    /// Parses an absolute address.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAddress`] if the string is not an absolute URL.
    pub fn parse(input: &str) -> Result<Self> {
        Url::parse(input)
            .map(Self)
            .map_err(|e| Error::InvalidAddress(format!("{input}: {e}")))
    }

    /// Returns the serialized address.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner [`Url`].
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }

    /// Converts to the inner [`Url`].
    #[must_use]
    pub fn into_url(self) -> Url {
        self.0
    }

    /// Decoded query pairs in wire order, duplicates included.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.0.query_pairs().into_owned().collect()
    }

    /// First value for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        self.0
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// Every value for `name`, in wire order.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Vec<String> {
        self.0
            .query_pairs()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
            .collect()
    }

    /// Sets `name` to `value`.
    ///
    /// The first existing pair named `name` takes the new value in place and
    /// later pairs with that name are dropped. A name not yet present is
    /// appended. Other pairs keep their values and order. The query is
    /// re-serialized as `application/x-www-form-urlencoded`; the fragment is
    /// left alone.
    pub fn set_search_param(&mut self, name: &str, value: &str) {
        let mut pairs = self.query_pairs();
        let mut found = false;
        pairs.retain_mut(|(key, current)| {
            if key.as_str() != name {
                return true;
            }
            if found {
                return false;
            }
            found = true;
            value.clone_into(current);
            true
        });
        if !found {
            pairs.push((name.to_string(), value.to_string()));
        }

        self.0.query_pairs_mut().clear().extend_pairs(&pairs);
    }

    /// Consuming variant of [`Address::set_search_param`].
    #[must_use]
    pub fn with_search_param(mut self, name: &str, value: &str) -> Self {
        self.set_search_param(name, value);
        self
    }
}

impl From<Url> for Address {
    fn from(url: Url) -> Self {
        Self(url)
    }
}

impl From<Address> for Url {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
