//! Result type returned by provider adapters.
//!
//! Adapters never panic or propagate raw transport errors. Every call settles
//! into one of three states so handlers can react deterministically:
//!
//! - [`Outcome::Found`] - the provider answered with at least one usable item
//! - [`Outcome::Empty`] - the provider answered but had nothing for the query
//! - [`Outcome::Failed`] - the call or the response mapping failed

use thiserror::Error;

/// Why a provider call failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("{provider} request failed: {message}")]
    Transport {
        provider: &'static str,
        message: String,
    },

    /// The provider responded with a non-success HTTP status.
    #[error("{provider} returned status {status}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },

    /// The response body was not the JSON document the adapter expects.
    #[error("{provider} response could not be decoded: {message}")]
    Decode {
        provider: &'static str,
        message: String,
    },

    /// The provider answered but refused the query (bad key, quota, invalid request).
    #[error("{provider} rejected the request: {reason}")]
    Rejected {
        provider: &'static str,
        reason: String,
    },

    /// The JSON decoded but a required element is missing or invalid.
    #[error("{provider} response is missing {what}")]
    Shape {
        provider: &'static str,
        what: String,
    },
}

impl ProviderError {
    /// Name of the provider that failed.
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Transport { provider, .. }
            | Self::Status { provider, .. }
            | Self::Decode { provider, .. }
            | Self::Rejected { provider, .. }
            | Self::Shape { provider, .. } => provider,
        }
    }
}

/// Tagged result of a single provider call.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Found(T),
    Empty,
    Failed(ProviderError),
}

impl<T> Outcome<Vec<T>> {
    /// Wraps a mapped list, treating an empty list as [`Outcome::Empty`].
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Found(items)
        }
    }

    /// Collapses `Empty` into an empty list for endpoints that answer with arrays.
    pub fn into_list(self) -> Result<Vec<T>, ProviderError> {
        match self {
            Self::Found(items) => Ok(items),
            Self::Empty => Ok(Vec::new()),
            Self::Failed(err) => Err(err),
        }
    }
}
