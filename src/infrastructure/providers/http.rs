//! Shared outbound request handling for the adapters.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::outcome::{Outcome, ProviderError};

const MAX_LOGGED_BODY: usize = 300;

/// Builds the HTTP client shared by all adapters.
///
/// `timeout_seconds = None` leaves outbound calls without a deadline.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_http_client(timeout_seconds: Option<u64>) -> reqwest::Result<Client> {
    let mut builder = Client::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));

    if let Some(secs) = timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Sends `request` and decodes a successful JSON body into `T`.
///
/// Request URLs are stripped from transport errors since several providers
/// carry their API key in the query string.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    provider: &'static str,
    request: RequestBuilder,
) -> Result<T, ProviderError> {
    let response = request
        .send()
        .await
        .map_err(|e| ProviderError::Transport {
            provider,
            message: e.without_url().to_string(),
        })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ProviderError::Transport {
            provider,
            message: e.without_url().to_string(),
        })?;

    if !status.is_success() {
        return Err(ProviderError::Status {
            provider,
            status: status.as_u16(),
            body: truncate_body(&body),
        });
    }

    debug!(provider, bytes = body.len(), "Provider responded");

    serde_json::from_str(&body).map_err(|e| ProviderError::Decode {
        provider,
        message: e.to_string(),
    })
}

/// Logs and counts failures; passes every outcome through unchanged.
pub(crate) fn settle<T>(outcome: Outcome<T>) -> Outcome<T> {
    if let Outcome::Failed(err) = &outcome {
        warn!(provider = err.provider(), error = %err, "Provider call failed");
        metrics::counter!("provider_failures_total", "provider" => err.provider()).increment(1);
    }

    outcome
}

/// Joins a configured base URL and a path without doubling slashes.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_LOGGED_BODY {
        return body.to_string();
    }

    let mut cut = MAX_LOGGED_BODY;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &body[..cut])
}
