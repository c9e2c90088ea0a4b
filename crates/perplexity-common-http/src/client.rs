// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP client construction with a consistent User-Agent header.

use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::debug;

/// Creates a new HTTP client builder with the standard User-Agent header.
///
/// Use this when you need to customize the client further before building.
///
/// # Example
/// ```ignore
/// let client = perplexity_common_http::builder()
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Builds a client whose requests are bounded by `timeout` end to end
/// (connect, send, and reading the body).
///
/// Fails only when the TLS backend cannot be initialised.
pub fn client_with_timeout(timeout: Duration) -> Result<Client, reqwest::Error> {
	debug!(timeout_ms = millis_saturating(timeout), "Building HTTP client");
	builder().timeout(timeout).build()
}

// Durations past u64::MAX milliseconds log as u64::MAX.
fn millis_saturating(duration: Duration) -> u64 {
	u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Returns the standard User-Agent string.
///
/// Format: `perplexity-rs/{version} ({os}-{arch})`
pub fn user_agent() -> String {
	format!("perplexity-rs/{} ({})", env!("CARGO_PKG_VERSION"), platform())
}

/// Returns the host platform as `{os}-{arch}`, e.g. `linux-x86_64`.
pub fn platform() -> String {
	format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH)
}
