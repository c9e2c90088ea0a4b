// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The Perplexity chat completions endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.perplexity.ai/chat/completions";

/// Overall bound on a single request when no options are given.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Tunables for [`PerplexityClient`](crate::PerplexityClient).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
	/// Covers connecting, sending, and reading the whole response body.
	#[serde(rename = "request_timeout_secs", with = "duration_secs")]
	pub request_timeout: Duration,
	/// Full URL requests are POSTed to.
	pub endpoint: String,
}

impl Default for ClientOptions {
	fn default() -> Self {
		Self {
			request_timeout: DEFAULT_REQUEST_TIMEOUT,
			endpoint: DEFAULT_ENDPOINT.to_string(),
		}
	}
}

impl ClientOptions {
	pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
		self.request_timeout = timeout;
		self
	}

	pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
		self.endpoint = endpoint.into();
		self
	}
}

mod duration_secs {
	use serde::{Deserialize, Deserializer, Serialize, Serializer};
	use std::time::Duration;

	pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		duration.as_secs().serialize(serializer)
	}

	pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
	where
		D: Deserializer<'de>,
	{
		let secs = u64::deserialize(deserializer)?;
		Ok(Duration::from_secs(secs))
	}
}
