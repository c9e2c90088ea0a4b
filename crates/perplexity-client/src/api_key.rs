// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Bearer token wrapper that keeps the API key out of logs.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

const REDACTED: &str = "[REDACTED]";

/// The Perplexity API key.
///
/// `Debug`, `Display` and `Serialize` all render `[REDACTED]`, so the key is
/// safe to pass through `tracing` fields or config dumps. The memory is
/// zeroed on drop. Call [`ApiKey::expose`] to read the token.
///
/// No format validation happens locally; a bad key surfaces as an API error
/// from the remote service.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ApiKey(String);

impl ApiKey {
	pub fn new(key: impl Into<String>) -> Self {
		Self(key.into())
	}

	/// Returns the raw token for the `Authorization` header.
	pub fn expose(&self) -> &str {
		&self.0
	}
}

impl From<String> for ApiKey {
	fn from(key: String) -> Self {
		Self(key)
	}
}

impl From<&str> for ApiKey {
	fn from(key: &str) -> Self {
		Self(key.to_string())
	}
}

impl fmt::Debug for ApiKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ApiKey").field(&REDACTED).finish()
	}
}

impl fmt::Display for ApiKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl Serialize for ApiKey {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(REDACTED)
	}
}

impl<'de> Deserialize<'de> for ApiKey {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		String::deserialize(deserializer).map(Self)
	}
}
