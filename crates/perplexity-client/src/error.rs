// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the Perplexity client.

use crate::types::ValidationError;
use std::borrow::Cow;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, PerplexityError>;

/// Failures that happen before a response was obtained.
#[derive(Debug, Error)]
pub enum TransportError {
	/// Network, DNS or TLS failure, or a body that could not be read.
	#[error("HTTP error: {0}")]
	Http(#[source] reqwest::Error),

	/// The client timeout or the caller's deadline elapsed.
	#[error("request timed out")]
	Timeout,

	/// The caller's cancellation token fired.
	#[error("request cancelled")]
	Cancelled,
}

impl From<reqwest::Error> for TransportError {
	fn from(err: reqwest::Error) -> Self {
		if err.is_timeout() {
			TransportError::Timeout
		} else {
			TransportError::Http(err)
		}
	}
}

/// Errors returned by [`PerplexityClient`](crate::PerplexityClient) and the
/// response accessors.
#[derive(Debug, Error)]
pub enum PerplexityError {
	/// The request could not be encoded as JSON.
	#[error("failed to serialize request: {0}")]
	Serialization(#[source] serde_json::Error),

	#[error("request failed: {0}")]
	Transport(#[from] TransportError),

	/// The API rejected the request with a structured 422 body.
	#[error("validation error: {0}")]
	Validation(ValidationError),

	/// Any other non-200 status. `body` holds the response bytes exactly as
	/// received; see [`body_text`](Self::body_text) for a printable form.
	#[error("{}", api_error_message(.status, .body))]
	Api { status: u16, body: Vec<u8> },

	/// A 200 response whose body did not match the expected shape.
	#[error("failed to decode response: {0}")]
	Decoding(#[source] serde_json::Error),

	#[error("expected exactly 1 choice in response, got {count}")]
	NotSingleChoice { count: usize },

	#[error("choice is not complete")]
	IncompleteChoice,

	/// The client was constructed without a default model.
	#[error("default model must not be empty")]
	EmptyDefaultModel,
}

impl From<reqwest::Error> for PerplexityError {
	fn from(err: reqwest::Error) -> Self {
		PerplexityError::Transport(err.into())
	}
}

impl PerplexityError {
	/// Returns the HTTP status for errors produced from a response.
	pub fn status(&self) -> Option<u16> {
		match self {
			PerplexityError::Validation(_) => Some(422),
			PerplexityError::Api { status, .. } => Some(*status),
			_ => None,
		}
	}

	pub fn is_transport(&self) -> bool {
		matches!(self, PerplexityError::Transport(_))
	}

	/// The raw response body of an [`Api`](Self::Api) error.
	pub fn body(&self) -> Option<&[u8]> {
		match self {
			PerplexityError::Api { body, .. } => Some(body.as_slice()),
			_ => None,
		}
	}

	/// The response body of an [`Api`](Self::Api) error as text, with invalid
	/// UTF-8 replaced by U+FFFD.
	pub fn body_text(&self) -> Option<Cow<'_, str>> {
		self.body().map(String::from_utf8_lossy)
	}
}

// Only the unparseable 422 path reports the status in the message.
fn api_error_message(status: &u16, body: &[u8]) -> String {
	let body = String::from_utf8_lossy(body);
	if *status == 422 {
		format!("request failed with status {status}: {body}")
	} else {
		format!("error: {body}")
	}
}
