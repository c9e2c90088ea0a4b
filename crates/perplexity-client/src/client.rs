// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Perplexity chat completions client.

use crate::api_key::ApiKey;
use crate::config::ClientOptions;
use crate::error::{PerplexityError, Result, TransportError};
use crate::types::{ChatCompletionRequest, ChatCompletionResponse, ValidationError};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, trace};

const JSON: &str = "application/json";

/// Client for the Perplexity chat completions API.
///
/// Holds the API key, the model used when a request does not name one, and
/// a pooled HTTP client. Nothing is mutated after construction, so one
/// instance (or its clones) can serve concurrent calls.
#[derive(Clone, Debug)]
pub struct PerplexityClient {
	api_key: ApiKey,
	default_model: String,
	endpoint: String,
	request_timeout: Duration,
	http_client: Client,
}

impl PerplexityClient {
	/// Creates a client. `options` defaults to a 30 second timeout against the
	/// public endpoint.
	///
	/// No network traffic happens here and the key is not checked locally.
	/// An empty `default_model` is rejected, since requests without a model
	/// would otherwise go out with none.
	pub fn new(
		api_key: impl Into<ApiKey>,
		default_model: impl Into<String>,
		options: Option<ClientOptions>,
	) -> Result<Self> {
		let default_model = default_model.into();
		if default_model.is_empty() {
			return Err(PerplexityError::EmptyDefaultModel);
		}

		let options = options.unwrap_or_default();
		let http_client = perplexity_common_http::client_with_timeout(options.request_timeout)
			.map_err(TransportError::Http)?;

		let client = Self {
			api_key: api_key.into(),
			default_model,
			endpoint: options.endpoint,
			request_timeout: options.request_timeout,
			http_client,
		};

		info!(
			model = %client.default_model,
			endpoint = %client.endpoint,
			timeout_secs = client.request_timeout.as_secs(),
			"Initialized Perplexity client"
		);

		Ok(client)
	}

	pub fn default_model(&self) -> &str {
		&self.default_model
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	pub fn request_timeout(&self) -> Duration {
		self.request_timeout
	}

	/// Sends one chat completion request.
	///
	/// The request is borrowed; when it carries no model the client's default
	/// is sent instead, without touching the caller's value. Dropping the
	/// returned future abandons the call.
	#[instrument(skip(self, request), fields(model = %self.effective_model(request)))]
	pub async fn chat_completions(
		&self,
		request: &ChatCompletionRequest,
	) -> Result<ChatCompletionResponse> {
		let wire = request.resolve(&self.default_model);
		let payload = serde_json::to_vec(&wire).map_err(PerplexityError::Serialization)?;

		trace!(
			url = %self.endpoint,
			message_count = wire.messages.len(),
			payload_len = payload.len(),
			"Sending chat completion request"
		);

		let response = self
			.http_client
			.post(&self.endpoint)
			.header(ACCEPT, JSON)
			.header(CONTENT_TYPE, JSON)
			.bearer_auth(self.api_key.expose())
			.body(payload)
			.send()
			.await?;

		let status = response.status();
		let body = response.bytes().await?;

		if status != StatusCode::OK {
			debug!(status = %status, body_len = body.len(), "Received error response");
			return Err(error_from_status(status, &body));
		}

		let completion: ChatCompletionResponse =
			serde_json::from_slice(&body).map_err(PerplexityError::Decoding)?;

		trace!(
			response_id = %completion.id,
			model = %completion.model,
			"Received chat completion response"
		);
		info!(
			choices = completion.choices.len(),
			prompt_tokens = completion.usage.prompt_tokens,
			completion_tokens = completion.usage.completion_tokens,
			finish_reason = ?completion.choices.first().and_then(|c| c.finish_reason.as_deref()),
			"Completion request successful"
		);

		Ok(completion)
	}

	/// Like [`chat_completions`](Self::chat_completions), but gives up with
	/// [`TransportError::Cancelled`] as soon as `cancel` fires.
	pub async fn chat_completions_with_cancellation(
		&self,
		request: &ChatCompletionRequest,
		cancel: &CancellationToken,
	) -> Result<ChatCompletionResponse> {
		tokio::select! {
			biased;
			_ = cancel.cancelled() => {
				debug!("Chat completion request cancelled");
				Err(PerplexityError::from(TransportError::Cancelled))
			}
			result = self.chat_completions(request) => result,
		}
	}

	/// Like [`chat_completions`](Self::chat_completions), but fails with
	/// [`TransportError::Timeout`] once `deadline` passes. The client's own
	/// timeout still applies, whichever is sooner.
	pub async fn chat_completions_with_deadline(
		&self,
		request: &ChatCompletionRequest,
		deadline: Instant,
	) -> Result<ChatCompletionResponse> {
		match tokio::time::timeout_at(deadline, self.chat_completions(request)).await {
			Ok(result) => result,
			Err(_) => {
				debug!("Chat completion request deadline elapsed");
				Err(PerplexityError::from(TransportError::Timeout))
			}
		}
	}

	fn effective_model<'a>(&'a self, request: &'a ChatCompletionRequest) -> &'a str {
		request.resolve(&self.default_model).model
	}
}

/// Maps a non-200 response to an error. Only 422 bodies are parsed for
/// structure; everything else is reported verbatim.
fn error_from_status(status: StatusCode, body: &[u8]) -> PerplexityError {
	if status == StatusCode::UNPROCESSABLE_ENTITY {
		match serde_json::from_slice::<ValidationError>(body) {
			Ok(validation) => return PerplexityError::Validation(validation),
			Err(e) => debug!(parse_error = %e, "Unstructured 422 response body"),
		}
	}

	PerplexityError::Api {
		status: status.as_u16(),
		body: body.to_vec(),
	}
}
