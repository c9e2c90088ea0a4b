// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Perplexity API wire types.

use crate::error::{PerplexityError, Result};
use serde::{ser::Error as _, Deserialize, Serialize, Serializer};
use std::fmt;

/// Finish reason reported for a natural end of generation.
pub const FINISH_REASON_STOP: &str = "stop";

// Wire values of the message roles.
pub const ROLE_SYSTEM: &str = "system";
pub const ROLE_USER: &str = "user";
pub const ROLE_ASSISTANT: &str = "assistant";

/// Author of a message in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	System,
	User,
	Assistant,
}

impl Role {
	pub const fn as_str(self) -> &'static str {
		match self {
			Role::System => ROLE_SYSTEM,
			Role::User => ROLE_USER,
			Role::Assistant => ROLE_ASSISTANT,
		}
	}
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A single conversation turn. Conversations are ordered oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
	pub role: Role,
	pub content: String,
}

impl Message {
	pub fn new(role: Role, content: impl Into<String>) -> Self {
		Self {
			role,
			content: content.into(),
		}
	}

	pub fn system(content: impl Into<String>) -> Self {
		Self::new(Role::System, content)
	}

	pub fn user(content: impl Into<String>) -> Self {
		Self::new(Role::User, content)
	}

	pub fn assistant(content: impl Into<String>) -> Self {
		Self::new(Role::Assistant, content)
	}
}

/// Chat completion request.
///
/// `model` may be left unset, in which case the client's default model is
/// sent. The sampling parameters are omitted from the payload when unset or
/// zero; the API cannot tell the two apart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
	#[serde(default, skip_serializing_if = "is_unset")]
	pub model: Option<String>,
	pub messages: Vec<Message>,
	#[serde(default, skip_serializing_if = "is_unset")]
	pub max_tokens: Option<u32>,
	#[serde(default, skip_serializing_if = "is_unset", serialize_with = "finite")]
	pub temperature: Option<f64>,
	#[serde(default, skip_serializing_if = "is_unset", serialize_with = "finite")]
	pub top_p: Option<f64>,
	#[serde(default, skip_serializing_if = "is_unset")]
	pub top_k: Option<u32>,
	#[serde(default, skip_serializing_if = "is_unset", serialize_with = "finite")]
	pub frequency_penalty: Option<f64>,
	#[serde(default, skip_serializing_if = "is_unset", serialize_with = "finite")]
	pub presence_penalty: Option<f64>,
}

impl ChatCompletionRequest {
	pub fn new(messages: Vec<Message>) -> Self {
		Self {
			messages,
			..Self::default()
		}
	}

	pub fn with_model(mut self, model: impl Into<String>) -> Self {
		self.model = Some(model.into());
		self
	}

	pub fn with_message(mut self, message: Message) -> Self {
		self.messages.push(message);
		self
	}

	pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
		self.max_tokens = Some(max_tokens);
		self
	}

	pub fn with_temperature(mut self, temperature: f64) -> Self {
		self.temperature = Some(temperature);
		self
	}

	pub fn with_top_p(mut self, top_p: f64) -> Self {
		self.top_p = Some(top_p);
		self
	}

	pub fn with_top_k(mut self, top_k: u32) -> Self {
		self.top_k = Some(top_k);
		self
	}

	pub fn with_frequency_penalty(mut self, frequency_penalty: f64) -> Self {
		self.frequency_penalty = Some(frequency_penalty);
		self
	}

	pub fn with_presence_penalty(mut self, presence_penalty: f64) -> Self {
		self.presence_penalty = Some(presence_penalty);
		self
	}

	/// Borrows the request as the payload actually sent, substituting
	/// `default_model` when no model (or an empty one) was set.
	pub(crate) fn resolve<'a>(&'a self, default_model: &'a str) -> WireRequest<'a> {
		let model = match self.model.as_deref() {
			Some(model) if !model.is_empty() => model,
			_ => default_model,
		};

		WireRequest {
			model,
			messages: &self.messages,
			max_tokens: self.max_tokens,
			temperature: self.temperature,
			top_p: self.top_p,
			top_k: self.top_k,
			frequency_penalty: self.frequency_penalty,
			presence_penalty: self.presence_penalty,
		}
	}
}

/// The outgoing payload; `model` is always present.
#[derive(Debug, Serialize)]
pub(crate) struct WireRequest<'a> {
	pub model: &'a str,
	pub messages: &'a [Message],
	#[serde(skip_serializing_if = "is_unset")]
	pub max_tokens: Option<u32>,
	#[serde(skip_serializing_if = "is_unset", serialize_with = "finite")]
	pub temperature: Option<f64>,
	#[serde(skip_serializing_if = "is_unset", serialize_with = "finite")]
	pub top_p: Option<f64>,
	#[serde(skip_serializing_if = "is_unset")]
	pub top_k: Option<u32>,
	#[serde(skip_serializing_if = "is_unset", serialize_with = "finite")]
	pub frequency_penalty: Option<f64>,
	#[serde(skip_serializing_if = "is_unset", serialize_with = "finite")]
	pub presence_penalty: Option<f64>,
}

fn is_unset<T: Default + PartialEq>(value: &Option<T>) -> bool {
	value.as_ref().map_or(true, |v| *v == T::default())
}

// serde_json would write NaN and infinities as `null`; refuse them instead.
fn finite<S>(value: &Option<f64>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
	S: Serializer,
{
	match value {
		Some(v) if !v.is_finite() => Err(S::Error::custom(format!(
			"sampling parameter must be finite, got {v}"
		))),
		Some(v) => serializer.serialize_some(v),
		None => serializer.serialize_none(),
	}
}

/// Chat completion response.
///
/// Every field apart from a choice's `finish_reason` is required; a body
/// missing any of them, or naming a role other than the three known ones,
/// fails to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
	pub id: String,
	pub object: String,
	/// Unix timestamp in seconds.
	pub created: u64,
	pub model: String,
	pub choices: Vec<Choice>,
	pub usage: Usage,
}

/// One candidate completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
	pub index: u32,
	pub message: Message,
	/// `None` when the API sends `null` or leaves it out.
	pub finish_reason: Option<String>,
}

impl Choice {
	pub fn is_stop(&self) -> bool {
		self.finish_reason.as_deref() == Some(FINISH_REASON_STOP)
	}
}

/// Token accounting for one exchange.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
	pub prompt_tokens: u32,
	pub completion_tokens: u32,
	pub total_tokens: u32,
}

impl ChatCompletionResponse {
	pub fn is_single(&self) -> bool {
		self.choices.len() == 1
	}

	/// True when any choice finished with `"stop"`.
	pub fn is_complete(&self) -> bool {
		self.choices.iter().any(Choice::is_stop)
	}

	/// Returns the content of the only choice, provided the response holds
	/// exactly one choice and generation finished naturally.
	///
	/// The choice count is checked first, so a response with several choices
	/// is rejected even if one of them stopped.
	pub fn complete_single_message(&self) -> Result<&str> {
		if !self.is_single() {
			return Err(PerplexityError::NotSingleChoice {
				count: self.choices.len(),
			});
		}
		if !self.is_complete() {
			return Err(PerplexityError::IncompleteChoice);
		}
		Ok(&self.choices[0].message.content)
	}
}

/// Structured body of a 422 response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
	pub detail: Vec<ValidationErrorDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrorDetail {
	/// Path to the offending field, e.g. `["body", "messages", 0]`.
	pub loc: Vec<LocationSegment>,
	pub msg: String,
	#[serde(rename = "type")]
	pub error_type: String,
}

/// One element of a validation error location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationSegment {
	Index(i64),
	Name(String),
	/// Anything else the API sends, kept verbatim.
	Other(serde_json::Value),
}

impl fmt::Display for LocationSegment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			LocationSegment::Index(index) => write!(f, "{index}"),
			LocationSegment::Name(name) => f.write_str(name),
			LocationSegment::Other(value) => write!(f, "{value}"),
		}
	}
}

impl fmt::Display for ValidationErrorDetail {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, segment) in self.loc.iter().enumerate() {
			if i > 0 {
				f.write_str(".")?;
			}
			write!(f, "{segment}")?;
		}
		if !self.loc.is_empty() {
			f.write_str(": ")?;
		}
		write!(f, "{} ({})", self.msg, self.error_type)
	}
}

impl fmt::Display for ValidationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.detail.is_empty() {
			return f.write_str("no detail provided");
		}
		for (i, detail) in self.detail.iter().enumerate() {
			if i > 0 {
				f.write_str("; ")?;
			}
			write!(f, "{detail}")?;
		}
		Ok(())
	}
}
