// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Perplexity chat completions client.
//!
//! Builds a chat completion request, POSTs it to the Perplexity API with a
//! bearer token, and decodes the response into typed structures.
//!
//! # Example
//!
//! ```ignore
//! use perplexity_client::{models, ChatCompletionRequest, Message, PerplexityClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PerplexityClient::new("pplx-xxx", models::LLAMA_31_SONAR_SMALL_128K_CHAT, None)?;
//!
//!     let request = ChatCompletionRequest::new(vec![
//!         Message::system("Be precise and concise."),
//!         Message::user("How many moons does Mars have?"),
//!     ])
//!     .with_max_tokens(100)
//!     .with_temperature(0.2);
//!
//!     let response = client.chat_completions(&request).await?;
//!     println!("{}", response.complete_single_message()?);
//!     Ok(())
//! }
//! ```

mod api_key;
mod client;
mod config;
mod error;
pub mod models;
mod types;

pub use api_key::ApiKey;
pub use client::PerplexityClient;
pub use config::{ClientOptions, DEFAULT_ENDPOINT, DEFAULT_REQUEST_TIMEOUT};
pub use error::{PerplexityError, Result, TransportError};
pub use types::*;

// Cancellation handle accepted by `PerplexityClient::chat_completions_with_cancellation`.
pub use tokio_util::sync::CancellationToken;
