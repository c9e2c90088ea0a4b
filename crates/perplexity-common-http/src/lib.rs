// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for the Perplexity client.
//!
//! Every outbound client is built from here so the User-Agent header and
//! timeout handling stay consistent across crates.

mod client;

pub use client::{builder, client_with_timeout, platform, user_agent};
