// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Model identifiers known to the Perplexity API.
//!
//! These are plain strings; any identifier the API accepts can be passed to
//! the client without being listed here.

// Sonar online models.
pub const LLAMA_31_SONAR_SMALL_128K_ONLINE: &str = "llama-3.1-sonar-small-128k-online";
pub const LLAMA_31_SONAR_LARGE_128K_ONLINE: &str = "llama-3.1-sonar-large-128k-online";
pub const LLAMA_31_SONAR_HUGE_128K_ONLINE: &str = "llama-3.1-sonar-huge-128k-online";

// Sonar chat models.
pub const LLAMA_31_SONAR_SMALL_128K_CHAT: &str = "llama-3.1-sonar-small-128k-chat";
pub const LLAMA_31_SONAR_LARGE_128K_CHAT: &str = "llama-3.1-sonar-large-128k-chat";

// Open-source instruct models.
pub const LLAMA_31_8B_INSTRUCT: &str = "llama-3.1-8b-instruct";
pub const LLAMA_31_70B_INSTRUCT: &str = "llama-3.1-70b-instruct";

/// Every identifier above, in declaration order.
pub const ALL: &[&str] = &[
	LLAMA_31_SONAR_SMALL_128K_ONLINE,
	LLAMA_31_SONAR_LARGE_128K_ONLINE,
	LLAMA_31_SONAR_HUGE_128K_ONLINE,
	LLAMA_31_SONAR_SMALL_128K_CHAT,
	LLAMA_31_SONAR_LARGE_128K_CHAT,
	LLAMA_31_8B_INSTRUCT,
	LLAMA_31_70B_INSTRUCT,
];
