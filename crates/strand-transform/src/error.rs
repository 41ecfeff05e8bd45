// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TransformError>;

#[derive(Error, Debug)]
pub enum TransformError {
	#[error("failed to read input: {0}")]
	Read(#[from] std::io::Error),

	#[error("failed to decode {expected}: {source}")]
	Decode {
		expected: &'static str,
		#[source]
		source: serde_json::Error,
	},

	#[error("kind mismatch: expected {expected}, got {found}")]
	KindMismatch {
		expected: &'static str,
		found: String,
	},

	#[error("unknown resource type: {0}")]
	UnknownResource(String),

	#[error("failed to render output: {0}")]
	Render(String),
}
