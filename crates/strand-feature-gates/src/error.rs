// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FeatureGateError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeatureGateError {
	#[error("unrecognized feature gate: {0}")]
	UnknownFeature(String),

	#[error("invalid value of {feature}={value}, must be true or false")]
	InvalidValue { feature: String, value: String },

	#[error("missing bool value for feature gate entry '{0}'")]
	Malformed(String),
}
