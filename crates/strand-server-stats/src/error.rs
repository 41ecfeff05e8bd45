// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Stats errors and their HTTP response conversions.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, StatsError>;

/// Failure inside a [`StatsProvider`](crate::StatsProvider) implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
	#[error("duplicate stats record {namespace}/{name}")]
	Duplicate { namespace: String, name: String },

	#[error("stats record has no name")]
	MissingName,

	#[error("stats provider unavailable: {0}")]
	Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StatsError {
	#[error("feature gate {feature} is disabled")]
	FeatureDisabled { feature: &'static str },

	#[error("networkpolicystats {namespace}/{name} not found")]
	NotFound { namespace: String, name: String },

	#[error(transparent)]
	Provider(#[from] ProviderError),
}

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

impl IntoResponse for StatsError {
	fn into_response(self) -> Response {
		let (status, error_response) = match &self {
			StatsError::FeatureDisabled { feature } => (
				StatusCode::FORBIDDEN,
				ErrorResponse {
					error: "feature_disabled".to_string(),
					message: format!(
						"NetworkPolicyStats API is disabled; enable the {feature} feature gate to serve it"
					),
				},
			),
			StatsError::NotFound { .. } => (
				StatusCode::NOT_FOUND,
				ErrorResponse {
					error: "not_found".to_string(),
					message: self.to_string(),
				},
			),
			StatsError::Provider(e) => {
				tracing::error!(error = %e, "stats provider error");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					ErrorResponse {
						error: "provider_error".to_string(),
						message: "The stats provider failed".to_string(),
					},
				)
			}
		};

		(status, Json(error_response)).into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_codes() {
		let cases = [
			(
				StatsError::FeatureDisabled {
					feature: "NetworkPolicyStats",
				},
				StatusCode::FORBIDDEN,
			),
			(
				StatsError::NotFound {
					namespace: "foo".to_string(),
					name: "bar".to_string(),
				},
				StatusCode::NOT_FOUND,
			),
			(
				StatsError::Provider(ProviderError::Unavailable("down".to_string())),
				StatusCode::INTERNAL_SERVER_ERROR,
			),
		];
		for (err, status) in cases {
			assert_eq!(err.into_response().status(), status);
		}
	}

	#[test]
	fn provider_error_passes_through() {
		let err: StatsError = ProviderError::MissingName.into();
		assert!(matches!(err, StatsError::Provider(ProviderError::MissingName)));
		assert_eq!(err.to_string(), "stats record has no name");
	}
}
