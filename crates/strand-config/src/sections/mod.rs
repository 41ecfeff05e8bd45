// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

pub mod feature_gates;
pub mod http;
pub mod logging;
pub mod output;

pub use feature_gates::FeatureGatesConfigLayer;
pub use http::{HttpConfig, HttpConfigLayer};
pub use logging::{LogFormat, LoggingConfig, LoggingConfigLayer};
pub use output::{OutputConfig, OutputConfigLayer};
