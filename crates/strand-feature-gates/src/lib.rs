// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Feature gates for Strand.
//!
//! A feature gate is a named boolean that decides whether an optional
//! subsystem's API surface may be served. Gates are resolved once at startup
//! into a [`FeatureGateSet`] and passed explicitly to the components that
//! consult them; nothing here reads process-global state.
//!
//! # Example
//!
//! ```
//! use strand_feature_gates::{FeatureGate, FeatureGateSet, NETWORK_POLICY_STATS};
//!
//! let gates = FeatureGateSet::parse("NetworkPolicyStats=true").unwrap();
//! assert!(gates.enabled(NETWORK_POLICY_STATS));
//! ```

mod error;
mod gate;

pub use error::{FeatureGateError, Result};
pub use gate::{
	known_feature, FeatureGate, FeatureGateSet, FeatureStage, KnownFeature,
	CLUSTER_NETWORK_POLICY, KNOWN_FEATURES, NETWORK_POLICY_STATS,
};
