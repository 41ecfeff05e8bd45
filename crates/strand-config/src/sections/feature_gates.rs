// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Feature gate overrides.
//!
//! In TOML the section is a plain table of gate names to booleans:
//!
//! ```toml
//! [feature_gates]
//! NetworkPolicyStats = true
//! ClusterNetworkPolicy = true
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;
use strand_feature_gates::FeatureGateSet;

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FeatureGatesConfigLayer {
	pub gates: BTreeMap<String, bool>,
}

impl FeatureGatesConfigLayer {
	/// Parses a `Feature=bool,Feature=bool` list. Names are checked at finalize.
	pub fn parse_spec(key: &str, spec: &str) -> Result<Self, ConfigError> {
		let mut gates = BTreeMap::new();
		for entry in spec.split(',').map(str::trim).filter(|e| !e.is_empty()) {
			let invalid = || ConfigError::InvalidValue {
				key: key.to_string(),
				message: format!("invalid feature gate entry '{entry}', expected Name=true|false"),
			};
			let (name, value) = entry.split_once('=').ok_or_else(invalid)?;
			let enabled = match value.trim().to_ascii_lowercase().as_str() {
				"true" => true,
				"false" => false,
				_ => return Err(invalid()),
			};
			gates.insert(name.trim().to_string(), enabled);
		}
		Ok(Self { gates })
	}

	pub fn merge(&mut self, other: FeatureGatesConfigLayer) {
		self.gates.extend(other.gates);
	}

	/// Applies the overrides to the defaults. Unknown gate names are rejected.
	pub fn finalize(self) -> Result<FeatureGateSet, ConfigError> {
		FeatureGateSet::from_overrides(&self.gates)
			.map_err(|e| ConfigError::Validation(format!("feature_gates: {e}")))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use strand_feature_gates::{FeatureGate, CLUSTER_NETWORK_POLICY, NETWORK_POLICY_STATS};

	#[test]
	fn defaults_are_closed() {
		let gates = FeatureGatesConfigLayer::default().finalize().unwrap();
		assert!(!gates.enabled(NETWORK_POLICY_STATS));
		assert!(!gates.enabled(CLUSTER_NETWORK_POLICY));
	}

	#[test]
	fn merge_overrides_per_gate() {
		let mut base = FeatureGatesConfigLayer::parse_spec(
			"file",
			"NetworkPolicyStats=true,ClusterNetworkPolicy=true",
		)
		.unwrap();
		let env = FeatureGatesConfigLayer::parse_spec("env", "ClusterNetworkPolicy=false").unwrap();
		base.merge(env);
		let gates = base.finalize().unwrap();
		assert!(gates.enabled(NETWORK_POLICY_STATS));
		assert!(!gates.enabled(CLUSTER_NETWORK_POLICY));
	}

	#[test]
	fn unknown_gate_fails_validation() {
		let layer = FeatureGatesConfigLayer::parse_spec("env", "Bogus=true").unwrap();
		assert!(matches!(layer.finalize(), Err(ConfigError::Validation(_))));
	}

	#[test]
	fn malformed_spec_is_invalid_value() {
		let err = FeatureGatesConfigLayer::parse_spec("STRAND_FEATURE_GATES", "NetworkPolicyStats")
			.unwrap_err();
		assert!(matches!(
			err,
			ConfigError::InvalidValue { key, .. } if key == "STRAND_FEATURE_GATES"
		));
		assert!(FeatureGatesConfigLayer::parse_spec("k", "NetworkPolicyStats=on").is_err());
	}

	#[test]
	fn layer_from_toml() {
		let layer: FeatureGatesConfigLayer = toml::from_str("NetworkPolicyStats = true").unwrap();
		assert_eq!(layer.gates.get(NETWORK_POLICY_STATS), Some(&true));
	}
}
