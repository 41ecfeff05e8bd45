// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::{FeatureGateError, Result};

/// Serving of network policy statistics.
pub const NETWORK_POLICY_STATS: &str = "NetworkPolicyStats";

/// Cluster-scoped and tiered network policies.
pub const CLUSTER_NETWORK_POLICY: &str = "ClusterNetworkPolicy";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeatureStage {
	Alpha,
	Beta,
	#[serde(rename = "GA")]
	Ga,
}

impl fmt::Display for FeatureStage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FeatureStage::Alpha => write!(f, "ALPHA"),
			FeatureStage::Beta => write!(f, "BETA"),
			FeatureStage::Ga => write!(f, "GA"),
		}
	}
}

/// A feature gate this build knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownFeature {
	pub name: &'static str,
	pub default: bool,
	pub stage: FeatureStage,
}

/// Every gate that may be set. Anything else is rejected at parse time.
pub const KNOWN_FEATURES: &[KnownFeature] = &[
	KnownFeature {
		name: NETWORK_POLICY_STATS,
		default: false,
		stage: FeatureStage::Alpha,
	},
	KnownFeature {
		name: CLUSTER_NETWORK_POLICY,
		default: false,
		stage: FeatureStage::Alpha,
	},
];

/// Looks up a known feature by its exact name.
pub fn known_feature(name: &str) -> Option<&'static KnownFeature> {
	KNOWN_FEATURES.iter().find(|f| f.name == name)
}

/// Read-only view of feature gate state.
pub trait FeatureGate: Send + Sync {
	/// Returns whether `feature` is enabled. Unknown features are disabled.
	fn enabled(&self, feature: &str) -> bool;
}

/// Resolved feature gate state: every known feature mapped to on or off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FeatureGateSet {
	gates: BTreeMap<String, bool>,
}

impl Default for FeatureGateSet {
	fn default() -> Self {
		Self::new()
	}
}

impl FeatureGateSet {
	/// Creates a set holding the default value of every known feature.
	pub fn new() -> Self {
		Self {
			gates: KNOWN_FEATURES
				.iter()
				.map(|f| (f.name.to_string(), f.default))
				.collect(),
		}
	}

	/// Returns a copy with `feature` set to `enabled`.
	pub fn with_feature(mut self, feature: &str, enabled: bool) -> Result<Self> {
		self.set(feature, enabled)?;
		Ok(self)
	}

	/// Applies overrides on top of the defaults.
	pub fn from_overrides<'a, I>(overrides: I) -> Result<Self>
	where
		I: IntoIterator<Item = (&'a String, &'a bool)>,
	{
		let mut set = Self::new();
		for (feature, enabled) in overrides {
			set.set(feature, *enabled)?;
		}
		Ok(set)
	}

	/// Parses a `Feature=bool,Feature=bool` specification on top of the defaults.
	///
	/// Whitespace around entries is ignored and empty entries are skipped.
	pub fn parse(spec: &str) -> Result<Self> {
		let mut set = Self::new();
		set.apply_spec(spec)?;
		Ok(set)
	}

	/// Applies a `Feature=bool,...` specification on top of the current values.
	pub fn apply_spec(&mut self, spec: &str) -> Result<()> {
		for entry in spec.split(',').map(str::trim).filter(|e| !e.is_empty()) {
			let (feature, value) = entry
				.split_once('=')
				.ok_or_else(|| FeatureGateError::Malformed(entry.to_string()))?;
			let feature = feature.trim();
			let value = value.trim();
			let enabled = match value.to_ascii_lowercase().as_str() {
				"true" => true,
				"false" => false,
				_ => {
					return Err(FeatureGateError::InvalidValue {
						feature: feature.to_string(),
						value: value.to_string(),
					})
				}
			};
			self.set(feature, enabled)?;
		}
		Ok(())
	}

	/// Iterates over `(feature, enabled)` in name order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
		self.gates.iter().map(|(k, v)| (k.as_str(), *v))
	}

	fn set(&mut self, feature: &str, enabled: bool) -> Result<()> {
		if known_feature(feature).is_none() {
			return Err(FeatureGateError::UnknownFeature(feature.to_string()));
		}
		self.gates.insert(feature.to_string(), enabled);
		Ok(())
	}
}

impl FeatureGate for FeatureGateSet {
	fn enabled(&self, feature: &str) -> bool {
		self.gates.get(feature).copied().unwrap_or(false)
	}
}
