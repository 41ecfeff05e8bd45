// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Network policy statistics objects.

use serde::{Deserialize, Serialize};

use crate::resource::register_kind;
use crate::{ListMeta, ObjectMeta};

pub const API_VERSION: &str = "stats.strand.io/v1alpha1";

/// Traffic counters accumulated for one policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficStats {
	#[serde(default)]
	pub packets: i64,
	#[serde(default)]
	pub bytes: i64,
	#[serde(default)]
	pub sessions: i64,
}

/// Aggregated traffic statistics of one namespaced network policy.
///
/// Records are keyed by `(metadata.namespace, metadata.name)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkPolicyStats {
	#[serde(default)]
	pub metadata: ObjectMeta,
	#[serde(default)]
	pub traffic_stats: TrafficStats,
}

impl NetworkPolicyStats {
	pub fn new(
		namespace: impl Into<String>,
		name: impl Into<String>,
		traffic_stats: TrafficStats,
	) -> Self {
		Self {
			metadata: ObjectMeta {
				namespace: Some(namespace.into()),
				name: Some(name.into()),
				..Default::default()
			},
			traffic_stats,
		}
	}

	pub fn namespace(&self) -> &str {
		self.metadata.namespace.as_deref().unwrap_or_default()
	}

	pub fn name(&self) -> &str {
		self.metadata.name.as_deref().unwrap_or_default()
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkPolicyStatsList {
	#[serde(default)]
	pub metadata: ListMeta,
	#[serde(default)]
	pub items: Vec<NetworkPolicyStats>,
}

register_kind!(NetworkPolicyStats, NetworkPolicyStatsList, API_VERSION);
