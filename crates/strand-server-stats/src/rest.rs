// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Read-only registry for the `networkpolicystats` resource.

use std::sync::Arc;

use strand_api_types::{NetworkPolicyStats, NetworkPolicyStatsList, Resource, ResourceList};
use strand_feature_gates::{FeatureGate, CLUSTER_NETWORK_POLICY, NETWORK_POLICY_STATS};
use tracing::{debug, instrument};

use crate::context::RequestContext;
use crate::error::{Result, StatsError};
use crate::provider::StatsProvider;
use crate::table::{StatsTable, TableSource};

/// Gates that must all be enabled before any stats are served, in check order.
pub const REQUIRED_FEATURES: [&str; 2] = [NETWORK_POLICY_STATS, CLUSTER_NETWORK_POLICY];

/// Serves `NetworkPolicyStats` from a [`StatsProvider`].
///
/// Holds no state of its own; every call goes straight to the provider once
/// the feature gates allow it.
#[derive(Clone)]
pub struct NetworkPolicyStatsRest {
	provider: Arc<dyn StatsProvider>,
	gates: Arc<dyn FeatureGate>,
}

impl NetworkPolicyStatsRest {
	pub fn new(provider: Arc<dyn StatsProvider>, gates: Arc<dyn FeatureGate>) -> Self {
		Self { provider, gates }
	}

	pub fn new_object(&self) -> NetworkPolicyStats {
		NetworkPolicyStats::default()
	}

	pub fn new_list(&self) -> NetworkPolicyStatsList {
		NetworkPolicyStatsList::default()
	}

	pub fn namespace_scoped(&self) -> bool {
		true
	}

	pub fn kind(&self) -> &'static str {
		NetworkPolicyStats::KIND
	}

	/// Fetches the record `name` in the context's namespace.
	#[instrument(skip(self, ctx), fields(namespace = ctx.namespace().unwrap_or_default()))]
	pub fn get(&self, ctx: &RequestContext, name: &str) -> Result<NetworkPolicyStats> {
		self.check_features()?;
		let namespace = ctx.namespace().unwrap_or_default();
		debug!("looking up network policy stats");
		self.provider
			.get_stats(namespace, name)?
			.ok_or_else(|| StatsError::NotFound {
				namespace: namespace.to_string(),
				name: name.to_string(),
			})
	}

	/// Lists records in the context's namespace, or everywhere when it has none.
	#[instrument(skip(self, ctx), fields(namespace = ctx.namespace().unwrap_or_default()))]
	pub fn list(&self, ctx: &RequestContext) -> Result<NetworkPolicyStatsList> {
		self.check_features()?;
		let items = self
			.provider
			.list_stats(ctx.namespace().unwrap_or_default())?;
		debug!(count = items.len(), "listed network policy stats");
		Ok(NetworkPolicyStatsList::from_items(items))
	}

	pub fn convert_to_table<'a>(&self, source: impl Into<TableSource<'a>>) -> StatsTable {
		StatsTable::from_source(source.into())
	}

	fn check_features(&self) -> Result<()> {
		for feature in REQUIRED_FEATURES {
			if !self.gates.enabled(feature) {
				debug!(feature, "stats request refused by feature gate");
				return Err(StatsError::FeatureDisabled { feature });
			}
		}
		Ok(())
	}
}
