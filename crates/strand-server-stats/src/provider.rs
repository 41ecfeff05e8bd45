// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Sources of network policy statistics.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard};

use strand_api_types::NetworkPolicyStats;

use crate::error::ProviderError;

/// Read access to aggregated statistics records.
///
/// Implementations must never return two records with the same
/// `(namespace, name)` key.
pub trait StatsProvider: Send + Sync {
	/// Records in `namespace`, or in every namespace when `namespace` is empty.
	fn list_stats(&self, namespace: &str) -> Result<Vec<NetworkPolicyStats>, ProviderError>;

	fn get_stats(
		&self,
		namespace: &str,
		name: &str,
	) -> Result<Option<NetworkPolicyStats>, ProviderError>;
}

type Index = BTreeMap<String, BTreeMap<String, NetworkPolicyStats>>;

/// In-memory `namespace -> name -> record` index.
#[derive(Debug, Default)]
pub struct MemoryStatsProvider {
	index: RwLock<Index>,
}

impl MemoryStatsProvider {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a provider from `records`, failing on the first duplicate key.
	pub fn from_records(
		records: impl IntoIterator<Item = NetworkPolicyStats>,
	) -> Result<Self, ProviderError> {
		let provider = Self::new();
		for record in records {
			provider.insert(record)?;
		}
		Ok(provider)
	}

	pub fn insert(&self, record: NetworkPolicyStats) -> Result<(), ProviderError> {
		if record.name().is_empty() {
			return Err(ProviderError::MissingName);
		}
		let mut index = self
			.index
			.write()
			.map_err(|_| ProviderError::Unavailable("stats index lock poisoned".to_string()))?;
		let names = index.entry(record.namespace().to_string()).or_default();
		if names.contains_key(record.name()) {
			return Err(ProviderError::Duplicate {
				namespace: record.namespace().to_string(),
				name: record.name().to_string(),
			});
		}
		names.insert(record.name().to_string(), record);
		Ok(())
	}

	pub fn len(&self) -> usize {
		self.read()
			.map(|index| index.values().map(BTreeMap::len).sum())
			.unwrap_or(0)
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn read(&self) -> Result<RwLockReadGuard<'_, Index>, ProviderError> {
		self.index
			.read()
			.map_err(|_| ProviderError::Unavailable("stats index lock poisoned".to_string()))
	}
}

impl StatsProvider for MemoryStatsProvider {
	fn list_stats(&self, namespace: &str) -> Result<Vec<NetworkPolicyStats>, ProviderError> {
		let index = self.read()?;
		let records = if namespace.is_empty() {
			index.values().flat_map(BTreeMap::values).cloned().collect()
		} else {
			index
				.get(namespace)
				.map(|names| names.values().cloned().collect())
				.unwrap_or_default()
		};
		Ok(records)
	}

	fn get_stats(
		&self,
		namespace: &str,
		name: &str,
	) -> Result<Option<NetworkPolicyStats>, ProviderError> {
		let index = self.read()?;
		Ok(index
			.get(namespace)
			.and_then(|names| names.get(name))
			.cloned())
	}
}
