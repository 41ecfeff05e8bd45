// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Server-side table form of stats records, served for `?as=table`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strand_api_types::{NetworkPolicyStats, NetworkPolicyStatsList};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumnDefinition {
	pub name: String,
	#[serde(rename = "type")]
	pub column_type: String,
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
	pub cells: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsTable {
	pub kind: String,
	pub api_version: String,
	pub column_definitions: Vec<TableColumnDefinition>,
	pub rows: Vec<TableRow>,
}

/// What to convert: one record or a whole list.
#[derive(Debug, Clone, Copy)]
pub enum TableSource<'a> {
	Object(&'a NetworkPolicyStats),
	List(&'a NetworkPolicyStatsList),
}

impl<'a> From<&'a NetworkPolicyStats> for TableSource<'a> {
	fn from(stats: &'a NetworkPolicyStats) -> Self {
		TableSource::Object(stats)
	}
}

impl<'a> From<&'a NetworkPolicyStatsList> for TableSource<'a> {
	fn from(list: &'a NetworkPolicyStatsList) -> Self {
		TableSource::List(list)
	}
}

impl TableSource<'_> {
	fn items(&self) -> &[NetworkPolicyStats] {
		match self {
			TableSource::Object(stats) => std::slice::from_ref(*stats),
			TableSource::List(list) => &list.items,
		}
	}
}

fn column(name: &str, column_type: &str, description: &str) -> TableColumnDefinition {
	TableColumnDefinition {
		name: name.to_string(),
		column_type: column_type.to_string(),
		description: description.to_string(),
	}
}

impl StatsTable {
	pub fn from_source(source: TableSource<'_>) -> Self {
		Self {
			kind: "Table".to_string(),
			api_version: "meta.k8s.io/v1".to_string(),
			column_definitions: vec![
				column("Name", "string", "Name of the network policy."),
				column("Sessions", "integer", "Number of sessions the policy matched."),
				column("Packets", "integer", "Number of packets the policy matched."),
				column("Bytes", "integer", "Number of bytes the policy matched."),
			],
			rows: source
				.items()
				.iter()
				.map(|stats| TableRow {
					cells: vec![
						Value::from(stats.name()),
						Value::from(stats.traffic_stats.sessions),
						Value::from(stats.traffic_stats.packets),
						Value::from(stats.traffic_stats.bytes),
					],
				})
				.collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use strand_api_types::{ResourceList, TrafficStats};

	#[test]
	fn object_converts_to_one_row() {
		let stats = NetworkPolicyStats::new(
			"foo",
			"bar",
			TrafficStats {
				packets: 3,
				bytes: 300,
				sessions: 1,
			},
		);
		let table = StatsTable::from_source((&stats).into());
		let names: Vec<_> = table
			.column_definitions
			.iter()
			.map(|c| c.name.as_str())
			.collect();
		assert_eq!(names, vec!["Name", "Sessions", "Packets", "Bytes"]);
		assert_eq!(table.rows.len(), 1);
		assert_eq!(
			table.rows[0].cells,
			vec![
				Value::from("bar"),
				Value::from(1),
				Value::from(3),
				Value::from(300)
			]
		);
	}

	#[test]
	fn list_converts_every_item() {
		let list = NetworkPolicyStatsList::from_items(vec![
			NetworkPolicyStats::new("a", "x", TrafficStats::default()),
			NetworkPolicyStats::new("b", "y", TrafficStats::default()),
		]);
		let table = StatsTable::from_source((&list).into());
		assert_eq!(table.rows.len(), 2);
		for row in &table.rows {
			assert_eq!(row.cells.len(), table.column_definitions.len());
		}
		let json = serde_json::to_value(&table).unwrap();
		assert_eq!(json["kind"], "Table");
		assert_eq!(json["columnDefinitions"][1]["type"], "integer");
	}
}
