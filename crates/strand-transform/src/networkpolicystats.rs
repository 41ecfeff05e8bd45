// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Display transform for `NetworkPolicyStats` objects.

use std::io::Read;

use serde::Serialize;
use strand_api_types::{NetworkPolicyStats, NetworkPolicyStatsList};

use crate::error::Result;
use crate::factory::{TransformFactory, Transformed};
use crate::table::TableOutput;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
	pub namespace: String,
	pub name: String,
	pub sessions: i64,
	pub packets: i64,
	pub bytes: i64,
}

pub const FACTORY: TransformFactory<NetworkPolicyStats, NetworkPolicyStatsList, Response> =
	TransformFactory::new(object_transform, list_transform);

pub fn object_transform(stats: &NetworkPolicyStats) -> Response {
	Response {
		namespace: stats.namespace().to_string(),
		name: stats.name().to_string(),
		sessions: stats.traffic_stats.sessions,
		packets: stats.traffic_stats.packets,
		bytes: stats.traffic_stats.bytes,
	}
}

pub fn list_transform(list: &NetworkPolicyStatsList) -> Vec<Response> {
	list.items.iter().map(object_transform).collect()
}

pub fn transform(reader: impl Read, single: bool) -> Result<Transformed<Response>> {
	FACTORY.transform(reader, single)
}

impl TableOutput for Response {
	fn table_header(&self) -> &'static [&'static str] {
		&["NAMESPACE", "NAME", "SESSIONS", "PACKETS", "BYTES"]
	}

	fn table_row(&self, _max_column_width: usize) -> Vec<String> {
		vec![
			self.namespace.clone(),
			self.name.clone(),
			self.sessions.to_string(),
			self.packets.to_string(),
			self.bytes.to_string(),
		]
	}

	fn sort_rows(&self) -> bool {
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use strand_api_types::TrafficStats;

	#[test]
	fn object_transform_flattens_counters() {
		let stats = NetworkPolicyStats::new(
			"foo",
			"bar",
			TrafficStats {
				packets: 10,
				bytes: 2000,
				sessions: 1,
			},
		);
		let response = object_transform(&stats);
		assert_eq!(
			response.table_row(80),
			vec!["foo", "bar", "1", "10", "2000"]
		);
		assert_eq!(response.table_header().len(), 5);
	}

	#[test]
	fn transform_list_from_json() {
		let json = r#"{
			"kind": "NetworkPolicyStatsList",
			"items": [
				{"metadata": {"namespace": "foo", "name": "bar"}, "trafficStats": {"packets": 5}},
				{"metadata": {"namespace": "foo1", "name": "bar1"}}
			]
		}"#;
		let responses = transform(json.as_bytes(), false).unwrap().into_vec();
		assert_eq!(responses.len(), 2);
		assert_eq!(responses[0].packets, 5);
		assert_eq!(responses[1].namespace, "foo1");
		assert_eq!(responses[1].bytes, 0);
	}

	#[test]
	fn structured_output_is_flat() {
		let response = object_transform(&NetworkPolicyStats::new("ns", "np", TrafficStats::default()));
		assert_eq!(
			serde_json::to_value(&response).unwrap(),
			serde_json::json!({
				"namespace": "ns",
				"name": "np",
				"sessions": 0,
				"packets": 0,
				"bytes": 0
			})
		);
	}
}
