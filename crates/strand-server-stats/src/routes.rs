// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP routes for the stats API.

use std::sync::Arc;

use axum::{
	extract::{Path, Query, State},
	response::{IntoResponse, Response},
	routing::get,
	Json, Router,
};
use serde::Deserialize;

use crate::context::RequestContext;
use crate::error::StatsError;
use crate::rest::NetworkPolicyStatsRest;

pub const API_PREFIX: &str = "/apis/stats.strand.io/v1alpha1";

/// Query parameters shared by every stats route.
#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
	#[serde(rename = "as")]
	pub view: Option<String>,
}

impl ViewQuery {
	fn as_table(&self) -> bool {
		self.view
			.as_deref()
			.is_some_and(|v| v.eq_ignore_ascii_case("table"))
	}
}

pub fn router(rest: Arc<NetworkPolicyStatsRest>) -> Router {
	Router::new()
		.route(&format!("{API_PREFIX}/networkpolicystats"), get(list_all))
		.route(
			&format!("{API_PREFIX}/namespaces/{{namespace}}/networkpolicystats"),
			get(list_namespaced),
		)
		.route(
			&format!("{API_PREFIX}/namespaces/{{namespace}}/networkpolicystats/{{name}}"),
			get(get_one),
		)
		.with_state(rest)
}

/// GET /apis/stats.strand.io/v1alpha1/networkpolicystats
pub async fn list_all(
	State(rest): State<Arc<NetworkPolicyStatsRest>>,
	Query(query): Query<ViewQuery>,
) -> Result<Response, StatsError> {
	list(&rest, &RequestContext::all_namespaces(), &query)
}

/// GET /apis/stats.strand.io/v1alpha1/namespaces/{namespace}/networkpolicystats
pub async fn list_namespaced(
	State(rest): State<Arc<NetworkPolicyStatsRest>>,
	Path(namespace): Path<String>,
	Query(query): Query<ViewQuery>,
) -> Result<Response, StatsError> {
	list(&rest, &RequestContext::with_namespace(namespace), &query)
}

/// GET /apis/stats.strand.io/v1alpha1/namespaces/{namespace}/networkpolicystats/{name}
pub async fn get_one(
	State(rest): State<Arc<NetworkPolicyStatsRest>>,
	Path((namespace, name)): Path<(String, String)>,
	Query(query): Query<ViewQuery>,
) -> Result<Response, StatsError> {
	let stats = rest.get(&RequestContext::with_namespace(namespace), &name)?;
	if query.as_table() {
		return Ok(Json(rest.convert_to_table(&stats)).into_response());
	}
	Ok(Json(stats).into_response())
}

fn list(
	rest: &NetworkPolicyStatsRest,
	ctx: &RequestContext,
	query: &ViewQuery,
) -> Result<Response, StatsError> {
	let list = rest.list(ctx)?;
	if query.as_table() {
		return Ok(Json(rest.convert_to_table(&list)).into_response());
	}
	Ok(Json(list).into_response())
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::body::{to_bytes, Body};
	use axum::http::{Request, StatusCode};
	use serde_json::Value;
	use strand_api_types::{NetworkPolicyStats, TrafficStats};
	use strand_feature_gates::{FeatureGateSet, CLUSTER_NETWORK_POLICY, NETWORK_POLICY_STATS};
	use tower::ServiceExt;

	use crate::error::ErrorResponse;
	use crate::provider::MemoryStatsProvider;

	fn app(stats: bool, policy: bool) -> Router {
		let provider = MemoryStatsProvider::from_records([
			NetworkPolicyStats::new(
				"foo",
				"bar",
				TrafficStats {
					packets: 10,
					bytes: 1000,
					sessions: 2,
				},
			),
			NetworkPolicyStats::new("foo1", "bar1", TrafficStats::default()),
		])
		.unwrap();
		let gates = FeatureGateSet::new()
			.with_feature(NETWORK_POLICY_STATS, stats)
			.unwrap()
			.with_feature(CLUSTER_NETWORK_POLICY, policy)
			.unwrap();
		router(Arc::new(NetworkPolicyStatsRest::new(
			Arc::new(provider),
			Arc::new(gates),
		)))
	}

	async fn call(app: Router, uri: &str) -> (StatusCode, Value) {
		let req = Request::get(uri).body(Body::empty()).unwrap();
		let resp = app.oneshot(req).await.unwrap();
		let status = resp.status();
		let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
		(status, serde_json::from_slice(&body).unwrap())
	}

	#[tokio::test]
	async fn list_all_returns_every_record() {
		let (status, body) =
			call(app(true, true), "/apis/stats.strand.io/v1alpha1/networkpolicystats").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["items"].as_array().unwrap().len(), 2);
	}

	#[tokio::test]
	async fn list_namespaced_filters() {
		let (status, body) = call(
			app(true, true),
			"/apis/stats.strand.io/v1alpha1/namespaces/foo/networkpolicystats",
		)
		.await;
		assert_eq!(status, StatusCode::OK);
		let items = body["items"].as_array().unwrap();
		assert_eq!(items.len(), 1);
		assert_eq!(items[0]["metadata"]["name"], "bar");
		assert_eq!(items[0]["trafficStats"]["packets"], 10);
	}

	#[tokio::test]
	async fn get_one_record() {
		let (status, body) = call(
			app(true, true),
			"/apis/stats.strand.io/v1alpha1/namespaces/foo1/networkpolicystats/bar1",
		)
		.await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["metadata"]["namespace"], "foo1");
	}

	#[tokio::test]
	async fn missing_record_is_404() {
		let (status, body) = call(
			app(true, true),
			"/apis/stats.strand.io/v1alpha1/namespaces/foo/networkpolicystats/missing",
		)
		.await;
		assert_eq!(status, StatusCode::NOT_FOUND);
		let err: ErrorResponse = serde_json::from_value(body).unwrap();
		assert_eq!(err.error, "not_found");
	}

	#[tokio::test]
	async fn disabled_gate_is_403() {
		for (stats, policy) in [(false, true), (true, false), (false, false)] {
			let (status, body) = call(
				app(stats, policy),
				"/apis/stats.strand.io/v1alpha1/networkpolicystats",
			)
			.await;
			assert_eq!(status, StatusCode::FORBIDDEN);
			assert_eq!(body["error"], "feature_disabled");
		}
	}

	#[tokio::test]
	async fn table_view() {
		let (status, body) = call(
			app(true, true),
			"/apis/stats.strand.io/v1alpha1/namespaces/foo/networkpolicystats?as=Table",
		)
		.await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["kind"], "Table");
		assert_eq!(body["rows"][0]["cells"], serde_json::json!(["bar", 2, 10, 1000]));
	}
}
