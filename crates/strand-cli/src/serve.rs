// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `strand serve`: the stats API over HTTP.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use tokio::net::TcpListener;
use tracing::{info, warn};

use strand_api_types::NetworkPolicyStatsList;
use strand_config::StrandConfig;
use strand_feature_gates::FeatureGate;
use strand_server_stats::{router, MemoryStatsProvider, NetworkPolicyStatsRest, REQUIRED_FEATURES};

#[derive(Args, Debug)]
pub struct ServeArgs {
	/// NetworkPolicyStatsList to serve, as JSON or YAML
	#[arg(long, value_name = "FILE")]
	pub stats_file: Option<PathBuf>,

	/// Feature gate overrides, e.g. NetworkPolicyStats=true,ClusterNetworkPolicy=true
	#[arg(long, value_name = "SPEC")]
	pub feature_gates: Option<String>,
}

pub async fn run(args: ServeArgs, config: StrandConfig) -> Result<()> {
	let mut gates = config.feature_gates;
	if let Some(spec) = &args.feature_gates {
		gates
			.apply_spec(spec)
			.with_context(|| format!("invalid --feature-gates '{spec}'"))?;
	}
	for feature in REQUIRED_FEATURES {
		if !gates.enabled(feature) {
			warn!(feature, "feature gate disabled, stats requests will be refused");
		}
	}

	let provider = match &args.stats_file {
		Some(path) => load_provider(path)?,
		None => MemoryStatsProvider::new(),
	};
	info!(records = provider.len(), "stats provider ready");

	let rest = NetworkPolicyStatsRest::new(Arc::new(provider), Arc::new(gates));
	let app = router(Arc::new(rest));

	let addr = config.http.socket_addr();
	let listener = TcpListener::bind(&addr)
		.await
		.with_context(|| format!("failed to bind {addr}"))?;
	info!(%addr, "serving stats API");

	axum::serve(listener, app)
		.with_graceful_shutdown(shutdown_signal())
		.await
		.context("server error")?;

	info!("server stopped");
	Ok(())
}

/// Reads a stats list from `path`. `.yaml`/`.yml` files are parsed as YAML,
/// anything else as JSON.
pub fn load_provider(path: &Path) -> Result<MemoryStatsProvider> {
	let content = std::fs::read_to_string(path)
		.with_context(|| format!("failed to read {}", path.display()))?;
	let is_yaml = matches!(
		path.extension().and_then(|e| e.to_str()),
		Some("yaml" | "yml")
	);
	let list: NetworkPolicyStatsList = if is_yaml {
		serde_yaml::from_str(&content)
			.with_context(|| format!("failed to parse {}", path.display()))?
	} else {
		serde_json::from_str(&content)
			.with_context(|| format!("failed to parse {}", path.display()))?
	};
	MemoryStatsProvider::from_records(list.items)
		.with_context(|| format!("invalid stats in {}", path.display()))
}

async fn shutdown_signal() {
	if let Err(e) = tokio::signal::ctrl_c().await {
		warn!(error = %e, "failed to listen for shutdown signal");
		std::future::pending::<()>().await;
	}
	info!("shutdown signal received");
}
