// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration management for strand.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`STRAND_*`)
//!
//! # Usage
//!
//! ```ignore
//! use strand_config::load_config;
//!
//! let config = load_config()?;
//! println!("stats API listening on {}", config.http.socket_addr());
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::StrandConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use std::path::PathBuf;

use strand_feature_gates::FeatureGateSet;
use tracing::{debug, info};

/// Fully resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrandConfig {
	pub http: HttpConfig,
	pub logging: LoggingConfig,
	pub output: OutputConfig,
	pub feature_gates: FeatureGateSet,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`STRAND_*`)
/// 2. Config file (`/etc/strand/strand.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<StrandConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource::process()),
	];
	load_from_sources(sources)
}

/// Load configuration with an explicit config file, which must exist.
pub fn load_config_with_file(
	config_path: impl Into<PathBuf>,
) -> Result<StrandConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::required(config_path)),
		Box::new(EnvSource::process()),
	];
	load_from_sources(sources)
}

/// Merge `sources` in precedence order and resolve the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<StrandConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = StrandConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: StrandConfigLayer) -> Result<StrandConfig, ConfigError> {
	let http = layer.http.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();
	let output = layer.output.unwrap_or_default().finalize();
	let feature_gates = layer.feature_gates.unwrap_or_default().finalize()?;

	validate_config(&http, &output)?;

	info!(
		host = %http.host,
		port = http.port,
		log_format = %logging.format,
		output_format = %output.format,
		"configuration loaded"
	);

	Ok(StrandConfig {
		http,
		logging,
		output,
		feature_gates,
	})
}

/// Validate cross-field configuration rules.
fn validate_config(http: &HttpConfig, output: &OutputConfig) -> Result<(), ConfigError> {
	if http.host.trim().is_empty() {
		return Err(ConfigError::Validation("http.host must not be empty".to_string()));
	}
	if output.max_column_width == 0 {
		return Err(ConfigError::Validation(
			"output.max_column_width must be greater than zero".to_string(),
		));
	}
	Ok(())
}
