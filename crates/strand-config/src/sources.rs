// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: defaults, TOML files and environment variables.

use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

use strand_transform::OutputFormat;
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::StrandConfigLayer;
use crate::sections::{
	FeatureGatesConfigLayer, HttpConfigLayer, LogFormat, LoggingConfigLayer, OutputConfigLayer,
};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<StrandConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<StrandConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(StrandConfigLayer::default())
	}
}

/// TOML file configuration source.
pub struct TomlSource {
	path: PathBuf,
	required: bool,
}

impl TomlSource {
	/// A config file that may be absent.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			required: false,
		}
	}

	/// A config file the user asked for explicitly; a missing file is an error.
	pub fn required(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			required: true,
		}
	}

	pub fn system() -> Self {
		Self::new("/etc/strand/strand.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<StrandConfigLayer, ConfigError> {
		if !self.required && !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(StrandConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: StrandConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: STRAND_<SECTION>_<FIELD>
#[derive(Debug, Default)]
pub struct EnvSource {
	vars: Option<HashMap<String, String>>,
}

impl EnvSource {
	/// Reads the process environment.
	pub fn process() -> Self {
		Self::default()
	}

	/// Reads from `vars` instead of the process environment.
	pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			vars: Some(
				vars.into_iter()
					.map(|(k, v)| (k.into(), v.into()))
					.collect(),
			),
		}
	}

	fn var(&self, name: &str) -> Option<String> {
		let value = match &self.vars {
			Some(vars) => vars.get(name).cloned(),
			None => std::env::var(name).ok(),
		};
		value.filter(|s| !s.is_empty())
	}

	fn parsed<T>(&self, name: &str) -> Result<Option<T>, ConfigError>
	where
		T: FromStr,
		T::Err: std::fmt::Display,
	{
		match self.var(name) {
			Some(v) => v.parse().map(Some).map_err(|e| ConfigError::InvalidValue {
				key: name.to_string(),
				message: format!("invalid value '{v}': {e}"),
			}),
			None => Ok(None),
		}
	}

	fn load_http(&self) -> Result<HttpConfigLayer, ConfigError> {
		Ok(HttpConfigLayer {
			host: self.var("STRAND_HTTP_HOST"),
			port: self.parsed("STRAND_HTTP_PORT")?,
		})
	}

	fn load_logging(&self) -> Result<LoggingConfigLayer, ConfigError> {
		Ok(LoggingConfigLayer {
			level: self.var("STRAND_LOG_LEVEL"),
			format: self.parsed::<LogFormat>("STRAND_LOG_FORMAT")?,
		})
	}

	fn load_output(&self) -> Result<OutputConfigLayer, ConfigError> {
		Ok(OutputConfigLayer {
			max_column_width: self.parsed("STRAND_OUTPUT_MAX_COLUMN_WIDTH")?,
			format: self.parsed::<OutputFormat>("STRAND_OUTPUT_FORMAT")?,
		})
	}

	fn load_feature_gates(&self) -> Result<FeatureGatesConfigLayer, ConfigError> {
		const KEY: &str = "STRAND_FEATURE_GATES";
		match self.var(KEY) {
			Some(spec) => FeatureGatesConfigLayer::parse_spec(KEY, &spec),
			None => Ok(FeatureGatesConfigLayer::default()),
		}
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<StrandConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(StrandConfigLayer {
			http: Some(self.load_http()?),
			logging: Some(self.load_logging()?),
			output: Some(self.load_output()?),
			feature_gates: Some(self.load_feature_gates()?),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn precedence_order() {
		assert!(Precedence::Defaults < Precedence::ConfigFile);
		assert!(Precedence::ConfigFile < Precedence::Environment);
	}

	#[test]
	fn missing_optional_file_is_empty_layer() {
		let layer = TomlSource::new("/nonexistent/strand.toml").load().unwrap();
		assert_eq!(layer, StrandConfigLayer::default());
	}

	#[test]
	fn missing_required_file_errors() {
		let err = TomlSource::required("/nonexistent/strand.toml")
			.load()
			.unwrap_err();
		assert!(matches!(err, ConfigError::FileRead { .. }));
	}

	#[test]
	fn toml_file_is_parsed() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(
			file,
			"[http]\nport = 9000\n\n[output]\nformat = \"json\"\n\n[feature_gates]\nNetworkPolicyStats = true"
		)
		.unwrap();

		let layer = TomlSource::new(file.path()).load().unwrap();
		assert_eq!(layer.http.unwrap().port, Some(9000));
		assert_eq!(layer.output.unwrap().format, Some(OutputFormat::Json));
		assert_eq!(
			layer.feature_gates.unwrap().gates.get("NetworkPolicyStats"),
			Some(&true)
		);
	}

	#[test]
	fn invalid_toml_errors() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[http\nport = ").unwrap();
		let err = TomlSource::new(file.path()).load().unwrap_err();
		assert!(matches!(err, ConfigError::TomlParse { .. }));
	}

	#[test]
	fn env_values_are_read() {
		let source = EnvSource::from_vars([
			("STRAND_HTTP_HOST", "0.0.0.0"),
			("STRAND_HTTP_PORT", "8443"),
			("STRAND_LOG_FORMAT", "json"),
			("STRAND_OUTPUT_MAX_COLUMN_WIDTH", "40"),
			("STRAND_FEATURE_GATES", "NetworkPolicyStats=true"),
		]);
		let layer = source.load().unwrap();
		let http = layer.http.unwrap();
		assert_eq!(http.host.as_deref(), Some("0.0.0.0"));
		assert_eq!(http.port, Some(8443));
		assert_eq!(layer.logging.unwrap().format, Some(LogFormat::Json));
		assert_eq!(layer.output.unwrap().max_column_width, Some(40));
		assert_eq!(layer.feature_gates.unwrap().gates.len(), 1);
	}

	#[test]
	fn empty_env_values_are_ignored() {
		let layer = EnvSource::from_vars([("STRAND_HTTP_HOST", "")]).load().unwrap();
		assert_eq!(layer.http.unwrap().host, None);
	}

	#[test]
	fn bad_env_number_is_invalid_value() {
		let err = EnvSource::from_vars([("STRAND_HTTP_PORT", "http")])
			.load()
			.unwrap_err();
		assert!(matches!(
			err,
			ConfigError::InvalidValue { key, .. } if key == "STRAND_HTTP_PORT"
		));
	}
}
