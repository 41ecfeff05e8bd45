// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Defaults for `strand get` output.

use serde::Deserialize;
use strand_transform::OutputFormat;

pub const DEFAULT_MAX_COLUMN_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
	pub max_column_width: usize,
	pub format: OutputFormat,
}

impl Default for OutputConfig {
	fn default() -> Self {
		Self {
			max_column_width: DEFAULT_MAX_COLUMN_WIDTH,
			format: OutputFormat::Table,
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OutputConfigLayer {
	#[serde(default)]
	pub max_column_width: Option<usize>,
	#[serde(default)]
	pub format: Option<OutputFormat>,
}

impl OutputConfigLayer {
	pub fn merge(&mut self, other: OutputConfigLayer) {
		if other.max_column_width.is_some() {
			self.max_column_width = other.max_column_width;
		}
		if other.format.is_some() {
			self.format = other.format;
		}
	}

	pub fn finalize(self) -> OutputConfig {
		OutputConfig {
			max_column_width: self.max_column_width.unwrap_or(DEFAULT_MAX_COLUMN_WIDTH),
			format: self.format.unwrap_or_default(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		assert_eq!(OutputConfigLayer::default().finalize(), OutputConfig::default());
	}

	#[test]
	fn layer_from_toml() {
		let layer: OutputConfigLayer =
			toml::from_str("max_column_width = 120\nformat = \"yaml\"").unwrap();
		let config = layer.finalize();
		assert_eq!(config.max_column_width, 120);
		assert_eq!(config.format, OutputFormat::Yaml);
	}
}
