// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Printing of transform output as a table, JSON or YAML.

use std::fmt;
use std::str::FromStr;

use comfy_table::{presets::NOTHING, Table};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, TransformError};
use crate::registry::TransformOutput;
use crate::table::Response;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
	#[default]
	Table,
	Json,
	Yaml,
}

impl fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			OutputFormat::Table => write!(f, "table"),
			OutputFormat::Json => write!(f, "json"),
			OutputFormat::Yaml => write!(f, "yaml"),
		}
	}
}

impl FromStr for OutputFormat {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"table" | "wide" => Ok(OutputFormat::Table),
			"json" => Ok(OutputFormat::Json),
			"yaml" | "yml" => Ok(OutputFormat::Yaml),
			other => Err(format!(
				"unknown output format '{other}', expected table, json or yaml"
			)),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
	pub max_column_width: usize,
	pub no_headers: bool,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			max_column_width: 80,
			no_headers: false,
		}
	}
}

pub fn render(
	output: &TransformOutput,
	format: OutputFormat,
	options: RenderOptions,
) -> Result<String> {
	match format {
		OutputFormat::Table => Ok(render_table(output.as_slice(), options)),
		OutputFormat::Json => render_json(output),
		OutputFormat::Yaml => render_yaml(output),
	}
}

/// Renders responses as a borderless table. Returns an empty string when
/// there is nothing to show.
pub fn render_table(responses: &[Box<dyn Response>], options: RenderOptions) -> String {
	let Some(first) = responses.first() else {
		return String::new();
	};
	let header = first.table_header();

	let mut rows: Vec<Vec<String>> = responses
		.iter()
		.map(|response| {
			let row = response.table_row(options.max_column_width);
			debug_assert_eq!(row.len(), header.len(), "row width differs from header");
			row
		})
		.collect();
	if first.sort_rows() {
		rows.sort_by(|a, b| a.first().cmp(&b.first()));
	}

	let mut table = Table::new();
	table.load_preset(NOTHING);
	if !options.no_headers {
		table.set_header(header.to_vec());
	}
	for row in rows {
		table.add_row(row);
	}

	table
		.to_string()
		.lines()
		.map(str::trim_end)
		.collect::<Vec<_>>()
		.join("\n")
}

pub fn render_json(output: &TransformOutput) -> Result<String> {
	let value = to_value(output)?;
	serde_json::to_string_pretty(&value).map_err(|e| TransformError::Render(e.to_string()))
}

pub fn render_yaml(output: &TransformOutput) -> Result<String> {
	let value = to_value(output)?;
	serde_yaml::to_string(&value).map_err(|e| TransformError::Render(e.to_string()))
}

fn to_value(output: &TransformOutput) -> Result<Value> {
	let render_err = |e: serde_json::Error| TransformError::Render(e.to_string());
	match output {
		TransformOutput::Single(response) => response.to_value().map_err(render_err),
		TransformOutput::List(responses) => responses
			.iter()
			.map(|response| response.to_value().map_err(render_err))
			.collect::<Result<Vec<_>>>()
			.map(Value::Array),
	}
}
