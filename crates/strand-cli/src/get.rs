// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `strand get`: decode, transform and print.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, instrument};

use strand_config::OutputConfig;
use strand_transform::{render, OutputFormat, RenderOptions, TransformRegistry};

#[derive(Args, Debug)]
pub struct GetArgs {
	/// Resource type, e.g. appliedtogroups, addressgroups, networkpolicystats
	pub resource: String,

	/// Input file; `-` or omitted reads stdin
	#[arg(short = 'f', long = "filename", value_name = "FILE")]
	pub filename: Option<PathBuf>,

	/// Input holds a single object instead of a list
	#[arg(long)]
	pub single: bool,

	/// Output format: table, json or yaml
	#[arg(short = 'o', long = "output")]
	pub output: Option<OutputFormat>,

	/// Width budget for summarized columns
	#[arg(long)]
	pub max_column_width: Option<usize>,

	/// Omit the table header
	#[arg(long)]
	pub no_headers: bool,
}

pub fn run(args: GetArgs, defaults: &OutputConfig) -> Result<()> {
	let input = open_input(args.filename.as_ref())?;
	let text = execute(&args, defaults, input)?;
	let mut stdout = io::stdout().lock();
	writeln!(stdout, "{text}").context("failed to write output")?;
	Ok(())
}

fn open_input(path: Option<&PathBuf>) -> Result<Box<dyn Read>> {
	match path {
		Some(path) if path.as_os_str() != "-" => {
			let file = File::open(path)
				.with_context(|| format!("failed to open {}", path.display()))?;
			Ok(Box::new(file))
		}
		_ => Ok(Box::new(io::stdin())),
	}
}

/// Runs the transform over `input` and returns the text to print.
#[instrument(skip(defaults, input), fields(resource = %args.resource, single = args.single))]
pub fn execute(args: &GetArgs, defaults: &OutputConfig, input: impl Read) -> Result<String> {
	let registry = TransformRegistry::builtin();
	let format = args.output.unwrap_or(defaults.format);
	let options = RenderOptions {
		max_column_width: args.max_column_width.unwrap_or(defaults.max_column_width),
		no_headers: args.no_headers,
	};

	let output = registry
		.transform(&args.resource, input, args.single)
		.with_context(|| format!("failed to transform {}", args.resource))?;
	debug!(count = output.as_slice().len(), %format, "transformed input");

	if format == OutputFormat::Table && output.as_slice().is_empty() {
		return Ok("No resources found.".to_string());
	}
	render::render(&output, format, options).context("failed to render output")
}

#[cfg(test)]
mod tests {
	use super::*;

	fn args(resource: &str, single: bool, output: Option<OutputFormat>) -> GetArgs {
		GetArgs {
			resource: resource.to_string(),
			filename: None,
			single,
			output,
			max_column_width: None,
			no_headers: false,
		}
	}

	const GROUPS: &str = r#"{"kind": "AppliedToGroupList", "items": [
		{"metadata": {"name": "web"}, "groupMembers": [
			{"pod": {"name": "web-1", "namespace": "prod"}},
			{"pod": {"name": "web-0", "namespace": "prod"}}
		]},
		{"metadata": {"name": "db"}}
	]}"#;

	#[test]
	fn table_output_sorts_rows() {
		let text = execute(&args("atg", false, None), &OutputConfig::default(), GROUPS.as_bytes())
			.unwrap();
		let lines: Vec<_> = text.lines().map(str::trim).collect();
		assert!(lines[0].starts_with("NAME"));
		assert_eq!(lines[1], "db");
		assert!(lines[2].starts_with("web"));
		assert!(lines[2].ends_with("prod/web-0, prod/web-1"));
	}

	#[test]
	fn column_width_flag_wins_over_config() {
		let mut get = args("atg", false, None);
		get.max_column_width = Some(10);
		let text = execute(&get, &OutputConfig::default(), GROUPS.as_bytes()).unwrap();
		assert!(text.contains("prod/web-0 + 1 more..."));
	}

	#[test]
	fn json_output_from_config_default() {
		let defaults = OutputConfig {
			format: OutputFormat::Json,
			..Default::default()
		};
		let text = execute(&args("appliedtogroups", false, None), &defaults, GROUPS.as_bytes())
			.unwrap();
		let value: serde_json::Value = serde_json::from_str(&text).unwrap();
		assert_eq!(value[0]["name"], "web");
		assert_eq!(value[1]["name"], "db");
	}

	#[test]
	fn empty_list_message() {
		let text = execute(
			&args("nps", false, None),
			&OutputConfig::default(),
			r#"{"items": []}"#.as_bytes(),
		)
		.unwrap();
		assert_eq!(text, "No resources found.");
	}

	#[test]
	fn unknown_resource_fails() {
		let err = execute(&args("pods", false, None), &OutputConfig::default(), "{}".as_bytes())
			.unwrap_err();
		assert!(format!("{err:#}").contains("unknown resource type: pods"));
	}

	#[test]
	fn reads_from_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("group.json");
		std::fs::write(&path, r#"{"metadata": {"name": "solo"}}"#).unwrap();

		let input = open_input(Some(&path)).unwrap();
		let text = execute(
			&args("atg", true, Some(OutputFormat::Yaml)),
			&OutputConfig::default(),
			input,
		)
		.unwrap();
		assert_eq!(text.trim(), "name: solo");
	}
}
