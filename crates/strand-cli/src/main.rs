// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! strand - display control-plane objects and serve network policy stats.
//!
//! `strand get` turns an encoded object or list into a table, JSON or YAML.
//! `strand serve` exposes the feature-gated stats API over HTTP.

mod gates;
mod get;
mod serve;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use strand_config::{load_config, load_config_with_file, LogFormat, LoggingConfig, StrandConfig};

#[derive(Parser, Debug)]
#[command(name = "strand", version, about = "Strand control-plane display and stats tool")]
struct Args {
	/// Path to a TOML config file (defaults to /etc/strand/strand.toml if present)
	#[arg(long, global = true, env = "STRAND_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Display an encoded object or list as a table, JSON or YAML
	Get(get::GetArgs),
	/// Serve the network policy stats API
	Serve(serve::ServeArgs),
	/// List known feature gates and their resolved state
	FeatureGates,
}

fn init_tracing(logging: &LoggingConfig) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));

	match logging.format {
		LogFormat::Json => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().json().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Compact => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().compact().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Pretty => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().with_writer(std::io::stderr))
				.init();
		}
	}
}

fn load(args: &Args) -> Result<StrandConfig> {
	match &args.config {
		Some(path) => load_config_with_file(path)
			.with_context(|| format!("failed to load configuration from {}", path.display())),
		None => load_config().context("failed to load configuration"),
	}
}

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();
	let config = load(&args)?;

	init_tracing(&config.logging);
	debug!(command = ?args.command, "starting strand");

	match args.command {
		Command::Get(get_args) => get::run(get_args, &config.output),
		Command::Serve(serve_args) => serve::run(serve_args, config).await,
		Command::FeatureGates => {
			print!("{}", gates::render(&config.feature_gates));
			Ok(())
		}
	}
}
