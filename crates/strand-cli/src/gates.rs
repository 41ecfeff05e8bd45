// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `strand feature-gates`.

use comfy_table::{presets::NOTHING, Table};
use strand_feature_gates::{FeatureGate, FeatureGateSet, KNOWN_FEATURES};

/// One line per known feature: name, stage, default and resolved state.
pub fn render(gates: &FeatureGateSet) -> String {
	let mut table = Table::new();
	table.load_preset(NOTHING);
	table.set_header(vec!["FEATURE", "STAGE", "DEFAULT", "ENABLED"]);
	for feature in KNOWN_FEATURES {
		table.add_row(vec![
			feature.name.to_string(),
			feature.stage.to_string(),
			feature.default.to_string(),
			gates.enabled(feature.name).to_string(),
		]);
	}

	table
		.to_string()
		.lines()
		.map(|line| format!("{}\n", line.trim_end()))
		.collect()
}
