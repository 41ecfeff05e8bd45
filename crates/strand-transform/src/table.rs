// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Table rendering contract shared by every response type.

use serde::Serialize;

/// Tabular view of a display response.
///
/// `table_row` must return exactly as many cells as `table_header` has
/// columns, for every width.
pub trait TableOutput {
	fn table_header(&self) -> &'static [&'static str];

	/// One row of cells. Multi-value cells are summarized to fit
	/// `max_column_width` characters.
	fn table_row(&self, max_column_width: usize) -> Vec<String>;

	/// Whether the printer should stable-sort rows by their first cell.
	fn sort_rows(&self) -> bool;
}

/// A display response usable both as a table row and as structured output.
pub trait Response: TableOutput + Send + Sync {
	fn to_value(&self) -> serde_json::Result<serde_json::Value>;
}

impl<T> Response for T
where
	T: TableOutput + Serialize + Send + Sync,
{
	fn to_value(&self) -> serde_json::Result<serde_json::Value> {
		serde_json::to_value(self)
	}
}

const SEPARATOR: &str = ", ";

/// Joins `elements` into one table cell no wider than `max_column_width`.
///
/// Elements are sorted and joined with ", ". An element is either shown whole
/// or omitted; omitted elements are counted in a trailing `+ N more...`
/// suffix, which is present only when something was omitted.
pub fn generate_table_element_with_summary(
	elements: &[String],
	max_column_width: usize,
) -> String {
	let mut sorted: Vec<&str> = elements.iter().map(String::as_str).collect();
	sorted.sort_unstable();

	let mut cell = String::new();
	let mut width = 0;
	let mut shown = 0;
	for element in &sorted {
		let element_width = element.chars().count();
		let added = if shown == 0 {
			element_width
		} else {
			SEPARATOR.len() + element_width
		};
		if width + added > max_column_width {
			break;
		}
		if shown > 0 {
			cell.push_str(SEPARATOR);
		}
		cell.push_str(element);
		width += added;
		shown += 1;
	}

	let omitted = sorted.len() - shown;
	if omitted > 0 {
		if shown > 0 {
			cell.push(' ');
		}
		cell.push_str(&format!("+ {omitted} more..."));
	}
	cell
}
