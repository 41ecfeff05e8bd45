// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Display transform for `AppliedToGroup` objects.

use std::io::Read;

use serde::Serialize;
use strand_api_types::{AppliedToGroup, AppliedToGroupList};

use crate::common::{group_member_transform, GroupMember};
use crate::error::Result;
use crate::factory::{TransformFactory, Transformed};
use crate::table::{generate_table_element_with_summary, TableOutput};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
	pub name: String,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub pods: Vec<GroupMember>,
}

pub const FACTORY: TransformFactory<AppliedToGroup, AppliedToGroupList, Response> =
	TransformFactory::new(object_transform, list_transform);

pub fn object_transform(group: &AppliedToGroup) -> Response {
	Response {
		name: group.metadata.name.clone().unwrap_or_default(),
		pods: group
			.group_members
			.iter()
			.map(group_member_transform)
			.collect(),
	}
}

pub fn list_transform(groups: &AppliedToGroupList) -> Vec<Response> {
	groups.items.iter().map(object_transform).collect()
}

pub fn transform(reader: impl Read, single: bool) -> Result<Transformed<Response>> {
	FACTORY.transform(reader, single)
}

impl Response {
	pub fn pod_names(&self, max_column_width: usize) -> String {
		let names: Vec<String> = self.pods.iter().map(GroupMember::identity).collect();
		generate_table_element_with_summary(&names, max_column_width)
	}
}

impl TableOutput for Response {
	fn table_header(&self) -> &'static [&'static str] {
		&["NAME", "PODS"]
	}

	fn table_row(&self, max_column_width: usize) -> Vec<String> {
		vec![self.name.clone(), self.pod_names(max_column_width)]
	}

	fn sort_rows(&self) -> bool {
		true
	}
}
