// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Display transform for `AddressGroup` objects.

use std::io::Read;

use serde::Serialize;
use strand_api_types::{AddressGroup, AddressGroupList};

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

pub const FACTORY: TransformFactory<AddressGroup, AddressGroupList, Response> =
	TransformFactory::new(object_transform, list_transform);

pub fn object_transform(group: &AddressGroup) -> Response {
	Response {
		name: group.metadata.name.clone().unwrap_or_default(),
		pods: group
			.group_members
			.iter()
			.map(group_member_transform)
			.collect(),
	}
}

pub fn list_transform(groups: &AddressGroupList) -> Vec<Response> {
	groups.items.iter().map(object_transform).collect()
}

pub fn transform(reader: impl Read, single: bool) -> Result<Transformed<Response>> {
	FACTORY.transform(reader, single)
}

impl TableOutput for Response {
	fn table_header(&self) -> &'static [&'static str] {
		&["NAME", "POD-IPS"]
	}

	fn table_row(&self, max_column_width: usize) -> Vec<String> {
		// A member's address string is one unit, even when it lists several IPs.
		let ips: Vec<String> = self
			.pods
			.iter()
			.filter(|member| !member.ip.is_empty())
			.map(|member| member.ip.clone())
			.collect();
		vec![
			self.name.clone(),
			generate_table_element_with_summary(&ips, max_column_width),
		]
	}

	fn sort_rows(&self) -> bool {
		true
	}
}
