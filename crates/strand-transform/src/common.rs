// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Display form of group members, shared by the group transforms.

use serde::Serialize;
use strand_api_types::{controlplane, ExternalEntityReference, NamedPort, PodReference};

/// Canonical display record for one group member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub pod: Option<PodReference>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub external_entity: Option<ExternalEntityReference>,
	/// Member addresses in source order, joined with ", ".
	#[serde(skip_serializing_if = "String::is_empty")]
	pub ip: String,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub ports: Vec<NamedPort>,
}

impl GroupMember {
	/// `namespace/name` of the Pod, or of the external entity when the member
	/// is not a Pod. Falls back to the address list for anonymous members.
	pub fn identity(&self) -> String {
		if let Some(pod) = &self.pod {
			return format!("{}/{}", pod.namespace, pod.name);
		}
		if let Some(entity) = &self.external_entity {
			return format!("{}/{}", entity.namespace, entity.name);
		}
		self.ip.clone()
	}
}

/// Converts a control-plane group member into its display form.
pub fn group_member_transform(member: &controlplane::GroupMember) -> GroupMember {
	let ip = member
		.ips
		.iter()
		.map(|ip| ip.to_string())
		.collect::<Vec<_>>()
		.join(", ");

	GroupMember {
		pod: member.pod.clone(),
		external_entity: member.external_entity.clone(),
		ip,
		ports: member.ports.clone(),
	}
}
