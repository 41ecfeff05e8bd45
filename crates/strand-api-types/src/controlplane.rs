// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Control-plane group objects.
//!
//! Groups are computed by the controller and carry the set of workload
//! members a network policy applies to (`AppliedToGroup`) or selects as
//! peers (`AddressGroup`).

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::resource::register_kind;
use crate::{ListMeta, ObjectMeta};

pub const API_VERSION: &str = "controlplane.strand.io/v1beta2";

/// Reference to a Pod.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodReference {
	pub name: String,
	pub namespace: String,
}

/// Reference to an external (non-Pod) workload entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalEntityReference {
	pub name: String,
	pub namespace: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Protocol {
	#[default]
	Tcp,
	Udp,
	Sctp,
}

/// A port exposed by a group member, optionally named.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedPort {
	pub port: i32,
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub name: String,
	#[serde(default)]
	pub protocol: Protocol,
}

/// A member of a group: a Pod or an external entity, with its addresses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub pod: Option<PodReference>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub external_entity: Option<ExternalEntityReference>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub ips: Vec<IpAddr>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub ports: Vec<NamedPort>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedToGroup {
	#[serde(default)]
	pub metadata: ObjectMeta,
	#[serde(default)]
	pub group_members: Vec<GroupMember>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppliedToGroupList {
	#[serde(default)]
	pub metadata: ListMeta,
	#[serde(default)]
	pub items: Vec<AppliedToGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressGroup {
	#[serde(default)]
	pub metadata: ObjectMeta,
	#[serde(default)]
	pub group_members: Vec<GroupMember>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressGroupList {
	#[serde(default)]
	pub metadata: ListMeta,
	#[serde(default)]
	pub items: Vec<AddressGroup>,
}

register_kind!(AppliedToGroup, AppliedToGroupList, API_VERSION);
register_kind!(AddressGroup, AddressGroupList, API_VERSION);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Resource, ResourceList};

	#[test]
	fn kinds_are_registered_statically() {
		assert_eq!(AppliedToGroup::KIND, "AppliedToGroup");
		assert_eq!(AppliedToGroupList::KIND, "AppliedToGroupList");
		assert_eq!(AddressGroup::KIND, "AddressGroup");
		assert_eq!(AddressGroupList::KIND, "AddressGroupList");
		assert_eq!(AppliedToGroup::API_VERSION, API_VERSION);
	}

	#[test]
	fn decodes_group_from_wire_format() {
		let json = r#"{
			"kind": "AppliedToGroup",
			"apiVersion": "controlplane.strand.io/v1beta2",
			"metadata": {"name": "atg-1"},
			"groupMembers": [
				{
					"pod": {"name": "web-0", "namespace": "default"},
					"ips": ["10.0.0.1", "fd00::1"],
					"ports": [{"port": 80, "name": "http", "protocol": "TCP"}]
				},
				{
					"externalEntity": {"name": "vm-1", "namespace": "infra"}
				}
			]
		}"#;

		let group: AppliedToGroup = serde_json::from_str(json).unwrap();
		assert_eq!(group.metadata.name.as_deref(), Some("atg-1"));
		assert_eq!(group.group_members.len(), 2);

		let first = &group.group_members[0];
		assert_eq!(first.pod.as_ref().unwrap().name, "web-0");
		assert_eq!(first.ips.len(), 2);
		assert_eq!(first.ports[0].protocol, Protocol::Tcp);

		let second = &group.group_members[1];
		assert!(second.pod.is_none());
		assert_eq!(second.external_entity.as_ref().unwrap().namespace, "infra");
	}

	#[test]
	fn protocol_defaults_to_tcp() {
		let port: NamedPort = serde_json::from_str(r#"{"port": 53}"#).unwrap();
		assert_eq!(port.protocol, Protocol::Tcp);
		assert!(port.name.is_empty());

		let port: NamedPort = serde_json::from_str(r#"{"port": 53, "protocol": "UDP"}"#).unwrap();
		assert_eq!(port.protocol, Protocol::Udp);
	}

	#[test]
	fn list_from_items_keeps_order() {
		let items: Vec<AddressGroup> = ["a", "b", "c"]
			.iter()
			.map(|name| AddressGroup {
				metadata: ObjectMeta {
					name: Some(name.to_string()),
					..Default::default()
				},
				..Default::default()
			})
			.collect();

		let list = AddressGroupList::from_items(items.clone());
		assert_eq!(list.items(), items.as_slice());
	}
}
