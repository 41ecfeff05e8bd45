// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Typed API objects served and displayed by Strand.
//!
//! This crate provides:
//! - Control-plane group objects (`AppliedToGroup`, `AddressGroup`) and their members
//! - Network policy statistics objects (`NetworkPolicyStats`)
//! - The [`Resource`] / [`ResourceList`] traits that statically register each kind
//!
//! Object metadata reuses `k8s-openapi`'s `ObjectMeta` and `ListMeta`, so
//! objects decoded from a control plane keep their standard metadata layout.

pub mod controlplane;
mod resource;
pub mod stats;

pub use controlplane::{
	AddressGroup, AddressGroupList, AppliedToGroup, AppliedToGroupList, ExternalEntityReference,
	GroupMember, NamedPort, PodReference, Protocol,
};
pub use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ListMeta, ObjectMeta};
pub use resource::{Resource, ResourceList};
pub use stats::{NetworkPolicyStats, NetworkPolicyStatsList, TrafficStats};
