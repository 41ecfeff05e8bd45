// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Conversion of Strand API objects into display responses.
//!
//! This crate provides:
//! - [`TransformFactory`]: decodes a JSON stream into a statically known object
//!   or list type and routes it to that kind's object or list transform
//! - Per-kind transforms ([`appliedtogroup`], [`addressgroup`],
//!   [`networkpolicystats`]) producing display-only responses
//! - [`TableOutput`]: the header/row/sort contract every response implements
//! - [`TransformRegistry`]: resource name to transform lookup for callers that
//!   only know the kind at runtime
//! - [`render`]: table, JSON and YAML printing of responses
//!
//! # Example
//!
//! ```
//! use strand_transform::{appliedtogroup, TableOutput, Transformed};
//!
//! let json = r#"{"metadata": {"name": "atg-1"}, "groupMembers": [
//!     {"pod": {"name": "web-0", "namespace": "default"}}
//! ]}"#;
//!
//! let output = appliedtogroup::transform(json.as_bytes(), true).unwrap();
//! let Transformed::Single(group) = output else {
//!     unreachable!()
//! };
//! assert_eq!(group.table_row(80), vec!["atg-1", "default/web-0"]);
//! ```

pub mod addressgroup;
pub mod appliedtogroup;
pub mod common;
pub mod error;
pub mod factory;
pub mod networkpolicystats;
pub mod registry;
pub mod render;
pub mod table;

pub use common::{group_member_transform, GroupMember};
pub use error::{Result, TransformError};
pub use factory::{TransformFactory, Transformed};
pub use registry::{RegisteredKind, TransformOutput, TransformRegistry};
pub use render::{OutputFormat, RenderOptions};
pub use table::{generate_table_element_with_summary, Response, TableOutput};
