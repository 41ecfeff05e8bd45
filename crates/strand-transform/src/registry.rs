// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Name-based lookup of the transforms compiled into this build.

use std::fmt;
use std::io::Read;

use strand_api_types::{Resource, ResourceList};
use tracing::debug;

use crate::error::{Result, TransformError};
use crate::factory::{TransformFactory, Transformed};
use crate::table::Response;
use crate::{addressgroup, appliedtogroup, networkpolicystats};

/// Type-erased transform result.
pub enum TransformOutput {
	Single(Box<dyn Response>),
	List(Vec<Box<dyn Response>>),
}

impl TransformOutput {
	pub fn is_single(&self) -> bool {
		matches!(self, TransformOutput::Single(_))
	}

	pub fn as_slice(&self) -> &[Box<dyn Response>] {
		match self {
			TransformOutput::Single(response) => std::slice::from_ref(response),
			TransformOutput::List(responses) => responses,
		}
	}
}

impl fmt::Debug for TransformOutput {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TransformOutput::Single(_) => f.write_str("Single(..)"),
			TransformOutput::List(items) => write!(f, "List(len = {})", items.len()),
		}
	}
}

impl<R: Response + 'static> From<Transformed<R>> for TransformOutput {
	fn from(transformed: Transformed<R>) -> Self {
		match transformed {
			Transformed::Single(response) => TransformOutput::Single(Box::new(response)),
			Transformed::List(responses) => TransformOutput::List(
				responses
					.into_iter()
					.map(|r| Box::new(r) as Box<dyn Response>)
					.collect(),
			),
		}
	}
}

type ErasedTransform = Box<dyn Fn(&mut dyn Read, bool) -> Result<TransformOutput> + Send + Sync>;

/// One registered kind and the names it answers to.
pub struct RegisteredKind {
	pub resource: &'static str,
	pub kind: &'static str,
	pub list_kind: &'static str,
	pub short_names: &'static [&'static str],
	transform: ErasedTransform,
}

impl RegisteredKind {
	pub fn transform(&self, mut reader: impl Read, single: bool) -> Result<TransformOutput> {
		(self.transform)(&mut reader, single)
	}

	fn matches(&self, name: &str) -> bool {
		let name = name.to_ascii_lowercase();
		name == self.resource
			|| self.resource.strip_suffix('s') == Some(name.as_str())
			|| name == self.kind.to_ascii_lowercase()
			|| self.short_names.contains(&name.as_str())
	}
}

impl fmt::Debug for RegisteredKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RegisteredKind")
			.field("resource", &self.resource)
			.field("kind", &self.kind)
			.field("list_kind", &self.list_kind)
			.field("short_names", &self.short_names)
			.finish_non_exhaustive()
	}
}

#[derive(Debug, Default)]
pub struct TransformRegistry {
	kinds: Vec<RegisteredKind>,
}

impl TransformRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registry holding every kind this build can display.
	pub fn builtin() -> Self {
		let mut registry = Self::new();
		registry.register("appliedtogroups", &["atg"], appliedtogroup::FACTORY);
		registry.register("addressgroups", &["ag"], addressgroup::FACTORY);
		registry.register("networkpolicystats", &["nps"], networkpolicystats::FACTORY);
		registry
	}

	/// Registers `factory` under the lowercase plural `resource` name.
	pub fn register<O, L, R>(
		&mut self,
		resource: &'static str,
		short_names: &'static [&'static str],
		factory: TransformFactory<O, L, R>,
	) where
		O: Resource + 'static,
		L: ResourceList<Item = O> + 'static,
		R: Response + 'static,
	{
		debug_assert!(
			self.lookup(resource).is_err(),
			"resource {resource} registered twice"
		);
		self.kinds.push(RegisteredKind {
			resource,
			kind: O::KIND,
			list_kind: L::KIND,
			short_names,
			transform: Box::new(move |reader, single| {
				factory.transform(reader, single).map(TransformOutput::from)
			}),
		});
	}

	/// Finds a kind by resource name, singular name, kind or short name.
	pub fn lookup(&self, name: &str) -> Result<&RegisteredKind> {
		self.kinds
			.iter()
			.find(|kind| kind.matches(name))
			.ok_or_else(|| TransformError::UnknownResource(name.to_string()))
	}

	pub fn transform(&self, name: &str, reader: impl Read, single: bool) -> Result<TransformOutput> {
		let kind = self.lookup(name)?;
		debug!(resource = kind.resource, single, "transforming");
		kind.transform(reader, single)
	}

	pub fn resources(&self) -> impl Iterator<Item = &RegisteredKind> {
		self.kinds.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn aliases_resolve_to_same_kind() {
		let registry = TransformRegistry::builtin();
		for name in ["appliedtogroups", "appliedtogroup", "AppliedToGroup", "atg", "ATG"] {
			assert_eq!(registry.lookup(name).unwrap().kind, "AppliedToGroup", "{name}");
		}
		assert_eq!(registry.lookup("ag").unwrap().kind, "AddressGroup");
		assert_eq!(
			registry.lookup("networkpolicystats").unwrap().list_kind,
			"NetworkPolicyStatsList"
		);
	}

	#[test]
	fn unknown_resource_errors() {
		let registry = TransformRegistry::builtin();
		let err = registry.lookup("pods").unwrap_err();
		assert!(matches!(err, TransformError::UnknownResource(name) if name == "pods"));
	}

	#[test]
	fn builtin_lists_every_kind() {
		let registry = TransformRegistry::builtin();
		let resources: Vec<_> = registry.resources().map(|k| k.resource).collect();
		assert_eq!(
			resources,
			vec!["appliedtogroups", "addressgroups", "networkpolicystats"]
		);
	}

	#[test]
	fn transform_single_through_registry() {
		let registry = TransformRegistry::builtin();
		let json = r#"{"metadata": {"name": "atg-1"},
			"groupMembers": [{"pod": {"name": "web-0", "namespace": "default"}}]}"#;
		let output = registry.transform("atg", json.as_bytes(), true).unwrap();
		assert!(output.is_single());
		let rows: Vec<_> = output.as_slice().iter().map(|r| r.table_row(80)).collect();
		assert_eq!(rows, vec![vec!["atg-1", "default/web-0"]]);
		assert_eq!(
			output.as_slice()[0].to_value().unwrap()["name"],
			serde_json::json!("atg-1")
		);
	}

	#[test]
	fn transform_list_through_registry() {
		let registry = TransformRegistry::builtin();
		let json = r#"{"items": [
			{"metadata": {"namespace": "a", "name": "x"}},
			{"metadata": {"namespace": "b", "name": "y"}}
		]}"#;
		let output = registry.transform("nps", json.as_bytes(), false).unwrap();
		assert!(!output.is_single());
		assert_eq!(output.as_slice().len(), 2);
	}

	#[test]
	fn unknown_resource_short_circuits_before_reading() {
		let registry = TransformRegistry::builtin();
		let err = registry.transform("bogus", "{".as_bytes(), true).unwrap_err();
		assert!(matches!(err, TransformError::UnknownResource(_)));
	}
}
