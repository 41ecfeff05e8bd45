// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Type-driven decode-and-convert pipeline.
//!
//! A [`TransformFactory`] is fixed at compile time to one object type and its
//! list type. Given an encoded stream and a `single` flag it decodes exactly
//! one of the two and hands the typed value to the matching transform. The
//! transforms themselves never fail; every rejection happens during decoding.

use std::io::Read;

use serde_json::Value;
use strand_api_types::{Resource, ResourceList};
use tracing::debug;

use crate::error::{Result, TransformError};

/// Result of a transform: one response, or one per list item in list order.
#[derive(Debug, Clone, PartialEq)]
pub enum Transformed<R> {
	Single(R),
	List(Vec<R>),
}

impl<R> Transformed<R> {
	pub fn len(&self) -> usize {
		match self {
			Transformed::Single(_) => 1,
			Transformed::List(items) => items.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn into_vec(self) -> Vec<R> {
		match self {
			Transformed::Single(item) => vec![item],
			Transformed::List(items) => items,
		}
	}

	pub fn map<T>(self, mut f: impl FnMut(R) -> T) -> Transformed<T> {
		match self {
			Transformed::Single(item) => Transformed::Single(f(item)),
			Transformed::List(items) => Transformed::List(items.into_iter().map(f).collect()),
		}
	}
}

/// Decoder and dispatcher for one registered kind.
pub struct TransformFactory<O, L, R> {
	object_transform: fn(&O) -> R,
	list_transform: fn(&L) -> Vec<R>,
}

impl<O, L, R> Clone for TransformFactory<O, L, R> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<O, L, R> Copy for TransformFactory<O, L, R> {}

impl<O, L, R> TransformFactory<O, L, R> {
	pub const fn new(object_transform: fn(&O) -> R, list_transform: fn(&L) -> Vec<R>) -> Self {
		Self {
			object_transform,
			list_transform,
		}
	}
}

impl<O, L, R> TransformFactory<O, L, R>
where
	O: Resource,
	L: ResourceList<Item = O>,
{
	/// Decodes `reader` as `O` when `single`, otherwise as `L`, and converts it.
	pub fn transform(&self, mut reader: impl Read, single: bool) -> Result<Transformed<R>> {
		let mut buf = Vec::new();
		reader.read_to_end(&mut buf)?;

		if single {
			let object: O = decode_object(&buf)?;
			Ok(Transformed::Single(self.transform_object(&object)))
		} else {
			let list: L = decode_list(&buf)?;
			Ok(Transformed::List(self.transform_list(&list)))
		}
	}

	pub fn transform_object(&self, object: &O) -> R {
		(self.object_transform)(object)
	}

	pub fn transform_list(&self, list: &L) -> Vec<R> {
		(self.list_transform)(list)
	}
}

fn decode_object<O: Resource>(buf: &[u8]) -> Result<O> {
	let value = parse(buf, O::KIND)?;
	check_kind(&value, O::KIND)?;
	debug!(kind = O::KIND, "decoded object");
	from_value(value, O::KIND)
}

fn decode_list<L: ResourceList>(buf: &[u8]) -> Result<L> {
	let value = parse(buf, L::KIND)?;
	check_kind(&value, L::KIND)?;
	if let Some(items) = value.get("items").and_then(Value::as_array) {
		for item in items {
			check_kind(item, L::Item::KIND)?;
		}
	}
	debug!(kind = L::KIND, "decoded list");
	from_value(value, L::KIND)
}

fn parse(buf: &[u8], expected: &'static str) -> Result<Value> {
	serde_json::from_slice(buf).map_err(|source| TransformError::Decode { expected, source })
}

fn from_value<T: Resource>(value: Value, expected: &'static str) -> Result<T> {
	serde_json::from_value(value).map_err(|source| TransformError::Decode { expected, source })
}

/// The wire `kind` is optional, but when present it must name the expected kind.
fn check_kind(value: &Value, expected: &'static str) -> Result<()> {
	match value.get("kind") {
		None | Some(Value::Null) => Ok(()),
		Some(Value::String(kind)) if kind.is_empty() || kind == expected => Ok(()),
		Some(other) => Err(TransformError::KindMismatch {
			expected,
			found: match other {
				Value::String(s) => s.clone(),
				v => v.to_string(),
			},
		}),
	}
}
