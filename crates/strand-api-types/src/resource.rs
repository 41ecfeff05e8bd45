// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A statically registered API kind.
pub trait Resource: Serialize + DeserializeOwned {
	/// Wire `kind`, e.g. "AppliedToGroup".
	const KIND: &'static str;
	/// Wire `apiVersion`, e.g. "controlplane.strand.io/v1beta2".
	const API_VERSION: &'static str;
}

/// A list kind whose items all share one [`Resource`] kind.
pub trait ResourceList: Resource {
	type Item: Resource;

	fn items(&self) -> &[Self::Item];

	fn from_items(items: Vec<Self::Item>) -> Self;
}

/// Implements [`Resource`] and [`ResourceList`] for an object/list pair that
/// share an API version.
macro_rules! register_kind {
	($object:ident, $list:ident, $api_version:expr) => {
		impl $crate::Resource for $object {
			const KIND: &'static str = stringify!($object);
			const API_VERSION: &'static str = $api_version;
		}

		impl $crate::Resource for $list {
			const KIND: &'static str = stringify!($list);
			const API_VERSION: &'static str = $api_version;
		}

		impl $crate::ResourceList for $list {
			type Item = $object;

			fn items(&self) -> &[$object] {
				&self.items
			}

			fn from_items(items: Vec<$object>) -> Self {
				Self {
					items,
					..Default::default()
				}
			}
		}
	};
}

pub(crate) use register_kind;
