// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

/// Per-request scope handed to the stats store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
	namespace: Option<String>,
}

impl RequestContext {
	/// A context spanning every namespace.
	pub fn all_namespaces() -> Self {
		Self::default()
	}

	pub fn with_namespace(namespace: impl Into<String>) -> Self {
		Self {
			namespace: Some(namespace.into()),
		}
	}

	/// The namespace scope. An empty namespace is the same as none.
	pub fn namespace(&self) -> Option<&str> {
		self.namespace.as_deref().filter(|ns| !ns.is_empty())
	}
}
