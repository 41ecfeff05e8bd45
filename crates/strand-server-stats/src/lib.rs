// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Read-only stats API for Strand.
//!
//! [`NetworkPolicyStatsRest`] serves `NetworkPolicyStats` records from an
//! injected [`StatsProvider`]. Every request first checks the
//! `NetworkPolicyStats` and `ClusterNetworkPolicy` feature gates and is
//! refused, without touching the provider, when either is off.
//!
//! [`routes::router`] exposes the store over HTTP.

pub mod context;
pub mod error;
pub mod provider;
pub mod rest;
pub mod routes;
pub mod table;

pub use context::RequestContext;
pub use error::{ErrorResponse, ProviderError, Result, StatsError};
pub use provider::{MemoryStatsProvider, StatsProvider};
pub use rest::{NetworkPolicyStatsRest, REQUIRED_FEATURES};
pub use routes::router;
pub use table::{StatsTable, TableColumnDefinition, TableRow, TableSource};
