// ABOUTME: Health data provider integrations for the Withings API
// ABOUTME: Resource fetchers, per-endpoint defaults, and option merging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Default parameters and body assembly for resource requests
pub mod options;
/// Withings API facade
pub mod withings;

pub use options::RequestOptions;
pub use withings::{WithingsProvider, WithingsResource};
