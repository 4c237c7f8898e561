// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for withings-cli
// ABOUTME: Pretty JSON on stdout, vendor status warnings on the log stream

use anyhow::Result;
use serde_json::Value;
use tracing::warn;
use withings_oauth2::providers::WithingsProvider;

/// Print a JSON value on stdout
pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Log when a 2xx body carries a non-zero Withings status
pub fn warn_on_vendor_status(response: &Value) {
    if let Some(status) = WithingsProvider::vendor_status(response).filter(|s| *s != 0) {
        warn!("Withings returned vendor status {status}");
    }
}
