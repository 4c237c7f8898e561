// ABOUTME: Configuration module for Withings client credentials, endpoints, and HTTP timeouts
// ABOUTME: Provides typed config structs with defaults and environment loaders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for the Withings client
//!
//! - **Network**: pass-through HTTP timeouts for the underlying reqwest client
//! - **OAuth**: credentials, vendor endpoints, and the token request strategy
//!
//! Loading from the environment is a convenience for binaries; library callers
//! can build every struct directly.

/// HTTP client timeout configuration
pub mod network;
/// Withings OAuth credentials and endpoint configuration
pub mod oauth;

pub use network::HttpClientConfig;
pub use oauth::{TokenRequestMode, WithingsConfig};

use crate::errors::{WithingsError, WithingsResult};
use std::env;
use std::str::FromStr;

/// Parse an optional environment variable, failing loudly on malformed values
pub(crate) fn parse_env_var<T>(name: &str) -> WithingsResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| WithingsError::Config(format!("{name}={raw:?} is invalid: {e}"))),
        Err(_) => Ok(None),
    }
}
