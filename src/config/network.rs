// ABOUTME: Network configuration for the HTTP client used by every Withings call
// ABOUTME: Timeouts are passed straight through to reqwest; no retry policy lives here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::parse_env_var;
use crate::constants::{env_vars, network};
use crate::errors::WithingsResult;
use serde::{Deserialize, Serialize};

/// HTTP client timeout configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: network::DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: network::DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl HttpClientConfig {
    /// Load HTTP client configuration from environment
    ///
    /// Unset variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a timeout variable is set but is not a number
    pub fn from_env() -> WithingsResult<Self> {
        let defaults = Self::default();
        Ok(Self {
            timeout_secs: parse_env_var(env_vars::HTTP_TIMEOUT_SECS)?
                .unwrap_or(defaults.timeout_secs),
            connect_timeout_secs: parse_env_var(env_vars::HTTP_CONNECT_TIMEOUT_SECS)?
                .unwrap_or(defaults.connect_timeout_secs),
        })
    }
}
