// ABOUTME: Withings OAuth configuration: credentials, vendor endpoints, and token mode
// ABOUTME: Loads from environment and logs credential diagnostics without exposing secrets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{parse_env_var, HttpClientConfig};
use crate::constants::{env_vars, withings_api};
use crate::errors::{WithingsError, WithingsResult};
use crate::oauth2_client::ClientCredentials;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

/// How token requests authenticate against `/oauth2`
///
/// The vendor has accepted two shapes over time. `Signed` fetches a nonce and
/// sends an HMAC signature alongside the secret; `Unsigned` relies on the
/// `client_secret` body field alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenRequestMode {
    /// Nonce + HMAC-SHA256 signature (current vendor contract)
    #[default]
    Signed,
    /// Client secret only
    Unsigned,
}

impl fmt::Display for TokenRequestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed => write!(f, "signed"),
            Self::Unsigned => write!(f, "unsigned"),
        }
    }
}

impl FromStr for TokenRequestMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "signed" => Ok(Self::Signed),
            "unsigned" => Ok(Self::Unsigned),
            other => Err(format!("unknown token mode '{other}', expected signed or unsigned")),
        }
    }
}

/// Complete configuration for a Withings client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithingsConfig {
    /// Client id, secret, and callback URL
    pub credentials: ClientCredentials,
    /// Authorization endpoint users are redirected to
    pub auth_url: String,
    /// Base URL for `/oauth2`, `/signature` and resource endpoints
    pub api_base_url: String,
    /// Token request strategy
    pub token_mode: TokenRequestMode,
    /// Pass-through HTTP timeouts
    pub http: HttpClientConfig,
}

impl Default for WithingsConfig {
    fn default() -> Self {
        Self::new("", "", "")
    }
}

impl WithingsConfig {
    /// Create a configuration pointing at the production Withings endpoints
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            credentials: ClientCredentials::new(client_id, client_secret, callback_url),
            auth_url: withings_api::AUTHORIZATION_URL.to_owned(),
            api_base_url: withings_api::API_BASE_URL.to_owned(),
            token_mode: TokenRequestMode::default(),
            http: HttpClientConfig::default(),
        }
    }

    /// Override the authorization endpoint
    #[must_use]
    pub fn with_auth_url(mut self, auth_url: impl Into<String>) -> Self {
        self.auth_url = auth_url.into();
        self
    }

    /// Override the API base URL (mock servers, regional hosts)
    #[must_use]
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    /// Select the token request strategy
    #[must_use]
    pub const fn with_token_mode(mut self, token_mode: TokenRequestMode) -> Self {
        self.token_mode = token_mode;
        self
    }

    /// Override HTTP timeouts
    #[must_use]
    pub const fn with_http(mut self, http: HttpClientConfig) -> Self {
        self.http = http;
        self
    }

    /// Load configuration from environment
    ///
    /// Missing credentials become empty strings; the vendor rejects them on
    /// first use. Endpoint overrides fall back to the production hosts.
    ///
    /// # Errors
    ///
    /// Returns an error if the token mode or a timeout variable is malformed
    pub fn from_env() -> WithingsResult<Self> {
        let var = |name: &str| env::var(name).unwrap_or_default();

        let token_mode = parse_env_var::<TokenRequestMode>(env_vars::TOKEN_MODE)?
            .unwrap_or_default();

        Ok(Self {
            credentials: ClientCredentials::new(
                var(env_vars::CLIENT_ID),
                var(env_vars::CLIENT_SECRET),
                var(env_vars::CALLBACK_URL),
            ),
            auth_url: env::var(env_vars::AUTH_URL)
                .unwrap_or_else(|_| withings_api::AUTHORIZATION_URL.to_owned()),
            api_base_url: env::var(env_vars::API_BASE_URL)
                .unwrap_or_else(|_| withings_api::API_BASE_URL.to_owned()),
            token_mode,
            http: HttpClientConfig::from_env()?,
        })
    }

    /// Compute SHA256 fingerprint of the client secret (first 8 hex chars)
    ///
    /// Allows comparing secrets in logs without printing them.
    #[must_use]
    pub fn secret_fingerprint(&self) -> Option<String> {
        let secret = self.credentials.client_secret();
        if secret.is_empty() {
            return None;
        }
        let mut hasher = Sha256::new();
        hasher.update(secret.as_bytes());
        let result = hasher.finalize();
        Some(hex::encode(result).chars().take(8).collect())
    }

    /// Log credential diagnostics
    ///
    /// Returns true if the credentials look usable. This never blocks a
    /// request; it only reports what the vendor is likely to reject.
    pub fn validate_and_log(&self) -> bool {
        let client_id = self.credentials.client_id();
        if client_id.is_empty() {
            warn!("Withings client_id is missing or empty");
            return false;
        }

        let Some(fingerprint) = self.secret_fingerprint() else {
            warn!("Withings client_secret is missing or empty");
            return false;
        };

        if self.credentials.callback_url().is_empty() {
            warn!("Withings callback_url is missing or empty");
            return false;
        }

        info!(
            "Withings OAuth: client_id={client_id}, secret_length={}, secret_fingerprint={fingerprint}, token_mode={}",
            self.credentials.client_secret().len(),
            self.token_mode
        );
        true
    }

    /// Reject a configuration whose endpoints are not absolute URLs
    ///
    /// # Errors
    ///
    /// Returns an error naming the first endpoint that does not parse
    pub fn validate_endpoints(&self) -> WithingsResult<()> {
        for (name, value) in [("auth_url", &self.auth_url), ("api_base_url", &self.api_base_url)] {
            url::Url::parse(value)
                .map_err(|e| WithingsError::Config(format!("{name} '{value}' is not a URL: {e}")))?;
        }
        Ok(())
    }
}
