// ABOUTME: Main library entry point for the Withings OAuth2 client
// ABOUTME: Authorization URLs, signed token requests, and health data resource fetchers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Withings OAuth2
//!
//! A client for the Withings health-data API. It covers three things:
//!
//! - **Authorization**: build the URL a user visits to grant access
//! - **Tokens**: exchange an authorization code or refresh token, either with a
//!   nonce + HMAC-SHA256 signature or with the client secret alone
//! - **Resources**: bearer-authenticated fetches for devices, goals,
//!   measurements, activities, intraday activity, workouts, heart and sleep
//!
//! Responses are returned as `serde_json::Value`, exactly as the vendor sent
//! them. Nothing is stored, cached, retried, or refreshed automatically.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use withings_oauth2::config::WithingsConfig;
//! use withings_oauth2::errors::WithingsResult;
//! use withings_oauth2::providers::WithingsProvider;
//!
//! #[tokio::main]
//! async fn main() -> WithingsResult<()> {
//!     let config = WithingsConfig::new("client-id", "client-secret", "https://example.com/cb");
//!     let withings = WithingsProvider::new(config);
//!
//!     println!("Visit {}", withings.authorization_url("csrf-state", "activity,metrics"));
//!
//!     let tokens = withings.get_access_token("code-from-callback").await?;
//!     let access_token = tokens["body"]["access_token"].as_str().unwrap_or_default();
//!     let measures = withings.get_user_measures(access_token, None).await?;
//!     println!("{measures}");
//!     Ok(())
//! }
//! ```

/// Client credentials, endpoints, token mode, and HTTP timeouts
pub mod config;

/// Vendor hosts, endpoint paths, action verbs, and defaults
pub mod constants;

/// Error types shared by every operation
pub mod errors;

/// Tracing subscriber setup for binaries
pub mod logging;

/// Authorization URLs, request signing, and token requests
pub mod oauth2_client;

/// Resource fetchers for Withings endpoints
pub mod providers;

/// HTTP client and date helpers
pub mod utils;

pub use config::{HttpClientConfig, TokenRequestMode, WithingsConfig};
pub use errors::{WithingsError, WithingsResult};
pub use oauth2_client::{ClientCredentials, TokenGrant, WithingsOAuth2Client};
pub use providers::{RequestOptions, WithingsProvider, WithingsResource};
