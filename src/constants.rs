// ABOUTME: Vendor constants for the Withings API: hosts, endpoint paths, and action verbs
// ABOUTME: Also holds default lookback windows and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Withings API constants grouped by concern.

/// Vendor hosts and endpoint paths
pub mod withings_api {
    /// Browser-facing authorization endpoint for the authorization-code flow
    pub const AUTHORIZATION_URL: &str = "https://account.withings.com/oauth2_user/authorize2";

    /// Base URL for every server-to-server call
    pub const API_BASE_URL: &str = "https://wbsapi.withings.net/v2";

    /// Token exchange / refresh endpoint
    pub const OAUTH2_PATH: &str = "oauth2";
    /// Nonce endpoint used before signed requests
    pub const SIGNATURE_PATH: &str = "signature";
    /// Devices and goals
    pub const USER_PATH: &str = "user";
    /// Measurements, activities, intraday activity, workouts
    pub const MEASURE_PATH: &str = "measure";
    /// Heart recordings
    pub const HEART_PATH: &str = "heart";
    /// Sleep summaries
    pub const SLEEP_PATH: &str = "sleep";

    /// Prefix applied to every requested scope
    pub const SCOPE_PREFIX: &str = "user.";

    /// Provider name used in log fields
    pub const PROVIDER_NAME: &str = "withings";
}

/// `action` values understood by the Withings endpoints
pub mod actions {
    /// Nonce request
    pub const GET_NONCE: &str = "getnonce";
    /// Token exchange and refresh
    pub const REQUEST_TOKEN: &str = "requesttoken";
    /// User devices
    pub const GET_DEVICE: &str = "getdevice";
    /// User goals
    pub const GET_GOALS: &str = "getgoals";
    /// Body measurements
    pub const GET_MEAS: &str = "getmeas";
    /// Daily activity aggregates
    pub const GET_ACTIVITY: &str = "getactivity";
    /// High-frequency activity samples
    pub const GET_INTRADAY_ACTIVITY: &str = "getintradayactivity";
    /// Workout sessions
    pub const GET_WORKOUTS: &str = "getworkouts";
    /// Heart recordings
    pub const LIST: &str = "list";
    /// Sleep summaries
    pub const GET_SUMMARY: &str = "getsummary";
}

/// OAuth2 grant types
pub mod grant_types {
    /// Authorization code exchange
    pub const AUTHORIZATION_CODE: &str = "authorization_code";
    /// Refresh token exchange
    pub const REFRESH_TOKEN: &str = "refresh_token";
}

/// Default request parameters for resource fetchers
pub mod defaults {
    /// Weight, height, fat ratio
    pub const MEAS_TYPES: &str = "1,4,12";
    /// Real measurements (2 would be user objectives)
    pub const MEAS_CATEGORY: u8 = 1;
    /// Measurement lookback window in milliseconds (24 hours)
    pub const MEAS_LOOKBACK_MS: i64 = 86_400_000;
    /// Lookback window in days for date-based endpoints
    pub const LOOKBACK_DAYS: i64 = 30;
    /// Date format expected by `*dateymd` parameters
    pub const YMD_FORMAT: &str = "%Y-%m-%d";
}

/// HTTP client timeouts
pub mod network {
    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Default connection timeout in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Environment variable names read by `WithingsConfig::from_env`
pub mod env_vars {
    /// OAuth client identifier
    pub const CLIENT_ID: &str = "WITHINGS_CLIENT_ID";
    /// OAuth client secret
    pub const CLIENT_SECRET: &str = "WITHINGS_CLIENT_SECRET";
    /// Registered callback URL
    pub const CALLBACK_URL: &str = "WITHINGS_CALLBACK_URL";
    /// Authorization endpoint override
    pub const AUTH_URL: &str = "WITHINGS_AUTH_URL";
    /// API base URL override
    pub const API_BASE_URL: &str = "WITHINGS_API_BASE_URL";
    /// `signed` or `unsigned`
    pub const TOKEN_MODE: &str = "WITHINGS_TOKEN_MODE";
    /// Request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "WITHINGS_HTTP_TIMEOUT_SECS";
    /// Connect timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "WITHINGS_HTTP_CONNECT_TIMEOUT_SECS";
}

/// Service identification for structured logs
pub mod service_names {
    /// Name reported by the CLI at startup
    pub const WITHINGS_CLI: &str = "withings-cli";
}
