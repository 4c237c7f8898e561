// ABOUTME: Integration tests for environment-driven Withings configuration
// ABOUTME: Runs serially because every test mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use withings_oauth2::config::{HttpClientConfig, TokenRequestMode, WithingsConfig};
use withings_oauth2::constants::withings_api;
use withings_oauth2::errors::WithingsError;

const ALL_VARS: [&str; 8] = [
    "WITHINGS_CLIENT_ID",
    "WITHINGS_CLIENT_SECRET",
    "WITHINGS_CALLBACK_URL",
    "WITHINGS_AUTH_URL",
    "WITHINGS_API_BASE_URL",
    "WITHINGS_TOKEN_MODE",
    "WITHINGS_HTTP_TIMEOUT_SECS",
    "WITHINGS_HTTP_CONNECT_TIMEOUT_SECS",
];

fn clear_env() {
    for name in ALL_VARS {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();

    let config = WithingsConfig::from_env().unwrap();

    assert_eq!(config.credentials.client_id(), "");
    assert_eq!(config.credentials.client_secret(), "");
    assert_eq!(config.auth_url, withings_api::AUTHORIZATION_URL);
    assert_eq!(config.api_base_url, withings_api::API_BASE_URL);
    assert_eq!(config.token_mode, TokenRequestMode::Signed);
    assert_eq!(config.http, HttpClientConfig::default());
    assert!(!config.validate_and_log());
}

#[test]
#[serial]
fn test_from_env_reads_every_variable() {
    clear_env();
    env::set_var("WITHINGS_CLIENT_ID", "env-client");
    env::set_var("WITHINGS_CLIENT_SECRET", "env-secret");
    env::set_var("WITHINGS_CALLBACK_URL", "https://app.example.com/cb");
    env::set_var("WITHINGS_AUTH_URL", "http://localhost:9000/authorize2");
    env::set_var("WITHINGS_API_BASE_URL", "http://localhost:9000/v2");
    env::set_var("WITHINGS_TOKEN_MODE", "Unsigned");
    env::set_var("WITHINGS_HTTP_TIMEOUT_SECS", "5");
    env::set_var("WITHINGS_HTTP_CONNECT_TIMEOUT_SECS", " 2 ");

    let config = WithingsConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.credentials.client_id(), "env-client");
    assert_eq!(config.credentials.client_secret(), "env-secret");
    assert_eq!(config.credentials.callback_url(), "https://app.example.com/cb");
    assert_eq!(config.auth_url, "http://localhost:9000/authorize2");
    assert_eq!(config.api_base_url, "http://localhost:9000/v2");
    assert_eq!(config.token_mode, TokenRequestMode::Unsigned);
    assert_eq!(
        config.http,
        HttpClientConfig {
            timeout_secs: 5,
            connect_timeout_secs: 2,
        }
    );
    assert!(config.validate_and_log());
    assert!(config.validate_endpoints().is_ok());
}

#[test]
#[serial]
fn test_from_env_rejects_unknown_token_mode() {
    clear_env();
    env::set_var("WITHINGS_TOKEN_MODE", "hmac");

    let result = WithingsConfig::from_env();
    clear_env();

    match result {
        Err(WithingsError::Config(message)) => {
            assert!(message.contains("WITHINGS_TOKEN_MODE"));
            assert!(message.contains("hmac"));
        }
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_from_env_rejects_non_numeric_timeout() {
    clear_env();
    env::set_var("WITHINGS_HTTP_TIMEOUT_SECS", "thirty");

    let result = HttpClientConfig::from_env();
    clear_env();

    assert!(matches!(result, Err(WithingsError::Config(_))));
}

#[test]
fn test_default_config_targets_production() {
    let config = WithingsConfig::default();

    assert_eq!(config.auth_url, withings_api::AUTHORIZATION_URL);
    assert_eq!(config.api_base_url, withings_api::API_BASE_URL);
    assert_eq!(config.token_mode, TokenRequestMode::Signed);
    assert_eq!(config.credentials.client_id(), "");
}

#[test]
fn test_builder_overrides() {
    let config = WithingsConfig::new("id", "secret", "https://cb")
        .with_auth_url("http://localhost/auth")
        .with_api_base_url("http://localhost/api")
        .with_token_mode(TokenRequestMode::Unsigned)
        .with_http(HttpClientConfig {
            timeout_secs: 7,
            connect_timeout_secs: 3,
        });

    assert_eq!(config.auth_url, "http://localhost/auth");
    assert_eq!(config.api_base_url, "http://localhost/api");
    assert_eq!(config.token_mode, TokenRequestMode::Unsigned);
    assert_eq!(config.http.timeout_secs, 7);
}
