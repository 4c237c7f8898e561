// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Builds mock-server backed Withings clients and canned vendor responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

use serde_json::{json, Value};
use withings_oauth2::config::{TokenRequestMode, WithingsConfig};
use withings_oauth2::providers::WithingsProvider;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CLIENT_ID: &str = "test_client_id";
pub const CLIENT_SECRET: &str = "test_client_secret";
pub const CALLBACK_URL: &str = "https://app.example.com/callback";
pub const NONCE: &str = "4a7f2c9e1b";

/// Configuration pointing every endpoint at the mock server
pub fn test_config(server: &MockServer, token_mode: TokenRequestMode) -> WithingsConfig {
    WithingsConfig::new(CLIENT_ID, CLIENT_SECRET, CALLBACK_URL)
        .with_api_base_url(server.uri())
        .with_token_mode(token_mode)
}

/// Provider in signed mode against the mock server
pub fn test_provider(server: &MockServer) -> WithingsProvider {
    WithingsProvider::new(test_config(server, TokenRequestMode::Signed))
}

/// Withings-shaped success envelope
pub fn ok_body(body: Value) -> Value {
    json!({ "status": 0, "body": body })
}

/// Mount a `/signature` mock that hands out [`NONCE`]
pub async fn mount_nonce(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/signature"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(json!({ "nonce": NONCE }))))
        .mount(server)
        .await;
}

/// JSON bodies of every request the mock server saw on `endpoint`
pub async fn received_bodies(server: &MockServer, endpoint: &str) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.url.path() == endpoint)
        .map(|request| serde_json::from_slice(&request.body).unwrap())
        .collect()
}
