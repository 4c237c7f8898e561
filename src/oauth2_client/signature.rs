// ABOUTME: Request signing helpers for the Withings API: scope formatting, HMAC signatures, nonces
// ABOUTME: Signatures are hex HMAC-SHA256 over "action,client_id,base_value" keyed by the client secret
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Request Signing
//!
//! Withings authenticates token and nonce requests with an HMAC-SHA256
//! signature. The signed string is the comma-joined triple
//! `action,client_id,base_value`, where `base_value` is a Unix timestamp for
//! nonce requests and the nonce itself for token requests. The digest is sent
//! as lowercase hex. This must match the vendor byte for byte.

use crate::constants::{actions, withings_api};
use crate::errors::{WithingsError, WithingsResult};
use crate::utils::dates::now_seconds;
use crate::utils::http_client::post_json;
use reqwest::Client;
use ring::hmac;
use serde_json::json;
use tracing::debug;

/// Turn a raw comma-separated scope list into Withings scopes
///
/// `"activity, metrics"` becomes `"user.activity,user.metrics"`. Elements are
/// trimmed, order is kept, empty elements are dropped, and an element that is
/// already prefixed is left alone.
#[must_use]
pub fn format_scope(scope: &str) -> String {
    scope
        .split(',')
        .map(str::trim)
        .filter(|element| !element.is_empty())
        .map(|element| {
            if element.starts_with(withings_api::SCOPE_PREFIX) {
                element.to_owned()
            } else {
                format!("{}{element}", withings_api::SCOPE_PREFIX)
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Compute the hex HMAC-SHA256 signature Withings expects
#[must_use]
pub fn generate_signature(
    action: &str,
    client_id: &str,
    client_secret: &str,
    base_value: &str,
) -> String {
    let key = hmac::Key::new(hmac::HMAC_SHA256, client_secret.as_bytes());
    let message = format!("{action},{client_id},{base_value}");
    let tag = hmac::sign(&key, message.as_bytes());
    hex::encode(tag.as_ref())
}

/// Fetch a single-use nonce from `/signature`
///
/// The request is signed over the current Unix timestamp (seconds). Any
/// failure is wrapped in [`WithingsError::Nonce`] with the original error as
/// its source.
///
/// # Errors
///
/// Returns an error if the request fails, the vendor rejects it, or the
/// response has no `body.nonce` string
pub async fn fetch_nonce(
    client: &Client,
    api_base_url: &str,
    client_id: &str,
    client_secret: &str,
) -> WithingsResult<String> {
    let timestamp = now_seconds();
    let signature = generate_signature(
        actions::GET_NONCE,
        client_id,
        client_secret,
        &timestamp.to_string(),
    );

    let body = json!({
        "action": actions::GET_NONCE,
        "client_id": client_id,
        "timestamp": timestamp,
        "signature": signature,
    });

    let result = post_json(
        client,
        api_base_url,
        withings_api::SIGNATURE_PATH,
        &body,
        None,
    )
    .await
    .and_then(|response| {
        response
            .pointer("/body/nonce")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| WithingsError::InvalidResponse {
                endpoint: withings_api::SIGNATURE_PATH.to_owned(),
                reason: format!(
                    "missing body.nonce (vendor status: {})",
                    response
                        .get("status")
                        .map_or_else(|| "absent".to_owned(), ToString::to_string)
                ),
            })
    });

    match result {
        Ok(nonce) => {
            debug!("Retrieved Withings nonce");
            Ok(nonce)
        }
        Err(e) => {
            debug!("Withings nonce retrieval failed: {e}");
            Err(WithingsError::nonce(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_scope_trims_and_prefixes() {
        assert_eq!(format_scope("a, b,c"), "user.a,user.b,user.c");
        assert_eq!(format_scope("activity"), "user.activity");
        assert_eq!(format_scope("metrics,activity"), "user.metrics,user.activity");
    }

    #[test]
    fn test_format_scope_edge_cases() {
        assert_eq!(format_scope(""), "");
        assert_eq!(format_scope(" , "), "");
        assert_eq!(format_scope("info,,metrics"), "user.info,user.metrics");
        assert_eq!(format_scope("user.info, metrics"), "user.info,user.metrics");
    }

    #[test]
    fn test_signature_is_hex_sha256() {
        let signature = generate_signature("getnonce", "id", "secret", "1700000000");
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
