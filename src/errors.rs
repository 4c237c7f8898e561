// ABOUTME: Error types for Withings OAuth2 and resource requests
// ABOUTME: Separates transport failures, vendor rejections, and malformed responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! Every public operation returns [`WithingsResult`]. Errors are surfaced to the
//! caller once; nothing in this crate retries or swallows a failure.

use thiserror::Error;

/// Result alias used throughout the crate
pub type WithingsResult<T> = Result<T, WithingsError>;

/// Errors produced while talking to the Withings API
#[derive(Debug, Error)]
pub enum WithingsError {
    /// Network, DNS, TLS or timeout failure reported by the HTTP client
    #[error("{context}: {source}")]
    Http {
        /// What the client was doing when the transport failed
        context: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The vendor answered with a non-success HTTP status
    #[error("Withings API request to {endpoint} failed with status {status_code}: {body}")]
    ApiError {
        /// Endpoint path that was called
        endpoint: String,
        /// HTTP status code
        status_code: u16,
        /// Raw response body, preserved verbatim
        body: String,
    },

    /// The vendor answered 2xx but the payload could not be used
    #[error("Invalid response from {endpoint}: {reason}")]
    InvalidResponse {
        /// Endpoint path that was called
        endpoint: String,
        /// Why the payload was rejected
        reason: String,
    },

    /// Nonce retrieval failed; the original failure is kept as the source
    #[error("Failed to retrieve nonce: {source}")]
    Nonce {
        /// Underlying failure
        #[source]
        source: Box<WithingsError>,
    },

    /// Authorization URL could not be assembled
    #[error("Invalid authorization URL: {0}")]
    InvalidUrl(String),

    /// Configuration value could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl WithingsError {
    /// Wrap a transport error with context
    #[must_use]
    pub fn http(context: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            context: context.into(),
            source,
        }
    }

    /// Wrap any failure raised while fetching a nonce
    #[must_use]
    pub fn nonce(source: Self) -> Self {
        Self::Nonce {
            source: Box::new(source),
        }
    }

    /// HTTP status reported by the vendor, if the error carries one
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { status_code, .. } => Some(*status_code),
            Self::Nonce { source } => source.status_code(),
            Self::Http { source, .. } => source.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_keeps_body() {
        let error = WithingsError::ApiError {
            endpoint: "measure".to_owned(),
            status_code: 401,
            body: r#"{"status":401,"error":"invalid_token"}"#.to_owned(),
        };
        let text = error.to_string();
        assert!(text.contains("measure"));
        assert!(text.contains("401"));
        assert!(text.contains("invalid_token"));
    }

    #[test]
    fn test_nonce_wrapper_preserves_source() {
        let inner = WithingsError::InvalidResponse {
            endpoint: "signature".to_owned(),
            reason: "missing body.nonce".to_owned(),
        };
        let error = WithingsError::nonce(inner);

        assert!(error.to_string().contains("missing body.nonce"));
        let source = std::error::Error::source(&error).map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("Invalid response from signature: missing body.nonce")
        );
    }

    #[test]
    fn test_status_code_through_nonce_wrapper() {
        let error = WithingsError::nonce(WithingsError::ApiError {
            endpoint: "signature".to_owned(),
            status_code: 503,
            body: String::new(),
        });
        assert_eq!(error.status_code(), Some(503));
        assert_eq!(WithingsError::Config("x".to_owned()).status_code(), None);
    }
}
