// ABOUTME: Credential holder for the Withings OAuth2 client
// ABOUTME: Stores client id, client secret, and callback URL with plain get/set accessors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Long-lived client credentials
///
/// No validation is performed: empty or malformed values are passed through
/// and surface as vendor rejections.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientCredentials {
    client_id: String,
    #[serde(skip_serializing)]
    client_secret: String,
    callback_url: String,
}

impl ClientCredentials {
    /// Create a credential holder
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            callback_url: callback_url.into(),
        }
    }

    /// OAuth client identifier
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Replace the client identifier
    pub fn set_client_id(&mut self, client_id: impl Into<String>) {
        self.client_id = client_id.into();
    }

    /// OAuth client secret
    #[must_use]
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Replace the client secret
    pub fn set_client_secret(&mut self, client_secret: impl Into<String>) {
        self.client_secret = client_secret.into();
    }

    /// Registered redirect URI
    #[must_use]
    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }

    /// Replace the redirect URI
    pub fn set_callback_url(&mut self, callback_url: impl Into<String>) {
        self.callback_url = callback_url.into();
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("callback_url", &self.callback_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_round_trip_any_value() {
        let mut credentials = ClientCredentials::new("id", "secret", "https://cb");
        assert_eq!(credentials.client_id(), "id");
        assert_eq!(credentials.client_secret(), "secret");
        assert_eq!(credentials.callback_url(), "https://cb");

        credentials.set_client_id("");
        credentials.set_client_secret("other");
        credentials.set_callback_url("not a url");
        assert_eq!(credentials.client_id(), "");
        assert_eq!(credentials.client_secret(), "other");
        assert_eq!(credentials.callback_url(), "not a url");
    }

    #[test]
    fn test_serialization_omits_secret() {
        let credentials = ClientCredentials::new("id", "hunter2", "https://cb");
        let value = serde_json::to_value(&credentials).unwrap();
        assert_eq!(value, serde_json::json!({ "client_id": "id", "callback_url": "https://cb" }));

        let loaded: ClientCredentials = serde_json::from_value(serde_json::json!({
            "client_id": "id",
            "client_secret": "hunter2",
            "callback_url": "https://cb",
        }))
        .unwrap();
        assert_eq!(loaded, credentials);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let credentials = ClientCredentials::new("id", "hunter2", "https://cb");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("id"));
        assert!(!debug.contains("hunter2"));
    }
}
