// ABOUTME: OAuth2 client for Withings: authorization URL construction and token requests
// ABOUTME: Supports signed (nonce + HMAC) and unsigned token exchange against /oauth2
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::credentials::ClientCredentials;
use super::signature::{fetch_nonce, format_scope, generate_signature};
use crate::config::{TokenRequestMode, WithingsConfig};
use crate::constants::{actions, grant_types, withings_api};
use crate::errors::{WithingsError, WithingsResult};
use crate::utils::http_client::{create_client, post_json};
use serde_json::{json, Map, Value};
use tracing::{info, instrument};
use url::Url;

/// What is being traded for tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenGrant {
    /// Authorization code returned to the callback URL
    AuthorizationCode {
        /// The code from the callback query string
        code: String,
    },
    /// Previously issued refresh token
    RefreshToken {
        /// The refresh token
        refresh_token: String,
    },
}

impl TokenGrant {
    /// OAuth2 `grant_type` value
    #[must_use]
    pub const fn grant_type(&self) -> &'static str {
        match self {
            Self::AuthorizationCode { .. } => grant_types::AUTHORIZATION_CODE,
            Self::RefreshToken { .. } => grant_types::REFRESH_TOKEN,
        }
    }
}

/// OAuth 2.0 client for the Withings authorization-code flow
#[derive(Debug, Clone)]
pub struct WithingsOAuth2Client {
    config: WithingsConfig,
    client: reqwest::Client,
}

impl WithingsOAuth2Client {
    /// Create a client whose HTTP timeouts come from the configuration
    #[must_use]
    pub fn new(config: WithingsConfig) -> Self {
        let client = create_client(&config.http);
        Self { config, client }
    }

    /// Create a client that reuses a caller-supplied HTTP client
    #[must_use]
    pub const fn with_http_client(config: WithingsConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    /// Get the configuration
    #[must_use]
    pub const fn config(&self) -> &WithingsConfig {
        &self.config
    }

    /// Get the HTTP client used for every request
    #[must_use]
    pub const fn http_client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Credential holder
    #[must_use]
    pub const fn credentials(&self) -> &ClientCredentials {
        &self.config.credentials
    }

    /// Mutable credential holder
    pub fn credentials_mut(&mut self) -> &mut ClientCredentials {
        &mut self.config.credentials
    }

    /// Build the authorization URL by plain concatenation
    ///
    /// Neither `state` nor the formatted scope is percent-encoded, matching
    /// what the vendor has historically accepted. Use
    /// [`Self::authorization_url_encoded`] when values may contain reserved
    /// characters.
    #[must_use]
    pub fn authorization_url(&self, state: &str, scope: &str) -> String {
        let credentials = &self.config.credentials;
        format!(
            "{}?response_type=code&client_id={}&state={state}&scope={}&redirect_uri={}",
            self.config.auth_url,
            credentials.client_id(),
            format_scope(scope),
            credentials.callback_url()
        )
    }

    /// Build the authorization URL with percent-encoded query values
    ///
    /// # Errors
    ///
    /// Returns an error if the configured authorization endpoint is not a URL
    pub fn authorization_url_encoded(&self, state: &str, scope: &str) -> WithingsResult<String> {
        let mut url = Url::parse(&self.config.auth_url)
            .map_err(|e| WithingsError::InvalidUrl(format!("{}: {e}", self.config.auth_url)))?;

        let credentials = &self.config.credentials;
        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", credentials.client_id())
            .append_pair("state", state)
            .append_pair("scope", &format_scope(scope))
            .append_pair("redirect_uri", credentials.callback_url());

        Ok(url.to_string())
    }

    /// Exchange an authorization code for tokens
    ///
    /// Returns the vendor payload unmodified.
    ///
    /// # Errors
    ///
    /// Returns an error if the nonce or token request fails
    pub async fn get_access_token(&self, code: &str) -> WithingsResult<Value> {
        self.exchange_token(&TokenGrant::AuthorizationCode {
            code: code.to_owned(),
        })
        .await
    }

    /// Trade a refresh token for a new token set
    ///
    /// # Errors
    ///
    /// Returns an error if the nonce or token request fails
    pub async fn refresh_access_token(&self, refresh_token: &str) -> WithingsResult<Value> {
        self.exchange_token(&TokenGrant::RefreshToken {
            refresh_token: refresh_token.to_owned(),
        })
        .await
    }

    /// POST a token request to `/oauth2` using the configured strategy
    ///
    /// # Errors
    ///
    /// Returns an error if the nonce or token request fails
    #[instrument(
        skip(self, grant),
        fields(
            provider = withings_api::PROVIDER_NAME,
            grant_type = grant.grant_type(),
            token_mode = %self.config.token_mode,
        )
    )]
    pub async fn exchange_token(&self, grant: &TokenGrant) -> WithingsResult<Value> {
        let body = self.token_request_body(grant).await?;

        info!("Requesting Withings tokens");
        post_json(
            &self.client,
            &self.config.api_base_url,
            withings_api::OAUTH2_PATH,
            &body,
            None,
        )
        .await
    }

    /// Assemble the `/oauth2` body, fetching a nonce first in signed mode
    async fn token_request_body(&self, grant: &TokenGrant) -> WithingsResult<Value> {
        let credentials = &self.config.credentials;
        let mut body = Map::new();
        body.insert("action".into(), json!(actions::REQUEST_TOKEN));
        body.insert("client_id".into(), json!(credentials.client_id()));

        if self.config.token_mode == TokenRequestMode::Signed {
            let nonce = fetch_nonce(
                &self.client,
                &self.config.api_base_url,
                credentials.client_id(),
                credentials.client_secret(),
            )
            .await?;
            let signature = generate_signature(
                actions::REQUEST_TOKEN,
                credentials.client_id(),
                credentials.client_secret(),
                &nonce,
            );
            body.insert("nonce".into(), json!(nonce));
            body.insert("signature".into(), json!(signature));
        }

        body.insert("client_secret".into(), json!(credentials.client_secret()));
        body.insert("grant_type".into(), json!(grant.grant_type()));

        match grant {
            TokenGrant::AuthorizationCode { code } => {
                body.insert("code".into(), json!(code));
                body.insert("redirect_uri".into(), json!(credentials.callback_url()));
            }
            TokenGrant::RefreshToken { refresh_token } => {
                body.insert("refresh_token".into(), json!(refresh_token));
            }
        }

        Ok(Value::Object(body))
    }
}
