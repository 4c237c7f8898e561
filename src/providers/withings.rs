// ABOUTME: Withings API facade: one method per vendor resource endpoint plus OAuth passthroughs
// ABOUTME: Each fetch merges caller options over call-time defaults and POSTs with a bearer token
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::options::{build_body, measures_defaults, ymd_window_defaults, RequestOptions};
use crate::config::WithingsConfig;
use crate::constants::{actions, withings_api};
use crate::errors::WithingsResult;
use crate::oauth2_client::{ClientCredentials, WithingsOAuth2Client};
use crate::utils::http_client::post_json;
use serde_json::{Map, Value};
use tracing::instrument;

/// A Withings resource: endpoint path, `action` verb, and default parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WithingsResource {
    /// Devices linked to the user
    Devices,
    /// Step, sleep and weight goals
    Goals,
    /// Body measurements
    Measures,
    /// Daily activity aggregates
    Activities,
    /// High-frequency activity samples
    IntradayActivity,
    /// Workout sessions
    Workouts,
    /// Heart recordings
    HeartList,
    /// Nightly sleep summaries
    SleepSummary,
}

impl WithingsResource {
    /// All resources, in declaration order
    pub const ALL: [Self; 8] = [
        Self::Devices,
        Self::Goals,
        Self::Measures,
        Self::Activities,
        Self::IntradayActivity,
        Self::Workouts,
        Self::HeartList,
        Self::SleepSummary,
    ];

    /// Endpoint path relative to the API base URL
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Devices | Self::Goals => withings_api::USER_PATH,
            Self::Measures | Self::Activities | Self::IntradayActivity | Self::Workouts => {
                withings_api::MEASURE_PATH
            }
            Self::HeartList => withings_api::HEART_PATH,
            Self::SleepSummary => withings_api::SLEEP_PATH,
        }
    }

    /// `action` value sent in the body
    #[must_use]
    pub const fn action(self) -> &'static str {
        match self {
            Self::Devices => actions::GET_DEVICE,
            Self::Goals => actions::GET_GOALS,
            Self::Measures => actions::GET_MEAS,
            Self::Activities => actions::GET_ACTIVITY,
            Self::IntradayActivity => actions::GET_INTRADAY_ACTIVITY,
            Self::Workouts => actions::GET_WORKOUTS,
            Self::HeartList => actions::LIST,
            Self::SleepSummary => actions::GET_SUMMARY,
        }
    }

    /// Default parameters, computed now
    #[must_use]
    pub fn default_options(self) -> RequestOptions {
        match self {
            Self::Measures => measures_defaults(),
            Self::Activities | Self::Workouts | Self::SleepSummary => ymd_window_defaults(),
            Self::Devices | Self::Goals | Self::IntradayActivity | Self::HeartList => Map::new(),
        }
    }

    /// Short name used by the CLI and in logs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Devices => "devices",
            Self::Goals => "goals",
            Self::Measures => "measures",
            Self::Activities => "activities",
            Self::IntradayActivity => "intraday",
            Self::Workouts => "workouts",
            Self::HeartList => "heart",
            Self::SleepSummary => "sleep",
        }
    }
}

/// Withings provider: OAuth operations and bearer-authenticated resource fetches
///
/// Fetches take `&self` and build independent request state, so they can run
/// concurrently. Credentials change only through `&mut self`.
#[derive(Debug, Clone)]
pub struct WithingsProvider {
    oauth: WithingsOAuth2Client,
}

impl WithingsProvider {
    /// Create a provider from configuration
    #[must_use]
    pub fn new(config: WithingsConfig) -> Self {
        Self {
            oauth: WithingsOAuth2Client::new(config),
        }
    }

    /// Create a provider that reuses a caller-supplied HTTP client
    #[must_use]
    pub const fn with_http_client(config: WithingsConfig, client: reqwest::Client) -> Self {
        Self {
            oauth: WithingsOAuth2Client::with_http_client(config, client),
        }
    }

    /// Underlying OAuth client
    #[must_use]
    pub const fn oauth(&self) -> &WithingsOAuth2Client {
        &self.oauth
    }

    /// Credential holder
    #[must_use]
    pub const fn credentials(&self) -> &ClientCredentials {
        self.oauth.credentials()
    }

    /// Mutable credential holder
    pub fn credentials_mut(&mut self) -> &mut ClientCredentials {
        self.oauth.credentials_mut()
    }

    /// OAuth client identifier
    #[must_use]
    pub fn client_id(&self) -> &str {
        self.credentials().client_id()
    }

    /// Replace the client identifier
    pub fn set_client_id(&mut self, client_id: impl Into<String>) {
        self.credentials_mut().set_client_id(client_id);
    }

    /// OAuth client secret
    #[must_use]
    pub fn client_secret(&self) -> &str {
        self.credentials().client_secret()
    }

    /// Replace the client secret
    pub fn set_client_secret(&mut self, client_secret: impl Into<String>) {
        self.credentials_mut().set_client_secret(client_secret);
    }

    /// Registered redirect URI
    #[must_use]
    pub fn callback_url(&self) -> &str {
        self.credentials().callback_url()
    }

    /// Replace the redirect URI
    pub fn set_callback_url(&mut self, callback_url: impl Into<String>) {
        self.credentials_mut().set_callback_url(callback_url);
    }

    /// See [`WithingsOAuth2Client::authorization_url`]
    #[must_use]
    pub fn authorization_url(&self, state: &str, scope: &str) -> String {
        self.oauth.authorization_url(state, scope)
    }

    /// Exchange an authorization code for tokens
    ///
    /// # Errors
    ///
    /// Returns an error if the nonce or token request fails
    pub async fn get_access_token(&self, code: &str) -> WithingsResult<Value> {
        self.oauth.get_access_token(code).await
    }

    /// Refresh the access token
    ///
    /// # Errors
    ///
    /// Returns an error if the nonce or token request fails
    pub async fn refresh_access_token(&self, refresh_token: &str) -> WithingsResult<Value> {
        self.oauth.refresh_access_token(refresh_token).await
    }

    /// Fetch any resource with the given options merged over its defaults
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a
    /// non-JSON body
    #[instrument(
        skip(self, access_token, options),
        fields(provider = withings_api::PROVIDER_NAME, api_call = resource.name())
    )]
    pub async fn fetch(
        &self,
        resource: WithingsResource,
        access_token: &str,
        options: Option<RequestOptions>,
    ) -> WithingsResult<Value> {
        let body = build_body(resource.action(), resource.default_options(), options);
        post_json(
            self.oauth.http_client(),
            &self.oauth.config().api_base_url,
            resource.endpoint(),
            &body,
            Some(access_token),
        )
        .await
    }

    /// Get user devices
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn get_user_devices(
        &self,
        access_token: &str,
        options: Option<RequestOptions>,
    ) -> WithingsResult<Value> {
        self.fetch(WithingsResource::Devices, access_token, options)
            .await
    }

    /// Get user goals
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn get_user_goals(
        &self,
        access_token: &str,
        options: Option<RequestOptions>,
    ) -> WithingsResult<Value> {
        self.fetch(WithingsResource::Goals, access_token, options)
            .await
    }

    /// Get user measures, defaulting to weight/height/fat ratio over 24 hours
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn get_user_measures(
        &self,
        access_token: &str,
        options: Option<RequestOptions>,
    ) -> WithingsResult<Value> {
        self.fetch(WithingsResource::Measures, access_token, options)
            .await
    }

    /// Get daily activities, defaulting to the last 30 days
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn get_user_activities(
        &self,
        access_token: &str,
        options: Option<RequestOptions>,
    ) -> WithingsResult<Value> {
        self.fetch(WithingsResource::Activities, access_token, options)
            .await
    }

    /// Get intraday activity; without options the vendor returns the current day
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn get_user_intraday_activity(
        &self,
        access_token: &str,
        options: Option<RequestOptions>,
    ) -> WithingsResult<Value> {
        self.fetch(WithingsResource::IntradayActivity, access_token, options)
            .await
    }

    /// Get workouts, defaulting to the last 30 days
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn get_user_workouts(
        &self,
        access_token: &str,
        options: Option<RequestOptions>,
    ) -> WithingsResult<Value> {
        self.fetch(WithingsResource::Workouts, access_token, options)
            .await
    }

    /// Get heart recordings
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn get_heart_list(
        &self,
        access_token: &str,
        options: Option<RequestOptions>,
    ) -> WithingsResult<Value> {
        self.fetch(WithingsResource::HeartList, access_token, options)
            .await
    }

    /// Get sleep summaries, defaulting to the last 30 days
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn get_sleep_summary(
        &self,
        access_token: &str,
        options: Option<RequestOptions>,
    ) -> WithingsResult<Value> {
        self.fetch(WithingsResource::SleepSummary, access_token, options)
            .await
    }

    /// Withings `status` field of a response body (0 means success)
    ///
    /// Bodies are returned verbatim, so a 2xx reply can still carry a vendor
    /// error code; callers that care read it here.
    #[must_use]
    pub fn vendor_status(response: &Value) -> Option<i64> {
        response.get("status").and_then(Value::as_i64)
    }
}

impl std::str::FromStr for WithingsResource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|resource| resource.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|r| r.name()).collect();
                format!("unknown resource '{s}', expected one of: {}", names.join(", "))
            })
    }
}
