// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: OAuth commands for withings-cli: authorization URL, code exchange, refresh
// ABOUTME: Token payloads are printed exactly as returned by the vendor

use crate::helpers::display::{print_json, warn_on_vendor_status};
use anyhow::{Context, Result};
use withings_oauth2::providers::WithingsProvider;

/// Print the authorization URL
pub fn authorize_url(
    withings: &WithingsProvider,
    state: &str,
    scope: &str,
    encoded: bool,
) -> Result<()> {
    let url = if encoded {
        withings
            .oauth()
            .authorization_url_encoded(state, scope)
            .context("Failed to build authorization URL")?
    } else {
        withings.authorization_url(state, scope)
    };
    println!("{url}");
    Ok(())
}

/// Exchange an authorization code and print the token payload
pub async fn exchange(withings: &WithingsProvider, code: &str) -> Result<()> {
    let tokens = withings
        .get_access_token(code)
        .await
        .context("Token exchange failed")?;
    warn_on_vendor_status(&tokens);
    print_json(&tokens)
}

/// Refresh tokens and print the new payload
pub async fn refresh(withings: &WithingsProvider, refresh_token: &str) -> Result<()> {
    let tokens = withings
        .refresh_access_token(refresh_token)
        .await
        .context("Token refresh failed")?;
    warn_on_vendor_status(&tokens);
    print_json(&tokens)
}
