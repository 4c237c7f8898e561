// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Resource fetch command for withings-cli
// ABOUTME: Parses --options JSON and prints the vendor response

use crate::helpers::display::{print_json, warn_on_vendor_status};
use anyhow::{bail, Context, Result};
use serde_json::Value;
use withings_oauth2::providers::{RequestOptions, WithingsProvider, WithingsResource};

/// Parse the `--options` argument into a JSON object
fn parse_options(raw: Option<&str>) -> Result<Option<RequestOptions>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match serde_json::from_str::<Value>(raw).context("--options is not valid JSON")? {
        Value::Object(map) => Ok(Some(map)),
        other => bail!("--options must be a JSON object, got {other}"),
    }
}

/// Fetch a resource and print it
pub async fn fetch(
    withings: &WithingsProvider,
    resource: WithingsResource,
    access_token: &str,
    options: Option<&str>,
) -> Result<()> {
    let options = parse_options(options)?;
    let response = withings
        .fetch(resource, access_token, options)
        .await
        .with_context(|| format!("Failed to fetch {}", resource.name()))?;
    warn_on_vendor_status(&response);
    print_json(&response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options() {
        assert!(parse_options(None).unwrap().is_none());

        let options = parse_options(Some(r#"{"category":2,"offset":5}"#))
            .unwrap()
            .unwrap();
        assert_eq!(options["category"], 2);
        assert_eq!(options.len(), 2);

        assert!(parse_options(Some("[1,2]")).is_err());
        assert!(parse_options(Some("{not json")).is_err());
    }
}
