// ABOUTME: Default request parameters for Withings resource endpoints and the shallow merge
// ABOUTME: Defaults are built by functions at call time so time windows always end "now"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::defaults;
use crate::utils::dates::{now_millis, ymd_window};
use serde_json::{json, Map, Value};

/// Caller-supplied body parameters for a resource request
pub type RequestOptions = Map<String, Value>;

/// `getmeas` defaults: weight, height and fat ratio over the last 24 hours
///
/// Timestamps are epoch milliseconds.
#[must_use]
pub fn measures_defaults() -> RequestOptions {
    let now = now_millis();
    let mut options = Map::new();
    options.insert("meastypes".into(), json!(defaults::MEAS_TYPES));
    options.insert("category".into(), json!(defaults::MEAS_CATEGORY));
    options.insert("startdate".into(), json!(now - defaults::MEAS_LOOKBACK_MS));
    options.insert("enddate".into(), json!(now));
    options.insert("lastupdate".into(), json!(now));
    options
}

/// `startdateymd` / `enddateymd` covering the last 30 days, ending today
#[must_use]
pub fn ymd_window_defaults() -> RequestOptions {
    let (start, end) = ymd_window(defaults::LOOKBACK_DAYS);
    let mut options = Map::new();
    options.insert("startdateymd".into(), json!(start));
    options.insert("enddateymd".into(), json!(end));
    options
}

/// Build a request body: `action`, then defaults, then caller options
///
/// Caller values replace defaults key by key. `action` always names the
/// endpoint verb, even if the caller supplied one.
#[must_use]
pub fn build_body(
    action: &str,
    base: RequestOptions,
    options: Option<RequestOptions>,
) -> Value {
    let mut body = base;
    if let Some(options) = options {
        body.extend(options);
    }
    body.insert("action".into(), json!(action));
    Value::Object(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_body_caller_wins_per_key() {
        let mut options = Map::new();
        options.insert("category".into(), json!(2));

        let body = build_body("getmeas", measures_defaults(), Some(options));

        assert_eq!(body["action"], "getmeas");
        assert_eq!(body["category"], 2);
        assert_eq!(body["meastypes"], "1,4,12");
        assert!(body["startdate"].is_i64());
    }

    #[test]
    fn test_build_body_action_is_not_overridable() {
        let mut options = Map::new();
        options.insert("action".into(), json!("getsomethingelse"));

        let body = build_body("getdevice", Map::new(), Some(options));
        assert_eq!(body, json!({ "action": "getdevice" }));
    }

    #[test]
    fn test_measures_window_is_one_day() {
        let options = measures_defaults();
        let start = options["startdate"].as_i64().unwrap();
        let end = options["enddate"].as_i64().unwrap();
        assert_eq!(end - start, 86_400_000);
        assert_eq!(options["lastupdate"], options["enddate"]);
    }
}
