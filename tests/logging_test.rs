// ABOUTME: Integration tests for logging configuration
// ABOUTME: Validates environment parsing and subscriber installation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use withings_oauth2::logging::{LogFormat, LoggingConfig};

fn clear_env() {
    for name in ["RUST_LOG", "LOG_FORMAT", "LOG_INCLUDE_LOCATION", "LOG_INCLUDE_SPANS"] {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "1");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(!config.include_spans);
    assert_eq!(config.service_name, "withings-cli");
}

#[test]
#[serial]
fn test_unknown_format_falls_back_to_compact() {
    clear_env();
    env::set_var("LOG_FORMAT", "xml");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.level, "info");
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.service_version, env!("CARGO_PKG_VERSION"));
    assert_eq!(config.clone().with_level("trace").level, "trace");
}

#[test]
#[serial]
fn test_second_init_is_rejected() {
    let config = LoggingConfig::default().with_level("warn");

    // The first call may race other test binaries' subscribers, the second never succeeds
    let _ = config.init();
    assert!(config.init().is_err());
}
