// ABOUTME: Utility modules shared by the OAuth2 client and the resource fetchers
// ABOUTME: Contains HTTP client construction and calendar date helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// Calendar date formatting for `*dateymd` parameters
pub mod dates;
/// HTTP client configuration and helpers
pub mod http_client;
