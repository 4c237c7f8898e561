// ABOUTME: OAuth 2.0 client implementation for the Withings health-data API
// ABOUTME: Credential holder, request signing, authorization URLs, and token requests
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # OAuth 2.0 Client Module
//!
//! This module handles the OAuth side of talking to Withings:
//! - Authorization URL construction for the authorization-code flow
//! - Token exchange and refresh, signed or unsigned
//! - Nonce retrieval and HMAC-SHA256 request signatures

/// Core OAuth 2.0 client implementation
pub mod client;
/// Client id, secret, and callback URL holder
pub mod credentials;
/// Scope formatting, signatures, and nonce retrieval
pub mod signature;

pub use client::{TokenGrant, WithingsOAuth2Client};
pub use credentials::ClientCredentials;
pub use signature::{fetch_nonce, format_scope, generate_signature};
