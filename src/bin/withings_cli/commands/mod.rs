// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for withings-cli
// ABOUTME: Provides OAuth and resource fetch commands

pub mod fetch;
pub mod oauth;
