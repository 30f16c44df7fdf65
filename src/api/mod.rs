// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Transport layer: HTTP client, retry policy and endpoint paths.

pub mod client;
pub mod endpoints;
pub mod retry;

pub use client::{ApiClient, ApiRequest, Body, FilePart};
pub use retry::RetryPolicy;
