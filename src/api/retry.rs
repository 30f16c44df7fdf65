// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Retry combinator for API requests.
//!
//! Reads get three attempts, writes two, with a fixed delay between attempts.
//! Only transient failures are retried: network errors, timeouts and the
//! configured status codes.

use crate::error::ApiError;
use reqwest::Method;
use std::future::Future;
use std::time::Duration;

/// Status codes that indicate a transient server-side condition.
pub const RETRY_STATUS_CODES: [u16; 5] = [408, 500, 502, 503, 504];

/// Total attempts for idempotent reads.
pub const READ_ATTEMPTS: u32 = 3;

/// Total attempts for mutating requests.
pub const WRITE_ATTEMPTS: u32 = 2;

/// Fixed delay between attempts.
pub const RETRY_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub read_attempts: u32,
    pub write_attempts: u32,
    pub retry_statuses: Vec<u16>,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            read_attempts: READ_ATTEMPTS,
            write_attempts: WRITE_ATTEMPTS,
            retry_statuses: RETRY_STATUS_CODES.to_vec(),
            delay: RETRY_DELAY,
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    pub fn none() -> Self {
        Self {
            read_attempts: 1,
            write_attempts: 1,
            retry_statuses: Vec::new(),
            delay: Duration::ZERO,
        }
    }

    /// Same policy with a different delay (tests use a short one).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Maximum number of attempts for a request with this method.
    pub fn attempts_for(&self, method: &Method) -> u32 {
        let attempts = if method == Method::GET || method == Method::HEAD {
            self.read_attempts
        } else {
            self.write_attempts
        };
        attempts.max(1)
    }

    /// Whether this failure may succeed if the request is sent again.
    pub fn is_retryable(&self, err: &ApiError) -> bool {
        match err {
            ApiError::Network(_) | ApiError::Timeout => true,
            ApiError::Http { status, .. } => self.retry_statuses.contains(status),
            ApiError::Validation { .. } | ApiError::Decode(_) => false,
        }
    }

    /// Drive `op` until it succeeds, fails permanently, or runs out of attempts.
    ///
    /// `op` receives the 1-based attempt number.
    pub async fn run<T, F, Fut>(&self, method: &Method, mut op: F) -> Result<T, ApiError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let max_attempts = self.attempts_for(method);
        let mut attempt = 1;

        loop {
            match op(attempt).await {
                Ok(value) => return Ok(value),
                Err(err) if attempt < max_attempts && self.is_retryable(&err) => {
                    tracing::warn!(
                        %method,
                        attempt,
                        max_attempts,
                        error = %err,
                        "Request failed, retrying"
                    );
                    tokio::time::sleep(self.delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
