// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP client for the MMA Universe REST API.
//!
//! Handles:
//! - Base URL resolution and per-request timeout
//! - Bearer token attachment from the shared token slot
//! - Retry of transient failures (see [`RetryPolicy`])
//! - Normalization of every failure into [`ApiError`]

use crate::api::retry::RetryPolicy;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::Page;
use arc_swap::ArcSwapOption;
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;

/// Request body variants.
#[derive(Debug, Clone, Default)]
pub enum Body {
    #[default]
    Empty,
    Json(serde_json::Value),
    File(FilePart),
}

/// A file sent as a multipart form part.
#[derive(Debug, Clone)]
pub struct FilePart {
    /// Form field name
    pub field: String,
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// A single API call, independent of how many times it is sent.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(&'static str, String)>,
    body: Body,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: Body::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a query parameter.
    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Append a query parameter only when a value is present.
    pub fn query_opt<V: ToString>(self, key: &'static str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    /// Append `page` and `limit`.
    pub fn page(self, page: Page) -> Self {
        self.query("page", page.page).query("limit", page.limit)
    }

    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Body::Json(body);
        self
    }

    pub fn file(mut self, part: FilePart) -> Self {
        self.body = Body::File(part);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_pairs(&self) -> &[(&'static str, String)] {
        &self.query
    }

    pub fn body(&self) -> &Body {
        &self.body
    }
}

/// API client. Cheap to clone; clones share the bearer token slot.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<ArcSwapOption<String>>,
    retry: RetryPolicy,
}

impl ApiClient {
    /// Create a client for the configured backend with the default retry policy.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            token: Arc::new(ArcSwapOption::empty()),
            retry: RetryPolicy::default(),
        })
    }

    /// Replace the retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// The bearer token attached to outgoing requests, if any.
    pub fn current_token(&self) -> Option<String> {
        self.token.load_full().map(|t| t.as_str().to_owned())
    }

    /// Replace the bearer token. Only the auth store calls this.
    pub(crate) fn set_token(&self, token: Option<&str>) {
        self.token.store(token.map(|t| Arc::new(t.to_owned())));
        tracing::debug!(authenticated = token.is_some(), "API token updated");
    }

    /// Send a request and decode the JSON response body.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let body = self.execute(&request).await?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(
                method = %request.method,
                path = %request.path,
                error = %e,
                "Response did not match expected shape"
            );
            ApiError::Decode(format!("{} {}: {}", request.method, request.path, e))
        })
    }

    /// Send a request whose response body is irrelevant.
    pub async fn send_empty(&self, request: ApiRequest) -> Result<()> {
        self.execute(&request).await.map(|_| ())
    }

    /// Run all attempts for a request, returning the successful body bytes.
    async fn execute(&self, request: &ApiRequest) -> Result<Vec<u8>> {
        self.retry
            .run(&request.method, |attempt| self.attempt(request, attempt))
            .await
    }

    async fn attempt(&self, request: &ApiRequest, attempt: u32) -> Result<Vec<u8>> {
        let started = Instant::now();
        tracing::debug!(
            method = %request.method,
            path = %request.path,
            attempt,
            "Sending API request"
        );

        let response = self.build(request)?.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "API response"
        );

        if status.is_success() {
            Ok(body.to_vec())
        } else {
            Err(ApiError::from_response(status.as_u16(), &body))
        }
    }

    fn build(&self, request: &ApiRequest) -> Result<reqwest::RequestBuilder> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self.http.request(request.method.clone(), url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(token) = self.token.load_full() {
            builder = builder.bearer_auth(token.as_str());
        }

        builder = match &request.body {
            Body::Empty => builder,
            Body::Json(value) => builder.json(value),
            Body::File(part) => {
                let file = reqwest::multipart::Part::bytes(part.bytes.clone())
                    .file_name(part.file_name.clone())
                    .mime_str(&part.mime_type)
                    .map_err(|e| {
                        ApiError::Decode(format!("Invalid MIME type {}: {}", part.mime_type, e))
                    })?;
                builder.multipart(reqwest::multipart::Form::new().part(part.field.clone(), file))
            }
        };

        Ok(builder)
    }
}
