// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authentication endpoints.

use crate::api::{endpoints, ApiClient, ApiRequest};
use crate::error::Result;
use crate::models::{AuthSession, NewAccount, TokenPair};

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession> {
        let body = serde_json::json!({ "email": email, "password": password });
        self.api
            .send(ApiRequest::post(endpoints::auth::LOGIN).json(body))
            .await
    }

    pub async fn register(&self, account: &NewAccount) -> Result<AuthSession> {
        let body = serde_json::to_value(account)?;
        self.api
            .send(ApiRequest::post(endpoints::auth::REGISTER).json(body))
            .await
    }

    pub async fn logout(&self) -> Result<()> {
        self.api
            .send_empty(ApiRequest::post(endpoints::auth::LOGOUT))
            .await
    }

    /// Exchange a refresh token for a new token pair.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<TokenPair> {
        let body = serde_json::json!({ "refreshToken": refresh_token });
        self.api
            .send(ApiRequest::post(endpoints::auth::REFRESH).json(body))
            .await
    }

    pub async fn forgot_password(&self, email: &str) -> Result<()> {
        let body = serde_json::json!({ "email": email });
        self.api
            .send_empty(ApiRequest::post(endpoints::auth::FORGOT_PASSWORD).json(body))
            .await
    }

    pub async fn reset_password(&self, token: &str, password: &str) -> Result<()> {
        let body = serde_json::json!({ "token": token, "password": password });
        self.api
            .send_empty(ApiRequest::post(endpoints::auth::RESET_PASSWORD).json(body))
            .await
    }

    pub async fn verify_email(&self, token: &str) -> Result<()> {
        let body = serde_json::json!({ "token": token });
        self.api
            .send_empty(ApiRequest::post(endpoints::auth::VERIFY_EMAIL).json(body))
            .await
    }
}
