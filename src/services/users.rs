// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile and social-graph endpoints.

use crate::api::{endpoints, ApiClient, ApiRequest};
use crate::error::Result;
use crate::models::{Page, User, UserPatch};

/// Default page for follower/following lists.
pub const DEFAULT_PAGE: Page = Page::new(1, 20);

#[derive(Clone)]
pub struct UserService {
    api: ApiClient,
}

impl UserService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn me(&self) -> Result<User> {
        self.api.send(ApiRequest::get(endpoints::users::ME)).await
    }

    pub async fn profile(&self, user_id: &str) -> Result<User> {
        self.api
            .send(ApiRequest::get(endpoints::users::profile(user_id)))
            .await
    }

    /// Send only the fields present in `patch`.
    pub async fn update_profile(&self, patch: &UserPatch) -> Result<User> {
        let body = serde_json::to_value(patch)?;
        self.api
            .send(ApiRequest::patch(endpoints::users::ME).json(body))
            .await
    }

    pub async fn followers(&self, user_id: &str, page: Page) -> Result<Vec<User>> {
        self.api
            .send(ApiRequest::get(endpoints::users::followers(user_id)).page(page))
            .await
    }

    pub async fn following(&self, user_id: &str, page: Page) -> Result<Vec<User>> {
        self.api
            .send(ApiRequest::get(endpoints::users::following(user_id)).page(page))
            .await
    }

    pub async fn follow(&self, user_id: &str) -> Result<()> {
        self.api
            .send_empty(ApiRequest::post(endpoints::users::follow(user_id)))
            .await
    }

    pub async fn unfollow(&self, user_id: &str) -> Result<()> {
        self.api
            .send_empty(ApiRequest::post(endpoints::users::unfollow(user_id)))
            .await
    }
}
