// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Search endpoints.

use crate::api::{endpoints, ApiClient, ApiRequest};
use crate::error::Result;
use crate::models::{Event, Fighter, Post, SearchResults, User};

pub const DEFAULT_LIMIT: u32 = 10;

#[derive(Clone)]
pub struct SearchService {
    api: ApiClient,
}

impl SearchService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Search every resource type at once.
    pub async fn all(&self, query: &str) -> Result<SearchResults> {
        self.api
            .send(ApiRequest::get(endpoints::search::ALL).query("q", query))
            .await
    }

    pub async fn fighters(&self, query: &str, limit: u32) -> Result<Vec<Fighter>> {
        self.scoped(endpoints::search::FIGHTERS, query, limit).await
    }

    pub async fn events(&self, query: &str, limit: u32) -> Result<Vec<Event>> {
        self.scoped(endpoints::search::EVENTS, query, limit).await
    }

    pub async fn users(&self, query: &str, limit: u32) -> Result<Vec<User>> {
        self.scoped(endpoints::search::USERS, query, limit).await
    }

    pub async fn posts(&self, query: &str, limit: u32) -> Result<Vec<Post>> {
        self.scoped(endpoints::search::POSTS, query, limit).await
    }

    async fn scoped<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
        limit: u32,
    ) -> Result<Vec<T>> {
        self.api
            .send(ApiRequest::get(path).query("q", query).query("limit", limit))
            .await
    }
}
