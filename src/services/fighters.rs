// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fighter endpoints.

use crate::api::{endpoints, ApiClient, ApiRequest};
use crate::error::Result;
use crate::models::{Fight, Fighter, FighterStats, Page};
use crate::store::FightersFilter;

/// Default page for a fighter's fight list.
pub const DEFAULT_FIGHTS_PAGE: Page = Page::new(1, 10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Query for `GET /fighters`. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FighterListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub weight_class: Option<String>,
    pub organization: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl From<&FightersFilter> for FighterListParams {
    fn from(filter: &FightersFilter) -> Self {
        Self {
            weight_class: filter.weight_class.clone(),
            organization: filter.organization.clone(),
            sort_by: Some(filter.sort_by.clone()),
            ..Default::default()
        }
    }
}

#[derive(Clone)]
pub struct FighterService {
    api: ApiClient,
}

impl FighterService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, params: &FighterListParams) -> Result<Vec<Fighter>> {
        let request = ApiRequest::get(endpoints::fighters::LIST)
            .query_opt("page", params.page)
            .query_opt("limit", params.limit)
            .query_opt("weightClass", params.weight_class.as_deref())
            .query_opt("organization", params.organization.as_deref())
            .query_opt("search", params.search.as_deref())
            .query_opt("sortBy", params.sort_by.as_deref())
            .query_opt("sortOrder", params.sort_order.map(SortOrder::as_str));
        self.api.send(request).await
    }

    pub async fn detail(&self, fighter_id: &str) -> Result<Fighter> {
        self.api
            .send(ApiRequest::get(endpoints::fighters::detail(fighter_id)))
            .await
    }

    pub async fn stats(&self, fighter_id: &str) -> Result<FighterStats> {
        self.api
            .send(ApiRequest::get(endpoints::fighters::stats(fighter_id)))
            .await
    }

    pub async fn fights(&self, fighter_id: &str, page: Page) -> Result<Vec<Fight>> {
        self.api
            .send(ApiRequest::get(endpoints::fighters::fights(fighter_id)).page(page))
            .await
    }

    /// Rankings, optionally limited to one weight class.
    pub async fn rankings(&self, weight_class: Option<&str>) -> Result<Vec<Fighter>> {
        let request =
            ApiRequest::get(endpoints::fighters::RANKINGS).query_opt("weightClass", weight_class);
        self.api.send(request).await
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Fighter>> {
        self.api
            .send(ApiRequest::get(endpoints::fighters::SEARCH).query("q", query))
            .await
    }

    pub async fn follow(&self, fighter_id: &str) -> Result<()> {
        self.api
            .send_empty(ApiRequest::post(endpoints::fighters::follow(fighter_id)))
            .await
    }
}
