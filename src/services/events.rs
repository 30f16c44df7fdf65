// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Event endpoints.

use crate::api::{endpoints, ApiClient, ApiRequest};
use crate::error::Result;
use crate::models::{Event, EventDetails, Fight, Page};
use crate::time_utils::format_utc_rfc3339;
use chrono::{DateTime, Utc};

pub const DEFAULT_UPCOMING_LIMIT: u32 = 10;
pub const DEFAULT_PAST_PAGE: Page = Page::new(1, 10);

/// Query for `GET /events`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub organization: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

#[derive(Clone)]
pub struct EventService {
    api: ApiClient,
}

impl EventService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, params: &EventListParams) -> Result<Vec<Event>> {
        let request = ApiRequest::get(endpoints::events::LIST)
            .query_opt("page", params.page)
            .query_opt("limit", params.limit)
            .query_opt("organization", params.organization.as_deref())
            .query_opt("from", params.from.map(format_utc_rfc3339))
            .query_opt("to", params.to.map(format_utc_rfc3339));
        self.api.send(request).await
    }

    pub async fn detail(&self, event_id: &str) -> Result<EventDetails> {
        self.api
            .send(ApiRequest::get(endpoints::events::detail(event_id)))
            .await
    }

    pub async fn upcoming(&self, limit: u32) -> Result<Vec<Event>> {
        self.api
            .send(ApiRequest::get(endpoints::events::UPCOMING).query("limit", limit))
            .await
    }

    pub async fn past(&self, page: Page) -> Result<Vec<Event>> {
        self.api
            .send(ApiRequest::get(endpoints::events::PAST).page(page))
            .await
    }

    pub async fn live(&self) -> Result<Vec<Event>> {
        self.api.send(ApiRequest::get(endpoints::events::LIVE)).await
    }

    pub async fn fights(&self, event_id: &str) -> Result<Vec<Fight>> {
        self.api
            .send(ApiRequest::get(endpoints::events::fights(event_id)))
            .await
    }
}
