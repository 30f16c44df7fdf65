// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fight prediction endpoints.

use crate::api::{endpoints, ApiClient, ApiRequest};
use crate::error::Result;
use crate::models::{LeaderboardEntry, NewPrediction, Page, Prediction};

pub const DEFAULT_PAGE: Page = Page::new(1, 20);
pub const DEFAULT_LEADERBOARD_LIMIT: u32 = 50;

#[derive(Clone)]
pub struct PredictionService {
    api: ApiClient,
}

impl PredictionService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// The current user's predictions.
    pub async fn list(&self, page: Page) -> Result<Vec<Prediction>> {
        self.api
            .send(ApiRequest::get(endpoints::predictions::LIST).page(page))
            .await
    }

    pub async fn create(&self, prediction: &NewPrediction) -> Result<Prediction> {
        let body = serde_json::to_value(prediction)?;
        self.api
            .send(ApiRequest::post(endpoints::predictions::CREATE).json(body))
            .await
    }

    pub async fn for_user(&self, user_id: &str, page: Page) -> Result<Vec<Prediction>> {
        self.api
            .send(ApiRequest::get(endpoints::users::predictions(user_id)).page(page))
            .await
    }

    pub async fn leaderboard(&self, limit: u32) -> Result<Vec<LeaderboardEntry>> {
        self.api
            .send(ApiRequest::get(endpoints::predictions::LEADERBOARD).query("limit", limit))
            .await
    }
}
