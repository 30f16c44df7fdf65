// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use crate::api::{endpoints, ApiClient, ApiRequest};
use crate::error::Result;
use crate::models::{Notification, NotificationSettings, Page};

pub const DEFAULT_PAGE: Page = Page::new(1, 20);

#[derive(Clone)]
pub struct NotificationService {
    api: ApiClient,
}

impl NotificationService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, page: Page) -> Result<Vec<Notification>> {
        self.api
            .send(ApiRequest::get(endpoints::notifications::LIST).page(page))
            .await
    }

    pub async fn mark_read(&self, notification_id: &str) -> Result<()> {
        self.api
            .send_empty(ApiRequest::post(endpoints::notifications::read(notification_id)))
            .await
    }

    pub async fn mark_all_read(&self) -> Result<()> {
        self.api
            .send_empty(ApiRequest::post(endpoints::notifications::READ_ALL))
            .await
    }

    pub async fn settings(&self) -> Result<NotificationSettings> {
        self.api
            .send(ApiRequest::get(endpoints::notifications::SETTINGS))
            .await
    }

    pub async fn update_settings(
        &self,
        settings: &NotificationSettings,
    ) -> Result<NotificationSettings> {
        let body = serde_json::to_value(settings)?;
        self.api
            .send(ApiRequest::patch(endpoints::notifications::SETTINGS).json(body))
            .await
    }
}
