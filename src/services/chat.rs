// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Direct messaging endpoints.

use crate::api::{endpoints, ApiClient, ApiRequest};
use crate::error::Result;
use crate::models::{Conversation, Message, MessageKind, Page};

pub const DEFAULT_MESSAGES_PAGE: Page = Page::new(1, 50);

#[derive(Clone)]
pub struct ChatService {
    api: ApiClient,
}

impl ChatService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn conversations(&self) -> Result<Vec<Conversation>> {
        self.api
            .send(ApiRequest::get(endpoints::chat::CONVERSATIONS))
            .await
    }

    pub async fn conversation(&self, conversation_id: &str) -> Result<Conversation> {
        self.api
            .send(ApiRequest::get(endpoints::chat::conversation(conversation_id)))
            .await
    }

    pub async fn messages(&self, conversation_id: &str, page: Page) -> Result<Vec<Message>> {
        self.api
            .send(ApiRequest::get(endpoints::chat::messages(conversation_id)).page(page))
            .await
    }

    pub async fn send_message(
        &self,
        conversation_id: &str,
        content: &str,
        kind: MessageKind,
    ) -> Result<Message> {
        let body = serde_json::json!({ "content": content, "type": kind });
        self.api
            .send(ApiRequest::post(endpoints::chat::messages(conversation_id)).json(body))
            .await
    }

    pub async fn mark_read(&self, conversation_id: &str) -> Result<()> {
        self.api
            .send_empty(ApiRequest::post(endpoints::chat::read(conversation_id)))
            .await
    }
}
