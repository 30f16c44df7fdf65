// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    #[default]
    Follow,
    Like,
    Comment,
    Mention,
    EventReminder,
    FighterUpdate,
    NewVideo,
    NewArticle,
    FightResult,
}

/// In-app notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Free-form payload (target ids for deep links)
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Per-channel notification switches, keyed by setting name.
pub type NotificationSettings = BTreeMap<String, bool>;
