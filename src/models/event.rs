// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Event models.

use crate::models::Fight;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Headline pairing shown on event cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainEvent {
    pub fighter_a: String,
    pub fighter_b: String,
}

/// Event summary as returned by list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub poster_url: String,
    pub date: DateTime<Utc>,
    pub venue: String,
    pub city: String,
    pub country: String,
    /// Promotion (UFC, PFL, ...)
    pub organizer: String,
    pub is_live: bool,
    pub is_upcoming: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_event: Option<MainEvent>,
    pub fight_count: u32,
    pub created_at: DateTime<Utc>,
}

/// Event with its full card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    #[serde(flatten)]
    pub event: Event,
    #[serde(default)]
    pub fights: Vec<Fight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickets_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_url: Option<String>,
}
