// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fight predictions and the prediction leaderboard.

use crate::models::{Author, FightMethod};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's pick for a fight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub id: String,
    pub user_id: String,
    pub fight_id: String,
    pub predicted_winner_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<FightMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<u32>,
    /// Set once the fight has a result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /predictions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPrediction {
    pub fight_id: String,
    pub predicted_winner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<FightMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub user: Author,
    pub total: u32,
    pub correct: u32,
    /// Percentage, 0-100
    pub accuracy: f64,
}
