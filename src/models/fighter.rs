// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fighter, fight and fight-history models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Official weight classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightClass {
    Strawweight,
    Flyweight,
    Bantamweight,
    Featherweight,
    #[default]
    Lightweight,
    Welterweight,
    Middleweight,
    #[serde(rename = "Light Heavyweight")]
    LightHeavyweight,
    Heavyweight,
    #[serde(rename = "Women's Strawweight")]
    WomensStrawweight,
    #[serde(rename = "Women's Flyweight")]
    WomensFlyweight,
    #[serde(rename = "Women's Bantamweight")]
    WomensBantamweight,
    #[serde(rename = "Women's Featherweight")]
    WomensFeatherweight,
}

impl WeightClass {
    /// Name as used by the API (and in query strings).
    pub fn as_str(self) -> &'static str {
        match self {
            WeightClass::Strawweight => "Strawweight",
            WeightClass::Flyweight => "Flyweight",
            WeightClass::Bantamweight => "Bantamweight",
            WeightClass::Featherweight => "Featherweight",
            WeightClass::Lightweight => "Lightweight",
            WeightClass::Welterweight => "Welterweight",
            WeightClass::Middleweight => "Middleweight",
            WeightClass::LightHeavyweight => "Light Heavyweight",
            WeightClass::Heavyweight => "Heavyweight",
            WeightClass::WomensStrawweight => "Women's Strawweight",
            WeightClass::WomensFlyweight => "Women's Flyweight",
            WeightClass::WomensBantamweight => "Women's Bantamweight",
            WeightClass::WomensFeatherweight => "Women's Featherweight",
        }
    }
}

impl std::fmt::Display for WeightClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marker for the literal `"C"` rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChampionMark {
    C,
}

/// Divisional rank: a position, or `"C"` for the champion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rank {
    Position(u32),
    Champion(ChampionMark),
}

/// Career statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FighterStats {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub no_contests: u32,
    pub knockouts: u32,
    pub submissions: u32,
    pub decisions: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub win_streak: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub significant_strikes_per_min: Option<f64>,
    /// Percentage, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub striking_accuracy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub takedowns_per_fight: Option<f64>,
    /// Percentage, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub takedown_accuracy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_attempts: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defense_rate: Option<f64>,
}

/// Full fighter profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fighter {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    pub photo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    pub nationality: String,
    pub birth_date: DateTime<Utc>,
    pub height_cm: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reach_cm: Option<u32>,
    pub weight_class: WeightClass,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<Rank>,
    pub organization: String,
    pub is_champion: bool,
    pub is_active: bool,
    pub stats: FighterStats,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Fighter {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Win/loss/draw triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

/// Compact fighter entry used inside fights and lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FighterListItem {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    pub photo_url: String,
    pub weight_class: WeightClass,
    pub record: Record,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<Rank>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_following: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FightResult {
    Win,
    Loss,
    Draw,
    Nc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FightMethod {
    Ko,
    Tko,
    Sub,
    Dec,
    Udec,
    Sdec,
    Dq,
    Nc,
}

/// Outcome of a completed bout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoutOutcome {
    /// Winning fighter id; absent for draws and no-contests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    pub method: FightMethod,
    pub round: u32,
    /// Time in the final round ("4:59")
    pub time: String,
}

/// A scheduled or completed bout on an event card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fight {
    pub id: String,
    pub event_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    pub fighter_a: FighterListItem,
    pub fighter_b: FighterListItem,
    pub weight_class: WeightClass,
    pub bout_order: u32,
    pub is_main_event: bool,
    pub is_co_main: bool,
    pub is_title_fight: bool,
    pub scheduled_rounds: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<BoutOutcome>,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opponent {
    pub id: String,
    pub name: String,
    pub photo_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRef {
    pub id: String,
    pub name: String,
}

/// One line of a fighter's record, from that fighter's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightHistory {
    pub id: String,
    pub opponent: Opponent,
    pub event: EventRef,
    pub result: FightResult,
    pub method: FightMethod,
    pub round: u32,
    pub time: String,
    pub date: DateTime<Utc>,
}
