// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models exchanged with the REST API.

pub mod auth;
pub mod chat;
pub mod event;
pub mod fighter;
pub mod media;
pub mod notification;
pub mod prediction;
pub mod social;
pub mod user;

pub use auth::{AuthSession, NewAccount, TokenPair};
pub use chat::{Conversation, Message, MessageKind};
pub use event::{Event, EventDetails};
pub use fighter::{Fight, FightHistory, FightMethod, Fighter, FighterStats, Rank, WeightClass};
pub use media::{Article, UploadedMedia, Video};
pub use notification::{Notification, NotificationSettings, NotificationType};
pub use prediction::{LeaderboardEntry, NewPrediction, Prediction};
pub use social::{Comment, NewPost, Post};
pub use user::{Author, User, UserPatch};

use serde::{Deserialize, Serialize};

/// Pagination query (`page` is 1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: u32,
    pub limit: u32,
}

impl Page {
    pub const fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// The page after this one, same size.
    pub const fn next(self) -> Self {
        Self::new(self.page + 1, self.limit)
    }
}

/// Response of `GET /search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub fighters: Vec<Fighter>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub posts: Vec<Post>,
}
