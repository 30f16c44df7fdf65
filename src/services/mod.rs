// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - typed façades over the REST API, one per resource family.

pub mod auth;
pub mod chat;
pub mod events;
pub mod fighters;
pub mod media;
pub mod notifications;
pub mod posts;
pub mod predictions;
pub mod search;
pub mod session;
pub mod users;

pub use auth::AuthService;
pub use chat::ChatService;
pub use events::{EventListParams, EventService};
pub use fighters::{FighterListParams, FighterService, SortOrder};
pub use media::MediaService;
pub use notifications::NotificationService;
pub use posts::{CommentService, PostService};
pub use predictions::PredictionService;
pub use search::SearchService;
pub use users::UserService;

use crate::api::ApiClient;

/// Every service, sharing one [`ApiClient`] and therefore one token slot.
#[derive(Clone)]
pub struct Services {
    pub auth: AuthService,
    pub users: UserService,
    pub fighters: FighterService,
    pub events: EventService,
    pub posts: PostService,
    pub comments: CommentService,
    pub chat: ChatService,
    pub notifications: NotificationService,
    pub media: MediaService,
    pub search: SearchService,
    pub predictions: PredictionService,
}

impl Services {
    pub fn new(api: &ApiClient) -> Self {
        Self {
            auth: AuthService::new(api.clone()),
            users: UserService::new(api.clone()),
            fighters: FighterService::new(api.clone()),
            events: EventService::new(api.clone()),
            posts: PostService::new(api.clone()),
            comments: CommentService::new(api.clone()),
            chat: ChatService::new(api.clone()),
            notifications: NotificationService::new(api.clone()),
            media: MediaService::new(api.clone()),
            search: SearchService::new(api.clone()),
            predictions: PredictionService::new(api.clone()),
        }
    }
}
