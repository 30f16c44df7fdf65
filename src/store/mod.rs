// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-side state containers.

pub mod app;
pub mod auth;
pub mod persist;

pub use app::{
    AppStore, EventsFilter, EventsFilterPatch, FightersFilter, FightersFilterPatch, Tab,
};
pub use auth::{AuthStore, Session, AUTH_STORAGE_KEY};
pub use persist::{FileStore, KeyValueStore, MemoryStore};
