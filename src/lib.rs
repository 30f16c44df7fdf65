// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! MMA Universe client core.
//!
//! Typed access to the MMA Universe REST API plus the client-side session
//! and UI-cache stores that sit on top of it.

pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod services;
pub mod store;
pub mod time_utils;

pub use api::ApiClient;
pub use config::Config;
pub use error::{ApiError, Result};
pub use services::Services;
pub use store::{AppStore, AuthStore};
