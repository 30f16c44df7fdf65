// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Auth store: who is logged in, persisted across restarts.
//!
//! Every transition updates memory first, pushes the access token into the
//! API client, then writes the persisted blob. A failed write is logged and
//! never undoes the in-memory transition.

use crate::api::ApiClient;
use crate::models::{User, UserPatch};
use crate::store::persist::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Storage key of the persisted session blob.
pub const AUTH_STORAGE_KEY: &str = "mma-universe-auth";

/// Version written into the persisted envelope.
const PERSIST_VERSION: u32 = 0;

/// The persisted part of the auth state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    pub refresh_token: Option<String>,
    pub is_authenticated: bool,
    pub has_seen_onboarding: bool,
}

#[derive(Serialize, Deserialize)]
struct PersistedSession {
    state: Session,
    version: u32,
}

/// Single source of truth for the current session.
pub struct AuthStore {
    session: Session,
    /// Transient, never persisted
    is_loading: bool,
    api: ApiClient,
    storage: Arc<dyn KeyValueStore>,
}

impl AuthStore {
    /// Restore the session from `storage` and push its token into `api`.
    ///
    /// A missing, unreadable or foreign blob yields an anonymous session.
    pub fn rehydrate(api: ApiClient, storage: Arc<dyn KeyValueStore>) -> Self {
        let mut session = load_session(storage.as_ref()).unwrap_or_default();
        session.is_authenticated = session.user.is_some();

        api.set_token(session.token.as_deref());

        tracing::info!(
            authenticated = session.is_authenticated,
            has_token = session.token.is_some(),
            "Auth state rehydrated"
        );

        Self {
            session,
            is_loading: false,
            api,
            storage,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.session.refresh_token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }

    pub fn has_seen_onboarding(&self) -> bool {
        self.session.has_seen_onboarding
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Anonymous -> Authenticated.
    pub fn login(&mut self, user: User, token: impl Into<String>, refresh_token: Option<String>) {
        let token = token.into();
        self.api.set_token(Some(&token));

        tracing::info!(user_id = %user.id, "User logged in");

        self.session.user = Some(user);
        self.session.token = Some(token);
        self.session.refresh_token = refresh_token;
        self.session.is_authenticated = true;
        self.persist();
    }

    /// Authenticated -> Anonymous. Safe to call when already anonymous.
    pub fn logout(&mut self) {
        self.api.set_token(None);

        if let Some(user) = &self.session.user {
            tracing::info!(user_id = %user.id, "User logged out");
        }

        self.session.user = None;
        self.session.token = None;
        self.session.refresh_token = None;
        self.session.is_authenticated = false;
        self.persist();
    }

    /// Install a refreshed access token. Without a new refresh token the
    /// previous one is kept.
    pub fn set_tokens(&mut self, token: impl Into<String>, refresh_token: Option<String>) {
        let token = token.into();
        self.api.set_token(Some(&token));

        self.session.token = Some(token);
        if let Some(refresh_token) = refresh_token {
            self.session.refresh_token = Some(refresh_token);
        }
        self.persist();
    }

    /// Replace the user record; authentication follows its presence.
    pub fn set_user(&mut self, user: Option<User>) {
        self.session.is_authenticated = user.is_some();
        self.session.user = user;
        self.persist();
    }

    /// Shallow-merge `patch` into the current user. No-op when anonymous.
    pub fn update_user(&mut self, patch: UserPatch) {
        let Some(user) = self.session.user.as_mut() else {
            tracing::debug!("update_user ignored: no user logged in");
            return;
        };
        user.apply(patch);
        self.persist();
    }

    /// One-way flag; logout never resets it.
    pub fn set_onboarding_complete(&mut self) {
        self.session.has_seen_onboarding = true;
        self.persist();
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    fn persist(&self) {
        let blob = PersistedSession {
            state: self.session.clone(),
            version: PERSIST_VERSION,
        };

        let json = match serde_json::to_string(&blob) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize auth state");
                return;
            }
        };

        if let Err(e) = self.storage.set(AUTH_STORAGE_KEY, &json) {
            tracing::warn!(error = %e, "Failed to persist auth state, continuing anyway");
        }
    }
}

fn load_session(storage: &dyn KeyValueStore) -> Option<Session> {
    let raw = match storage.get(AUTH_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read persisted auth state");
            return None;
        }
    };

    match serde_json::from_str::<PersistedSession>(&raw) {
        Ok(blob) if blob.version == PERSIST_VERSION => Some(blob.state),
        Ok(blob) => {
            tracing::warn!(version = blob.version, "Ignoring auth state with unknown version");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring corrupt persisted auth state");
            None
        }
    }
}
