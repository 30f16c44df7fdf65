// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Auth store tests.
//!
//! These tests verify that:
//! 1. The store's token reaches the wire on the very next request
//! 2. A persisted session is restored, token included, before any call
//! 3. Token refresh keeps the previous refresh token when none is issued
//! 4. Profile updates are shallow merges

use common::Reply;
use mma_universe_client::api::ApiRequest;
use mma_universe_client::models::UserPatch;
use mma_universe_client::store::{AuthStore, FileStore, KeyValueStore, MemoryStore, AUTH_STORAGE_KEY};
use std::sync::Arc;

mod common;

async fn echo_backend() -> common::MockBackend {
    common::spawn(|_| Reply::ok(serde_json::json!({}))).await
}

#[tokio::test]
async fn test_token_propagation_on_login_and_logout() {
    let backend = echo_backend().await;
    let api = backend.client();
    let (mut store, _) = backend.auth_store(&api);

    store.login(common::user("u1"), "tokA", Some("refA".to_string()));
    assert_eq!(api.current_token().as_deref(), Some("tokA"));

    api.send_empty(ApiRequest::get("/users/me")).await.unwrap();
    assert_eq!(backend.last().authorization.as_deref(), Some("Bearer tokA"));

    store.logout();
    assert_eq!(api.current_token(), None);
    assert!(!store.is_authenticated());

    api.send_empty(ApiRequest::get("/events/live")).await.unwrap();
    assert_eq!(backend.last().authorization, None);
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let backend = echo_backend().await;
    let api = backend.client();
    let (mut store, _) = backend.auth_store(&api);

    store.logout();
    store.logout();

    assert!(!store.is_authenticated());
    assert_eq!(store.token(), None);
    assert_eq!(api.current_token(), None);
}

#[tokio::test]
async fn test_rehydration_pushes_token_before_first_request() {
    let backend = echo_backend().await;
    let api = backend.client();

    let storage = Arc::new(MemoryStore::new());
    let blob = serde_json::json!({
        "state": {
            "user": common::user_json("u7"),
            "token": "tokA",
            "refreshToken": "refA",
            "isAuthenticated": true,
            "hasSeenOnboarding": true
        },
        "version": 0
    });
    storage.set(AUTH_STORAGE_KEY, &blob.to_string()).unwrap();

    let store = AuthStore::rehydrate(api.clone(), storage);
    assert!(store.is_authenticated());
    assert!(store.has_seen_onboarding());
    assert_eq!(store.user().unwrap().id, "u7");

    api.send_empty(ApiRequest::get("/notifications")).await.unwrap();
    assert_eq!(backend.last().authorization.as_deref(), Some("Bearer tokA"));
}

#[tokio::test]
async fn test_rehydrated_flag_follows_user() {
    let backend = echo_backend().await;
    let api = backend.client();

    let storage = Arc::new(MemoryStore::new());
    let blob = serde_json::json!({
        "state": {
            "user": null,
            "token": null,
            "refreshToken": null,
            "isAuthenticated": true,
            "hasSeenOnboarding": false
        },
        "version": 0
    });
    storage.set(AUTH_STORAGE_KEY, &blob.to_string()).unwrap();

    let store = AuthStore::rehydrate(api.clone(), storage);
    assert!(!store.is_authenticated());
    assert_eq!(api.current_token(), None);
}

#[tokio::test]
async fn test_refresh_token_retained_when_omitted() {
    let backend = echo_backend().await;
    let api = backend.client();
    let (mut store, _) = backend.auth_store(&api);

    store.login(common::user("u1"), "tokA", Some("refA".to_string()));
    store.set_tokens("tokB", None);

    assert_eq!(store.token(), Some("tokB"));
    assert_eq!(store.refresh_token(), Some("refA"));
    assert_eq!(api.current_token().as_deref(), Some("tokB"));

    store.set_tokens("tokC", Some("refC".to_string()));
    assert_eq!(store.refresh_token(), Some("refC"));
}

#[tokio::test]
async fn test_update_user_is_shallow_merge() {
    let backend = echo_backend().await;
    let api = backend.client();
    let (mut store, _) = backend.auth_store(&api);

    store.login(common::user("u1"), "tokA", None);
    let before = store.user().unwrap().clone();

    store.update_user(UserPatch {
        bio: Some("New bio".to_string()),
        ..Default::default()
    });

    let after = store.user().unwrap();
    assert_eq!(after.bio.as_deref(), Some("New bio"));
    assert_eq!(after.display_name, before.display_name);
    assert_eq!(after.email, before.email);
    assert_eq!(after.followers_count, before.followers_count);
}

#[tokio::test]
async fn test_update_user_ignored_when_anonymous() {
    let backend = echo_backend().await;
    let api = backend.client();
    let (mut store, storage) = backend.auth_store(&api);

    store.update_user(UserPatch {
        bio: Some("ghost".to_string()),
        ..Default::default()
    });

    assert!(store.user().is_none());
    assert_eq!(storage.get(AUTH_STORAGE_KEY).unwrap(), None);
}

#[tokio::test]
async fn test_session_survives_restart_on_disk() {
    let backend = echo_backend().await;
    let dir = tempfile::tempdir().unwrap();

    {
        let api = backend.client();
        let storage = Arc::new(FileStore::open(dir.path()).unwrap());
        let mut store = AuthStore::rehydrate(api, storage);
        store.login(common::user("u1"), "tokA", Some("refA".to_string()));
        store.set_onboarding_complete();
    }

    let api = backend.client();
    let storage = Arc::new(FileStore::open(dir.path()).unwrap());
    let store = AuthStore::rehydrate(api.clone(), storage);

    assert!(store.is_authenticated());
    assert!(store.has_seen_onboarding());
    assert_eq!(store.refresh_token(), Some("refA"));
    assert_eq!(api.current_token().as_deref(), Some("tokA"));
}
