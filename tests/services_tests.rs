// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Service façade tests: each call must hit the documented method, path
//! and query with the documented defaults.

use chrono::{TimeZone, Utc};
use common::{Recorded, Reply};
use mma_universe_client::models::{MessageKind, NewPrediction, Page, UserPatch};
use mma_universe_client::services::{
    chat, events, fighters, posts, predictions, search, EventListParams, FighterListParams,
    Services, SortOrder,
};
use mma_universe_client::store::{AppStore, FightersFilterPatch};
use std::collections::BTreeMap;

mod common;

fn reply(r: &Recorded) -> Reply {
    match (r.method.as_str(), r.path.as_str()) {
        ("PATCH", "/users/me") => Reply::ok(common::user_json("me")),
        ("POST", "/media/upload") => {
            Reply::ok(serde_json::json!({ "url": "https://cdn.mma.io/u/1.jpg" }))
        }
        ("PATCH", "/notifications/settings") => Reply::ok(serde_json::json!({ "likes": false })),
        ("GET", "/search") => Reply::ok(serde_json::json!({ "fighters": [], "users": [] })),
        _ => Reply::ok(serde_json::json!([])),
    }
}

async fn setup() -> (common::MockBackend, Services) {
    let backend = common::spawn(reply).await;
    let services = Services::new(&backend.client());
    (backend, services)
}

#[tokio::test]
async fn test_fighter_list_from_filter() {
    let (backend, services) = setup().await;

    let mut app = AppStore::new();
    app.set_fighters_filter(FightersFilterPatch {
        weight_class: Some(Some("Light Heavyweight".to_string())),
        ..Default::default()
    });
    let params = FighterListParams {
        page: Some(1),
        limit: Some(20),
        sort_order: Some(SortOrder::Desc),
        ..FighterListParams::from(app.fighters_filter())
    };

    services.fighters.list(&params).await.unwrap();

    let r = backend.last();
    assert_eq!(r.method, "GET");
    assert_eq!(r.path, "/fighters");
    assert_eq!(
        r.query.as_deref(),
        Some("page=1&limit=20&weightClass=Light+Heavyweight&sortBy=ranking&sortOrder=desc")
    );
}

#[tokio::test]
async fn test_fighter_defaults() {
    let (backend, services) = setup().await;

    services
        .fighters
        .fights("f1", fighters::DEFAULT_FIGHTS_PAGE)
        .await
        .unwrap();
    assert_eq!(backend.last().path, "/fighters/f1/fights");
    assert_eq!(backend.last().query.as_deref(), Some("page=1&limit=10"));

    services.fighters.rankings(None).await.unwrap();
    assert_eq!(backend.last().path, "/fighters/rankings");
    assert_eq!(backend.last().query, None);

    services.fighters.search("adesanya").await.unwrap();
    assert_eq!(backend.last().path, "/fighters/search");
    assert_eq!(backend.last().query.as_deref(), Some("q=adesanya"));

    services.fighters.follow("f1").await.unwrap();
    assert_eq!(backend.last().method, "POST");
    assert_eq!(backend.last().path, "/fighters/f1/follow");
}

#[tokio::test]
async fn test_event_list_dates_and_defaults() {
    let (backend, services) = setup().await;

    let params = EventListParams {
        organization: Some("UFC".to_string()),
        from: Some(Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap()),
        to: Some(Utc.with_ymd_and_hms(2026, 3, 31, 23, 59, 59).unwrap()),
        ..Default::default()
    };
    services.events.list(&params).await.unwrap();
    assert_eq!(
        backend.last().query.as_deref(),
        Some("organization=UFC&from=2026-03-01T00%3A00%3A00Z&to=2026-03-31T23%3A59%3A59Z")
    );

    services
        .events
        .upcoming(events::DEFAULT_UPCOMING_LIMIT)
        .await
        .unwrap();
    assert_eq!(backend.last().path, "/events/upcoming");
    assert_eq!(backend.last().query.as_deref(), Some("limit=10"));

    services.events.past(events::DEFAULT_PAST_PAGE).await.unwrap();
    assert_eq!(backend.last().query.as_deref(), Some("page=1&limit=10"));

    services.events.fights("e9").await.unwrap();
    assert_eq!(backend.last().path, "/events/e9/fights");
}

#[tokio::test]
async fn test_feed_and_comment_paths() {
    let (backend, services) = setup().await;

    services.posts.feed(posts::DEFAULT_FEED_PAGE).await.unwrap();
    assert_eq!(backend.last().path, "/posts/feed");
    assert_eq!(backend.last().query.as_deref(), Some("page=1&limit=20"));

    services
        .posts
        .user_posts("u1", posts::DEFAULT_FEED_PAGE.next())
        .await
        .unwrap();
    assert_eq!(backend.last().path, "/users/u1/posts");
    assert_eq!(backend.last().query.as_deref(), Some("page=2&limit=20"));

    services
        .comments
        .replies("c1", posts::DEFAULT_REPLIES_PAGE)
        .await
        .unwrap();
    assert_eq!(backend.last().path, "/comments/c1/replies");
    assert_eq!(backend.last().query.as_deref(), Some("page=1&limit=10"));

    services.posts.delete("p1").await.unwrap();
    assert_eq!(backend.last().method, "DELETE");
    assert_eq!(backend.last().path, "/posts/p1");

    services.posts.unlike("p1").await.unwrap();
    assert_eq!(backend.last().path, "/posts/p1/unlike");
}

#[tokio::test]
async fn test_comment_create_body() {
    let (backend, services) = setup().await;

    // The mock's reply is not a comment; only the request matters here.
    let _ = services.comments.create("p1", "Great fight", None).await;
    let r = backend.last();
    assert_eq!(r.method, "POST");
    assert_eq!(r.path, "/posts/p1/comments");
    assert_eq!(r.json(), serde_json::json!({ "content": "Great fight" }));

    let _ = services
        .comments
        .create("p1", "Agreed", Some("c1"))
        .await;
    assert_eq!(
        backend.last().json(),
        serde_json::json!({ "content": "Agreed", "parentId": "c1" })
    );
}

#[tokio::test]
async fn test_chat_send_message() {
    let (backend, services) = setup().await;

    services
        .chat
        .messages("c1", chat::DEFAULT_MESSAGES_PAGE)
        .await
        .unwrap();
    assert_eq!(backend.last().path, "/chat/conversations/c1/messages");
    assert_eq!(backend.last().query.as_deref(), Some("page=1&limit=50"));

    let _ = services
        .chat
        .send_message("c1", "https://cdn.mma.io/x.jpg", MessageKind::Image)
        .await;
    let r = backend.last();
    assert_eq!(r.method, "POST");
    assert_eq!(
        r.json(),
        serde_json::json!({ "content": "https://cdn.mma.io/x.jpg", "type": "image" })
    );

    services.chat.mark_read("c1").await.unwrap();
    assert_eq!(backend.last().path, "/chat/conversations/c1/read");
}

#[tokio::test]
async fn test_update_profile_sends_only_present_fields() {
    let (backend, services) = setup().await;

    let user = services
        .users
        .update_profile(&UserPatch {
            bio: Some("Southpaw".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(user.id, "me");
    let r = backend.last();
    assert_eq!(r.method, "PATCH");
    assert_eq!(r.path, "/users/me");
    assert_eq!(r.json(), serde_json::json!({ "bio": "Southpaw" }));
}

#[tokio::test]
async fn test_path_parameters_are_encoded() {
    let (backend, services) = setup().await;

    services.users.followers("a/b c", Page::new(1, 20)).await.unwrap();
    assert_eq!(backend.last().path, "/users/a%2Fb%20c/followers");
}

#[tokio::test]
async fn test_media_upload_is_multipart() {
    let (backend, services) = setup().await;

    let uploaded = services
        .media
        .upload("walkout.jpg", "image/jpeg", vec![0xff, 0xd8, 0xff])
        .await
        .unwrap();

    assert_eq!(uploaded.url, "https://cdn.mma.io/u/1.jpg");
    let r = backend.last();
    assert!(r
        .content_type
        .as_deref()
        .unwrap()
        .starts_with("multipart/form-data"));
    let body = r.body_text();
    assert!(body.contains("name=\"file\""));
    assert!(body.contains("filename=\"walkout.jpg\""));
}

#[tokio::test]
async fn test_notification_settings_patch() {
    let (backend, services) = setup().await;

    let mut settings = BTreeMap::new();
    settings.insert("likes".to_string(), false);
    let updated = services
        .notifications
        .update_settings(&settings)
        .await
        .unwrap();

    assert_eq!(updated, settings);
    assert_eq!(backend.last().json(), serde_json::json!({ "likes": false }));

    services.notifications.mark_all_read().await.unwrap();
    assert_eq!(backend.last().path, "/notifications/read-all");
}

#[tokio::test]
async fn test_search_and_predictions() {
    let (backend, services) = setup().await;

    let all = services.search.all("jones").await.unwrap();
    assert!(all.fighters.is_empty() && all.posts.is_empty());

    services
        .search
        .posts("knockout", search::DEFAULT_LIMIT)
        .await
        .unwrap();
    assert_eq!(backend.last().path, "/search/posts");
    assert_eq!(backend.last().query.as_deref(), Some("q=knockout&limit=10"));

    services
        .predictions
        .leaderboard(predictions::DEFAULT_LEADERBOARD_LIMIT)
        .await
        .unwrap();
    assert_eq!(backend.last().path, "/predictions/leaderboard");
    assert_eq!(backend.last().query.as_deref(), Some("limit=50"));

    services
        .predictions
        .for_user("u1", predictions::DEFAULT_PAGE)
        .await
        .unwrap();
    assert_eq!(backend.last().path, "/users/u1/predictions");

    let _ = services
        .predictions
        .create(&NewPrediction {
            fight_id: "fight1".to_string(),
            predicted_winner_id: "f1".to_string(),
            method: None,
            round: Some(2),
        })
        .await;
    assert_eq!(
        backend.last().json(),
        serde_json::json!({ "fightId": "fight1", "predictedWinnerId": "f1", "round": 2 })
    );
}

#[tokio::test]
async fn test_services_share_token_slot() {
    let backend = common::spawn(reply).await;
    let api = backend.client();
    let services = Services::new(&api);
    let (mut store, _) = backend.auth_store(&api);

    store.login(common::user("u1"), "tokA", None);
    services.users.follow("u2").await.unwrap();

    let r = backend.last();
    assert_eq!(r.path, "/users/u2/follow");
    assert_eq!(r.authorization.as_deref(), Some("Bearer tokA"));
}
