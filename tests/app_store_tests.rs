// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! App store bookkeeping across longer sequences of actions.

use mma_universe_client::models::{Event, Fighter, Notification, NotificationType};
use mma_universe_client::store::{
    AppStore, EventsFilter, EventsFilterPatch, FightersFilter, FightersFilterPatch, Tab,
};

fn fighter(id: &str) -> Fighter {
    Fighter {
        id: id.to_string(),
        first_name: "Fighter".to_string(),
        last_name: id.to_string(),
        ..Default::default()
    }
}

fn event(id: &str) -> Event {
    Event {
        id: id.to_string(),
        title: format!("Event {}", id),
        ..Default::default()
    }
}

fn notification(id: &str, is_read: bool) -> Notification {
    Notification {
        id: id.to_string(),
        kind: NotificationType::Like,
        title: "New like".to_string(),
        is_read,
        ..Default::default()
    }
}

fn assert_unread_consistent(app: &AppStore) {
    let expected = app.notifications().iter().filter(|n| !n.is_read).count();
    assert_eq!(app.unread_notifications_count(), expected);
}

#[test]
fn test_add_followed_fighter_is_idempotent() {
    let mut app = AppStore::new();

    app.add_followed_fighter(fighter("f1"));
    let once = app.followed_fighters().to_vec();
    app.add_followed_fighter(fighter("f1"));

    assert_eq!(app.followed_fighters(), once.as_slice());
    assert!(app.is_following_fighter("f1"));

    app.remove_followed_fighter("f1");
    assert!(!app.is_following_fighter("f1"));
}

#[test]
fn test_add_saved_event_is_idempotent() {
    let mut app = AppStore::new();

    app.add_saved_event(event("e1"));
    app.add_saved_event(event("e2"));
    app.add_saved_event(event("e1"));

    let ids: Vec<_> = app.saved_events().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["e1", "e2"]);
    assert!(app.is_event_saved("e2"));
}

#[test]
fn test_unread_count_consistent_after_every_call() {
    let mut app = AppStore::new();
    assert_unread_consistent(&app);

    app.set_notifications(vec![
        notification("n1", false),
        notification("n2", true),
        notification("n3", false),
    ]);
    assert_unread_consistent(&app);
    assert_eq!(app.unread_notifications_count(), 2);

    app.add_notification(notification("n4", false));
    assert_unread_consistent(&app);
    assert_eq!(app.notifications()[0].id, "n4");

    app.add_notification(notification("n4", false));
    assert_unread_consistent(&app);
    assert_eq!(app.notifications().len(), 4);

    app.mark_notification_read("n1");
    assert_unread_consistent(&app);

    app.mark_notification_read("n1");
    app.mark_notification_read("missing");
    assert_unread_consistent(&app);
    assert_eq!(app.unread_notifications_count(), 2);

    app.mark_all_notifications_read();
    assert_unread_consistent(&app);
    assert_eq!(app.unread_notifications_count(), 0);

    app.set_notifications(Vec::new());
    assert_unread_consistent(&app);
}

#[test]
fn test_filter_reset_restores_defaults() {
    let mut app = AppStore::new();

    app.set_fighters_filter(FightersFilterPatch {
        weight_class: Some(Some("Heavyweight".to_string())),
        organization: Some(Some("PFL".to_string())),
        sort_by: Some("name".to_string()),
        show_champions_only: Some(true),
    });
    app.set_fighters_filter(FightersFilterPatch {
        organization: Some(None),
        ..Default::default()
    });
    assert_eq!(app.fighters_filter().weight_class.as_deref(), Some("Heavyweight"));
    assert_eq!(app.fighters_filter().organization, None);

    app.reset_fighters_filter();
    assert_eq!(app.fighters_filter(), &FightersFilter::default());

    app.set_events_filter(EventsFilterPatch {
        show_past: Some(true),
        ..Default::default()
    });
    app.reset_events_filter();
    assert_eq!(app.events_filter(), &EventsFilter::default());
}

#[test]
fn test_ui_state() {
    let mut app = AppStore::new();
    assert_eq!(app.active_tab(), Tab::Home);
    assert!(!app.is_loading());

    app.set_active_tab(Tab::Events);
    app.set_loading(true);

    assert_eq!(app.active_tab(), Tab::Events);
    assert!(app.is_loading());
}
