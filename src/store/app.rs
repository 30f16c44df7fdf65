// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! App store: in-memory UI/session caches and filter preferences.
//!
//! Nothing here is persisted or touches the network. Collections hold at most
//! one entry per id. The unread count is recomputed from the notification list
//! after every change to it.

use crate::models::{Event, Fighter, Notification};
use serde::{Deserialize, Serialize};

/// Bottom-navigation tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    Fighters,
    Events,
    Social,
    Profile,
}

/// Fighter list filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FightersFilter {
    pub weight_class: Option<String>,
    pub organization: Option<String>,
    pub sort_by: String,
    pub show_champions_only: bool,
}

impl Default for FightersFilter {
    fn default() -> Self {
        Self {
            weight_class: None,
            organization: None,
            sort_by: "ranking".to_string(),
            show_champions_only: false,
        }
    }
}

/// Fields to overlay onto a [`FightersFilter`]. `Some(None)` clears a
/// nullable field; `None` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FightersFilterPatch {
    pub weight_class: Option<Option<String>>,
    pub organization: Option<Option<String>>,
    pub sort_by: Option<String>,
    pub show_champions_only: Option<bool>,
}

/// Event list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsFilter {
    pub organization: Option<String>,
    pub show_past: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventsFilterPatch {
    pub organization: Option<Option<String>>,
    pub show_past: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct AppStore {
    is_loading: bool,
    active_tab: Tab,
    followed_fighters: Vec<Fighter>,
    saved_events: Vec<Event>,
    /// Newest first
    notifications: Vec<Notification>,
    unread_notifications_count: usize,
    fighters_filter: FightersFilter,
    events_filter: EventsFilter,
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── UI ──────────────────────────────────────────────────────

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    // ─── Followed Fighters ───────────────────────────────────────

    pub fn followed_fighters(&self) -> &[Fighter] {
        &self.followed_fighters
    }

    pub fn is_following_fighter(&self, fighter_id: &str) -> bool {
        self.followed_fighters.iter().any(|f| f.id == fighter_id)
    }

    /// Add unless a fighter with the same id is already followed.
    pub fn add_followed_fighter(&mut self, fighter: Fighter) {
        if !self.is_following_fighter(&fighter.id) {
            self.followed_fighters.push(fighter);
        }
    }

    pub fn remove_followed_fighter(&mut self, fighter_id: &str) {
        self.followed_fighters.retain(|f| f.id != fighter_id);
    }

    /// Replace the whole collection (after a refetch).
    pub fn set_followed_fighters(&mut self, fighters: Vec<Fighter>) {
        self.followed_fighters = dedup_by_id(fighters, |f| &f.id);
    }

    // ─── Saved Events ────────────────────────────────────────────

    pub fn saved_events(&self) -> &[Event] {
        &self.saved_events
    }

    pub fn is_event_saved(&self, event_id: &str) -> bool {
        self.saved_events.iter().any(|e| e.id == event_id)
    }

    pub fn add_saved_event(&mut self, event: Event) {
        if !self.is_event_saved(&event.id) {
            self.saved_events.push(event);
        }
    }

    pub fn remove_saved_event(&mut self, event_id: &str) {
        self.saved_events.retain(|e| e.id != event_id);
    }

    pub fn set_saved_events(&mut self, events: Vec<Event>) {
        self.saved_events = dedup_by_id(events, |e| &e.id);
    }

    // ─── Notifications ───────────────────────────────────────────

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_notifications_count(&self) -> usize {
        self.unread_notifications_count
    }

    pub fn set_notifications(&mut self, notifications: Vec<Notification>) {
        self.notifications = dedup_by_id(notifications, |n| &n.id);
        self.recount_unread();
    }

    /// Prepend a new notification. Ignored if its id is already present.
    pub fn add_notification(&mut self, notification: Notification) {
        if self.notifications.iter().any(|n| n.id == notification.id) {
            return;
        }
        self.notifications.insert(0, notification);
        self.recount_unread();
    }

    pub fn mark_notification_read(&mut self, notification_id: &str) {
        for n in self.notifications.iter_mut().filter(|n| n.id == notification_id) {
            n.is_read = true;
        }
        self.recount_unread();
    }

    pub fn mark_all_notifications_read(&mut self) {
        for n in &mut self.notifications {
            n.is_read = true;
        }
        self.recount_unread();
    }

    fn recount_unread(&mut self) {
        self.unread_notifications_count = self.notifications.iter().filter(|n| !n.is_read).count();
    }

    // ─── Filters ─────────────────────────────────────────────────

    pub fn fighters_filter(&self) -> &FightersFilter {
        &self.fighters_filter
    }

    pub fn set_fighters_filter(&mut self, patch: FightersFilterPatch) {
        let filter = &mut self.fighters_filter;
        if let Some(v) = patch.weight_class {
            filter.weight_class = v;
        }
        if let Some(v) = patch.organization {
            filter.organization = v;
        }
        if let Some(v) = patch.sort_by {
            filter.sort_by = v;
        }
        if let Some(v) = patch.show_champions_only {
            filter.show_champions_only = v;
        }
    }

    pub fn reset_fighters_filter(&mut self) {
        self.fighters_filter = FightersFilter::default();
    }

    pub fn events_filter(&self) -> &EventsFilter {
        &self.events_filter
    }

    pub fn set_events_filter(&mut self, patch: EventsFilterPatch) {
        if let Some(v) = patch.organization {
            self.events_filter.organization = v;
        }
        if let Some(v) = patch.show_past {
            self.events_filter.show_past = v;
        }
    }

    pub fn reset_events_filter(&mut self) {
        self.events_filter = EventsFilter::default();
    }
}

/// Keep the first entry for each id, preserving order.
fn dedup_by_id<T>(items: Vec<T>, id: impl Fn(&T) -> &String) -> Vec<T> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(id(item).clone()))
        .collect()
}
