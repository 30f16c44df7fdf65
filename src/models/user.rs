// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User model and partial updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User profile as returned by `/users/*` and the auth endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub followers_count: u32,
    #[serde(default)]
    pub following_count: u32,
    #[serde(default)]
    pub posts_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Shallow merge: every field present in `patch` replaces ours, the rest
    /// is left untouched.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.display_name {
            self.display_name = v;
        }
        if let Some(v) = patch.username {
            self.username = v;
        }
        if patch.avatar_url.is_some() {
            self.avatar_url = patch.avatar_url;
        }
        if patch.banner_url.is_some() {
            self.banner_url = patch.banner_url;
        }
        if patch.bio.is_some() {
            self.bio = patch.bio;
        }
        if patch.phone.is_some() {
            self.phone = patch.phone;
        }
        if let Some(v) = patch.is_verified {
            self.is_verified = v;
        }
        if let Some(v) = patch.followers_count {
            self.followers_count = v;
        }
        if let Some(v) = patch.following_count {
            self.following_count = v;
        }
        if let Some(v) = patch.posts_count {
            self.posts_count = v;
        }
        if let Some(v) = patch.updated_at {
            self.updated_at = v;
        }
    }
}

/// Partial user record. Doubles as the `PATCH /users/me` body, so absent
/// fields are not serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub following_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Compact author record embedded in posts, comments and leaderboards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: String,
    pub name: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_serializes_only_present_fields() {
        let patch = UserPatch {
            bio: Some("Southpaw".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            serde_json::json!({"bio": "Southpaw"})
        );
    }

    #[test]
    fn test_user_deserializes_camel_case() {
        let json = serde_json::json!({
            "id": "u1",
            "email": "a@b.c",
            "displayName": "Alex",
            "username": "alex",
            "isVerified": true,
            "followersCount": 3,
            "followingCount": 4,
            "postsCount": 5,
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-02T00:00:00Z"
        });
        let user: User = serde_json::from_value(json).unwrap();
        assert_eq!(user.display_name, "Alex");
        assert_eq!(user.followers_count, 3);
        assert!(user.avatar_url.is_none());
    }
}
