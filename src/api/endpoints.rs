// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Endpoint path templates, relative to the `/api/v1` base URL.
//!
//! Path parameters are percent-encoded so an id can never escape its segment.

fn seg(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}

pub mod auth {
    pub const LOGIN: &str = "/auth/login";
    pub const REGISTER: &str = "/auth/register";
    pub const LOGOUT: &str = "/auth/logout";
    pub const REFRESH: &str = "/auth/refresh";
    pub const FORGOT_PASSWORD: &str = "/auth/forgot-password";
    pub const RESET_PASSWORD: &str = "/auth/reset-password";
    pub const VERIFY_EMAIL: &str = "/auth/verify-email";
}

pub mod users {
    use super::seg;

    pub const ME: &str = "/users/me";

    pub fn profile(id: &str) -> String {
        format!("/users/{}", seg(id))
    }

    pub fn followers(id: &str) -> String {
        format!("/users/{}/followers", seg(id))
    }

    pub fn following(id: &str) -> String {
        format!("/users/{}/following", seg(id))
    }

    pub fn follow(id: &str) -> String {
        format!("/users/{}/follow", seg(id))
    }

    pub fn unfollow(id: &str) -> String {
        format!("/users/{}/unfollow", seg(id))
    }

    pub fn posts(id: &str) -> String {
        format!("/users/{}/posts", seg(id))
    }

    pub fn predictions(id: &str) -> String {
        format!("/users/{}/predictions", seg(id))
    }
}

pub mod fighters {
    use super::seg;

    pub const LIST: &str = "/fighters";
    pub const RANKINGS: &str = "/fighters/rankings";
    pub const SEARCH: &str = "/fighters/search";

    pub fn detail(id: &str) -> String {
        format!("/fighters/{}", seg(id))
    }

    pub fn stats(id: &str) -> String {
        format!("/fighters/{}/stats", seg(id))
    }

    pub fn fights(id: &str) -> String {
        format!("/fighters/{}/fights", seg(id))
    }

    pub fn follow(id: &str) -> String {
        format!("/fighters/{}/follow", seg(id))
    }
}

pub mod events {
    use super::seg;

    pub const LIST: &str = "/events";
    pub const UPCOMING: &str = "/events/upcoming";
    pub const PAST: &str = "/events/past";
    pub const LIVE: &str = "/events/live";

    pub fn detail(id: &str) -> String {
        format!("/events/{}", seg(id))
    }

    pub fn fights(id: &str) -> String {
        format!("/events/{}/fights", seg(id))
    }
}

pub mod posts {
    use super::seg;

    pub const FEED: &str = "/posts/feed";
    pub const CREATE: &str = "/posts";

    pub fn detail(id: &str) -> String {
        format!("/posts/{}", seg(id))
    }

    pub fn like(id: &str) -> String {
        format!("/posts/{}/like", seg(id))
    }

    pub fn unlike(id: &str) -> String {
        format!("/posts/{}/unlike", seg(id))
    }

    pub fn comments(id: &str) -> String {
        format!("/posts/{}/comments", seg(id))
    }
}

pub mod comments {
    use super::seg;

    pub fn detail(id: &str) -> String {
        format!("/comments/{}", seg(id))
    }

    pub fn like(id: &str) -> String {
        format!("/comments/{}/like", seg(id))
    }

    pub fn replies(id: &str) -> String {
        format!("/comments/{}/replies", seg(id))
    }
}

pub mod chat {
    use super::seg;

    pub const CONVERSATIONS: &str = "/chat/conversations";

    pub fn conversation(id: &str) -> String {
        format!("/chat/conversations/{}", seg(id))
    }

    pub fn messages(id: &str) -> String {
        format!("/chat/conversations/{}/messages", seg(id))
    }

    pub fn read(id: &str) -> String {
        format!("/chat/conversations/{}/read", seg(id))
    }
}

pub mod notifications {
    use super::seg;

    pub const LIST: &str = "/notifications";
    pub const READ_ALL: &str = "/notifications/read-all";
    pub const SETTINGS: &str = "/notifications/settings";

    pub fn read(id: &str) -> String {
        format!("/notifications/{}/read", seg(id))
    }
}

pub mod media {
    use super::seg;

    pub const UPLOAD: &str = "/media/upload";
    pub const VIDEOS: &str = "/media/videos";
    pub const ARTICLES: &str = "/media/articles";

    pub fn video(id: &str) -> String {
        format!("/media/videos/{}", seg(id))
    }

    pub fn article(id: &str) -> String {
        format!("/media/articles/{}", seg(id))
    }
}

pub mod search {
    pub const ALL: &str = "/search";
    pub const FIGHTERS: &str = "/search/fighters";
    pub const EVENTS: &str = "/search/events";
    pub const USERS: &str = "/search/users";
    pub const POSTS: &str = "/search/posts";
}

pub mod predictions {
    pub const LIST: &str = "/predictions";
    pub const CREATE: &str = "/predictions";
    pub const LEADERBOARD: &str = "/predictions/leaderboard";
}
