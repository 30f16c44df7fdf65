// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Social feed endpoints: posts and comments.

use crate::api::{endpoints, ApiClient, ApiRequest};
use crate::error::Result;
use crate::models::{Comment, NewPost, Page, Post};

pub const DEFAULT_FEED_PAGE: Page = Page::new(1, 20);
pub const DEFAULT_COMMENTS_PAGE: Page = Page::new(1, 20);
pub const DEFAULT_REPLIES_PAGE: Page = Page::new(1, 10);

#[derive(Clone)]
pub struct PostService {
    api: ApiClient,
}

impl PostService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn feed(&self, page: Page) -> Result<Vec<Post>> {
        self.api
            .send(ApiRequest::get(endpoints::posts::FEED).page(page))
            .await
    }

    pub async fn create(&self, post: &NewPost) -> Result<Post> {
        let body = serde_json::to_value(post)?;
        self.api
            .send(ApiRequest::post(endpoints::posts::CREATE).json(body))
            .await
    }

    pub async fn detail(&self, post_id: &str) -> Result<Post> {
        self.api
            .send(ApiRequest::get(endpoints::posts::detail(post_id)))
            .await
    }

    pub async fn update(&self, post_id: &str, content: &str) -> Result<Post> {
        let body = serde_json::json!({ "content": content });
        self.api
            .send(ApiRequest::patch(endpoints::posts::detail(post_id)).json(body))
            .await
    }

    pub async fn delete(&self, post_id: &str) -> Result<()> {
        self.api
            .send_empty(ApiRequest::delete(endpoints::posts::detail(post_id)))
            .await
    }

    pub async fn like(&self, post_id: &str) -> Result<()> {
        self.api
            .send_empty(ApiRequest::post(endpoints::posts::like(post_id)))
            .await
    }

    pub async fn unlike(&self, post_id: &str) -> Result<()> {
        self.api
            .send_empty(ApiRequest::post(endpoints::posts::unlike(post_id)))
            .await
    }

    pub async fn comments(&self, post_id: &str, page: Page) -> Result<Vec<Comment>> {
        self.api
            .send(ApiRequest::get(endpoints::posts::comments(post_id)).page(page))
            .await
    }

    pub async fn user_posts(&self, user_id: &str, page: Page) -> Result<Vec<Post>> {
        self.api
            .send(ApiRequest::get(endpoints::users::posts(user_id)).page(page))
            .await
    }
}

#[derive(Clone)]
pub struct CommentService {
    api: ApiClient,
}

impl CommentService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Comment on a post, or reply to `parent_id` within it.
    pub async fn create(
        &self,
        post_id: &str,
        content: &str,
        parent_id: Option<&str>,
    ) -> Result<Comment> {
        let mut body = serde_json::json!({ "content": content });
        if let Some(parent_id) = parent_id {
            body["parentId"] = parent_id.into();
        }
        self.api
            .send(ApiRequest::post(endpoints::posts::comments(post_id)).json(body))
            .await
    }

    pub async fn update(&self, comment_id: &str, content: &str) -> Result<Comment> {
        let body = serde_json::json!({ "content": content });
        self.api
            .send(ApiRequest::patch(endpoints::comments::detail(comment_id)).json(body))
            .await
    }

    pub async fn delete(&self, comment_id: &str) -> Result<()> {
        self.api
            .send_empty(ApiRequest::delete(endpoints::comments::detail(comment_id)))
            .await
    }

    pub async fn like(&self, comment_id: &str) -> Result<()> {
        self.api
            .send_empty(ApiRequest::post(endpoints::comments::like(comment_id)))
            .await
    }

    pub async fn replies(&self, comment_id: &str, page: Page) -> Result<Vec<Comment>> {
        self.api
            .send(ApiRequest::get(endpoints::comments::replies(comment_id)).page(page))
            .await
    }
}
