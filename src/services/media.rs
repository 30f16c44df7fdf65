// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Media endpoints: uploads, videos and news articles.

use crate::api::{endpoints, ApiClient, ApiRequest, FilePart};
use crate::error::Result;
use crate::models::{Article, Page, UploadedMedia, Video};

pub const DEFAULT_PAGE: Page = Page::new(1, 20);

/// Multipart field name expected by `/media/upload`.
const UPLOAD_FIELD: &str = "file";

#[derive(Clone)]
pub struct MediaService {
    api: ApiClient,
}

impl MediaService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Upload a file and return its public URL.
    pub async fn upload(
        &self,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedMedia> {
        let part = FilePart {
            field: UPLOAD_FIELD.to_string(),
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            bytes,
        };
        self.api
            .send(ApiRequest::post(endpoints::media::UPLOAD).file(part))
            .await
    }

    pub async fn videos(&self, page: Page) -> Result<Vec<Video>> {
        self.api
            .send(ApiRequest::get(endpoints::media::VIDEOS).page(page))
            .await
    }

    pub async fn video(&self, video_id: &str) -> Result<Video> {
        self.api
            .send(ApiRequest::get(endpoints::media::video(video_id)))
            .await
    }

    pub async fn articles(&self, page: Page) -> Result<Vec<Article>> {
        self.api
            .send(ApiRequest::get(endpoints::media::ARTICLES).page(page))
            .await
    }

    pub async fn article(&self, article_id: &str) -> Result<Article> {
        self.api
            .send(ApiRequest::get(endpoints::media::article(article_id)))
            .await
    }
}
