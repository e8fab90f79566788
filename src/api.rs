// SPDX-License-Identifier: MPL-2.0
//! Fetch adapter for the Steam Deck Repo library.
//!
//! Exposes `get_videos` (one page of records, optionally filtered by a
//! search term) and `get_thumbnail` (raw image bytes for a record). Both
//! are plain async functions; the shell runs them as Iced tasks so their
//! results come back to the UI loop as messages.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Production endpoint of the library.
pub const DEFAULT_API_BASE: &str = "https://steamdeckrepo.com";

/// Environment override for the API base, used by integration setups that
/// point the app at a local fixture server.
pub const API_BASE_ENV: &str = "DECKREPO_API_URL";

/// One post in the remote library. Immutable once received; the view reads
/// it in place and never mutates it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VideoRecord {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub author: String,
    pub thumbnail: String,
    pub video: String,
    #[serde(default)]
    pub likes: u32,
    /// Clip length in seconds; older posts predate the field.
    #[serde(default)]
    pub duration_secs: Option<u32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct PostsResponse {
    posts: Vec<VideoRecord>,
}

fn api_base() -> String {
    std::env::var(API_BASE_ENV).unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
}

/// Builds the posts request for a page and an optional search term. An
/// empty term is omitted entirely so the unfiltered listing stays
/// cacheable.
fn posts_request(
    client: &reqwest::Client,
    base: &str,
    page: u32,
    search: &str,
) -> reqwest::Result<reqwest::Request> {
    let mut builder = client
        .get(format!("{}/api/posts", base))
        .query(&[("page", page)]);
    if !search.is_empty() {
        builder = builder.query(&[("search", search)]);
    }
    builder.build()
}

/// Fetches one page of the library. An empty list means the listing is
/// exhausted (pagination) or nothing matched (search).
pub async fn get_videos(
    client: reqwest::Client,
    page: u32,
    search: String,
) -> Result<Vec<VideoRecord>> {
    let request = posts_request(&client, &api_base(), page, &search)?;
    tracing::debug!(url = %request.url(), "fetching library page");

    let response = client.execute(request).await?;
    if !response.status().is_success() {
        return Err(Error::Api(format!("HTTP status {}", response.status())));
    }

    let body: PostsResponse = response.json().await?;
    tracing::debug!(count = body.posts.len(), page, "library page received");
    Ok(body.posts)
}

/// Fetches the raw thumbnail bytes for a record. The shell turns the bytes
/// into an `iced` image handle; keeping this module free of widget types
/// keeps it testable without a renderer.
pub async fn get_thumbnail(client: reqwest::Client, url: String) -> Result<Vec<u8>> {
    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Api(format!("HTTP status {}", response.status())));
    }
    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}
