//! HTTP client for the post API.

use super::PostsPage;
use crate::model::{FetchError, PageNumber, PageSize, Post, PostId};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Response header carrying the total item count of a listing.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Async client for `{base}/posts` and `{base}/posts/{id}`.
///
/// No timeout, retry or backoff is configured: a request either
/// completes or fails once.
#[derive(Clone, Debug)]
pub struct BlogClient {
    client: Client,
    base: Url,
}

impl BlogClient {
    /// Build a client rooted at `base`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Url` for an unparsable base and
    /// `FetchError::Network` if the HTTP client cannot be built.
    pub fn new(base: &str) -> Result<Self, FetchError> {
        let mut base = Url::parse(base)?;
        // `Url::join` replaces the last segment unless the path ends in '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let client = Client::builder().user_agent(Self::user_agent()).build()?;
        Ok(Self { client, base })
    }

    /// User agent sent with every request.
    pub fn user_agent() -> &'static str {
        concat!("blogview/", env!("CARGO_PKG_VERSION"))
    }

    /// Base URL all paths are joined onto.
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// URL of one page of the listing.
    pub fn list_url(&self, page: PageNumber, page_size: PageSize) -> Result<Url, FetchError> {
        let mut url = self.base.join("posts")?;
        url.query_pairs_mut()
            .append_pair("_page", &page.to_string())
            .append_pair("_limit", &page_size.to_string());
        Ok(url)
    }

    /// URL of a single post.
    pub fn post_url(&self, id: PostId) -> Result<Url, FetchError> {
        Ok(self.base.join(&format!("posts/{id}"))?)
    }

    /// Fetch one page of posts and the total count.
    ///
    /// # Errors
    ///
    /// `Network` on transport failure, `Http` on a non-2xx status,
    /// `Parse` on a malformed body and `MissingTotalCount` when the
    /// total header is absent or not a number.
    pub async fn list_posts(
        &self,
        page: PageNumber,
        page_size: PageSize,
    ) -> Result<PostsPage, FetchError> {
        let url = self.list_url(page, page_size)?;
        debug!(%url, "GET post list");

        let resp = self.client.get(url.clone()).send().await?;
        let resp = Self::check_status(resp, &url)?;
        let total_count = Self::total_count(&resp)?;
        let posts: Vec<Post> = Self::json(resp).await?;

        debug!(count = posts.len(), total_count, "post list received");
        Ok(PostsPage { posts, total_count })
    }

    /// Fetch a single post by id.
    ///
    /// # Errors
    ///
    /// An unknown id surfaces as `Http { status: 404, .. }`; other failures
    /// as for [`list_posts`](Self::list_posts).
    pub async fn get_post(&self, id: PostId) -> Result<Post, FetchError> {
        let url = self.post_url(id)?;
        debug!(%url, "GET post detail");

        let resp = self.client.get(url.clone()).send().await?;
        let resp = Self::check_status(resp, &url)?;
        Self::json(resp).await
    }

    fn check_status(resp: Response, url: &Url) -> Result<Response, FetchError> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            Err(FetchError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            })
        }
    }

    fn total_count(resp: &Response) -> Result<u64, FetchError> {
        resp.headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok())
            .ok_or(FetchError::MissingTotalCount)
    }

    async fn json<T: DeserializeOwned>(resp: Response) -> Result<T, FetchError> {
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| FetchError::Parse(e.to_string()))
    }
}
