use std::sync::Arc;

use futures::stream::{self, BoxStream, StreamExt};
use reqwest::header::{HeaderMap, LINK};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

type NotFound = Arc<dyn Fn() -> Error + Send + Sync>;

/// Walks a GitHub list endpoint page by page, following `rel="next"` links.
pub struct Paginator<'a> {
    client: &'a Client,
}

impl<'a> Paginator<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lazily fetches pages starting at `base_url`. The stream ends after the
    /// last page and yields an error (then stops) on the first failed request.
    /// A 404 is reported through `not_found`.
    pub fn pages<T, F>(
        &self,
        base_url: &str,
        per_page: u32,
        not_found: F,
    ) -> BoxStream<'a, Result<Vec<T>>>
    where
        T: DeserializeOwned + Send + 'a,
        F: Fn() -> Error + Send + Sync + 'static,
    {
        let client = self.client;
        let not_found: NotFound = Arc::new(not_found);
        let separator = if base_url.contains('?') { "&" } else { "?" };
        let first = format!("{}{}per_page={}", base_url, separator, per_page);

        stream::try_unfold(Some(first), move |next| {
            let not_found = not_found.clone();
            async move {
                match next {
                    Some(url) => fetch_page(client, &url, not_found.as_ref()).await.map(Some),
                    None => Ok(None),
                }
            }
        })
        .boxed()
    }
}

async fn fetch_page<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    not_found: &(dyn Fn() -> Error + Send + Sync),
) -> Result<(Vec<T>, Option<String>)> {
    tracing::debug!("Fetching: {}", url);
    let response = client.get(url).send().await?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(not_found());
    }
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::GitHubApi(format!(
            "Failed to fetch {}: {} - {}",
            url, status, body
        )));
    }

    // Check for next page in Link header
    let next = next_page_url(response.headers());
    let items: Vec<T> = response.json().await?;
    Ok((items, next))
}

fn next_page_url(headers: &HeaderMap) -> Option<String> {
    headers
        .get(LINK)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_next_link)
}

/// Extracts the `rel="next"` target from a `Link` header value.
pub fn parse_next_link(link: &str) -> Option<String> {
    link.split(',').find_map(|part| {
        let mut segments = part.split(';');
        let target = segments.next()?.trim();
        let is_next = segments.any(|s| s.trim() == "rel=\"next\"");
        if !is_next {
            return None;
        }
        target
            .strip_prefix('<')
            .and_then(|t| t.strip_suffix('>'))
            .map(str::to_string)
    })
}
