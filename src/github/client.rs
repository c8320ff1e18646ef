use async_trait::async_trait;
use futures::stream::BoxStream;
use reqwest::{header, Client};

use crate::config::DEFAULT_GITHUB_API_URL;
use crate::error::{Error, Result};
use crate::github::api::GitHubApi;
use crate::github::paginator::Paginator;
use crate::models::{GitHubUser, RepoActivity};

const ACTIVITY_PAGE_SIZE: u32 = 100;

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    /// Without a token requests go out unauthenticated; GitHub then answers
    /// with its anonymous limits and any rejection surfaces on the first call.
    pub fn new(token: Option<&str>) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("gitcompanies/0.1"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: DEFAULT_GITHUB_API_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    fn activity_pages<'a>(
        &'a self,
        owner: &'a str,
        repo: &'a str,
    ) -> BoxStream<'a, Result<Vec<RepoActivity>>> {
        let url = format!("{}/repos/{}/{}/activity", self.base_url, owner, repo);
        let full_name = format!("{}/{}", owner, repo);
        tracing::info!("Fetching activity for: {}", full_name);

        Paginator::new(&self.client).pages(&url, ACTIVITY_PAGE_SIZE, move || {
            Error::RepoNotFound(full_name.clone())
        })
    }

    async fn get_user(&self, username: &str) -> Result<GitHubUser> {
        let url = format!("{}/users/{}", self.base_url, username);
        tracing::debug!("Fetching user: {}", url);

        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::UserNotFound(username.to_string()));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi(format!(
                "Failed to fetch user {}: {} - {}",
                username, status, body
            )));
        }

        Ok(response.json().await?)
    }
}
