use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::error::Result;
use crate::models::{GitHubUser, RepoActivity};

/// The slice of the GitHub REST API the pipeline needs.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Pages of repository activity, in the order the API serves them.
    fn activity_pages<'a>(
        &'a self,
        owner: &'a str,
        repo: &'a str,
    ) -> BoxStream<'a, Result<Vec<RepoActivity>>>;

    async fn get_user(&self, username: &str) -> Result<GitHubUser>;
}
