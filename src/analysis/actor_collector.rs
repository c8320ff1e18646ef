use std::collections::BTreeSet;
use std::sync::Arc;

use futures::TryStreamExt;

use crate::error::Result;
use crate::github::GitHubApi;
use crate::models::RepoActivity;

/// Bot accounts show up as `name[bot]`.
pub fn is_bot_login(login: &str) -> bool {
    login.contains('[')
}

/// Adds every human actor of `page` to `actors`.
pub fn collect_page(page: &[RepoActivity], actors: &mut BTreeSet<String>) {
    for activity in page {
        if let Some(login) = activity.actor_login() {
            if !is_bot_login(login) {
                actors.insert(login.to_string());
            }
        }
    }
}

pub struct ActorCollector {
    github: Arc<dyn GitHubApi>,
}

impl ActorCollector {
    pub fn new(github: Arc<dyn GitHubApi>) -> Self {
        Self { github }
    }

    /// Distinct non-bot logins across the repository's whole activity feed.
    pub async fn collect(&self, owner: &str, repo: &str) -> Result<BTreeSet<String>> {
        let mut pages = self.github.activity_pages(owner, repo);
        let mut actors = BTreeSet::new();
        let mut page_count = 0;

        while let Some(page) = pages.try_next().await? {
            page_count += 1;
            collect_page(&page, &mut actors);
            tracing::debug!(
                "Activity page {}: {} records, {} actors so far",
                page_count,
                page.len(),
                actors.len()
            );
        }

        tracing::info!(
            "Found {} actors in {} activity pages of {}/{}",
            actors.len(),
            page_count,
            owner,
            repo
        );
        Ok(actors)
    }
}
