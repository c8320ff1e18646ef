use std::sync::Arc;

use futures::future::join_all;
use indicatif::ProgressBar;
use tokio::sync::Semaphore;

use crate::github::GitHubApi;
use crate::models::GitHubUser;

/// Looks up public profiles. Failed lookups come back as `None`, never as errors.
pub struct ProfileResolver {
    github: Arc<dyn GitHubApi>,
    semaphore: Option<Arc<Semaphore>>,
}

impl ProfileResolver {
    pub fn new(github: Arc<dyn GitHubApi>, concurrency_limit: Option<usize>) -> Self {
        Self {
            github,
            semaphore: concurrency_limit.map(|n| Arc::new(Semaphore::new(n))),
        }
    }

    pub async fn resolve(&self, login: &str) -> Option<GitHubUser> {
        let _permit = match &self.semaphore {
            Some(sem) => Some(sem.acquire().await.ok()?),
            None => None,
        };

        tracing::info!("Looking up user: {}", login);
        match self.github.get_user(login).await {
            Ok(user) => Some(user),
            Err(e) if e.is_not_found() => {
                tracing::debug!("Skipping {}: {}", login, e);
                None
            }
            Err(e) => {
                tracing::warn!("Profile lookup failed for {}: {}", login, e);
                None
            }
        }
    }

    /// Resolves every login concurrently. `result[i]` belongs to `logins[i]`.
    pub async fn resolve_all(&self, logins: &[String]) -> Vec<Option<GitHubUser>> {
        self.resolve_all_with_progress(logins, &ProgressBar::hidden()).await
    }

    pub async fn resolve_all_with_progress(
        &self,
        logins: &[String],
        pb: &ProgressBar,
    ) -> Vec<Option<GitHubUser>> {
        let lookups = logins.iter().map(|login| async move {
            let user = self.resolve(login).await;
            pb.inc(1);
            user
        });

        join_all(lookups).await
    }
}
