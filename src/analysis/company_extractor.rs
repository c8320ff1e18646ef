use std::sync::Arc;

use futures::future::try_join_all;
use indicatif::ProgressBar;
use tokio::sync::Semaphore;

use crate::error::{Error, Result};
use crate::llm::{company_prompt, parse_company_list, LLMProvider};
use crate::models::{CompanyName, GitHubUser};

pub struct CompanyExtractor {
    llm: Arc<dyn LLMProvider>,
    semaphore: Option<Arc<Semaphore>>,
}

impl CompanyExtractor {
    pub fn new(llm: Arc<dyn LLMProvider>, concurrency_limit: Option<usize>) -> Self {
        Self {
            llm,
            semaphore: concurrency_limit.map(|n| Arc::new(Semaphore::new(n))),
        }
    }

    /// Companies mentioned in a profile's bio and company fields.
    ///
    /// An absent profile yields nothing without calling the model. Errors
    /// from the model are returned as is; a reply that cannot be parsed is
    /// treated as naming no companies.
    pub async fn extract(&self, user: Option<&GitHubUser>) -> Result<Vec<CompanyName>> {
        let Some(user) = user else {
            return Ok(Vec::new());
        };

        let _permit = match &self.semaphore {
            Some(sem) => Some(
                sem.acquire()
                    .await
                    .map_err(|e| Error::LLMApi(format!("Request slot unavailable: {}", e)))?,
            ),
            None => None,
        };

        let prompt = company_prompt(user);
        tracing::debug!("Asking {} ({}) about {}", self.llm.name(), self.llm.model(), user.login);
        let reply = self.llm.complete(&prompt).await?;

        match parse_company_list(reply.as_deref()) {
            Ok(companies) => {
                tracing::debug!("{}: {} companies", user.login, companies.len());
                Ok(companies)
            }
            Err(e) => {
                tracing::warn!("Ignoring reply for {}: {}", user.login, e);
                Ok(Vec::new())
            }
        }
    }

    /// Extracts from every profile concurrently; the first failure aborts the
    /// whole batch. `result[i]` belongs to `users[i]`.
    pub async fn extract_all(&self, users: &[Option<GitHubUser>]) -> Result<Vec<Vec<CompanyName>>> {
        self.extract_all_with_progress(users, &ProgressBar::hidden()).await
    }

    pub async fn extract_all_with_progress(
        &self,
        users: &[Option<GitHubUser>],
        pb: &ProgressBar,
    ) -> Result<Vec<Vec<CompanyName>>> {
        let extractions = users.iter().map(|user| async move {
            let companies = self.extract(user.as_ref()).await?;
            pb.inc(1);
            Ok::<_, Error>(companies)
        });

        try_join_all(extractions).await
    }
}
