use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};

use crate::analysis::actor_collector::ActorCollector;
use crate::analysis::company_extractor::CompanyExtractor;
use crate::analysis::profile_resolver::ProfileResolver;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::github::GitHubApi;
use crate::llm::LLMProvider;
use crate::models::{CompanyName, CompanyReport};

pub struct CompanyPipeline {
    collector: ActorCollector,
    resolver: ProfileResolver,
    extractor: CompanyExtractor,
    config: PipelineConfig,
}

impl CompanyPipeline {
    pub fn new(
        github: Arc<dyn GitHubApi>,
        llm: Arc<dyn LLMProvider>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            collector: ActorCollector::new(github.clone()),
            resolver: ProfileResolver::new(github, config.concurrency_limit),
            extractor: CompanyExtractor::new(llm, config.concurrency_limit),
            config,
        }
    }

    pub async fn find_companies(&self, owner: &str, repo: &str) -> Result<CompanyReport> {
        // Step 1: Collect actors from the activity feed
        tracing::info!("Collecting contributors of {}/{}", owner, repo);
        let actors: Vec<String> = self.collector.collect(owner, repo).await?.into_iter().collect();

        // Step 2: Resolve profiles as one batch
        let pb = self.progress_bar(actors.len(), "profiles");
        let users = self.resolver.resolve_all_with_progress(&actors, &pb).await;
        pb.finish_and_clear();

        let profiles_resolved = users.iter().filter(|u| u.is_some()).count();
        let profiles_failed = users.len() - profiles_resolved;
        tracing::info!(
            "Resolved {} profiles ({} lookups failed)",
            profiles_resolved,
            profiles_failed
        );

        // Step 3: Extract companies as one batch
        let pb = self.progress_bar(users.len(), "profiles analyzed");
        let extracted = self.extractor.extract_all_with_progress(&users, &pb).await;
        pb.finish_and_clear();
        let extracted = extracted?;

        // Step 4: Merge
        let companies: BTreeSet<CompanyName> = extracted.into_iter().flatten().collect();
        tracing::info!("Found {} distinct companies", companies.len());

        Ok(CompanyReport {
            owner: owner.to_string(),
            repo: repo.to_string(),
            actors: actors.len(),
            profiles_resolved,
            profiles_failed,
            companies: companies.into_iter().collect(),
            generated_at: Utc::now(),
        })
    }

    fn progress_bar(&self, len: usize, unit: &str) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let template = format!(
            "{{spinner:.green}} [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} {}",
            unit
        );
        let style = ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let pb = ProgressBar::new(len as u64);
        pb.set_style(style);
        pb
    }
}
