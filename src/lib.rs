pub mod config;
pub mod error;
pub mod models;
pub mod github;
pub mod llm;
pub mod analysis;

#[cfg(test)]
mod test_server;

pub use config::{Config, LlmBackend, PipelineConfig};
pub use error::{Error, Result};
pub use github::{GitHubApi, GitHubClient};
pub use llm::{ClaudeProvider, LLMProvider, OpenAIProvider};
pub use analysis::CompanyPipeline;
