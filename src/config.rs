use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Which completion API answers the company prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LlmBackend {
    #[default]
    OpenAI,
    Anthropic,
}

impl FromStr for LlmBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(LlmBackend::OpenAI),
            "anthropic" | "claude" => Ok(LlmBackend::Anthropic),
            other => Err(Error::Config(format!("Unknown LLM provider: {}", other))),
        }
    }
}

impl fmt::Display for LlmBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmBackend::OpenAI => write!(f, "openai"),
            LlmBackend::Anthropic => write!(f, "anthropic"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: Option<String>,
    pub github_api_url: String,
    pub llm_backend: LlmBackend,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub anthropic_api_key: Option<String>,
    pub model: Option<String>,
    pub concurrency_limit: Option<usize>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let github_token = non_empty("GITHUB_API_KEY").or_else(|| non_empty("GITHUB_TOKEN"));

        let github_api_url = non_empty("GITHUB_API_URL")
            .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string());

        let llm_backend = match non_empty("LLM_PROVIDER") {
            Some(v) => v.parse()?,
            None => LlmBackend::default(),
        };

        let openai_base_url = non_empty("OPENAI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());

        let concurrency_limit = match non_empty("CONCURRENCY_LIMIT") {
            Some(v) => Some(parse_concurrency(&v)?),
            None => None,
        };

        Ok(Self {
            github_token,
            github_api_url,
            llm_backend,
            openai_api_key: non_empty("OPENAI_API_KEY"),
            openai_base_url,
            anthropic_api_key: non_empty("ANTHROPIC_API_KEY"),
            model: non_empty("LLM_MODEL"),
            concurrency_limit,
        })
    }

    /// API key of the selected backend. Missing keys fail here rather than
    /// on the first completion call.
    pub fn llm_api_key(&self) -> Result<&str> {
        let (key, var) = match self.llm_backend {
            LlmBackend::OpenAI => (&self.openai_api_key, "OPENAI_API_KEY"),
            LlmBackend::Anthropic => (&self.anthropic_api_key, "ANTHROPIC_API_KEY"),
        };
        key.as_deref()
            .ok_or_else(|| Error::Config(format!("{} environment variable not set", var)))
    }
}

pub fn parse_concurrency(value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::Config(format!(
            "Concurrency limit must be a positive integer, got {:?}",
            value
        ))),
    }
}

#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Maximum in-flight profile lookups / model calls. `None` fans out the
    /// whole batch at once.
    pub concurrency_limit: Option<usize>,
    pub show_progress: bool,
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            concurrency_limit: config.concurrency_limit,
            show_progress: true,
        }
    }
}
