use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gitcompanies::config::parse_concurrency;
use gitcompanies::models::CompanyReport;
use gitcompanies::{
    ClaudeProvider, CompanyPipeline, Config, GitHubClient, LLMProvider, LlmBackend,
    OpenAIProvider, PipelineConfig,
};

#[derive(Parser, Debug)]
#[command(name = "gitcompanies")]
#[command(version = "0.1.0")]
#[command(about = "List the companies mentioned in a GitHub repository's contributor profiles")]
struct Args {
    /// Repository owner (user or organization)
    owner: String,

    /// Repository name
    repo: String,

    /// Model used for company extraction (defaults to the provider's model)
    #[arg(short, long)]
    model: Option<String>,

    /// LLM provider (openai, anthropic)
    #[arg(long)]
    provider: Option<String>,

    /// Output format (json, text, markdown)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Maximum concurrent profile lookups and model calls
    #[arg(long, value_parser = concurrency_arg)]
    concurrency: Option<usize>,

    /// Hide progress bars
    #[arg(long)]
    no_progress: bool,
}

fn concurrency_arg(value: &str) -> Result<usize, String> {
    parse_concurrency(value).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gitcompanies=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // CLI flags take precedence over the environment
    let mut config = Config::from_env()?;
    if let Some(provider) = &args.provider {
        config.llm_backend = provider.parse()?;
    }
    if args.model.is_some() {
        config.model = args.model.clone();
    }
    if args.concurrency.is_some() {
        config.concurrency_limit = args.concurrency;
    }

    // Initialize clients
    let github = GitHubClient::new(config.github_token.as_deref())?
        .with_base_url(config.github_api_url.clone());
    let llm = build_llm(&config)?;
    tracing::info!("Using {} ({}) model {}", llm.name(), config.llm_backend, llm.model());

    let mut pipeline_config = PipelineConfig::from(&config);
    pipeline_config.show_progress = !args.no_progress;

    let pipeline = CompanyPipeline::new(Arc::new(github), llm, pipeline_config);

    let report = pipeline.find_companies(&args.owner, &args.repo).await?;

    output_report(&report, &args)?;

    Ok(())
}

fn build_llm(config: &Config) -> anyhow::Result<Arc<dyn LLMProvider>> {
    let api_key = config.llm_api_key()?.to_string();
    let llm: Arc<dyn LLMProvider> = match config.llm_backend {
        LlmBackend::OpenAI => Arc::new(
            OpenAIProvider::new(api_key, config.model.clone())?
                .with_base_url(config.openai_base_url.clone()),
        ),
        LlmBackend::Anthropic => Arc::new(ClaudeProvider::new(api_key, config.model.clone())?),
    };
    Ok(llm)
}

fn output_report(report: &CompanyReport, args: &Args) -> anyhow::Result<()> {
    let output = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(report)?,
        "markdown" => format_markdown(report),
        _ => format_text(report),
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_text(report: &CompanyReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("=== Companies: {} ===\n\n", report.full_name()));
    output.push_str(&format!("Contributors: {}\n", report.actors));
    output.push_str(&format!(
        "Profiles resolved: {} ({} failed)\n",
        report.profiles_resolved, report.profiles_failed
    ));
    output.push_str(&format!("Companies found: {}\n\n", report.companies.len()));

    for company in &report.companies {
        output.push_str(&format!("{}\n", company));
    }

    output
}

fn format_markdown(report: &CompanyReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("# Companies behind {}\n\n", report.full_name()));
    output.push_str("| Metric | Value |\n|--------|-------|\n");
    output.push_str(&format!("| Contributors | {} |\n", report.actors));
    output.push_str(&format!("| Profiles Resolved | {} |\n", report.profiles_resolved));
    output.push_str(&format!("| Failed Lookups | {} |\n", report.profiles_failed));

    if !report.companies.is_empty() {
        output.push_str("\n## Companies\n\n");
        for company in &report.companies {
            output.push_str(&format!("- {}\n", company));
        }
    }

    output.push_str(&format!(
        "\n---\n*Generated on {}*\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
