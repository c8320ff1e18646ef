pub mod provider;
pub mod openai;
pub mod claude;
pub mod prompts;
pub mod parser;

pub use provider::LLMProvider;
pub use openai::OpenAIProvider;
pub use claude::ClaudeProvider;
pub use prompts::company_prompt;
pub use parser::parse_company_list;
