use async_trait::async_trait;
use crate::error::Result;

#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Sends `prompt` as a single user message. `Ok(None)` means the model
    /// answered without any text.
    async fn complete(&self, prompt: &str) -> Result<Option<String>>;
    fn model(&self) -> &str;
    fn name(&self) -> &str;
}
