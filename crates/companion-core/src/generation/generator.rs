use crate::generation::error::GenerationError;
use crate::llm_config::LlmConfig;
use crate::openai::openai_call_with_timeout;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessage, ChatCompletionRequestUserMessageContent,
};
use async_trait::async_trait;

/// A text completion service: one prompt in, one text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Generator backed by an OpenAI compatible chat completion api.
#[derive(Debug, Clone)]
pub struct OpenAiGenerator {
    llm_config: LlmConfig,
}

impl OpenAiGenerator {
    #[must_use]
    pub fn new(llm_config: LlmConfig) -> Self {
        Self { llm_config }
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let openai_config = self.llm_config.get_openai_config()?;
        let messages = vec![ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
            content: ChatCompletionRequestUserMessageContent::Text(prompt.to_owned()),
            name: None,
        })];

        let message = openai_call_with_timeout(
            &self.llm_config.call_config,
            openai_config,
            self.llm_config.get_model(),
            messages,
        )
        .await?;
        Ok(message.content)
    }
}
