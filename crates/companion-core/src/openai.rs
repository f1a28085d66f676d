use crate::openai::error::OpenAiError;
use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::{ChatCompletionRequestMessage, CreateChatCompletionRequestArgs, CreateChatCompletionResponse};
use backoff::ExponentialBackoffBuilder;
use std::error::Error;
use std::time::Duration;
use tracing::instrument;
use typed_builder::TypedBuilder;

pub mod error;

#[derive(Debug, Clone)]
pub struct Message {
    pub content: String,
    pub tokens: Option<u32>,
}

impl TryFrom<CreateChatCompletionResponse> for Message {
    type Error = OpenAiError;

    fn try_from(value: CreateChatCompletionResponse) -> Result<Message, Self::Error> {
        let tokens = value.usage.map(|u| u.total_tokens);

        let first = value.choices.into_iter().next().ok_or(OpenAiError::EmptyResponse)?;
        let content = first.message.content.ok_or(OpenAiError::EmptyResponse)?;

        Ok(Message { content, tokens })
    }
}

/// Time limits of one provider call.
///
/// `iteration_timeout` bounds a single http request, `total_timeout` bounds the call including all retries.
#[derive(TypedBuilder, Debug, Clone)]
pub struct CallConfig {
    total_timeout: Duration,
    iteration_timeout: Duration,
    #[builder(default = Duration::from_millis(100))]
    min_retry_interval: Duration,
    #[builder(default = Duration::from_secs(2))]
    max_retry_interval: Duration,
}

#[instrument(skip(config, openai_config, messages))]
pub async fn openai_call_with_timeout(
    config: &CallConfig,
    openai_config: OpenAIConfig,
    model: &str,
    messages: Vec<ChatCompletionRequestMessage>,
) -> Result<Message, OpenAiError> {
    let request = CreateChatCompletionRequestArgs::default()
        .model(model)
        .messages(messages)
        .build()?;

    let http_client = reqwest::Client::builder()
        .timeout(config.iteration_timeout)
        .build()
        .map_err(|error| {
            tracing::error!(error = &error as &dyn Error, "failed to build http client for the llm service");
            OpenAiError::HttpClientBuild(error)
        })?;

    let backoff = ExponentialBackoffBuilder::default()
        .with_initial_interval(config.min_retry_interval)
        .with_max_interval(config.max_retry_interval)
        .with_max_elapsed_time(Some(config.total_timeout))
        .build();

    let client = Client::with_config(openai_config)
        .with_http_client(http_client)
        .with_backoff(backoff);

    tracing::debug!("sending llm request");
    let chat_completion = tokio::time::timeout(config.total_timeout, client.chat().create(request))
        .await
        .map_err(|_| {
            tracing::warn!(timeout = ?config.total_timeout, "llm call timed out");
            OpenAiError::Timeout
        })?
        .map_err(|error| {
            tracing::warn!(error = &error as &dyn Error, "llm call failed");
            OpenAiError::Api(error)
        })?;

    let message: Message = chat_completion.try_into()?;
    tracing::debug!(tokens = message.tokens, "llm call finished");
    Ok(message)
}
