use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenAiError {
    #[error(transparent)]
    Api(#[from] async_openai::error::OpenAIError),

    #[error("No response from the provider")]
    EmptyResponse,

    #[error("Operation timed out")]
    Timeout,

    #[error("No api key configured for the llm service")]
    MissingApiKey,

    #[error(transparent)]
    HttpClientBuild(#[from] reqwest::Error),
}
