use crate::openai::CallConfig;
use crate::openai::error::OpenAiError;
use async_openai::config::OpenAIConfig;
use companion_utils::args::llm::LlmArgs;
use std::borrow::Cow;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum LlmServiceError {
    #[error("unknown llm service `{0}`, expected gemini, openai or a base url")]
    UnknownService(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LlmService {
    #[default]
    Gemini,
    OpenAI,
    Custom(Url),
}

impl FromStr for LlmService {
    type Err = LlmServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gemini" => Ok(LlmService::Gemini),
            "openai" => Ok(LlmService::OpenAI),
            _ => Url::parse(s)
                .map(LlmService::Custom)
                .map_err(|_| LlmServiceError::UnknownService(s.to_string())),
        }
    }
}

impl LlmService {
    #[must_use]
    pub fn get_base(&self) -> Cow<'_, str> {
        match self {
            LlmService::Gemini => "https://generativelanguage.googleapis.com/v1beta/openai".into(),
            LlmService::OpenAI => "https://api.openai.com/v1".into(),
            LlmService::Custom(url) => Cow::from(url.as_str()),
        }
    }

    #[must_use]
    pub fn default_model(&self) -> &'static str {
        match self {
            LlmService::Gemini => "gemini-1.5-flash-8b",
            LlmService::OpenAI => "gpt-4.1-mini",
            LlmService::Custom(_) => "llama-3.3-8b-instruct",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    service: LlmService,
    key: Option<String>,
    model: Option<String>,
    pub call_config: CallConfig,
}

impl TryFrom<LlmArgs> for LlmConfig {
    type Error = LlmServiceError;

    fn try_from(args: LlmArgs) -> Result<Self, Self::Error> {
        let call_config = CallConfig::builder()
            .total_timeout(Duration::from_secs(args.llm_max_elapsed_time))
            .iteration_timeout(Duration::from_secs(args.llm_request_timeout))
            .build();
        Ok(Self {
            service: args.llm_service.parse()?,
            key: args.llm_api_key.filter(|key| !key.is_empty()),
            model: args.llm_model,
            call_config,
        })
    }
}

impl LlmConfig {
    #[must_use]
    pub fn new(service: LlmService, key: Option<String>, model: Option<String>, call_config: CallConfig) -> Self {
        Self {
            service,
            key,
            model,
            call_config,
        }
    }

    #[must_use]
    pub fn service(&self) -> &LlmService {
        &self.service
    }

    #[must_use]
    pub fn get_model(&self) -> &str {
        if let Some(model) = &self.model {
            model.as_str()
        } else {
            self.service.default_model()
        }
    }

    #[must_use]
    pub fn get_key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Client configuration for the selected service. Fails if no api key is configured.
    pub fn get_openai_config(&self) -> Result<OpenAIConfig, OpenAiError> {
        let key = self.get_key().ok_or(OpenAiError::MissingApiKey)?;
        Ok(OpenAIConfig::default()
            .with_api_base(self.service.get_base())
            .with_api_key(key))
    }
}
