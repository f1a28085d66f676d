use clap::Args;

/// Connection settings of the text generation provider.
#[derive(Debug, Clone, Args)]
pub struct LlmArgs {
    /// `gemini`, `openai` or the base url of any OpenAI compatible api
    #[arg(long, env = "LLM_SERVICE", default_value = "gemini")]
    pub llm_service: String,
    #[arg(long, env = "GEMINI_API_KEY", required = false, hide_env_values = true)]
    pub llm_api_key: Option<String>,
    #[arg(long, env = "LLM_MODEL", required = false)]
    pub llm_model: Option<String>,
    /// Timeout of a single request to the provider in seconds
    #[arg(long, env = "LLM_REQUEST_TIMEOUT", default_value_t = 60)]
    pub llm_request_timeout: u64,
    /// Upper bound for all retries of one generation in seconds
    #[arg(long, env = "LLM_MAX_ELAPSED_TIME", default_value_t = 120)]
    pub llm_max_elapsed_time: u64,
}
