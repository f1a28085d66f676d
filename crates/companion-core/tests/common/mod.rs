use async_trait::async_trait;
use companion_core::generation::error::GenerationError;
use companion_core::generation::TextGenerator;
use companion_core::openai::error::OpenAiError;
use std::sync::Mutex;

/// Returns a canned response and remembers the prompts it was called with.
pub struct FakeGenerator {
    response: Option<String>,
    pub prompts: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FakeGenerator {
    pub fn replying(response: &str) -> Self {
        Self {
            response: Some(response.to_owned()),
            prompts: Mutex::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: None,
            prompts: Mutex::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_owned());
        self.response
            .clone()
            .ok_or(GenerationError::OpenAi(OpenAiError::Timeout))
    }
}
