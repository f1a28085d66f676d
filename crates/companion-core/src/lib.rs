pub mod generation;
pub mod llm_config;
pub mod openai;
pub mod quiz;
pub mod status;
