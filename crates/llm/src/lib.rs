//! Summora LLM Integration
//!
//! Gemini API client and configurable text summarization

mod client;
mod llm_trait;
mod prompts;
mod summarize;
mod types;

pub use client::GeminiClient;
pub use llm_trait::TextGenerator;
pub use prompts::{build_instruction, format_clause, length_clause, tone_clause};
pub use summarize::{validate_input, Summarizer, MIN_INPUT_WORDS};
pub use types::{
    word_count, ConfigField, GenerateRequest, GenerateResponse, GenerationConfig, SummaryConfig,
    SummaryFormat, SummaryLength, SummaryResult, SummaryTone,
};
