use summora_common::{Result, SummoraError};
use tracing::{debug, error, info};

use crate::llm_trait::TextGenerator;
use crate::prompts::build_instruction;
use crate::types::{word_count, SummaryConfig};

/// Minimum whitespace-separated words required before a request is made
pub const MIN_INPUT_WORDS: usize = 10;

/// Check input preconditions before any request is made
///
/// Callers must reject input locally; the summarizer is never invoked for
/// empty or too-short text.
pub fn validate_input(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(SummoraError::EmptyInput);
    }

    if word_count(text) < MIN_INPUT_WORDS {
        return Err(SummoraError::InputTooShort {
            min_words: MIN_INPUT_WORDS,
        });
    }

    Ok(())
}

/// Summarizer over a text-generation backend
///
/// Stateless: each call assembles one instruction, performs one generate
/// call, and trims the result. Underlying failures are logged in full and
/// collapsed into the generic `SummarizationFailed`.
pub struct Summarizer<C: TextGenerator> {
    client: C,
}

impl<C: TextGenerator> Summarizer<C> {
    /// Create new summarizer
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Summarize text with the given configuration
    pub async fn summarize(&self, text: &str, config: &SummaryConfig) -> Result<String> {
        info!(
            "Starting summarization - Input: {} words, config: {}/{}/{}",
            word_count(text),
            config.length,
            config.tone,
            config.format
        );

        let instruction = build_instruction(text, config);
        debug!("Assembled instruction - Length: {} chars", instruction.len());

        match self.client.generate(&instruction).await {
            Ok(content) => Ok(content.trim().to_string()),
            Err(e) => {
                error!("Summarization request failed: {}", e);
                Err(SummoraError::SummarizationFailed)
            }
        }
    }
}
