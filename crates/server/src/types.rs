use serde::{Deserialize, Serialize};
use summora_llm::{
    SummaryConfig, SummaryFormat, SummaryLength, SummaryResult, SummaryTone,
};

/// Summarization request from the browser UI
#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    /// Text to summarize
    pub text: String,

    /// Summarization settings; missing fields fall back to defaults
    #[serde(default)]
    pub config: SummaryConfig,
}

/// Successful summarization response
#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    /// Summary text
    pub content: String,

    /// Word count of the summary
    pub word_count: usize,

    /// Word count of the submitted text
    pub original_word_count: usize,

    /// Rounded percentage reduction
    pub reduction_percent: i64,

    /// Estimated reading time in minutes
    pub reading_time_minutes: usize,
}

impl From<SummaryResult> for SummarizeResponse {
    fn from(result: SummaryResult) -> Self {
        let reduction_percent = result.reduction_percent();
        let reading_time_minutes = result.reading_time_minutes();
        Self {
            content: result.content,
            word_count: result.word_count,
            original_word_count: result.original_word_count,
            reduction_percent,
            reading_time_minutes,
        }
    }
}

/// Error body returned for failed requests
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// User-facing message
    pub error: String,
}

/// Available configuration options for the UI selection controls
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub lengths: Vec<String>,
    pub tones: Vec<String>,
    pub formats: Vec<String>,
    pub default: SummaryConfig,
}

impl Default for OptionsResponse {
    fn default() -> Self {
        Self {
            lengths: SummaryLength::ALL.iter().map(ToString::to_string).collect(),
            tones: SummaryTone::ALL.iter().map(ToString::to_string).collect(),
            formats: SummaryFormat::ALL.iter().map(ToString::to_string).collect(),
            default: SummaryConfig::default(),
        }
    }
}
