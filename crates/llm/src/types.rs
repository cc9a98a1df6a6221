use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use summora_common::SummoraError;

/// Summary length setting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Concise,
    #[default]
    Balanced,
    Detailed,
}

impl SummaryLength {
    /// Every member of the enumeration
    pub const ALL: [Self; 3] = [Self::Concise, Self::Balanced, Self::Detailed];
}

impl FromStr for SummaryLength {
    type Err = SummoraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "concise" => Ok(Self::Concise),
            "balanced" => Ok(Self::Balanced),
            "detailed" => Ok(Self::Detailed),
            other => Err(SummoraError::invalid_option(format!(
                "unknown length '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for SummaryLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Concise => "concise",
            Self::Balanced => "balanced",
            Self::Detailed => "detailed",
        })
    }
}

/// Summary tone setting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryTone {
    #[default]
    Professional,
    Casual,
    Academic,
    Creative,
}

impl SummaryTone {
    /// Every member of the enumeration
    pub const ALL: [Self; 4] = [
        Self::Professional,
        Self::Casual,
        Self::Academic,
        Self::Creative,
    ];
}

impl FromStr for SummaryTone {
    type Err = SummoraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "professional" => Ok(Self::Professional),
            "casual" => Ok(Self::Casual),
            "academic" => Ok(Self::Academic),
            "creative" => Ok(Self::Creative),
            other => Err(SummoraError::invalid_option(format!(
                "unknown tone '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for SummaryTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Professional => "professional",
            Self::Casual => "casual",
            Self::Academic => "academic",
            Self::Creative => "creative",
        })
    }
}

/// Summary output format setting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    #[default]
    Paragraph,
    Bullets,
}

impl SummaryFormat {
    /// Every member of the enumeration
    pub const ALL: [Self; 2] = [Self::Paragraph, Self::Bullets];
}

impl FromStr for SummaryFormat {
    type Err = SummoraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paragraph" => Ok(Self::Paragraph),
            "bullets" => Ok(Self::Bullets),
            other => Err(SummoraError::invalid_option(format!(
                "unknown format '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for SummaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Paragraph => "paragraph",
            Self::Bullets => "bullets",
        })
    }
}

/// Named field of a [`SummaryConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    Length,
    Tone,
    Format,
}

impl FromStr for ConfigField {
    type Err = SummoraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "length" => Ok(Self::Length),
            "tone" => Ok(Self::Tone),
            "format" => Ok(Self::Format),
            other => Err(SummoraError::invalid_option(format!(
                "unknown field '{}'",
                other
            ))),
        }
    }
}

/// Summarization settings chosen by the user
///
/// Defaults to balanced / professional / paragraph. Each change replaces
/// the configuration wholesale while preserving the untouched fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryConfig {
    #[serde(default)]
    pub length: SummaryLength,
    #[serde(default)]
    pub tone: SummaryTone,
    #[serde(default)]
    pub format: SummaryFormat,
}

impl SummaryConfig {
    /// Return a new configuration with only the named field replaced
    ///
    /// Fails with `InvalidOption` when `value` is not a member of the
    /// field's enumeration.
    pub fn set(mut self, field: ConfigField, value: &str) -> Result<Self, SummoraError> {
        match field {
            ConfigField::Length => self.length = value.parse()?,
            ConfigField::Tone => self.tone = value.parse()?,
            ConfigField::Format => self.format = value.parse()?,
        }
        Ok(self)
    }
}

/// Count whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Summarization result
///
/// Created only from a successful response; never partially updated.
/// `original_word_count` is computed from the exact text submitted, not
/// whatever the caller's input buffer holds by the time the response lands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Summary text returned by the model
    pub content: String,

    /// Word count of the summary
    pub word_count: usize,

    /// Word count of the input at submission time
    pub original_word_count: usize,
}

impl SummaryResult {
    /// Create a result from returned content and the submitted word count
    pub fn new(content: String, original_word_count: usize) -> Self {
        let word_count = word_count(&content);
        Self {
            content,
            word_count,
            original_word_count,
        }
    }

    /// Percentage reduction from the original text, rounded to the nearest
    /// integer. Negative when the summary came out longer than the input.
    pub fn reduction_percent(&self) -> i64 {
        if self.original_word_count == 0 {
            return 0;
        }
        let original = self.original_word_count as f64;
        let summary = self.word_count as f64;
        ((original - summary) / original * 100.0).round() as i64
    }

    /// Estimated reading time in minutes, at 200 words per minute
    pub fn reading_time_minutes(&self) -> usize {
        self.word_count.div_ceil(200)
    }
}

/// Gemini generateContent request
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Conversation turns; a single user turn for summarization
    pub contents: Vec<Content>,

    /// Sampling parameters
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateRequest {
    /// Single-turn user prompt with the fixed summarization sampling
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
            generation_config: Some(GenerationConfig::summarization()),
        }
    }
}

/// One conversation turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One part of a turn; summarization only ever uses text parts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Sampling parameters
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<i32>,
}

impl GenerationConfig {
    /// Fixed sampling parameters used for every summarization request
    pub fn summarization() -> Self {
        Self {
            temperature: Some(0.7),
            top_p: Some(0.8),
            top_k: Some(40),
        }
    }
}

/// Gemini generateContent response
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One response candidate
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateResponse {
    /// Text of the first candidate, if any
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()
            .map(|part| part.text.as_str())
    }
}
