/// Summora error types
#[derive(Debug, thiserror::Error)]
pub enum SummoraError {
    /// Input text is empty or whitespace only
    #[error("Please enter some text to summarize.")]
    EmptyInput,

    /// Input text has too few words to summarize usefully
    #[error("Text is too short to summarize effectively. Try at least {min_words} words.")]
    InputTooShort {
        /// Minimum whitespace-separated words required
        min_words: usize,
    },

    /// A configuration field was set to a value outside its enumeration
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Another summarization request is already in flight
    #[error("A summarization is already in progress.")]
    Busy,

    /// The remote call failed; detail is logged, never shown to the user
    #[error("Failed to generate summary. Please check your text or try again later.")]
    SummarizationFailed,

    /// The endpoint answered but carried no text payload
    #[error("Empty response from model")]
    EmptyResponse,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SummoraError {
    /// Create invalid option error
    pub fn invalid_option<S: Into<String>>(msg: S) -> Self {
        Self::InvalidOption(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

// HTTP response conversion
impl SummoraError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::EmptyInput => 400,
            Self::InputTooShort { .. } => 400,
            Self::InvalidOption(_) => 400,
            Self::Busy => 409,
            Self::SummarizationFailed => 502,
            Self::EmptyResponse => 502,
            Self::Config(_) => 500,
            Self::Io(_) => 500,
            Self::Json(_) => 400,
            Self::Other(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            SummoraError::EmptyInput.to_string(),
            "Please enter some text to summarize."
        );
        assert_eq!(
            SummoraError::InputTooShort { min_words: 10 }.to_string(),
            "Text is too short to summarize effectively. Try at least 10 words."
        );
        assert_eq!(
            SummoraError::SummarizationFailed.to_string(),
            "Failed to generate summary. Please check your text or try again later."
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(SummoraError::EmptyInput.status_code(), 400);
        assert_eq!(SummoraError::Busy.status_code(), 409);
        assert_eq!(SummoraError::SummarizationFailed.status_code(), 502);
    }
}
