use async_trait::async_trait;
use summora_common::Result;

/// Common trait for text-generation backends
///
/// The seam that lets the summarizer run against a mock in tests.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text from a prompt
    async fn generate(&self, prompt: &str) -> Result<String>;
}
