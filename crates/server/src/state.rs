use std::sync::atomic::{AtomicBool, Ordering};
use summora_common::AppConfig;
use summora_llm::{GeminiClient, Summarizer};

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Summarization service
    pub summarizer: Summarizer<GeminiClient>,

    /// Single in-flight request flag
    busy: AtomicBool,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig, summarizer: Summarizer<GeminiClient>) -> Self {
        Self {
            config,
            summarizer,
            busy: AtomicBool::new(false),
        }
    }

    /// Try to mark the session busy for one summarization request
    ///
    /// Returns `None` when a request is already in flight. The returned
    /// guard releases the flag on every exit path, including unwinds.
    pub fn try_begin(&self) -> Option<BusyGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard { flag: &self.busy })
    }

    /// Whether a summarization request is currently in flight
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Scoped hold of the busy flag
pub struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
