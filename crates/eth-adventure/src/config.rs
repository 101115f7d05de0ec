//! Configuration for an adventure session.

/// Default number of history messages a session keeps.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Configuration for an adventure session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// RNG seed for reproducible narration. `None` draws from the OS.
    pub seed: Option<u64>,
    /// Screen player input with the content safety filter before narrating.
    pub content_filter: bool,
    /// Maximum number of history messages kept (0 keeps everything).
    pub history_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            content_filter: true,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable the content safety filter.
    pub fn with_content_filter(mut self, enabled: bool) -> Self {
        self.content_filter = enabled;
        self
    }

    /// Set the history limit.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }
}
