use std::time::Duration;

/// Per-call resolver options, derived from `[doh]` configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    pub enabled: bool,
    /// Replaces the TTL derived from the DoH answers when set.
    pub ttl: Option<Duration>,
    pub shuffle: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl: None,
            shuffle: false,
        }
    }
}

impl ResolveOptions {
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }
}
