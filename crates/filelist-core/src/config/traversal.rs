//! Folder traversal configuration.

use serde::{Deserialize, Serialize};

/// Controls fan-out when crawling folders and listing their files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Maximum number of list queries in flight at once (`1` = sequential).
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
}

impl TraversalConfig {
    /// Effective concurrency, never below one.
    pub fn concurrency(&self) -> usize {
        self.max_concurrency.max(1)
    }
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_concurrency: default_max_concurrency(),
        }
    }
}

fn default_max_concurrency() -> usize {
    4
}
