use std::sync::{Arc, RwLock};

use super::threshold::{FilterConfig, ThresholdUpdate};

/// Live configuration cell with snapshot-swap semantics.
///
/// Single writer, many readers: `apply` replaces the whole configuration
/// behind the lock, `snapshot` hands out the current immutable `Arc`. A
/// filter pass takes one snapshot at entry, so it never observes a mixture
/// of old and new bounds even when a reconfiguration lands mid-frame.
///
/// Nothing is persisted; a fresh store starts from [`FilterConfig::default`].
pub struct ConfigStore {
    current: RwLock<Arc<FilterConfig>>,
}

impl ConfigStore {
    pub fn new(initial: FilterConfig) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
        }
    }

    /// Immutable copy of the live configuration.
    pub fn snapshot(&self) -> Arc<FilterConfig> {
        self.current.read().expect("config lock poisoned").clone()
    }

    /// Replaces the live configuration wholesale and returns the accepted
    /// snapshot for acknowledgment to the reconfiguration caller.
    pub fn apply(&self, update: ThresholdUpdate) -> Arc<FilterConfig> {
        let accepted = Arc::new(FilterConfig::from(update));
        *self.current.write().expect("config lock poisoned") = accepted.clone();
        accepted
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}
