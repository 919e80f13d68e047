//! Atomically swappable configuration snapshot for live reload.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::model::SiteConfig;

/// Holder of the currently published [`SiteConfig`].
///
/// Readers take an `Arc` snapshot and never see a half-updated value. A reload
/// builds a complete new configuration and [`publish`](Self::publish)es it;
/// the live instance is never mutated in place.
#[derive(Debug)]
pub struct ConfigHandle {
    current: RwLock<Arc<SiteConfig>>,
    generation: AtomicU64,
}

impl ConfigHandle {
    /// Create a handle publishing `config` as generation 0.
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        Self {
            current: RwLock::new(Arc::new(config)),
            generation: AtomicU64::new(0),
        }
    }

    /// Current configuration snapshot.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn get(&self) -> Arc<SiteConfig> {
        Arc::clone(&self.current.read().unwrap())
    }

    /// Replace the published configuration, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    pub fn publish(&self, config: SiteConfig) -> Arc<SiteConfig> {
        let next = Arc::new(config);
        let previous = std::mem::replace(&mut *self.current.write().unwrap(), next);
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::info!(generation, "Configuration published");
        previous
    }

    /// Number of configurations published since creation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}
