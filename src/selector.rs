//! Locale-randomized generator selection.

use crate::pool::LocalePool;
use fakeum_core::Generator;
use rand::seq::SliceRandom;
use rand::RngCore;
use std::sync::Arc;

/// Picks a generator able to serve a method key, in random locale order.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorSelector<'a> {
    pool: &'a LocalePool,
}

impl<'a> GeneratorSelector<'a> {
    pub fn new(pool: &'a LocalePool) -> Self {
        Self { pool }
    }

    /// A random generator exposing `method_key`, or `None` if no locale has it.
    pub fn select(&self, method_key: &str) -> Option<Arc<dyn Generator>> {
        self.select_with(method_key, &mut rand::thread_rng())
    }

    /// Like [`select`](Self::select), drawing the locale order from `rng`.
    pub fn select_with(
        &self,
        method_key: &str,
        rng: &mut dyn RngCore,
    ) -> Option<Arc<dyn Generator>> {
        // Shuffle a private copy; the pooled order never changes
        let mut candidates = self.pool.generators().to_vec();
        candidates.shuffle(rng);
        candidates.into_iter().find(|g| g.supports(method_key))
    }

    /// Whether any pooled generator exposes `method_key`.
    pub fn supports(&self, method_key: &str) -> bool {
        self.pool.supports(method_key)
    }
}
