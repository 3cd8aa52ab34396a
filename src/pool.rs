//! Cached pool of locale generators.

use fakeum_core::{Generator, GeneratorFactory};
use locale_generator::{locale_name, BuiltinFactory};
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};

/// One generator per configured locale, built on first use.
///
/// Construction happens exactly once, even when several threads ask for the
/// generators at the same time. The pool is read-only afterwards.
pub struct LocalePool {
    locales: Vec<String>,
    factory: Box<dyn GeneratorFactory>,
    generators: OnceLock<Vec<Arc<dyn Generator>>>,
}

impl LocalePool {
    /// Create a pool that builds its generators with `factory`.
    pub fn new(locales: Vec<String>, factory: impl GeneratorFactory + 'static) -> Self {
        Self {
            locales,
            factory: Box::new(factory),
            generators: OnceLock::new(),
        }
    }

    /// Create a pool backed by the built-in locale providers.
    pub fn builtin(locales: Vec<String>) -> Self {
        Self::new(locales, BuiltinFactory)
    }

    /// Configured locale identifiers, in order.
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    /// The pooled generators, in locale order.
    ///
    /// Locales the factory cannot serve are left out.
    pub fn generators(&self) -> &[Arc<dyn Generator>] {
        self.generators.get_or_init(|| self.build())
    }

    /// Whether any pooled generator exposes `method_key`.
    pub fn supports(&self, method_key: &str) -> bool {
        self.generators().iter().any(|g| g.supports(method_key))
    }

    fn build(&self) -> Vec<Arc<dyn Generator>> {
        let generators: Vec<Arc<dyn Generator>> = self
            .locales
            .iter()
            .filter_map(|locale| match self.factory.create(locale) {
                Ok(generator) => Some(generator),
                Err(e) => {
                    let name = locale_name(locale).unwrap_or("unknown locale");
                    warn!("Skipping locale {} ({}): {}", locale, name, e);
                    None
                }
            })
            .collect();

        debug!(
            "Initialized generator pool with {} of {} locales",
            generators.len(),
            self.locales.len()
        );
        generators
    }
}

impl fmt::Debug for LocalePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalePool")
            .field("locales", &self.locales)
            .field("initialized", &self.generators.get().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fakeum_core::GeneratorError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts how often the factory is asked for a generator.
    struct CountingFactory {
        calls: Arc<AtomicUsize>,
    }

    impl GeneratorFactory for CountingFactory {
        fn create(&self, locale: &str) -> Result<Arc<dyn Generator>, GeneratorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            BuiltinFactory.create(locale)
        }
    }

    fn locales(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_generators_cached() {
        let pool = LocalePool::builtin(locales(&["en", "de_DE", "fr_FR"]));
        let first = pool.generators();
        let second = pool.generators();

        assert_eq!(first.len(), 3);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second) {
            assert!(Arc::ptr_eq(a, b));
        }
    }

    #[test]
    fn test_locale_order_preserved() {
        let pool = LocalePool::builtin(locales(&["fr_FR", "en", "nl_NL"]));
        let order: Vec<&str> = pool.generators().iter().map(|g| g.locale()).collect();
        assert_eq!(order, vec!["fr_FR", "en", "nl_NL"]);
    }

    #[test]
    fn test_single_flight_initialization() {
        let calls = Arc::new(AtomicUsize::new(0));
        let pool = LocalePool::new(
            locales(&["en", "de_DE"]),
            CountingFactory {
                calls: Arc::clone(&calls),
            },
        );

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    assert_eq!(pool.generators().len(), 2);
                });
            }
        });

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_lazy_construction() {
        let calls = Arc::new(AtomicUsize::new(0));
        let pool = LocalePool::new(
            locales(&["en"]),
            CountingFactory {
                calls: Arc::clone(&calls),
            },
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        pool.generators();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unknown_locale_skipped() {
        let pool = LocalePool::builtin(locales(&["en", "ja_JP", "de_DE"]));
        let order: Vec<&str> = pool.generators().iter().map(|g| g.locale()).collect();
        assert_eq!(order, vec!["en", "de_DE"]);
        assert_eq!(pool.locales().len(), 3);
    }

    #[test]
    fn test_supports() {
        let pool = LocalePool::builtin(locales(&["en", "de_DE"]));
        assert!(pool.supports("iban"));
        assert!(pool.supports("bs"));

        let pool = LocalePool::builtin(locales(&["en_GB"]));
        assert!(!pool.supports("ssn"));
        assert!(!pool.supports("nonexistent"));
    }
}
