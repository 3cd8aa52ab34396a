//! Query resolution.

use crate::batch::{BatchProducer, FakeBatch};
use crate::config::{clean_locales, Settings};
use crate::fuzzy;
use crate::pool::LocalePool;
use crate::producer::DatumProducer;
use crate::query::{self, ParseOutcome, QueryError};
use crate::selector::GeneratorSelector;
use fakeum_core::{CatalogError, GeneratorFactory, CATALOG};
use locale_generator::BuiltinFactory;
use rand::RngCore;
use tracing::{debug, warn};

/// Error type for query resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FakeumError {
    /// The count part of the query is not a positive integer
    #[error(transparent)]
    Query(#[from] QueryError),

    /// The requested count exceeds the configured maximum
    #[error("Count {count} exceeds the maximum of {max}")]
    CountTooLarge { count: u64, max: u64 },

    /// Catalog lookup failed
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl FakeumError {
    /// Whether the error is caused by the user's input rather than a bug.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::Query(_) | Self::CountTooLarge { .. })
    }
}

/// Result of resolving one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Generated data, best match first.
    Batches {
        batches: Vec<FakeBatch>,
        /// The count given with an explicit type; `None` for free text
        count: Option<u64>,
    },
    /// The front-end should return to an empty query.
    Reset,
}

/// The fake data engine: settings plus the generator pool.
#[derive(Debug)]
pub struct Fakeum {
    settings: Settings,
    pool: LocalePool,
}

impl Fakeum {
    /// Create an engine backed by the built-in locale providers.
    ///
    /// The locale list is cleaned with [`clean_locales`] first.
    pub fn new(settings: Settings) -> Self {
        Self::with_factory(settings, BuiltinFactory)
    }

    /// Create an engine whose generators come from `factory`.
    pub fn with_factory(
        mut settings: Settings,
        factory: impl GeneratorFactory + 'static,
    ) -> Self {
        settings.locales = clean_locales(&settings.locales);
        let pool = LocalePool::new(settings.locales.clone(), factory);
        Self { settings, pool }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn pool(&self) -> &LocalePool {
        &self.pool
    }

    pub fn selector(&self) -> GeneratorSelector<'_> {
        GeneratorSelector::new(&self.pool)
    }

    pub fn datum_producer(&self) -> DatumProducer<'_> {
        DatumProducer::new(self.selector(), self.settings.paragraph_sentences)
    }

    pub fn batch_producer(&self) -> BatchProducer<'_> {
        BatchProducer::new(self.datum_producer())
    }

    /// Resolve a raw query into generated data.
    pub fn resolve(&self, raw: &str) -> Result<Resolution, FakeumError> {
        self.resolve_with(raw, &mut rand::thread_rng())
    }

    /// Like [`resolve`](Self::resolve), drawing randomness from `rng`.
    pub fn resolve_with(
        &self,
        raw: &str,
        rng: &mut dyn RngCore,
    ) -> Result<Resolution, FakeumError> {
        debug!("query={:?}", raw);

        let parsed = query::parse(raw).map_err(|e| {
            warn!("Rejected query {:?}: {}", raw, e);
            e
        })?;
        let query = match parsed {
            ParseOutcome::ResetRequested => {
                debug!("Query ends with the delimiter, resetting");
                return Ok(Resolution::Reset);
            }
            ParseOutcome::Query(query) => query,
        };

        if let Some(type_name) = query.type_name {
            let count = query.count.unwrap_or(1);
            if count > self.settings.max_count {
                return Err(FakeumError::CountTooLarge {
                    count,
                    max: self.settings.max_count,
                });
            }

            let batches = match CATALOG.canonical_name(&type_name) {
                Some(name) => {
                    if !CATALOG.contains(&type_name) {
                        debug!("Resolved data type {:?} to \"{}\"", type_name, name);
                    }
                    self.batch_producer()
                        .produce_batch_with(&[name], count, rng)?
                }
                None => {
                    warn!("Unknown data type: {}", type_name);
                    Vec::new()
                }
            };
            debug!("count={}", count);
            return Ok(Resolution::Batches {
                batches,
                count: Some(count),
            });
        }

        let text = query.raw_text.unwrap_or_default();
        let batches = self.batch_producer().produce_batch_with(&[], 1, rng)?;
        let batches = fuzzy::filter(&text, batches, |batch| batch.name.as_str());
        Ok(Resolution::Batches {
            batches,
            count: None,
        })
    }
}
