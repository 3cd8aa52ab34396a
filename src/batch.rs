//! Batches of values for one or more catalog types.

use crate::producer::DatumProducer;
use fakeum_core::{CatalogError, CATALOG};
use rand::RngCore;
use serde::Serialize;
use tracing::{debug, warn};

/// Separator between values of multi-line types.
pub const MULTILINE_SEPARATOR: &str = "\n\n";

/// Separator between values of single-line types.
pub const LINE_SEPARATOR: &str = "\n";

/// Joined values generated for one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FakeBatch {
    /// Catalog display name
    pub name: String,
    /// The generated values, joined
    pub text: String,
    /// Number of values requested
    pub count: u64,
}

/// Produces `count` values for each of several types.
#[derive(Debug, Clone, Copy)]
pub struct BatchProducer<'a> {
    producer: DatumProducer<'a>,
}

impl<'a> BatchProducer<'a> {
    pub fn new(producer: DatumProducer<'a>) -> Self {
        Self { producer }
    }

    /// Generate a batch per supported type in `names`.
    ///
    /// An empty `names` means every catalog type in sorted order. Types no
    /// active locale supports are dropped.
    pub fn produce_batch(
        &self,
        names: &[&str],
        count: u64,
    ) -> Result<Vec<FakeBatch>, CatalogError> {
        self.produce_batch_with(names, count, &mut rand::thread_rng())
    }

    /// Like [`produce_batch`](Self::produce_batch), drawing randomness from `rng`.
    pub fn produce_batch_with(
        &self,
        names: &[&str],
        count: u64,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<FakeBatch>, CatalogError> {
        let names: Vec<&str> = if names.is_empty() {
            CATALOG.sorted_names()
        } else {
            names.to_vec()
        };

        let selector = self.producer.selector();
        let mut supported = Vec::with_capacity(names.len());
        for name in names {
            let method_key = CATALOG.method_key_for(name)?;
            if selector.supports(method_key) {
                supported.push(name);
            } else {
                debug!("Data type \"{}\" is not supported by active locales", name);
            }
        }

        let mut batches = Vec::with_capacity(supported.len());
        for name in supported {
            let mut values = Vec::new();
            for _ in 0..count {
                if let Some(value) = self.producer.produce_with(name, rng)? {
                    values.push(value);
                }
            }

            if values.is_empty() {
                warn!("No values produced for {}", name);
                continue;
            }

            let separator = if CATALOG.is_multiline(name) {
                MULTILINE_SEPARATOR
            } else {
                LINE_SEPARATOR
            };
            batches.push(FakeBatch {
                name: name.to_string(),
                text: values.join(separator),
                count,
            });
        }

        Ok(batches)
    }
}
