//! Single datum production and text normalization.

use crate::selector::GeneratorSelector;
use fakeum_core::catalog::PARAGRAPH;
use fakeum_core::{CatalogError, FakeArg, FakeValue, CATALOG};
use rand::RngCore;
use tracing::{debug, error};

/// Format of normalized date-time values.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Produces one text value for a catalog type.
#[derive(Debug, Clone, Copy)]
pub struct DatumProducer<'a> {
    selector: GeneratorSelector<'a>,
    paragraph_sentences: usize,
}

impl<'a> DatumProducer<'a> {
    pub fn new(selector: GeneratorSelector<'a>, paragraph_sentences: usize) -> Self {
        Self {
            selector,
            paragraph_sentences,
        }
    }

    pub fn selector(&self) -> GeneratorSelector<'a> {
        self.selector
    }

    /// Produce one value for `display_name`.
    ///
    /// Returns `Ok(None)` when no active locale supports the type or the
    /// generator fails. Fails only for names missing from the catalog.
    pub fn produce(&self, display_name: &str) -> Result<Option<String>, CatalogError> {
        self.produce_with(display_name, &mut rand::thread_rng())
    }

    /// Like [`produce`](Self::produce), drawing randomness from `rng`.
    pub fn produce_with(
        &self,
        display_name: &str,
        rng: &mut dyn RngCore,
    ) -> Result<Option<String>, CatalogError> {
        let method_key = CATALOG.method_key_for(display_name)?;

        let Some(generator) = self.selector.select_with(method_key, rng) else {
            debug!(
                "Data type \"{}\" is unsupported in active locales",
                display_name
            );
            return Ok(None);
        };

        let args = if display_name == PARAGRAPH {
            vec![
                FakeArg::Int(i64::try_from(self.paragraph_sentences).unwrap_or(i64::MAX)),
                FakeArg::Bool(false),
            ]
        } else {
            Vec::new()
        };

        match generator.invoke(method_key, &args, rng) {
            Ok(value) => Ok(Some(normalize(display_name, value))),
            Err(e) => {
                error!(
                    "Generator for locale {} failed on {}: {}",
                    generator.locale(),
                    display_name,
                    e
                );
                Ok(None)
            }
        }
    }
}

/// Render a generated value as text.
pub fn normalize(display_name: &str, value: FakeValue) -> String {
    match value {
        FakeValue::Text(s) => s,
        FakeValue::Int(i) => i.to_string(),
        FakeValue::DateTime(dt) => dt.format(DATETIME_FORMAT).to_string(),
        FakeValue::Bytes(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        other => {
            debug!("{} : ({}) {}", display_name, other.kind(), other);
            other.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::LocalePool;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool(ids: &[&str]) -> LocalePool {
        LocalePool::builtin(ids.iter().map(|id| id.to_string()).collect())
    }

    #[test]
    fn test_normalize_variants() {
        assert_eq!(normalize("X", FakeValue::text("abc")), "abc");
        assert_eq!(normalize("X", FakeValue::Int(1700000000)), "1700000000");
        let dt = NaiveDate::from_ymd_opt(2021, 3, 4)
            .unwrap()
            .and_hms_opt(5, 6, 7)
            .unwrap();
        assert_eq!(normalize("X", FakeValue::DateTime(dt)), "2021-03-04 05:06:07");
        assert_eq!(normalize("X", FakeValue::Bytes(b"hi".to_vec())), "hi");
        assert_eq!(normalize("X", FakeValue::Float(1.5)), "1.5");
    }

    #[test]
    fn test_produce_uuid() {
        let pool = pool(&["en", "de_DE"]);
        let producer = DatumProducer::new(GeneratorSelector::new(&pool), 3);
        let mut rng = StdRng::seed_from_u64(42);
        let value = producer.produce_with("UUID4", &mut rng).unwrap().unwrap();
        assert_eq!(value.len(), 36);
        assert_eq!(value.matches('-').count(), 4);
    }

    #[test]
    fn test_produce_native_types_as_text() {
        let pool = pool(&["en"]);
        let producer = DatumProducer::new(GeneratorSelector::new(&pool), 3);
        let mut rng = StdRng::seed_from_u64(42);

        let ts = producer.produce_with("UNIX Timestamp", &mut rng).unwrap().unwrap();
        assert!(ts.parse::<i64>().is_ok());

        let dt = producer.produce_with("Datetime", &mut rng).unwrap().unwrap();
        assert!(chrono::NaiveDateTime::parse_from_str(&dt, DATETIME_FORMAT).is_ok());
    }

    #[test]
    fn test_paragraph_sentence_count() {
        let pool = pool(&["en"]);
        let producer = DatumProducer::new(GeneratorSelector::new(&pool), 5);
        let mut rng = StdRng::seed_from_u64(42);
        let value = producer.produce_with("Paragraph", &mut rng).unwrap().unwrap();
        assert_eq!(value.matches('.').count(), 5);
    }

    #[test]
    fn test_unsupported_type() {
        let pool = pool(&["en_GB"]);
        let producer = DatumProducer::new(GeneratorSelector::new(&pool), 3);
        assert_eq!(producer.produce("Social Security No.").unwrap(), None);
    }

    #[test]
    fn test_unknown_type() {
        let pool = pool(&["en"]);
        let producer = DatumProducer::new(GeneratorSelector::new(&pool), 3);
        assert_eq!(
            producer.produce("Nonexistent"),
            Err(CatalogError::UnknownType("Nonexistent".to_string()))
        );
    }
}
