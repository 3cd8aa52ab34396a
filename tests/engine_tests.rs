//! End-to-end tests for query resolution and the result feed.

use fakeum::{
    parse, DatumProducer, Fakeum, FakeumError, Feedback, GeneratorSelector, LocalePool,
    ParseOutcome, QueryError, Resolution, Settings,
};
use fakeum_core::{
    FakeArg, FakeValue, Generator, GeneratorError, GeneratorFactory, CATALOG,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde_json::Value;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

fn settings(locales: &[&str]) -> Settings {
    Settings {
        locales: locales.iter().map(|l| l.to_string()).collect(),
        ..Settings::default()
    }
}

fn batches(resolution: Resolution) -> Vec<fakeum::FakeBatch> {
    match resolution {
        Resolution::Batches { batches, .. } => batches,
        Resolution::Reset => panic!("unexpected reset"),
    }
}

#[test]
fn test_default_locales_cover_whole_catalog() {
    let engine = Fakeum::new(Settings::default());
    assert_eq!(engine.pool().generators().len(), 4);
    for entry in CATALOG.entries() {
        assert!(
            engine.pool().supports(entry.method_key),
            "{} unsupported",
            entry.display_name
        );
    }
}

#[test]
fn test_parse_examples() {
    let outcome = parse("Name ✕ 5").unwrap();
    let ParseOutcome::Query(query) = outcome else {
        panic!("expected query");
    };
    assert_eq!(query.type_name.as_deref(), Some("Name"));
    assert_eq!(query.count, Some(5));

    assert_eq!(parse("✕").unwrap(), ParseOutcome::ResetRequested);
    assert_eq!(
        parse("Name ✕ abc"),
        Err(QueryError::InvalidCount("abc".to_string()))
    );
}

#[test]
fn test_address_batch_separated_by_blank_lines() {
    let engine = Fakeum::new(settings(&["en", "de_DE"]));
    let mut rng = StdRng::seed_from_u64(42);
    let result = batches(engine.resolve_with("Address ✕ 3", &mut rng).unwrap());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].text.split("\n\n").count(), 3);
}

#[test]
fn test_datetime_batch_formatted() {
    let engine = Fakeum::new(Settings::default());
    let result = batches(engine.resolve("Datetime ✕ 5").unwrap());
    for line in result[0].text.lines() {
        assert!(
            chrono::NaiveDateTime::parse_from_str(line, "%Y-%m-%d %H:%M:%S").is_ok(),
            "{line}"
        );
    }
}

#[test]
fn test_uuid_batch() {
    let engine = Fakeum::new(Settings::default());
    let result = batches(engine.resolve("UUID4 ✕ 3").unwrap());
    for line in result[0].text.lines() {
        let uuid = uuid::Uuid::parse_str(line).unwrap();
        assert_eq!(uuid.get_version_num(), 4);
    }
}

#[test]
fn test_locale_specific_type_needs_capable_locale() {
    let engine = Fakeum::new(settings(&["en"]));
    assert!(batches(engine.resolve("IBAN ✕ 2").unwrap()).is_empty());

    let engine = Fakeum::new(settings(&["en", "nl_NL"]));
    let result = batches(engine.resolve("IBAN ✕ 2").unwrap());
    for line in result[0].text.lines() {
        assert!(line.starts_with("NL"), "{line}");
    }
}

#[test]
fn test_free_text_feed() {
    let engine = Fakeum::new(Settings::default());
    let resolution = engine.resolve("eml").unwrap();
    let feedback = Feedback::from_resolution(&resolution, false);

    let titles: Vec<&str> = feedback.items.iter().map(|i| i.title.as_str()).collect();
    assert!(titles.contains(&"Email"));
    assert!(!titles.contains(&"Licence Plate"));
    // Free-text items show the datum itself
    let email = &feedback.items[titles.iter().position(|t| *t == "Email").unwrap()];
    assert_eq!(Some(&email.subtitle), email.arg.as_ref());
}

#[test]
fn test_no_match_feed() {
    let engine = Fakeum::new(Settings::default());
    let feedback = Feedback::from_resolution(&engine.resolve("qqqqqq").unwrap(), false);
    assert_eq!(feedback.items.len(), 1);
    assert_eq!(feedback.items[0].title, "No matching fakers");
}

#[test]
fn test_invalid_count_feed_json() {
    let engine = Fakeum::new(Settings::default());
    let err = engine.resolve("Name ✕ ten").unwrap_err();
    let json = Feedback::from_error(&err).unwrap().to_json().unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["items"][0]["title"], "Not a number : ten");
    assert_eq!(value["items"][0]["valid"], false);
}

#[test]
fn test_count_limit_from_settings_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "locales: [en_GB]").unwrap();
    writeln!(file, "max_count: 5").unwrap();

    let engine = Fakeum::new(Settings::from_file(file.path()).unwrap());
    assert_eq!(engine.pool().locales(), ["en_GB".to_string()]);
    assert!(matches!(
        engine.resolve("Name ✕ 6"),
        Err(FakeumError::CountTooLarge { count: 6, max: 5 })
    ));
    assert!(engine.resolve("Name ✕ 5").is_ok());
}

#[test]
fn test_paragraph_sentences_from_settings() {
    let engine = Fakeum::new(Settings {
        paragraph_sentences: 2,
        ..settings(&["en"])
    });
    let result = batches(engine.resolve("Paragraph ✕ 1").unwrap());
    assert_eq!(result[0].text.matches('.').count(), 2);
}

/// A provider that knows a single locale and a single operation.
#[derive(Debug)]
struct Constant {
    locale: String,
}

impl Generator for Constant {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn supports(&self, method_key: &str) -> bool {
        method_key == "word"
    }

    fn invoke(
        &self,
        method_key: &str,
        _args: &[FakeArg],
        _rng: &mut dyn RngCore,
    ) -> Result<FakeValue, GeneratorError> {
        if !self.supports(method_key) {
            return Err(GeneratorError::UnsupportedMethod {
                locale: self.locale.clone(),
                method: method_key.to_string(),
            });
        }
        Ok(FakeValue::text(format!("word-{}", self.locale)))
    }
}

struct ConstantFactory;

impl GeneratorFactory for ConstantFactory {
    fn create(&self, locale: &str) -> Result<Arc<dyn Generator>, GeneratorError> {
        Ok(Arc::new(Constant {
            locale: locale.to_string(),
        }))
    }
}

#[test]
fn test_custom_factory() {
    let engine = Fakeum::with_factory(settings(&["aa", "bb"]), ConstantFactory);

    let result = batches(engine.resolve("").unwrap());
    let names: Vec<&str> = result.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Word"]);

    let mut rng = StdRng::seed_from_u64(42);
    let result = batches(engine.resolve_with("Word ✕ 50", &mut rng).unwrap());
    let text = &result[0].text;
    assert!(text.contains("word-aa"));
    assert!(text.contains("word-bb"));
}

#[test]
fn test_selector_and_producer_share_pool() {
    let pool = LocalePool::builtin(vec!["fr_FR".to_string()]);
    let producer = DatumProducer::new(GeneratorSelector::new(&pool), 3);
    let mut rng = StdRng::seed_from_u64(42);
    let plate = producer
        .produce_with("Licence Plate", &mut rng)
        .unwrap()
        .unwrap();
    assert_eq!(plate.len(), 9);
    assert_eq!(&plate[2..3], "-");
}
