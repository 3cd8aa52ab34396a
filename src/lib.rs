//! fakeum: fake test data in several locales from a short query.
//!
//! A query is either free text, which ranks every data type against the text,
//! or `<type> ✕ <count>`, which asks for `count` values of one type.
//!
//! # Architecture
//!
//! ```text
//! raw query
//!     │
//!     ▼
//! ┌──────────────┐  <type> ✕ <n>   ┌────────────────┐   ┌───────────────┐
//! │ query::parse │ ──────────────▶ │ BatchProducer  │──▶│ DatumProducer │
//! └──────┬───────┘                 └────────────────┘   └───────┬───────┘
//!        │ free text                      ▲                     │
//!        ▼                                │                     ▼
//! ┌──────────────┐   all types            │           ┌───────────────────┐
//! │ fuzzy filter │ ◀──────────────────────┘           │ GeneratorSelector │
//! └──────────────┘                                    └─────────┬─────────┘
//!                                                               ▼
//!                                                     ┌───────────────────┐
//!                                                     │    LocalePool     │
//!                                                     └───────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use fakeum::{Fakeum, Resolution, Settings};
//!
//! let engine = Fakeum::new(Settings::default());
//! match engine.resolve("City ✕ 3").unwrap() {
//!     Resolution::Batches { batches, count } => {
//!         assert_eq!(count, Some(3));
//!         assert_eq!(batches[0].text.lines().count(), 3);
//!     }
//!     Resolution::Reset => unreachable!(),
//! }
//! ```

pub mod batch;
pub mod config;
pub mod engine;
pub mod fuzzy;
pub mod output;
pub mod pool;
pub mod producer;
pub mod query;
pub mod selector;

// Re-exports for convenience
pub use batch::{BatchProducer, FakeBatch};
pub use config::{clean_locales, Overrides, Settings, SettingsError};
pub use engine::{Fakeum, FakeumError, Resolution};
pub use output::Feedback;
pub use pool::LocalePool;
pub use producer::DatumProducer;
pub use query::{parse, ParseOutcome, Query, QueryError, DELIMITER};
pub use selector::GeneratorSelector;
