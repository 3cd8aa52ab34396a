//! Built-in locale providers for the fakeum test data generator.
//!
//! Each supported locale is a static table of names, address formats, word
//! lists and so on. [`LocaleGenerator`] binds one table to the
//! [`Generator`](fakeum_core::Generator) trait, and [`BuiltinFactory`] builds
//! those generators for the engine's locale pool.
//!
//! # Example
//!
//! ```rust
//! use fakeum_core::{Generator, GeneratorFactory};
//! use locale_generator::BuiltinFactory;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let generator = BuiltinFactory.create("de_DE").unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! let iban = generator.invoke("iban", &[], &mut rng).unwrap();
//! assert!(iban.to_string().starts_with("DE"));
//! ```

pub mod generator;
pub mod generators;
pub mod locales;

pub use generator::{BuiltinFactory, LocaleGenerator, Method};
pub use locales::{is_available, locale_data, locale_name, LocaleData, KNOWN_LOCALES};
