//! Core types for the fakeum test data generator.
//!
//! This crate provides the foundational types shared by the engine and the
//! locale providers:
//!
//! - [`TypeCatalog`] - The fixed registry of requestable data types
//! - [`Generator`] - A locale-bound provider of named data operations
//! - [`GeneratorFactory`] - Builds one [`Generator`] per locale
//! - [`FakeValue`] - Raw generated values before text normalization
//!
//! # Architecture
//!
//! ```text
//! fakeum-core (this crate)
//!    │
//!    ├─── locale-generator  (implements Generator for the built-in locales)
//!    │
//!    └─── fakeum            (pool, selection, production, query parsing)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fakeum_core::CATALOG;
//!
//! assert_eq!(CATALOG.method_key_for("Email").unwrap(), "email");
//! assert!(CATALOG.is_multiline("Address"));
//! ```

pub mod catalog;
pub mod generator;
pub mod values;

// Re-exports for convenience
pub use catalog::{CatalogError, TypeCatalog, TypeEntry, CATALOG};
pub use generator::{Generator, GeneratorError, GeneratorFactory};
pub use values::{FakeArg, FakeValue};
