//! Generator abstraction.
//!
//! A [`Generator`] is bound to one locale and exposes a dynamic set of named
//! operations. Callers probe for an operation with [`Generator::supports`]
//! before invoking it, which keeps selection logic independent of any
//! concrete provider.

use crate::values::{FakeArg, FakeValue};
use rand::RngCore;
use std::fmt;
use std::sync::Arc;

/// Error type for generator operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// No provider exists for the locale
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// The generator does not expose the operation
    #[error("Locale '{locale}' does not support '{method}'")]
    UnsupportedMethod { locale: String, method: String },

    /// An argument had the wrong type or value
    #[error("Invalid argument for '{method}': {reason}")]
    InvalidArgument { method: String, reason: String },
}

/// A locale-bound provider of fake data.
///
/// Implementations are immutable after construction and shared across
/// threads behind an [`Arc`].
pub trait Generator: fmt::Debug + Send + Sync {
    /// Locale identifier this generator is bound to.
    fn locale(&self) -> &str;

    /// Whether the operation named `method_key` is available.
    fn supports(&self, method_key: &str) -> bool;

    /// Run the operation named `method_key`.
    fn invoke(
        &self,
        method_key: &str,
        args: &[FakeArg],
        rng: &mut dyn RngCore,
    ) -> Result<FakeValue, GeneratorError>;
}

/// Builds generators for locale identifiers.
pub trait GeneratorFactory: Send + Sync {
    /// Create the generator for `locale`.
    ///
    /// Returns [`GeneratorError::UnknownLocale`] when no provider exists.
    fn create(&self, locale: &str) -> Result<Arc<dyn Generator>, GeneratorError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Debug)]
    struct Echo;

    impl Generator for Echo {
        fn locale(&self) -> &str {
            "xx"
        }

        fn supports(&self, method_key: &str) -> bool {
            method_key == "echo"
        }

        fn invoke(
            &self,
            method_key: &str,
            _args: &[FakeArg],
            _rng: &mut dyn RngCore,
        ) -> Result<FakeValue, GeneratorError> {
            if !self.supports(method_key) {
                return Err(GeneratorError::UnsupportedMethod {
                    locale: self.locale().to_string(),
                    method: method_key.to_string(),
                });
            }
            Ok(FakeValue::text("echo"))
        }
    }

    struct EchoFactory;

    impl GeneratorFactory for EchoFactory {
        fn create(&self, locale: &str) -> Result<Arc<dyn Generator>, GeneratorError> {
            match locale {
                "xx" => Ok(Arc::new(Echo)),
                other => Err(GeneratorError::UnknownLocale(other.to_string())),
            }
        }
    }

    #[test]
    fn test_factory() {
        let factory = EchoFactory;

        let generator = factory.create("xx").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            generator.invoke("echo", &[], &mut rng).unwrap(),
            FakeValue::text("echo")
        );
        assert!(matches!(
            factory.create("yy"),
            Err(GeneratorError::UnknownLocale(_))
        ));
    }

    #[test]
    fn test_unsupported_method_error_message() {
        let mut rng = StdRng::seed_from_u64(42);
        let err = Echo.invoke("nope", &[], &mut rng).unwrap_err();
        assert_eq!(err.to_string(), "Locale 'xx' does not support 'nope'");
    }
}
