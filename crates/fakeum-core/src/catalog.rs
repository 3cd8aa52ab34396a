//! Registry of requestable data types.
//!
//! Each entry maps a human-readable display name to the method key a
//! [`Generator`](crate::Generator) exposes for it. Insertion order groups the
//! entries by category and is the catalog's own listing order.

// ============================================================================
// Error Types
// ============================================================================

/// Error type for catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Display name not present in the catalog
    #[error("Unknown data type: {0}")]
    UnknownType(String),
}

// ============================================================================
// Catalog
// ============================================================================

/// Display name of the lorem paragraph type. It takes a sentence count argument.
pub const PARAGRAPH: &str = "Paragraph";

/// Display name of the postal address type.
pub const ADDRESS: &str = "Address";

/// A single requestable data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeEntry {
    /// Human-readable label, unique within the catalog
    pub display_name: &'static str,
    /// Operation name on the generator
    pub method_key: &'static str,
}

impl TypeEntry {
    const fn new(display_name: &'static str, method_key: &'static str) -> Self {
        Self {
            display_name,
            method_key,
        }
    }
}

/// Ordered, immutable registry of data types.
#[derive(Debug)]
pub struct TypeCatalog {
    entries: &'static [TypeEntry],
}

/// The catalog of every data type the engine can be asked for.
pub static CATALOG: TypeCatalog = TypeCatalog { entries: ENTRIES };

static ENTRIES: &[TypeEntry] = &[
    // People
    TypeEntry::new("Name", "name"),
    TypeEntry::new("First Name", "first_name"),
    TypeEntry::new("Last Name", "last_name"),
    TypeEntry::new("Email", "email"),
    TypeEntry::new("Email (corporate)", "company_email"),
    TypeEntry::new("Email (free)", "free_email"),
    TypeEntry::new("Email (safe)", "safe_email"),
    TypeEntry::new("Email domain (free)", "free_email_domain"),
    TypeEntry::new("Social Security No.", "ssn"),
    TypeEntry::new("Phone No.", "phone_number"),
    TypeEntry::new("MSISDN", "msisdn"),
    // Addresses
    TypeEntry::new(ADDRESS, "address"),
    TypeEntry::new("Street", "street_address"),
    TypeEntry::new("Street Name", "street_name"),
    TypeEntry::new("City", "city"),
    TypeEntry::new("Postcode", "postcode"),
    TypeEntry::new("State", "state"),
    TypeEntry::new("State abbr.", "state_abbr"),
    TypeEntry::new("Country", "country"),
    // Internet
    TypeEntry::new("TLD", "tld"),
    TypeEntry::new("Domain Name", "domain_name"),
    TypeEntry::new("Domain Word", "domain_word"),
    TypeEntry::new("IP Address (IPv4)", "ipv4"),
    TypeEntry::new("IP Address (IPv6)", "ipv6"),
    TypeEntry::new("URI", "uri"),
    TypeEntry::new("URI path", "uri_path"),
    TypeEntry::new("URL", "url"),
    TypeEntry::new("User-Agent", "user_agent"),
    // Corporate
    TypeEntry::new("Corporate BS", "bs"),
    TypeEntry::new("Corporate catchphrase", "catch_phrase"),
    TypeEntry::new("Company", "company"),
    TypeEntry::new("Company suffix", "company_suffix"),
    // Lorem
    TypeEntry::new(PARAGRAPH, "paragraph"),
    TypeEntry::new("Sentence", "sentence"),
    TypeEntry::new("Word", "word"),
    // Dates and times
    TypeEntry::new("Date", "date"),
    TypeEntry::new("Datetime", "date_time"),
    TypeEntry::new("ISO 8601 Datetime", "iso8601"),
    TypeEntry::new("Time", "time"),
    TypeEntry::new("Timezone", "timezone"),
    TypeEntry::new("UNIX Timestamp", "unix_time"),
    // Banking
    TypeEntry::new("Credit Card Provider", "credit_card_provider"),
    TypeEntry::new("Credit Card No.", "credit_card_number"),
    TypeEntry::new("Credit Card Expiry Date", "credit_card_expire"),
    TypeEntry::new("Credit Card Full", "credit_card_full"),
    TypeEntry::new("Credit Card Security No.", "credit_card_security_code"),
    TypeEntry::new("IBAN", "iban"),
    TypeEntry::new("BBAN", "bban"),
    TypeEntry::new("Bank Country Code", "bank_country"),
    TypeEntry::new("Currency", "currency_name"),
    TypeEntry::new("Currency Code", "currency_code"),
    TypeEntry::new("Cryptocurrency", "cryptocurrency_name"),
    TypeEntry::new("Cryptocurrency Code", "cryptocurrency_code"),
    // Barcodes
    TypeEntry::new("EAN", "ean"),
    TypeEntry::new("EAN 8", "ean8"),
    TypeEntry::new("EAN 13", "ean13"),
    TypeEntry::new("ISBN 10", "isbn10"),
    TypeEntry::new("ISBN 13", "isbn13"),
    // Colours
    TypeEntry::new("Colour Name", "color_name"),
    TypeEntry::new("Colour Name (Safe)", "safe_color_name"),
    TypeEntry::new("Hex Colour", "hex_color"),
    TypeEntry::new("Hex Colour (Safe)", "safe_hex_color"),
    TypeEntry::new("RGB Colour", "rgb_color"),
    TypeEntry::new("RGB CSS Colour", "rgb_css_color"),
    // Miscellaneous
    TypeEntry::new("Profession", "job"),
    TypeEntry::new("Licence Plate", "license_plate"),
    TypeEntry::new("MD5 Hash", "md5"),
    TypeEntry::new("SHA1 Hash", "sha1"),
    TypeEntry::new("SHA256 Hash", "sha256"),
    TypeEntry::new("Locale", "locale"),
    TypeEntry::new("Language Code", "language_code"),
    TypeEntry::new("UUID4", "uuid4"),
    TypeEntry::new("Password (not secure!!)", "password"),
];

impl TypeCatalog {
    /// Get the generator method key for a display name.
    pub fn method_key_for(&self, display_name: &str) -> Result<&'static str, CatalogError> {
        self.entries
            .iter()
            .find(|entry| entry.display_name == display_name)
            .map(|entry| entry.method_key)
            .ok_or_else(|| CatalogError::UnknownType(display_name.to_string()))
    }

    /// All display names in insertion order.
    pub fn all_names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.display_name).collect()
    }

    /// All display names sorted lexicographically.
    ///
    /// This is the default listing order, distinct from the category order
    /// returned by [`all_names`](Self::all_names).
    pub fn sorted_names(&self) -> Vec<&'static str> {
        let mut names = self.all_names();
        names.sort_unstable();
        names
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &'static [TypeEntry] {
        self.entries
    }

    /// Check whether a display name is in the catalog.
    pub fn contains(&self, display_name: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.display_name == display_name)
    }

    /// Resolve user input to a catalog display name.
    ///
    /// Exact matches win; otherwise a case-insensitive exact match is accepted.
    pub fn canonical_name(&self, input: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.display_name == input)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|entry| entry.display_name.eq_ignore_ascii_case(input))
            })
            .map(|entry| entry.display_name)
    }

    /// Whether values of this type span several lines.
    pub fn is_multiline(&self, display_name: &str) -> bool {
        display_name == PARAGRAPH || display_name == ADDRESS
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_method_key_lookup() {
        assert_eq!(CATALOG.method_key_for("Name").unwrap(), "name");
        assert_eq!(CATALOG.method_key_for("UUID4").unwrap(), "uuid4");
        assert_eq!(CATALOG.method_key_for(PARAGRAPH).unwrap(), "paragraph");
    }

    #[test]
    fn test_unknown_type() {
        let result = CATALOG.method_key_for("Nonexistent");
        assert_eq!(
            result,
            Err(CatalogError::UnknownType("Nonexistent".to_string()))
        );
    }

    #[test]
    fn test_display_names_unique() {
        let names: HashSet<_> = CATALOG.all_names().into_iter().collect();
        assert_eq!(names.len(), CATALOG.len());
        assert_eq!(CATALOG.len(), 73);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let names = CATALOG.all_names();
        assert_eq!(names[0], "Name");
        assert_eq!(names[1], "First Name");
        assert_eq!(names.last(), Some(&"Password (not secure!!)"));
    }

    #[test]
    fn test_sorted_names() {
        let sorted = CATALOG.sorted_names();
        assert_eq!(sorted.len(), CATALOG.len());
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(sorted[0], "Address");
    }

    #[test]
    fn test_canonical_name() {
        assert_eq!(CATALOG.canonical_name("Email"), Some("Email"));
        assert_eq!(CATALOG.canonical_name("email"), Some("Email"));
        assert_eq!(CATALOG.canonical_name("uuid4"), Some("UUID4"));
        assert_eq!(CATALOG.canonical_name("Emai"), None);
    }

    #[test]
    fn test_contains_is_exact() {
        assert!(CATALOG.contains("Email"));
        assert!(CATALOG.contains("Password (not secure!!)"));
        assert!(!CATALOG.contains("email"));
        assert!(!CATALOG.contains("Emai"));
    }

    #[test]
    fn test_multiline_types() {
        assert!(CATALOG.is_multiline("Paragraph"));
        assert!(CATALOG.is_multiline("Address"));
        assert!(!CATALOG.is_multiline("Street"));
    }
}
