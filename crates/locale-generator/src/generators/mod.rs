//! Individual value generators for the data types.
//!
//! Every function draws from the locale's [`LocaleData`] tables and the
//! caller's RNG, so seeding the RNG makes output reproducible.

pub mod address;
pub mod banking;
pub mod barcode;
pub mod color;
pub mod company;
pub mod datetime;
pub mod internet;
pub mod lorem;
pub mod misc;
pub mod pattern;
pub mod person;

use crate::locales::LocaleData;
use rand::seq::SliceRandom;
use rand::RngCore;

/// Pick one item from a table, or `""` for an empty table.
pub(crate) fn pick<'a>(rng: &mut dyn RngCore, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

/// Expand a locale template, resolving every placeholder the tables know.
pub(crate) fn fill(data: &LocaleData, template: &str, rng: &mut dyn RngCore) -> String {
    pattern::render(template, |key| placeholder(data, key, rng))
}

fn placeholder(data: &LocaleData, key: &str, rng: &mut dyn RngCore) -> Option<String> {
    let value = match key {
        "first_name" => person::first_name(data, rng),
        "last_name" => person::last_name(data, rng),
        "prefix" => person::prefix(data, rng),
        "building_number" => address::building_number(data, rng),
        "street_suffix" => address::street_suffix(data, rng),
        "street_name" => address::street_name(data, rng),
        "street_address" => address::street_address(data, rng),
        "city" => address::city(data, rng),
        "postcode" => address::postcode(data, rng),
        "state" => address::state(data, rng)?,
        "state_abbr" => address::state_abbr(data, rng)?,
        "country" => address::country(data, rng),
        "company_suffix" => company::company_suffix(data, rng),
        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locales::locale_data;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_empty_table() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(pick(&mut rng, &[]), "");
        assert_eq!(pick(&mut rng, &["only"]), "only");
    }

    #[test]
    fn test_fill_resolves_nested_placeholders() {
        let data = locale_data("de_DE").unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let value = fill(data, "{street_address} in {city}", &mut rng);
        assert!(!value.contains('{'), "unresolved placeholder in {value}");
        assert!(value.contains(" in "));
    }

    #[test]
    fn test_fill_keeps_unknown_placeholder() {
        let data = locale_data("en").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(fill(data, "{nope}", &mut rng), "{nope}");
    }
}
