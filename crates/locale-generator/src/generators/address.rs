//! Address generators.

use super::{fill, pattern, pick};
use crate::locales::LocaleData;
use rand::seq::SliceRandom;
use rand::RngCore;

pub fn building_number(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    let format = pick(rng, data.building_number_formats);
    pattern::bothify(format, rng)
}

pub fn street_suffix(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    pick(rng, data.street_suffixes).to_string()
}

pub fn street_name(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    let format = pick(rng, data.street_name_formats);
    fill(data, format, rng)
}

pub fn street_address(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    let format = pick(rng, data.street_address_formats);
    let value = fill(data, format, rng);
    // es_ES floor numbers ("Piso #") are left as digit patterns by the template
    pattern::numerify(&value, rng)
}

pub fn city(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    pick(rng, data.cities).to_string()
}

pub fn postcode(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    let format = pick(rng, data.postcode_formats);
    pattern::bothify(format, rng)
}

/// State or province name, for locales that have them.
pub fn state(data: &LocaleData, rng: &mut dyn RngCore) -> Option<String> {
    let states = data.states?;
    states.choose(rng).map(|(name, _)| name.to_string())
}

pub fn state_abbr(data: &LocaleData, rng: &mut dyn RngCore) -> Option<String> {
    let states = data.states?;
    states.choose(rng).map(|(_, abbr)| abbr.to_string())
}

pub fn country(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    pick(rng, data.countries).to_string()
}

/// Full postal address. Spans several lines.
pub fn address(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    let format = pick(rng, data.address_formats);
    fill(data, format, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locales::locale_data;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const LOCALES: [&str; 6] = ["en", "en_GB", "de_DE", "es_ES", "fr_FR", "nl_NL"];

    #[test]
    fn test_address_is_multiline_without_blank_lines() {
        let mut rng = StdRng::seed_from_u64(42);
        for id in LOCALES {
            let data = locale_data(id).unwrap();
            for _ in 0..20 {
                let value = address(data, &mut rng);
                assert!(value.contains('\n'), "{id}: {value}");
                assert!(!value.contains("\n\n"), "{id}: {value}");
                assert!(!value.contains('{'), "{id}: {value}");
            }
        }
    }

    #[test]
    fn test_street_address_fully_expanded() {
        let mut rng = StdRng::seed_from_u64(42);
        for id in LOCALES {
            let data = locale_data(id).unwrap();
            for _ in 0..20 {
                let value = street_address(data, &mut rng);
                assert!(!value.contains('#'), "{id}: {value}");
                assert!(!value.contains('%'), "{id}: {value}");
            }
        }
    }

    #[test]
    fn test_german_postcode() {
        let data = locale_data("de_DE").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let value = postcode(data, &mut rng);
        assert_eq!(value.len(), 5);
        assert!(value.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_states() {
        let mut rng = StdRng::seed_from_u64(42);

        let en = locale_data("en").unwrap();
        let abbr = state_abbr(en, &mut rng).unwrap();
        assert_eq!(abbr.len(), 2);
        assert!(state(en, &mut rng).is_some());

        let fr = locale_data("fr_FR").unwrap();
        assert_eq!(state(fr, &mut rng), None);
        assert_eq!(state_abbr(fr, &mut rng), None);
    }
}
