//! Person generators: names, phone numbers, social security numbers.

use super::{fill, pattern, pick};
use crate::locales::LocaleData;
use rand::RngCore;

pub fn first_name(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    pick(rng, data.first_names).to_string()
}

pub fn last_name(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    pick(rng, data.last_names).to_string()
}

pub fn prefix(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    pick(rng, data.prefixes).to_string()
}

/// Full name built from one of the locale's name formats.
pub fn name(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    let format = pick(rng, data.name_formats);
    fill(data, format, rng)
}

pub fn phone_number(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    let format = pick(rng, data.phone_formats);
    pattern::numerify(format, rng)
}

/// Mobile subscriber number: 8 or 13 digits.
pub fn msisdn(rng: &mut dyn RngCore) -> String {
    let format = pick(rng, &["#############", "########"]);
    pattern::numerify(format, rng)
}

/// Social security number, for locales that define one.
pub fn ssn(data: &LocaleData, rng: &mut dyn RngCore) -> Option<String> {
    let formats = data.ssn_formats?;
    let format = pick(rng, formats);
    Some(pattern::bothify(format, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locales::locale_data;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_name_has_no_placeholders() {
        let mut rng = StdRng::seed_from_u64(42);
        for id in ["en", "en_GB", "de_DE", "es_ES", "fr_FR", "nl_NL"] {
            let data = locale_data(id).unwrap();
            for _ in 0..20 {
                let value = name(data, &mut rng);
                assert!(!value.contains('{'), "{id}: {value}");
                assert!(value.contains(' '), "{id}: {value}");
            }
        }
    }

    #[test]
    fn test_first_name_from_table() {
        let data = locale_data("fr_FR").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let value = first_name(data, &mut rng);
        assert!(data.first_names.contains(&value.as_str()));
    }

    #[test]
    fn test_us_ssn_format() {
        let data = locale_data("en").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let value = ssn(data, &mut rng).unwrap();

        assert_eq!(value.len(), 11);
        assert_eq!(value.matches('-').count(), 2);
    }

    #[test]
    fn test_ssn_absent_for_locale() {
        let data = locale_data("de_DE").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(ssn(data, &mut rng), None);
    }

    #[test]
    fn test_msisdn_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = msisdn(&mut rng);
        assert!(value.len() == 13 || value.len() == 8);
        assert!(value.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_phone_number_has_digits() {
        let data = locale_data("nl_NL").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let value = phone_number(data, &mut rng);
        assert!(!value.contains('#'));
        assert!(value.chars().any(|c| c.is_ascii_digit()));
    }
}
