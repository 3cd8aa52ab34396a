//! Company generators.

use super::{fill, pick};
use crate::locales::LocaleData;
use rand::RngCore;

pub fn company(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    let format = pick(rng, data.company_formats);
    fill(data, format, rng)
}

pub fn company_suffix(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    pick(rng, data.company_suffixes).to_string()
}

/// Catch phrase, for locales with phrase tables.
pub fn catch_phrase(data: &LocaleData, rng: &mut dyn RngCore) -> Option<String> {
    data.catch_phrase_words.map(|lists| phrase(lists, rng))
}

/// Corporate buzzword phrase, for locales with phrase tables.
pub fn bs(data: &LocaleData, rng: &mut dyn RngCore) -> Option<String> {
    data.bs_words.map(|lists| phrase(lists, rng))
}

fn phrase(lists: &[&[&str]], rng: &mut dyn RngCore) -> String {
    lists
        .iter()
        .map(|words| pick(rng, words))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locales::locale_data;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_company_expanded() {
        let mut rng = StdRng::seed_from_u64(42);
        for id in ["en", "de_DE", "es_ES", "fr_FR", "nl_NL"] {
            let data = locale_data(id).unwrap();
            let value = company(data, &mut rng);
            assert!(!value.is_empty());
            assert!(!value.contains('{'), "{id}: {value}");
        }
    }

    #[test]
    fn test_phrases_have_one_word_per_list() {
        let data = locale_data("en").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let value = bs(data, &mut rng).unwrap();
        assert!(value.split(' ').count() >= 3);
        assert!(catch_phrase(data, &mut rng).is_some());
    }

    #[test]
    fn test_phrases_missing_for_locale() {
        let mut rng = StdRng::seed_from_u64(42);
        let fr = locale_data("fr_FR").unwrap();
        assert!(catch_phrase(fr, &mut rng).is_some());
        assert_eq!(bs(fr, &mut rng), None);

        let de = locale_data("de_DE").unwrap();
        assert_eq!(catch_phrase(de, &mut rng), None);
    }
}
