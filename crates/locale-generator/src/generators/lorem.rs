//! Lorem ipsum text generators.

use super::pick;
use crate::locales::LocaleData;
use rand::{Rng, RngCore};

/// Default sentence count of a paragraph.
pub const DEFAULT_SENTENCES: usize = 3;

/// Default word count of a sentence.
pub const DEFAULT_WORDS: usize = 6;

pub fn word(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    pick(rng, data.lorem_words).to_string()
}

/// A sentence of about `nb_words` words, capitalized and ending in a period.
///
/// With `variable` set the word count is drawn from 60%-140% of `nb_words`.
pub fn sentence(data: &LocaleData, nb_words: usize, variable: bool, rng: &mut dyn RngCore) -> String {
    let count = if variable {
        randomize(nb_words, rng)
    } else {
        nb_words
    };
    if count == 0 {
        return String::new();
    }

    let words: Vec<&str> = (0..count).map(|_| pick(rng, data.lorem_words)).collect();
    let mut sentence = capitalize(&words.join(" "));
    sentence.push('.');
    sentence
}

/// A paragraph of about `nb_sentences` sentences on a single line.
pub fn paragraph(
    data: &LocaleData,
    nb_sentences: usize,
    variable: bool,
    rng: &mut dyn RngCore,
) -> String {
    let count = if variable {
        randomize(nb_sentences, rng)
    } else {
        nb_sentences
    };

    (0..count)
        .map(|_| sentence(data, DEFAULT_WORDS, true, rng))
        .collect::<Vec<_>>()
        .join(" ")
}

fn randomize(n: usize, rng: &mut dyn RngCore) -> usize {
    let percent = rng.gen_range(60..=140);
    (n * percent / 100).max(1)
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locales::locale_data;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fixed_sentence() {
        let data = locale_data("en").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let value = sentence(data, 4, false, &mut rng);

        assert_eq!(value.split(' ').count(), 4);
        assert!(value.ends_with('.'));
        assert!(value.chars().next().unwrap().is_uppercase());
    }

    #[test]
    fn test_fixed_paragraph_sentence_count() {
        let data = locale_data("en").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for n in 1..6 {
            let value = paragraph(data, n, false, &mut rng);
            assert_eq!(value.matches('.').count(), n);
            assert!(!value.contains('\n'));
        }
    }

    #[test]
    fn test_variable_paragraph_not_empty() {
        let data = locale_data("de_DE").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let value = paragraph(data, 1, true, &mut rng);
            assert!(value.ends_with('.'));
        }
    }

    #[test]
    fn test_zero_sentences() {
        let data = locale_data("en").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(paragraph(data, 0, false, &mut rng), "");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("lorem ipsum"), "Lorem ipsum");
        assert_eq!(capitalize(""), "");
    }
}
