//! Template and pattern expansion.
//!
//! Two kinds of templates are used by the locale tables:
//!
//! - Placeholder templates: `{first_name} {last_name}`, resolved by a callback
//! - Character patterns: `#` any digit, `%` a digit 1-9, `?` an uppercase letter

use rand::{Rng, RngCore};

/// Replace `{key}` placeholders using `resolve`.
///
/// Placeholders the callback does not know are kept verbatim, as are
/// unbalanced braces.
pub fn render<F>(template: &str, mut resolve: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut result = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        result.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let key = &after[..end];
                match resolve(key) {
                    Some(value) => result.push_str(&value),
                    None => {
                        result.push('{');
                        result.push_str(key);
                        result.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            None => {
                result.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    result.push_str(rest);

    result
}

/// Replace `#` with a digit and `%` with a non-zero digit.
pub fn numerify(pattern: &str, rng: &mut dyn RngCore) -> String {
    pattern
        .chars()
        .map(|c| match c {
            '#' => random_digit(rng, 0),
            '%' => random_digit(rng, 1),
            other => other,
        })
        .collect()
}

/// Like [`numerify`], additionally replacing `?` with an uppercase letter.
pub fn bothify(pattern: &str, rng: &mut dyn RngCore) -> String {
    pattern
        .chars()
        .map(|c| match c {
            '#' => random_digit(rng, 0),
            '%' => random_digit(rng, 1),
            '?' => random_letter(rng),
            other => other,
        })
        .collect()
}

/// Generate a random number with exactly N digits.
pub fn random_digits(rng: &mut dyn RngCore, digits: usize) -> String {
    if digits == 0 {
        return String::new();
    }

    let mut result = String::with_capacity(digits);

    // First digit should be 1-9 to avoid leading zeros
    result.push(random_digit(rng, 1));

    for _ in 1..digits {
        result.push(random_digit(rng, 0));
    }

    result
}

fn random_digit(rng: &mut dyn RngCore, min: u8) -> char {
    char::from(b'0' + rng.gen_range(min..10))
}

fn random_letter(rng: &mut dyn RngCore) -> char {
    char::from(b'A' + rng.gen_range(0..26))
}
