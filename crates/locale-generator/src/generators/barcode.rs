//! Barcode generators: EAN and ISBN with valid check digits.

use super::pattern;
use rand::{Rng, RngCore};

pub fn ean13(rng: &mut dyn RngCore) -> String {
    let body = pattern::numerify("############", rng);
    let check = ean_check_digit(&body, 1, 3);
    format!("{body}{check}")
}

pub fn ean8(rng: &mut dyn RngCore) -> String {
    let body = pattern::numerify("#######", rng);
    let check = ean_check_digit(&body, 3, 1);
    format!("{body}{check}")
}

/// Hyphenated ISBN-13, e.g. `978-0-12345-678-9`.
pub fn isbn13(rng: &mut dyn RngCore) -> String {
    let ean = if rng.gen_bool(0.5) { "978" } else { "979" };
    let group = pattern::numerify("#", rng);
    let registrant = pattern::numerify("#####", rng);
    let publication = pattern::numerify("###", rng);
    let body = format!("{ean}{group}{registrant}{publication}");
    let check = ean_check_digit(&body, 1, 3);
    format!("{ean}-{group}-{registrant}-{publication}-{check}")
}

/// Hyphenated ISBN-10, e.g. `0-12345-678-X`.
pub fn isbn10(rng: &mut dyn RngCore) -> String {
    let group = pattern::numerify("#", rng);
    let registrant = pattern::numerify("#####", rng);
    let publication = pattern::numerify("###", rng);
    let body = format!("{group}{registrant}{publication}");
    let check = isbn10_check_digit(&body);
    format!("{group}-{registrant}-{publication}-{check}")
}

/// Weighted mod 10 check digit; weights alternate from the leftmost digit.
fn ean_check_digit(body: &str, even_weight: u32, odd_weight: u32) -> char {
    let sum: u32 = body
        .chars()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| d * if i % 2 == 0 { even_weight } else { odd_weight })
        .sum();
    char::from(b'0' + ((10 - sum % 10) % 10) as u8)
}

fn isbn10_check_digit(body: &str) -> char {
    let sum: u32 = body
        .chars()
        .filter_map(|c| c.to_digit(10))
        .zip((2..=10).rev())
        .map(|(d, weight)| d * weight)
        .sum();
    match (11 - sum % 11) % 11 {
        10 => 'X',
        check => char::from(b'0' + check as u8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_known_check_digits() {
        // 4006381333931 is a published EAN-13
        assert_eq!(ean_check_digit("400638133393", 1, 3), '1');
        // 73513537 is a published EAN-8
        assert_eq!(ean_check_digit("7351353", 3, 1), '7');
        // ISBN 0-306-40615-2
        assert_eq!(isbn10_check_digit("030640615"), '2');
        // ISBN 978-0-306-40615-7
        assert_eq!(ean_check_digit("978030640615", 1, 3), '7');
    }

    #[test]
    fn test_lengths() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(ean13(&mut rng).len(), 13);
        assert_eq!(ean8(&mut rng).len(), 8);
        assert_eq!(isbn13(&mut rng).replace('-', "").len(), 13);
        assert_eq!(isbn10(&mut rng).replace('-', "").len(), 10);
    }

    #[test]
    fn test_isbn13_prefix() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = isbn13(&mut rng);
        assert!(value.starts_with("978-") || value.starts_with("979-"));
        assert_eq!(value.matches('-').count(), 4);
    }
}
