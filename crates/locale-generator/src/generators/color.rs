//! Colour generators.

use super::pick;
use crate::locales::shared::{COLOR_NAMES, SAFE_COLOR_NAMES};
use rand::{Rng, RngCore};

pub fn color_name(rng: &mut dyn RngCore) -> String {
    pick(rng, COLOR_NAMES).to_string()
}

pub fn safe_color_name(rng: &mut dyn RngCore) -> String {
    pick(rng, SAFE_COLOR_NAMES).to_string()
}

pub fn hex_color(rng: &mut dyn RngCore) -> String {
    format!("#{:06x}", rng.gen_range(0..=0xff_ffffu32))
}

/// Web-safe hex colour: each channel is a doubled hex digit.
pub fn safe_hex_color(rng: &mut dyn RngCore) -> String {
    let digits = format!("{:03x}", rng.gen_range(0..=0xfffu32));
    digits.chars().fold(String::from("#"), |mut acc, c| {
        acc.push(c);
        acc.push(c);
        acc
    })
}

/// Three comma-separated channel values.
pub fn rgb_color(rng: &mut dyn RngCore) -> String {
    let (r, g, b) = (rng.gen::<u8>(), rng.gen::<u8>(), rng.gen::<u8>());
    format!("{r},{g},{b}")
}

pub fn rgb_css_color(rng: &mut dyn RngCore) -> String {
    format!("rgb({})", rgb_color(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_hex_color() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = hex_color(&mut rng);
        assert_eq!(value.len(), 7);
        assert!(u32::from_str_radix(&value[1..], 16).is_ok());
    }

    #[test]
    fn test_safe_hex_color_doubled() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = safe_hex_color(&mut rng);
        let chars: Vec<char> = value.chars().collect();
        assert_eq!(chars.len(), 7);
        assert_eq!(chars[1], chars[2]);
        assert_eq!(chars[3], chars[4]);
        assert_eq!(chars[5], chars[6]);
    }

    #[test]
    fn test_rgb_colors() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(rgb_color(&mut rng).split(',').count(), 3);
        let css = rgb_css_color(&mut rng);
        assert!(css.starts_with("rgb(") && css.ends_with(')'));
    }
}
