//! Miscellaneous generators: jobs, plates, digests, identifiers, passwords.

use super::{pattern, pick};
use crate::locales::shared::LANGUAGE_CODES;
use crate::locales::{LocaleData, KNOWN_LOCALES};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use uuid::Uuid;

const SPECIAL_CHARS: &[u8] = b"!@#$%^&*()_+";
const DIGITS: &[u8] = b"0123456789";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Default password length.
pub const PASSWORD_LENGTH: usize = 10;

pub fn job(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    pick(rng, data.jobs).to_string()
}

pub fn license_plate(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    let format = pick(rng, data.license_plate_formats);
    pattern::bothify(format, rng)
}

/// Lowercase hex digest of `len` random bytes.
pub fn digest(len: usize, rng: &mut dyn RngCore) -> String {
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

pub fn md5(rng: &mut dyn RngCore) -> String {
    digest(16, rng)
}

pub fn sha1(rng: &mut dyn RngCore) -> String {
    digest(20, rng)
}

pub fn sha256(rng: &mut dyn RngCore) -> String {
    digest(32, rng)
}

/// Random locale identifier from the known locales.
pub fn locale(rng: &mut dyn RngCore) -> String {
    KNOWN_LOCALES
        .choose(rng)
        .map(|(id, _)| id.to_string())
        .unwrap_or_default()
}

pub fn language_code(rng: &mut dyn RngCore) -> String {
    pick(rng, LANGUAGE_CODES).to_string()
}

/// Random UUID v4 using the provided RNG.
pub fn uuid4(rng: &mut dyn RngCore) -> String {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Uuid::from_bytes(bytes).to_string()
}

/// Password with at least one special character, digit, upper and lower case letter.
pub fn password(length: usize, rng: &mut dyn RngCore) -> String {
    let pools = [SPECIAL_CHARS, DIGITS, UPPER, LOWER];
    let all: Vec<u8> = pools.concat();

    let mut chars: Vec<u8> = pools
        .iter()
        .take(length)
        .filter_map(|pool| pool.choose(rng).copied())
        .collect();
    while chars.len() < length {
        chars.push(all[rng.gen_range(0..all.len())]);
    }
    chars.shuffle(rng);

    chars.into_iter().map(char::from).collect()
}
