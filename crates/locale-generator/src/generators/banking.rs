//! Banking generators: credit cards, bank accounts and currencies.

use super::{pattern, person, pick};
use crate::locales::shared::{CREDIT_CARDS, CRYPTOCURRENCIES, CURRENCIES};
use crate::locales::LocaleData;
use chrono::{Datelike, Utc};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

/// A card network.
#[derive(Debug, Clone, Copy)]
pub struct CardType {
    pub name: &'static str,
    prefixes: &'static [&'static str],
    length: usize,
    security_code_length: usize,
}

impl CardType {
    fn security_code_name(&self) -> &'static str {
        if self.name == "American Express" {
            "CID"
        } else {
            "CVC"
        }
    }
}

pub fn card_type(rng: &mut dyn RngCore) -> CardType {
    let &(name, prefixes, length, security_code_length) = CREDIT_CARDS
        .choose(rng)
        .unwrap_or(&CREDIT_CARDS[0]);
    CardType {
        name,
        prefixes,
        length,
        security_code_length,
    }
}

pub fn credit_card_provider(rng: &mut dyn RngCore) -> String {
    card_type(rng).name.to_string()
}

/// Card number with a valid Luhn check digit.
pub fn credit_card_number(card: &CardType, rng: &mut dyn RngCore) -> String {
    let mut number = pick(rng, card.prefixes).to_string();
    while number.len() < card.length - 1 {
        number.push(char::from(b'0' + rng.gen_range(0..10)));
    }
    number.push(luhn_check_digit(&number));
    number
}

/// Expiry date as `MM/YY`, within the next ten years.
pub fn credit_card_expire(rng: &mut dyn RngCore) -> String {
    let year = Utc::now().year() + rng.gen_range(0..=10);
    let month = rng.gen_range(1..=12);
    format!("{month:02}/{:02}", year % 100)
}

pub fn credit_card_security_code(card: &CardType, rng: &mut dyn RngCore) -> String {
    pattern::numerify(&"#".repeat(card.security_code_length), rng)
}

/// Provider, holder, number, expiry and security code on four lines.
pub fn credit_card_full(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    let card = card_type(rng);
    let holder = format!(
        "{} {}",
        person::first_name(data, rng),
        person::last_name(data, rng)
    );
    let number = credit_card_number(&card, rng);
    let expire = credit_card_expire(rng);
    let code = credit_card_security_code(&card, rng);
    format!(
        "{}\n{holder}\n{number} {expire}\n{}: {code}",
        card.name,
        card.security_code_name()
    )
}

fn luhn_check_digit(partial: &str) -> char {
    let sum: u32 = partial
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    char::from(b'0' + ((10 - sum % 10) % 10) as u8)
}

/// Country code of the locale's bank accounts.
pub fn bank_country(data: &LocaleData) -> Option<String> {
    data.bank.as_ref().map(|bank| bank.country.to_string())
}

pub fn bban(data: &LocaleData, rng: &mut dyn RngCore) -> Option<String> {
    let bank = data.bank.as_ref()?;
    Some(pattern::bothify(bank.bban_format, rng))
}

/// IBAN with valid ISO 7064 mod 97-10 check digits.
pub fn iban(data: &LocaleData, rng: &mut dyn RngCore) -> Option<String> {
    let bank = data.bank.as_ref()?;
    let bban = pattern::bothify(bank.bban_format, rng);
    let check = 98 - mod97(&format!("{bban}{}00", bank.country));
    Some(format!("{}{check:02}{bban}", bank.country))
}

fn mod97(value: &str) -> u32 {
    value.chars().fold(0u32, |acc, c| match c.to_digit(36) {
        Some(d) if d >= 10 => (acc * 100 + d) % 97,
        Some(d) => (acc * 10 + d) % 97,
        None => acc,
    })
}

pub fn currency_code(rng: &mut dyn RngCore) -> String {
    CURRENCIES.choose(rng).map(|(code, _)| code.to_string()).unwrap_or_default()
}

pub fn currency_name(rng: &mut dyn RngCore) -> String {
    CURRENCIES.choose(rng).map(|(_, name)| name.to_string()).unwrap_or_default()
}

pub fn cryptocurrency_code(rng: &mut dyn RngCore) -> String {
    CRYPTOCURRENCIES
        .choose(rng)
        .map(|(code, _)| code.to_string())
        .unwrap_or_default()
}

pub fn cryptocurrency_name(rng: &mut dyn RngCore) -> String {
    CRYPTOCURRENCIES
        .choose(rng)
        .map(|(_, name)| name.to_string())
        .unwrap_or_default()
}
