//! Internet generators: emails, domains, addresses, URIs, user agents.

use super::{pattern, person, pick};
use crate::locales::shared::{
    SAFE_EMAIL_TLDS, URI_EXTENSIONS, URI_PAGES, URI_PATHS, USER_AGENT_FORMATS,
};
use crate::locales::LocaleData;
use rand::{Rng, RngCore};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Reduce a localized word to a lowercase ASCII slug.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    for c in value.chars().flat_map(char::to_lowercase) {
        match c {
            'a'..='z' | '0'..='9' => slug.push(c),
            'ä' | 'æ' => slug.push_str("ae"),
            'ö' | 'ø' | 'œ' => slug.push_str("oe"),
            'ü' => slug.push_str("ue"),
            'ß' => slug.push_str("ss"),
            'à' | 'á' | 'â' | 'ã' | 'å' => slug.push('a'),
            'ç' => slug.push('c'),
            'è' | 'é' | 'ê' | 'ë' => slug.push('e'),
            'ì' | 'í' | 'î' | 'ï' => slug.push('i'),
            'ñ' => slug.push('n'),
            'ò' | 'ó' | 'ô' | 'õ' => slug.push('o'),
            'ù' | 'ú' | 'û' => slug.push('u'),
            'ý' | 'ÿ' => slug.push('y'),
            _ => {}
        }
    }
    slug
}

/// Local part of an email address.
pub fn user_name(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    let first = slugify(&person::first_name(data, rng));
    let last = slugify(&person::last_name(data, rng));
    match rng.gen_range(0..4) {
        0 => format!("{first}.{last}"),
        1 => format!("{first}{}", pattern::numerify("##", rng)),
        2 => format!("{}{last}", first.chars().next().unwrap_or('x')),
        _ => format!("{last}{first}"),
    }
}

pub fn tld(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    pick(rng, data.tlds).to_string()
}

pub fn domain_word(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    let word = slugify(&person::last_name(data, rng));
    if word.is_empty() {
        "example".to_string()
    } else {
        word
    }
}

pub fn domain_name(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    let word = domain_word(data, rng);
    format!("{word}.{}", tld(data, rng))
}

pub fn free_email_domain(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    pick(rng, data.free_email_domains).to_string()
}

pub fn email(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    if rng.gen_bool(0.5) {
        free_email(data, rng)
    } else {
        company_email(data, rng)
    }
}

pub fn company_email(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    let user = user_name(data, rng);
    format!("{user}@{}", domain_name(data, rng))
}

pub fn free_email(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    let user = user_name(data, rng);
    format!("{user}@{}", free_email_domain(data, rng))
}

/// Email at a reserved `example.*` domain.
pub fn safe_email(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    let user = user_name(data, rng);
    format!("{user}@example.{}", pick(rng, SAFE_EMAIL_TLDS))
}

pub fn ipv4(rng: &mut dyn RngCore) -> String {
    Ipv4Addr::from(rng.next_u32()).to_string()
}

pub fn ipv6(rng: &mut dyn RngCore) -> String {
    Ipv6Addr::from(rng.gen::<u128>()).to_string()
}

pub fn uri_path(rng: &mut dyn RngCore) -> String {
    let depth = rng.gen_range(1..=3);
    (0..depth)
        .map(|_| pick(rng, URI_PATHS))
        .collect::<Vec<_>>()
        .join("/")
}

pub fn url(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    let scheme = pick(rng, &["http://", "https://"]);
    let www = if rng.gen_bool(0.5) { "www." } else { "" };
    format!("{scheme}{www}{}/", domain_name(data, rng))
}

pub fn uri(data: &LocaleData, rng: &mut dyn RngCore) -> String {
    let base = url(data, rng);
    let path = uri_path(rng);
    let page = pick(rng, URI_PAGES);
    let extension = pick(rng, URI_EXTENSIONS);
    format!("{base}{path}/{page}{extension}")
}

pub fn user_agent(rng: &mut dyn RngCore) -> String {
    let format = pick(rng, USER_AGENT_FORMATS);
    pattern::render(format, |key| {
        let value = match key {
            "win_version" => pick(rng, &["6.1", "6.3", "10.0"]).to_string(),
            "mac_version" => format!("10_{}_{}", rng.gen_range(11..16), rng.gen_range(0..8)),
            "chrome_version" => format!("{}.0.{}.{}", rng.gen_range(90..125), rng.gen_range(4000..6500), rng.gen_range(0..200)),
            "safari_version" => format!("{}.{}", rng.gen_range(13..18), rng.gen_range(0..4)),
            "firefox_version" => format!("{}.0", rng.gen_range(90..126)),
            "opera_build" => rng.gen_range(200..400).to_string(),
            "opera_minor" => rng.gen_range(10..17).to_string(),
            _ => return None,
        };
        Some(value)
    })
}
