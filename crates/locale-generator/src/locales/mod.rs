//! Per-locale data tables.
//!
//! Each built-in locale is a static [`LocaleData`]. Optional fields mark
//! capabilities that only some locales have; a generator bound to a locale
//! without the data does not expose the matching operations.

mod de_de;
mod en;
mod en_gb;
mod es_es;
mod fr_fr;
mod nl_nl;
pub mod shared;

/// Bank account layout for IBAN/BBAN generation.
#[derive(Debug)]
pub struct BankFormat {
    /// ISO 3166 country code, which is also the IBAN prefix
    pub country: &'static str,
    /// BBAN template (`#` digit, `?` uppercase letter)
    pub bban_format: &'static str,
}

/// Static data backing one locale.
///
/// Template strings use `{placeholder}` tokens resolved by the address and
/// person generators, and `#`/`%`/`?` characters resolved by
/// [`crate::generators::pattern`].
#[derive(Debug)]
pub struct LocaleData {
    pub id: &'static str,

    // People
    pub first_names: &'static [&'static str],
    pub last_names: &'static [&'static str],
    pub prefixes: &'static [&'static str],
    pub name_formats: &'static [&'static str],
    pub phone_formats: &'static [&'static str],
    pub ssn_formats: Option<&'static [&'static str]>,

    // Addresses
    pub street_suffixes: &'static [&'static str],
    pub street_name_formats: &'static [&'static str],
    pub street_address_formats: &'static [&'static str],
    pub building_number_formats: &'static [&'static str],
    pub cities: &'static [&'static str],
    pub postcode_formats: &'static [&'static str],
    /// (name, abbreviation) pairs
    pub states: Option<&'static [(&'static str, &'static str)]>,
    pub countries: &'static [&'static str],
    pub address_formats: &'static [&'static str],

    // Internet
    pub free_email_domains: &'static [&'static str],
    pub tlds: &'static [&'static str],

    // Corporate
    pub company_formats: &'static [&'static str],
    pub company_suffixes: &'static [&'static str],
    /// One word list per phrase position
    pub catch_phrase_words: Option<&'static [&'static [&'static str]]>,
    pub bs_words: Option<&'static [&'static [&'static str]]>,

    // Miscellaneous
    pub jobs: &'static [&'static str],
    pub license_plate_formats: &'static [&'static str],
    pub bank: Option<BankFormat>,
    pub lorem_words: &'static [&'static str],
}

/// Every locale identifier the settings may name, with its display name.
pub static KNOWN_LOCALES: &[(&str, &str)] = &[
    ("en", "English"),
    ("de_DE", "German"),
    ("es", "Spanish"),
    ("fr_FR", "French"),
    ("ar_AA", "Arabic"),
    ("ar_EG", "Arabic (Egypt)"),
    ("ar_JO", "Arabic (Jordan)"),
    ("ar_PS", "Arabic (Palestine)"),
    ("ar_SA", "Arabic (Saudi Arabia)"),
    ("bs_BA", "Bosnian"),
    ("bg_BG", "Bulgarian"),
    ("zh_CN", "Chinese (China)"),
    ("zh_TW", "Chinese (Taiwan)"),
    ("hr_HR", "Croatian"),
    ("cs_CZ", "Czech"),
    ("dk_DK", "Danish"),
    ("nl_NL", "Dutch"),
    ("nl_BE", "Dutch (Belgium)"),
    ("en_AU", "English (Australia)"),
    ("en_CA", "English (Canada)"),
    ("en_GB", "English (Great Britain)"),
    ("en_TH", "English (Thailand)"),
    ("en_US", "English (United States)"),
    ("et_EE", "Estonian"),
    ("fi_FI", "Finnish"),
    ("fr_CH", "French (Switzerland)"),
    ("ka_GE", "Georgian"),
    ("de_AT", "German (Austria)"),
    ("tw_GH", "Ghanaian"),
    ("el_GR", "Greek"),
    ("he_IL", "Hebrew"),
    ("hi_IN", "Hindi"),
    ("hu_HU", "Hungarian"),
    ("id_ID", "Indonesian"),
    ("it_IT", "Italian"),
    ("ja_JP", "Japanese"),
    ("ko_KR", "Korean"),
    ("la", "Latin"),
    ("lv_LV", "Latvian"),
    ("lt_LT", "Lithuanian"),
    ("ne_NP", "Nepali"),
    ("no_NO", "Norwegian"),
    ("fa_IR", "Persian"),
    ("pl_PL", "Polish"),
    ("pt_BR", "Portuguese (Brazil)"),
    ("pt_PT", "Portuguese (Portugal)"),
    ("ru_RU", "Russian"),
    ("sk_SK", "Slovakian"),
    ("sl_SI", "Slovenian"),
    ("es_MX", "Spanish (Mexico)"),
    ("es_ES", "Spanish (Spain)"),
    ("sv_SE", "Swedish"),
    ("th_TH", "Thai"),
    ("tr_TR", "Turkish"),
    ("uk_UA", "Ukranian"),
];

/// Look up the built-in data for a locale identifier.
///
/// `en_US` and `es` are served by the `en` and `es_ES` tables.
pub fn locale_data(id: &str) -> Option<&'static LocaleData> {
    match id {
        "en" | "en_US" => Some(&en::DATA),
        "en_GB" => Some(&en_gb::DATA),
        "de_DE" => Some(&de_de::DATA),
        "es" | "es_ES" => Some(&es_es::DATA),
        "fr_FR" => Some(&fr_fr::DATA),
        "nl_NL" => Some(&nl_nl::DATA),
        _ => None,
    }
}

/// Display name of a known locale.
pub fn locale_name(id: &str) -> Option<&'static str> {
    KNOWN_LOCALES
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, name)| *name)
}

/// Whether a built-in provider exists for the locale.
pub fn is_available(id: &str) -> bool {
    locale_data(id).is_some()
}
