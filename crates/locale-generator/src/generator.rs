//! Locale-bound [`Generator`] implementation and its factory.

use crate::generators::{
    address, banking, barcode, color, company, datetime, internet, lorem, misc, person,
};
use crate::locales::{locale_data, LocaleData};
use fakeum_core::{FakeArg, FakeValue, Generator, GeneratorError, GeneratorFactory};
use rand::RngCore;
use std::sync::Arc;
use tracing::debug;

macro_rules! methods {
    ($($variant:ident => $key:literal),* $(,)?) => {
        /// Every operation a built-in generator can expose.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Method {
            $($variant),*
        }

        impl Method {
            /// All operations in declaration order.
            pub const ALL: &'static [Method] = &[$(Method::$variant),*];

            /// Parse an operation from its method key.
            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $($key => Some(Method::$variant),)*
                    _ => None,
                }
            }

            /// The method key of this operation.
            pub fn key(self) -> &'static str {
                match self {
                    $(Method::$variant => $key),*
                }
            }
        }
    };
}

methods! {
    Name => "name",
    FirstName => "first_name",
    LastName => "last_name",
    Email => "email",
    CompanyEmail => "company_email",
    FreeEmail => "free_email",
    SafeEmail => "safe_email",
    FreeEmailDomain => "free_email_domain",
    Ssn => "ssn",
    PhoneNumber => "phone_number",
    Msisdn => "msisdn",
    Address => "address",
    StreetAddress => "street_address",
    StreetName => "street_name",
    City => "city",
    Postcode => "postcode",
    State => "state",
    StateAbbr => "state_abbr",
    Country => "country",
    Tld => "tld",
    DomainName => "domain_name",
    DomainWord => "domain_word",
    Ipv4 => "ipv4",
    Ipv6 => "ipv6",
    Uri => "uri",
    UriPath => "uri_path",
    Url => "url",
    UserAgent => "user_agent",
    Bs => "bs",
    CatchPhrase => "catch_phrase",
    Company => "company",
    CompanySuffix => "company_suffix",
    Paragraph => "paragraph",
    Sentence => "sentence",
    Word => "word",
    Date => "date",
    DateTime => "date_time",
    Iso8601 => "iso8601",
    Time => "time",
    Timezone => "timezone",
    UnixTime => "unix_time",
    CreditCardProvider => "credit_card_provider",
    CreditCardNumber => "credit_card_number",
    CreditCardExpire => "credit_card_expire",
    CreditCardFull => "credit_card_full",
    CreditCardSecurityCode => "credit_card_security_code",
    Iban => "iban",
    Bban => "bban",
    BankCountry => "bank_country",
    CurrencyName => "currency_name",
    CurrencyCode => "currency_code",
    CryptocurrencyName => "cryptocurrency_name",
    CryptocurrencyCode => "cryptocurrency_code",
    Ean => "ean",
    Ean8 => "ean8",
    Ean13 => "ean13",
    Isbn10 => "isbn10",
    Isbn13 => "isbn13",
    ColorName => "color_name",
    SafeColorName => "safe_color_name",
    HexColor => "hex_color",
    SafeHexColor => "safe_hex_color",
    RgbColor => "rgb_color",
    RgbCssColor => "rgb_css_color",
    Job => "job",
    LicensePlate => "license_plate",
    Md5 => "md5",
    Sha1 => "sha1",
    Sha256 => "sha256",
    Locale => "locale",
    LanguageCode => "language_code",
    Uuid4 => "uuid4",
    Password => "password",
}

/// Generator backed by a built-in locale table.
#[derive(Debug)]
pub struct LocaleGenerator {
    locale: String,
    data: &'static LocaleData,
}

impl LocaleGenerator {
    /// Create the generator for a locale identifier.
    pub fn new(locale: &str) -> Result<Self, GeneratorError> {
        let data =
            locale_data(locale).ok_or_else(|| GeneratorError::UnknownLocale(locale.to_string()))?;
        Ok(Self {
            locale: locale.to_string(),
            data,
        })
    }

    /// Whether this locale's data backs the operation.
    pub fn has(&self, method: Method) -> bool {
        let data = self.data;
        match method {
            Method::Ssn => data.ssn_formats.is_some(),
            Method::State | Method::StateAbbr => data.states.is_some(),
            Method::Bs => data.bs_words.is_some(),
            Method::CatchPhrase => data.catch_phrase_words.is_some(),
            Method::Iban | Method::Bban | Method::BankCountry => data.bank.is_some(),
            _ => true,
        }
    }

    /// Operations available for this locale.
    pub fn methods(&self) -> impl Iterator<Item = Method> + '_ {
        Method::ALL.iter().copied().filter(|m| self.has(*m))
    }

    fn unsupported(&self, method_key: &str) -> GeneratorError {
        GeneratorError::UnsupportedMethod {
            locale: self.locale.clone(),
            method: method_key.to_string(),
        }
    }

    fn generate(
        &self,
        method: Method,
        args: &[FakeArg],
        rng: &mut dyn RngCore,
    ) -> Result<FakeValue, GeneratorError> {
        let data = self.data;
        let text = match method {
            Method::Name => person::name(data, rng),
            Method::FirstName => person::first_name(data, rng),
            Method::LastName => person::last_name(data, rng),
            Method::Email => internet::email(data, rng),
            Method::CompanyEmail => internet::company_email(data, rng),
            Method::FreeEmail => internet::free_email(data, rng),
            Method::SafeEmail => internet::safe_email(data, rng),
            Method::FreeEmailDomain => internet::free_email_domain(data, rng),
            Method::Ssn => person::ssn(data, rng).ok_or_else(|| self.unsupported("ssn"))?,
            Method::PhoneNumber => person::phone_number(data, rng),
            Method::Msisdn => person::msisdn(rng),
            Method::Address => address::address(data, rng),
            Method::StreetAddress => address::street_address(data, rng),
            Method::StreetName => address::street_name(data, rng),
            Method::City => address::city(data, rng),
            Method::Postcode => address::postcode(data, rng),
            Method::State => address::state(data, rng).ok_or_else(|| self.unsupported("state"))?,
            Method::StateAbbr => {
                address::state_abbr(data, rng).ok_or_else(|| self.unsupported("state_abbr"))?
            }
            Method::Country => address::country(data, rng),
            Method::Tld => internet::tld(data, rng),
            Method::DomainName => internet::domain_name(data, rng),
            Method::DomainWord => internet::domain_word(data, rng),
            Method::Ipv4 => internet::ipv4(rng),
            Method::Ipv6 => internet::ipv6(rng),
            Method::Uri => internet::uri(data, rng),
            Method::UriPath => internet::uri_path(rng),
            Method::Url => internet::url(data, rng),
            Method::UserAgent => internet::user_agent(rng),
            Method::Bs => company::bs(data, rng).ok_or_else(|| self.unsupported("bs"))?,
            Method::CatchPhrase => {
                company::catch_phrase(data, rng).ok_or_else(|| self.unsupported("catch_phrase"))?
            }
            Method::Company => company::company(data, rng),
            Method::CompanySuffix => company::company_suffix(data, rng),
            Method::Paragraph => {
                let (sentences, variable) = paragraph_args(args)?;
                lorem::paragraph(data, sentences, variable, rng)
            }
            Method::Sentence => lorem::sentence(data, lorem::DEFAULT_WORDS, true, rng),
            Method::Word => lorem::word(data, rng),
            Method::Date => datetime::date(rng),
            Method::DateTime => return Ok(FakeValue::DateTime(datetime::date_time(rng))),
            Method::Iso8601 => datetime::iso8601(rng),
            Method::Time => datetime::time(rng),
            Method::Timezone => datetime::timezone(rng),
            Method::UnixTime => return Ok(FakeValue::Int(datetime::unix_time(rng))),
            Method::CreditCardProvider => banking::credit_card_provider(rng),
            Method::CreditCardNumber => {
                let card = banking::card_type(rng);
                banking::credit_card_number(&card, rng)
            }
            Method::CreditCardExpire => banking::credit_card_expire(rng),
            Method::CreditCardFull => banking::credit_card_full(data, rng),
            Method::CreditCardSecurityCode => {
                let card = banking::card_type(rng);
                banking::credit_card_security_code(&card, rng)
            }
            Method::Iban => banking::iban(data, rng).ok_or_else(|| self.unsupported("iban"))?,
            Method::Bban => banking::bban(data, rng).ok_or_else(|| self.unsupported("bban"))?,
            Method::BankCountry => {
                banking::bank_country(data).ok_or_else(|| self.unsupported("bank_country"))?
            }
            Method::CurrencyName => banking::currency_name(rng),
            Method::CurrencyCode => banking::currency_code(rng),
            Method::CryptocurrencyName => banking::cryptocurrency_name(rng),
            Method::CryptocurrencyCode => banking::cryptocurrency_code(rng),
            Method::Ean | Method::Ean13 => barcode::ean13(rng),
            Method::Ean8 => barcode::ean8(rng),
            Method::Isbn10 => barcode::isbn10(rng),
            Method::Isbn13 => barcode::isbn13(rng),
            Method::ColorName => color::color_name(rng),
            Method::SafeColorName => color::safe_color_name(rng),
            Method::HexColor => color::hex_color(rng),
            Method::SafeHexColor => color::safe_hex_color(rng),
            Method::RgbColor => color::rgb_color(rng),
            Method::RgbCssColor => color::rgb_css_color(rng),
            Method::Job => misc::job(data, rng),
            Method::LicensePlate => misc::license_plate(data, rng),
            Method::Md5 => misc::md5(rng),
            Method::Sha1 => misc::sha1(rng),
            Method::Sha256 => misc::sha256(rng),
            Method::Locale => misc::locale(rng),
            Method::LanguageCode => misc::language_code(rng),
            Method::Uuid4 => misc::uuid4(rng),
            Method::Password => misc::password(misc::PASSWORD_LENGTH, rng),
        };
        Ok(FakeValue::Text(text))
    }
}

/// Decode `[Int(sentences), Bool(variable)]`; both are optional.
fn paragraph_args(args: &[FakeArg]) -> Result<(usize, bool), GeneratorError> {
    let invalid = |reason: &str| GeneratorError::InvalidArgument {
        method: "paragraph".to_string(),
        reason: reason.to_string(),
    };

    let sentences = match args.first() {
        None => lorem::DEFAULT_SENTENCES,
        Some(arg) => {
            let n = arg
                .as_int()
                .ok_or_else(|| invalid("sentence count must be an integer"))?;
            usize::try_from(n).map_err(|_| invalid("sentence count must not be negative"))?
        }
    };
    let variable = match args.get(1) {
        None => true,
        Some(arg) => arg
            .as_bool()
            .ok_or_else(|| invalid("variable flag must be a boolean"))?,
    };
    if args.len() > 2 {
        return Err(invalid("too many arguments"));
    }

    Ok((sentences, variable))
}

impl Generator for LocaleGenerator {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn supports(&self, method_key: &str) -> bool {
        Method::from_key(method_key).is_some_and(|method| self.has(method))
    }

    fn invoke(
        &self,
        method_key: &str,
        args: &[FakeArg],
        rng: &mut dyn RngCore,
    ) -> Result<FakeValue, GeneratorError> {
        let method = Method::from_key(method_key)
            .filter(|method| self.has(*method))
            .ok_or_else(|| self.unsupported(method_key))?;
        self.generate(method, args, rng)
    }
}

/// Factory for the built-in locale providers.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinFactory;

impl GeneratorFactory for BuiltinFactory {
    fn create(&self, locale: &str) -> Result<Arc<dyn Generator>, GeneratorError> {
        let generator = LocaleGenerator::new(locale)?;
        debug!(
            "Created generator for locale {} ({} operations)",
            locale,
            generator.methods().count()
        );
        Ok(Arc::new(generator))
    }
}
