//! Dutch (Netherlands).

use super::{shared, BankFormat, LocaleData};

pub(super) static DATA: LocaleData = LocaleData {
    id: "nl_NL",

    first_names: &[
        "Anna", "Anouk", "Bart", "Bas", "Daan", "Emma", "Eva", "Femke", "Fleur", "Jan",
        "Jasper", "Jeroen", "Julia", "Kees", "Lars", "Lieke", "Lotte", "Lucas", "Maarten",
        "Marieke", "Mark", "Niels", "Noor", "Pieter", "Rob", "Ruben", "Sanne", "Sem",
        "Sophie", "Thijs", "Tim", "Wouter",
    ],
    last_names: &[
        "Bakker", "Bos", "Brouwer", "de Boer", "de Bruijn", "de Graaf", "de Groot", "de Jong",
        "de Vries", "de Wit", "Dekker", "Hendriks", "Jansen", "Janssen", "Kok", "Meijer",
        "Mulder", "Peters", "Smit", "Smits", "van Beek", "van den Berg", "van der Linden",
        "van Dijk", "van Leeuwen", "Vermeulen", "Visser", "Vos",
    ],
    prefixes: &["Dhr.", "Mevr.", "Dr.", "Ir.", "Drs."],
    name_formats: &[
        "{first_name} {last_name}",
        "{first_name} {last_name}",
        "{first_name} {last_name}",
        "{prefix} {first_name} {last_name}",
    ],
    phone_formats: &["+31(0)#########", "+31(0)### ######", "0### ######", "0## #######", "06-########"],
    ssn_formats: Some(&["#########"]),

    street_suffixes: &["straat", "laan", "weg", "plein", "gracht", "singel", "dreef", "kade", "pad"],
    street_name_formats: &["{first_name}{street_suffix}", "{first_name} {last_name}{street_suffix}"],
    street_address_formats: &["{street_name} {building_number}"],
    building_number_formats: &["#", "##", "###", "#?", "##?"],
    cities: &[
        "Almere", "Amersfoort", "Amsterdam", "Apeldoorn", "Arnhem", "Breda", "Delft",
        "Den Haag", "Deventer", "Dordrecht", "Eindhoven", "Enschede", "Groningen", "Haarlem",
        "Hilversum", "Leeuwarden", "Leiden", "Maastricht", "Nijmegen", "Rotterdam",
        "'s-Hertogenbosch", "Tilburg", "Utrecht", "Zaandam", "Zwolle",
    ],
    postcode_formats: &["%### ??"],
    states: None,
    countries: &[
        "Australië", "België", "Brazilië", "Canada", "China", "Denemarken", "Duitsland",
        "Egypte", "Finland", "Frankrijk", "Griekenland", "Ierland", "India", "Italië",
        "Japan", "Luxemburg", "Marokko", "Mexico", "Nederland", "Noorwegen", "Oostenrijk",
        "Polen", "Portugal", "Spanje", "Suriname", "Turkije", "Verenigd Koninkrijk",
        "Verenigde Staten", "Zweden", "Zwitserland",
    ],
    address_formats: &["{street_address}\n{postcode}\n{city}"],

    free_email_domains: &["gmail.com", "hotmail.nl", "hotmail.com", "kpnmail.nl", "live.nl", "ziggo.nl"],
    tlds: &["nl", "nl", "com", "net", "org"],

    company_formats: &["{last_name} {company_suffix}", "{last_name} & {last_name}", "{last_name}"],
    company_suffixes: &["BV", "NV", "VOF", "CV", "& Zonen", "Groep"],
    catch_phrase_words: None,
    bs_words: None,

    jobs: &[
        "Accountant", "Advocaat", "Apotheker", "Architect", "Bakker", "Boekhouder",
        "Brandweerman", "Chauffeur", "Docent", "Elektricien", "Fysiotherapeut", "Huisarts",
        "Ingenieur", "Journalist", "Kapper", "Kok", "Leraar", "Loodgieter", "Monteur",
        "Notaris", "Piloot", "Politieagent", "Programmeur", "Schilder", "Tandarts",
        "Timmerman", "Verpleegkundige", "Vertaler",
    ],
    license_plate_formats: &["??-##-??", "##-???-#", "#-???-##", "??-###-?"],
    bank: Some(BankFormat {
        country: "NL",
        bban_format: "????##########",
    }),
    lorem_words: shared::LOREM_WORDS,
};
