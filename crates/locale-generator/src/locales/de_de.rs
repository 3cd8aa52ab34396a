//! German (Germany).

use super::{shared, BankFormat, LocaleData};

pub(super) static DATA: LocaleData = LocaleData {
    id: "de_DE",

    first_names: &[
        "Anna", "Andreas", "Anja", "Bernd", "Birgit", "Christian", "Claudia", "Daniel",
        "Dieter", "Elke", "Frank", "Gabriele", "Hans", "Heike", "Helga", "Jan", "Jörg",
        "Jürgen", "Karin", "Katharina", "Klaus", "Lukas", "Manfred", "Maria", "Markus",
        "Michael", "Monika", "Petra", "Ralf", "Sabine", "Stefan", "Susanne", "Thomas",
        "Uwe", "Werner", "Wolfgang",
    ],
    last_names: &[
        "Bauer", "Becker", "Braun", "Fischer", "Frank", "Hartmann", "Hoffmann", "Hofmann",
        "Keller", "Klein", "Koch", "Krüger", "Lange", "Lehmann", "Meyer", "Müller", "Neumann",
        "Richter", "Schäfer", "Schmidt", "Schmitz", "Schneider", "Schröder", "Schulz",
        "Schwarz", "Wagner", "Weber", "Werner", "Wolf", "Zimmermann",
    ],
    prefixes: &["Herr", "Frau", "Dr.", "Prof."],
    name_formats: &[
        "{first_name} {last_name}",
        "{first_name} {last_name}",
        "{first_name} {last_name}",
        "{prefix} {first_name} {last_name}",
        "{first_name} {last_name}-{last_name}",
    ],
    phone_formats: &[
        "+49(0)##########",
        "+49(0)#### ######",
        "0#### ######",
        "0### ########",
        "(0####) #####",
    ],
    ssn_formats: None,

    street_suffixes: &["straße", "weg", "gasse", "allee", "platz", "ring", "str."],
    street_name_formats: &["{last_name}{street_suffix}", "{first_name}-{last_name}-{street_suffix}"],
    street_address_formats: &["{street_name} {building_number}"],
    building_number_formats: &["###", "##", "#", "#/#"],
    cities: &[
        "Aachen", "Augsburg", "Berlin", "Bielefeld", "Bochum", "Bonn", "Bremen", "Chemnitz",
        "Dortmund", "Dresden", "Duisburg", "Düsseldorf", "Erfurt", "Essen", "Frankfurt am Main",
        "Freiburg", "Gelsenkirchen", "Hamburg", "Hannover", "Karlsruhe", "Kiel", "Köln",
        "Leipzig", "Lübeck", "Magdeburg", "Mainz", "Mannheim", "München", "Münster",
        "Nürnberg", "Potsdam", "Rostock", "Stuttgart", "Wiesbaden", "Wuppertal",
    ],
    postcode_formats: &["#####"],
    states: Some(&[
        ("Baden-Württemberg", "BW"),
        ("Bayern", "BY"),
        ("Berlin", "BE"),
        ("Brandenburg", "BB"),
        ("Bremen", "HB"),
        ("Hamburg", "HH"),
        ("Hessen", "HE"),
        ("Mecklenburg-Vorpommern", "MV"),
        ("Niedersachsen", "NI"),
        ("Nordrhein-Westfalen", "NW"),
        ("Rheinland-Pfalz", "RP"),
        ("Saarland", "SL"),
        ("Sachsen", "SN"),
        ("Sachsen-Anhalt", "ST"),
        ("Schleswig-Holstein", "SH"),
        ("Thüringen", "TH"),
    ]),
    countries: &[
        "Ägypten", "Argentinien", "Australien", "Belgien", "Brasilien", "China", "Dänemark",
        "Deutschland", "Finnland", "Frankreich", "Griechenland", "Indien", "Irland", "Italien",
        "Japan", "Kanada", "Mexiko", "Neuseeland", "Niederlande", "Norwegen", "Österreich",
        "Polen", "Portugal", "Schweden", "Schweiz", "Spanien", "Südafrika", "Tschechien",
        "Türkei", "Ungarn", "Vereinigtes Königreich", "Vereinigte Staaten von Amerika",
    ],
    address_formats: &["{street_address}\n{postcode} {city}"],

    free_email_domains: &["web.de", "gmx.de", "gmx.net", "t-online.de", "gmail.com", "yahoo.de", "hotmail.de"],
    tlds: &["de", "de", "com", "net", "org", "info", "biz"],

    company_formats: &[
        "{last_name} {company_suffix}",
        "{last_name} {last_name} {company_suffix}",
        "{last_name}",
    ],
    company_suffixes: &["AG", "AG & Co. KG", "GmbH", "GmbH & Co. KG", "GbR", "KG", "OHG", "e.G.", "KGaA"],
    catch_phrase_words: None,
    bs_words: None,

    jobs: &[
        "Altenpfleger", "Apotheker", "Architekt", "Bäcker", "Bankkaufmann", "Bauingenieur",
        "Dachdecker", "Elektroniker", "Erzieher", "Fachinformatiker", "Fliesenleger",
        "Friseur", "Gärtner", "Hebamme", "Industriemechaniker", "Journalist", "Koch",
        "Krankenpfleger", "Lehrer", "Lokführer", "Maler und Lackierer", "Maurer", "Metzger",
        "Notar", "Physiotherapeut", "Polizist", "Rechtsanwalt", "Schreiner", "Steuerberater",
        "Tierarzt", "Zahnarzt",
    ],
    license_plate_formats: &["?-?? ###", "??-?? ###", "???-? ####", "?-? ####"],
    bank: Some(BankFormat {
        country: "DE",
        bban_format: "##################",
    }),
    lorem_words: shared::LOREM_WORDS,
};
