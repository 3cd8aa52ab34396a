//! English (Great Britain).

use super::{shared, BankFormat, LocaleData};

pub(super) static DATA: LocaleData = LocaleData {
    id: "en_GB",

    first_names: &[
        "Alfie", "Amelia", "Archie", "Charlie", "Charlotte", "Chloe", "Daniel", "Ella",
        "Emily", "Ethan", "Evie", "Freya", "George", "Grace", "Harry", "Isabella", "Isla",
        "Jack", "Jacob", "James", "Jessica", "Joshua", "Lily", "Mia", "Noah", "Oliver",
        "Olivia", "Oscar", "Poppy", "Ruby", "Samuel", "Sophie", "Thomas", "William",
    ],
    last_names: &[
        "Allen", "Bailey", "Baker", "Bell", "Brown", "Clarke", "Cooper", "Davies", "Edwards",
        "Evans", "Green", "Hall", "Harris", "Hughes", "Jackson", "James", "Johnson", "Jones",
        "King", "Lewis", "Martin", "Morgan", "Morris", "Parker", "Patel", "Roberts",
        "Robinson", "Smith", "Taylor", "Thomas", "Turner", "Walker", "Ward", "Watson",
        "White", "Williams", "Wilson", "Wood", "Wright",
    ],
    prefixes: &["Mr", "Mrs", "Ms", "Miss", "Dr"],
    name_formats: &[
        "{first_name} {last_name}",
        "{first_name} {last_name}",
        "{first_name} {last_name}",
        "{prefix} {first_name} {last_name}",
    ],
    phone_formats: &[
        "+44(0)#### ######",
        "+44(0)#### #####",
        "0#### ######",
        "0#### #####",
        "(0####) ######",
        "0### #### ####",
    ],
    ssn_formats: None,

    street_suffixes: &[
        "Avenue", "Close", "Crescent", "Drive", "Gardens", "Green", "Grove", "Hill", "Lane",
        "Mews", "Place", "Road", "Row", "Square", "Street", "Terrace", "View", "Way",
    ],
    street_name_formats: &["{first_name} {street_suffix}", "{last_name} {street_suffix}"],
    street_address_formats: &["{building_number} {street_name}", "Flat {building_number} {street_name}"],
    building_number_formats: &["#", "##", "###"],
    cities: &[
        "Aberdeen", "Bath", "Belfast", "Birmingham", "Bradford", "Brighton", "Bristol",
        "Cambridge", "Cardiff", "Coventry", "Derby", "Edinburgh", "Exeter", "Glasgow",
        "Leeds", "Leicester", "Liverpool", "London", "Manchester", "Newcastle", "Norwich",
        "Nottingham", "Oxford", "Plymouth", "Portsmouth", "Sheffield", "Southampton",
        "Swansea", "York",
    ],
    postcode_formats: &["?# #??", "?## #??", "??# #??", "??## #??"],
    states: None,
    countries: &[
        "Australia", "Belgium", "Canada", "Denmark", "France", "Germany", "Ghana", "India",
        "Ireland", "Italy", "Jamaica", "Kenya", "Malta", "Netherlands", "New Zealand",
        "Nigeria", "Pakistan", "Portugal", "Singapore", "South Africa", "Spain", "Sweden",
        "United Kingdom", "United States of America",
    ],
    address_formats: &["{street_address}\n{city}\n{postcode}"],

    free_email_domains: &["gmail.com", "hotmail.co.uk", "yahoo.co.uk", "btinternet.com"],
    tlds: &["co.uk", "co.uk", "com", "org.uk", "net", "org"],

    company_formats: &[
        "{last_name} {company_suffix}",
        "{last_name}-{last_name}",
        "{last_name}, {last_name} and {last_name}",
    ],
    company_suffixes: &["Ltd", "PLC", "LLP", "and Sons", "Group"],
    catch_phrase_words: None,
    bs_words: None,

    jobs: &[
        "Accountant, chartered", "Barrister", "Bookseller", "Building surveyor",
        "Chartered loss adjuster", "Chef", "Clinical psychologist", "Conservator, museum/gallery",
        "Solicitor", "Estate agent", "Farm manager", "Fitness centre manager",
        "General practice doctor", "Hospital pharmacist", "Local government officer",
        "Magistrate", "Police constable", "Postman", "Publican", "Quantity surveyor",
        "Secondary school teacher", "Social worker", "Town planner", "Veterinary surgeon",
    ],
    license_plate_formats: &["??## ???", "??##???"],
    bank: Some(BankFormat {
        country: "GB",
        bban_format: "????##############",
    }),
    lorem_words: shared::LOREM_WORDS,
};
