//! French (France).

use super::{shared, BankFormat, LocaleData};

pub(super) static DATA: LocaleData = LocaleData {
    id: "fr_FR",

    first_names: &[
        "Adèle", "Alain", "Alexandre", "Alice", "Amélie", "Antoine", "Aurélie", "Bernard",
        "Camille", "Catherine", "Céline", "Chantal", "Christophe", "Claire", "Daniel",
        "Élise", "Émile", "François", "Guillaume", "Hélène", "Isabelle", "Jacques", "Jean",
        "Julien", "Laurent", "Louis", "Lucas", "Manon", "Marguerite", "Marie", "Michel",
        "Nathalie", "Nicolas", "Philippe", "Pierre", "Sophie", "Thérèse", "Victor",
    ],
    last_names: &[
        "André", "Bernard", "Bertrand", "Blanc", "Bonnet", "Chevalier", "David", "Dubois",
        "Dupont", "Durand", "Fontaine", "Fournier", "François", "Garnier", "Gauthier",
        "Girard", "Guerin", "Lambert", "Laurent", "Lefebvre", "Leroy", "Martin", "Mercier",
        "Michel", "Moreau", "Morel", "Petit", "Richard", "Robert", "Roux", "Simon", "Thomas",
        "Vincent",
    ],
    prefixes: &["M.", "Mme", "Mlle", "Dr", "Pr"],
    name_formats: &[
        "{first_name} {last_name}",
        "{first_name} {last_name}",
        "{first_name} {last_name}",
        "{first_name} {last_name}-{last_name}",
        "{prefix} {first_name} {last_name}",
    ],
    phone_formats: &["+33 (0)# ## ## ## ##", "+33 # ## ## ## ##", "0# ## ## ## ##", "0#########"],
    ssn_formats: Some(&["# ## ## ## ### ### ##"]),

    street_suffixes: &[
        "rue", "avenue", "boulevard", "chemin", "place", "impasse", "allée", "quai", "route",
    ],
    street_name_formats: &[
        "{street_suffix} {last_name}",
        "{street_suffix} de {last_name}",
        "{street_suffix} {first_name} {last_name}",
    ],
    street_address_formats: &["{building_number}, {street_name}", "{building_number} {street_name}"],
    building_number_formats: &["%", "%#", "%#", "%##"],
    cities: &[
        "Aix-en-Provence", "Amiens", "Angers", "Besançon", "Bordeaux", "Brest", "Caen",
        "Clermont-Ferrand", "Dijon", "Grenoble", "Le Havre", "Le Mans", "Lille", "Limoges",
        "Lyon", "Marseille", "Metz", "Montpellier", "Mulhouse", "Nancy", "Nantes", "Nice",
        "Nîmes", "Orléans", "Paris", "Perpignan", "Reims", "Rennes", "Rouen",
        "Saint-Étienne", "Strasbourg", "Toulon", "Toulouse", "Tours", "Villeurbanne",
    ],
    postcode_formats: &["#####"],
    states: None,
    countries: &[
        "Afrique du Sud", "Algérie", "Allemagne", "Argentine", "Australie", "Autriche",
        "Belgique", "Brésil", "Canada", "Chine", "Danemark", "Égypte", "Espagne",
        "États-Unis", "Finlande", "Grèce", "Inde", "Irlande", "Italie", "Japon",
        "Luxembourg", "Maroc", "Mexique", "Norvège", "Pays-Bas", "Pologne", "Portugal",
        "Royaume-Uni", "Sénégal", "Suède", "Suisse", "Tunisie",
    ],
    address_formats: &["{street_address}\n{postcode} {city}"],

    free_email_domains: &["free.fr", "gmail.com", "hotmail.fr", "laposte.net", "orange.fr", "sfr.fr", "wanadoo.fr"],
    tlds: &["fr", "fr", "com", "net", "org"],

    company_formats: &[
        "{last_name} {company_suffix}",
        "{last_name} et {last_name}",
        "{last_name}, {last_name} et {last_name}",
        "{last_name}",
    ],
    company_suffixes: &["SA", "S.A.", "SARL", "S.A.R.L.", "S.A.S.", "et Fils"],
    catch_phrase_words: Some(&[
        &[
            "L'avantage", "La sécurité", "Le pouvoir", "La liberté", "Le confort", "Le plaisir",
            "L'art", "La possibilité", "La simplicité", "La certitude", "L'assurance",
        ],
        &[
            "d'avancer", "d'innover", "de changer", "de concrétiser", "de rouler",
            "de louer", "de réaliser vos projets", "d'évoluer", "de rêver", "d'atteindre vos buts",
        ],
        &[
            "à la pointe", "avant-tout", "de manière efficace", "en toute sécurité",
            "en toute tranquilité", "naturellement", "plus rapidement", "sans soucis",
            "autrement", "de nouvelles idées",
        ],
    ]),
    bs_words: None,

    jobs: &[
        "Agriculteur", "Architecte", "Avocat", "Boulanger", "Chauffeur", "Chirurgien",
        "Comptable", "Cuisinier", "Dentiste", "Électricien", "Enseignant", "Facteur",
        "Fleuriste", "Graphiste", "Infirmier", "Ingénieur", "Journaliste", "Libraire",
        "Maçon", "Mécanicien", "Médecin", "Menuisier", "Notaire", "Pharmacien", "Photographe",
        "Pilote", "Plombier", "Pompier", "Professeur", "Vétérinaire",
    ],
    license_plate_formats: &["??-###-??"],
    bank: Some(BankFormat {
        country: "FR",
        bban_format: "##########???????????##",
    }),
    lorem_words: shared::LOREM_WORDS,
};
