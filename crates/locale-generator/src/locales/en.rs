//! English (United States).

use super::{shared, LocaleData};

pub(super) static DATA: LocaleData = LocaleData {
    id: "en",

    first_names: &[
        "Aaron", "Abigail", "Adam", "Alexis", "Amanda", "Andrew", "Ashley", "Brandon",
        "Brian", "Brittany", "Christopher", "Daniel", "David", "Elizabeth", "Emily", "Eric",
        "Heather", "Jacob", "James", "Jennifer", "Jessica", "John", "Joseph", "Joshua",
        "Justin", "Kayla", "Laura", "Lauren", "Matthew", "Megan", "Melissa", "Michael",
        "Nicole", "Rachel", "Robert", "Ryan", "Samantha", "Sarah", "Stephanie", "Tyler",
    ],
    last_names: &[
        "Adams", "Allen", "Anderson", "Baker", "Brown", "Campbell", "Carter", "Clark",
        "Davis", "Evans", "Garcia", "Green", "Hall", "Harris", "Hernandez", "Hill", "Jackson",
        "Johnson", "Jones", "King", "Lee", "Lewis", "Lopez", "Martin", "Martinez", "Miller",
        "Mitchell", "Moore", "Nelson", "Perez", "Roberts", "Robinson", "Rodriguez", "Scott",
        "Smith", "Taylor", "Thomas", "Thompson", "Walker", "White", "Williams", "Wilson",
        "Wright", "Young",
    ],
    prefixes: &["Mr.", "Mrs.", "Ms.", "Miss", "Dr."],
    name_formats: &[
        "{first_name} {last_name}",
        "{first_name} {last_name}",
        "{first_name} {last_name}",
        "{first_name} {last_name}",
        "{prefix} {first_name} {last_name}",
    ],
    phone_formats: &[
        "###-###-####",
        "(###)###-####",
        "###.###.####",
        "+1-###-###-####",
        "001-###-###-####",
        "###-###-####x###",
    ],
    ssn_formats: Some(&["###-##-####"]),

    street_suffixes: &[
        "Avenue", "Boulevard", "Court", "Crossing", "Drive", "Highway", "Lane", "Loop", "Park",
        "Place", "Road", "Route", "Square", "Street", "Terrace", "Trail", "Way",
    ],
    street_name_formats: &["{first_name} {street_suffix}", "{last_name} {street_suffix}"],
    street_address_formats: &["{building_number} {street_name}"],
    building_number_formats: &["#####", "####", "###"],
    cities: &[
        "Austin", "Baltimore", "Boston", "Charlotte", "Chicago", "Cleveland", "Columbus",
        "Dallas", "Denver", "Detroit", "El Paso", "Fresno", "Houston", "Indianapolis",
        "Jacksonville", "Kansas City", "Las Vegas", "Louisville", "Memphis", "Milwaukee",
        "Nashville", "Oakland", "Omaha", "Philadelphia", "Phoenix", "Portland", "Sacramento",
        "San Antonio", "San Diego", "Seattle", "Tucson", "Tulsa",
    ],
    postcode_formats: &["#####"],
    states: Some(&[
        ("Alabama", "AL"),
        ("Alaska", "AK"),
        ("Arizona", "AZ"),
        ("Arkansas", "AR"),
        ("California", "CA"),
        ("Colorado", "CO"),
        ("Connecticut", "CT"),
        ("Delaware", "DE"),
        ("Florida", "FL"),
        ("Georgia", "GA"),
        ("Hawaii", "HI"),
        ("Idaho", "ID"),
        ("Illinois", "IL"),
        ("Indiana", "IN"),
        ("Iowa", "IA"),
        ("Kansas", "KS"),
        ("Kentucky", "KY"),
        ("Louisiana", "LA"),
        ("Maine", "ME"),
        ("Maryland", "MD"),
        ("Massachusetts", "MA"),
        ("Michigan", "MI"),
        ("Minnesota", "MN"),
        ("Mississippi", "MS"),
        ("Missouri", "MO"),
        ("Montana", "MT"),
        ("Nebraska", "NE"),
        ("Nevada", "NV"),
        ("New Hampshire", "NH"),
        ("New Jersey", "NJ"),
        ("New Mexico", "NM"),
        ("New York", "NY"),
        ("North Carolina", "NC"),
        ("North Dakota", "ND"),
        ("Ohio", "OH"),
        ("Oklahoma", "OK"),
        ("Oregon", "OR"),
        ("Pennsylvania", "PA"),
        ("Rhode Island", "RI"),
        ("South Carolina", "SC"),
        ("South Dakota", "SD"),
        ("Tennessee", "TN"),
        ("Texas", "TX"),
        ("Utah", "UT"),
        ("Vermont", "VT"),
        ("Virginia", "VA"),
        ("Washington", "WA"),
        ("West Virginia", "WV"),
        ("Wisconsin", "WI"),
        ("Wyoming", "WY"),
    ]),
    countries: &[
        "Argentina", "Australia", "Austria", "Belgium", "Brazil", "Canada", "Chile", "China",
        "Denmark", "Egypt", "Finland", "France", "Germany", "Greece", "India", "Ireland",
        "Italy", "Japan", "Kenya", "Mexico", "Netherlands", "New Zealand", "Norway", "Peru",
        "Poland", "Portugal", "South Africa", "Spain", "Sweden", "Switzerland", "Turkey",
        "United Kingdom", "United States of America",
    ],
    address_formats: &["{street_address}\n{city}, {state_abbr} {postcode}"],

    free_email_domains: &["gmail.com", "yahoo.com", "hotmail.com"],
    tlds: &["com", "com", "com", "com", "net", "org", "biz", "info"],

    company_formats: &[
        "{last_name} {company_suffix}",
        "{last_name}-{last_name}",
        "{last_name}, {last_name} and {last_name}",
    ],
    company_suffixes: &["Inc", "and Sons", "LLC", "Group", "PLC", "Ltd"],
    catch_phrase_words: Some(&[
        &[
            "Adaptive", "Advanced", "Automated", "Balanced", "Business-focused", "Centralized",
            "Cloned", "Configurable", "Cross-platform", "Customer-focused", "Decentralized",
            "Distributed", "Enterprise-wide", "Ergonomic", "Exclusive", "Expanded",
            "Face-to-face", "Focused", "Fundamental", "Implemented", "Innovative", "Integrated",
            "Multi-layered", "Open-source", "Optimized", "Persistent", "Proactive", "Profound",
            "Reactive", "Re-engineered", "Robust", "Seamless", "Secured", "Streamlined",
            "Synergized", "Universal", "User-friendly", "Versatile", "Virtual", "Visionary",
        ],
        &[
            "24/7", "3rdgeneration", "actuating", "analyzing", "asymmetric", "bifurcated",
            "bottom-line", "clear-thinking", "client-driven", "coherent", "context-sensitive",
            "dedicated", "demand-driven", "didactic", "directional", "dynamic", "encompassing",
            "executive", "explicit", "fault-tolerant", "global", "heuristic", "high-level",
            "holistic", "interactive", "intermediate", "local", "logistical", "mission-critical",
            "modular", "motivating", "multimedia", "neutral", "optimizing", "radical",
            "real-time", "regional", "responsive", "scalable", "static", "systematic",
            "tangible", "transitional", "uniform", "value-added", "zero-defect",
        ],
        &[
            "ability", "access", "adapter", "algorithm", "alliance", "analyzer", "application",
            "approach", "architecture", "array", "attitude", "benchmark", "capability",
            "challenge", "circuit", "collaboration", "complexity", "concept", "conglomeration",
            "contingency", "core", "database", "definition", "emulation", "encoding",
            "encryption", "firmware", "flexibility", "forecast", "framework", "function",
            "functionalities", "groupware", "hardware", "hierarchy", "hub", "infrastructure",
            "initiative", "installation", "interface", "knowledgebase", "leverage", "matrix",
            "methodology", "middleware", "migration", "model", "moderator", "monitoring",
            "moratorium", "neural-net", "paradigm", "policy", "portal", "product", "projection",
            "protocol", "service-desk", "software", "solution", "strategy", "structure",
            "success", "superstructure", "support", "synergy", "system", "throughput",
            "time-frame", "toolset", "utilization", "website", "workforce",
        ],
    ]),
    bs_words: Some(&[
        &[
            "aggregate", "architect", "benchmark", "brand", "cultivate", "deliver", "deploy",
            "disintermediate", "drive", "e-enable", "embrace", "empower", "enable", "engage",
            "engineer", "enhance", "envisioneer", "evolve", "expedite", "exploit", "extend",
            "facilitate", "generate", "grow", "harness", "implement", "incentivize",
            "incubate", "innovate", "integrate", "iterate", "leverage", "matrix", "maximize",
            "mesh", "monetize", "morph", "optimize", "orchestrate", "productize", "redefine",
            "reinvent", "repurpose", "revolutionize", "scale", "seize", "strategize",
            "streamline", "syndicate", "synergize", "synthesize", "target", "transform",
            "transition", "unleash", "utilize", "visualize", "whiteboard",
        ],
        &[
            "24/365", "24/7", "B2B", "B2C", "back-end", "best-of-breed", "bleeding-edge",
            "bricks-and-clicks", "clicks-and-mortar", "collaborative", "compelling",
            "cross-media", "cross-platform", "customized", "cutting-edge", "distributed",
            "dot-com", "dynamic", "e-business", "efficient", "end-to-end", "enterprise",
            "extensible", "frictionless", "front-end", "global", "granular", "holistic",
            "impactful", "innovative", "integrated", "interactive", "intuitive", "killer",
            "leading-edge", "magnetic", "mission-critical", "next-generation", "one-to-one",
            "open-source", "out-of-the-box", "plug-and-play", "proactive", "real-time",
            "revolutionary", "rich", "robust", "scalable", "seamless", "sexy", "sticky",
            "strategic", "synergistic", "transparent", "turn-key", "ubiquitous",
            "user-centric", "value-added", "vertical", "viral", "virtual", "visionary",
            "web-enabled", "wireless", "world-class",
        ],
        &[
            "ROI", "action-items", "applications", "architectures", "bandwidth", "channels",
            "communities", "content", "convergence", "deliverables", "e-business",
            "e-commerce", "e-markets", "e-services", "e-tailers", "experiences", "eyeballs",
            "functionalities", "infomediaries", "infrastructures", "initiatives", "interfaces",
            "markets", "methodologies", "metrics", "mindshare", "models", "networks", "niches",
            "paradigms", "partnerships", "platforms", "portals", "relationships", "schemas",
            "solutions", "supply-chains", "synergies", "systems", "technologies", "users",
            "vortals", "web-readiness", "web services",
        ],
    ]),

    jobs: &[
        "Accountant", "Actuary", "Air traffic controller", "Architect", "Barista",
        "Biomedical engineer", "Chemist", "Civil engineer", "Data scientist", "Dentist",
        "Editor", "Electrician", "Firefighter", "Geologist", "Graphic designer", "Journalist",
        "Landscape architect", "Librarian", "Mechanical engineer", "Nurse", "Optometrist",
        "Paramedic", "Pharmacist", "Physiotherapist", "Pilot", "Police officer",
        "Software engineer", "Surveyor", "Teacher", "Translator", "Veterinary surgeon",
        "Web designer",
    ],
    license_plate_formats: &["???-####", "###-???", "#-?????", "??? ###", "#??-###"],
    bank: None,
    lorem_words: shared::LOREM_WORDS,
};
