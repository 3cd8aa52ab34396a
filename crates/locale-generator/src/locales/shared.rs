//! Tables shared by every locale.

pub static LOREM_WORDS: &[&str] = &[
    "a", "ab", "accusamus", "accusantium", "ad", "adipisci", "alias", "aliquam", "amet",
    "animi", "aperiam", "architecto", "asperiores", "aspernatur", "atque", "aut", "autem",
    "beatae", "blanditiis", "commodi", "consectetur", "consequatur", "corporis", "culpa",
    "cum", "cumque", "cupiditate", "debitis", "delectus", "deleniti", "deserunt", "dicta",
    "dignissimos", "distinctio", "dolor", "dolore", "dolorem", "doloremque", "dolores",
    "doloribus", "dolorum", "ducimus", "ea", "eaque", "earum", "eius", "eligendi", "enim",
    "eos", "error", "esse", "est", "et", "eum", "eveniet", "ex", "excepturi", "exercitationem",
    "expedita", "explicabo", "facere", "facilis", "fuga", "fugiat", "fugit", "harum", "hic",
    "id", "illo", "illum", "impedit", "in", "incidunt", "inventore", "ipsa", "ipsam", "ipsum",
    "iste", "itaque", "iure", "iusto", "labore", "laboriosam", "laborum", "laudantium",
    "libero", "magnam", "magni", "maiores", "maxime", "minima", "minus", "modi", "molestiae",
    "mollitia", "natus", "necessitatibus", "nemo", "neque", "nesciunt", "nihil", "nisi",
    "nobis", "non", "nostrum", "nulla", "numquam", "obcaecati", "odio", "odit", "officia",
    "officiis", "omnis", "optio", "pariatur", "perferendis", "perspiciatis", "placeat",
    "porro", "possimus", "praesentium", "provident", "quae", "quaerat", "quam", "quas",
    "quasi", "qui", "quia", "quibusdam", "quidem", "quis", "quisquam", "quo", "quod", "quos",
    "ratione", "recusandae", "reiciendis", "rem", "repellat", "repellendus", "reprehenderit",
    "repudiandae", "rerum", "saepe", "sapiente", "sed", "sequi", "similique", "sint", "sit",
    "soluta", "sunt", "suscipit", "tempora", "tempore", "temporibus", "tenetur", "totam",
    "ullam", "unde", "ut", "vel", "velit", "veniam", "veritatis", "vero", "vitae",
    "voluptas", "voluptate", "voluptatem", "voluptates", "voluptatibus", "voluptatum",
];

pub static COLOR_NAMES: &[&str] = &[
    "AliceBlue", "AntiqueWhite", "Aqua", "Aquamarine", "Azure", "Beige", "Bisque", "Black",
    "BlanchedAlmond", "Blue", "BlueViolet", "Brown", "BurlyWood", "CadetBlue", "Chartreuse",
    "Chocolate", "Coral", "CornflowerBlue", "Cornsilk", "Crimson", "Cyan", "DarkBlue",
    "DarkCyan", "DarkGoldenRod", "DarkGray", "DarkGreen", "DarkKhaki", "DarkMagenta",
    "DarkOliveGreen", "DarkOrange", "DarkOrchid", "DarkRed", "DarkSalmon", "DarkSeaGreen",
    "DarkSlateBlue", "DarkTurquoise", "DeepPink", "DeepSkyBlue", "DimGray", "DodgerBlue",
    "FireBrick", "ForestGreen", "Fuchsia", "Gainsboro", "Gold", "GoldenRod", "Gray", "Green",
    "HoneyDew", "HotPink", "IndianRed", "Indigo", "Ivory", "Khaki", "Lavender", "LawnGreen",
    "LemonChiffon", "LightBlue", "LightCoral", "LightGreen", "LightPink", "LightSalmon",
    "Lime", "LimeGreen", "Linen", "Magenta", "Maroon", "MediumBlue", "MediumOrchid",
    "MidnightBlue", "MintCream", "MistyRose", "Moccasin", "Navy", "OldLace", "Olive",
    "OliveDrab", "Orange", "OrangeRed", "Orchid", "PaleGreen", "PapayaWhip", "PeachPuff",
    "Peru", "Pink", "Plum", "PowderBlue", "Purple", "Red", "RosyBrown", "RoyalBlue",
    "SaddleBrown", "Salmon", "SandyBrown", "SeaGreen", "SeaShell", "Sienna", "Silver",
    "SkyBlue", "SlateBlue", "SlateGray", "Snow", "SpringGreen", "SteelBlue", "Tan", "Teal",
    "Thistle", "Tomato", "Turquoise", "Violet", "Wheat", "White", "WhiteSmoke", "Yellow",
    "YellowGreen",
];

pub static SAFE_COLOR_NAMES: &[&str] = &[
    "black", "maroon", "green", "navy", "olive", "purple", "teal", "lime", "blue", "silver",
    "gray", "yellow", "fuchsia", "aqua", "white",
];

pub static CURRENCIES: &[(&str, &str)] = &[
    ("AUD", "Australian dollar"),
    ("BRL", "Brazilian real"),
    ("CAD", "Canadian dollar"),
    ("CHF", "Swiss franc"),
    ("CNY", "Chinese yuan"),
    ("CZK", "Czech koruna"),
    ("DKK", "Danish krone"),
    ("EUR", "Euro"),
    ("GBP", "Pound sterling"),
    ("HKD", "Hong Kong dollar"),
    ("HUF", "Hungarian forint"),
    ("INR", "Indian rupee"),
    ("ISK", "Icelandic króna"),
    ("JPY", "Japanese yen"),
    ("KRW", "Korean won"),
    ("MXN", "Mexican peso"),
    ("NOK", "Norwegian krone"),
    ("NZD", "New Zealand dollar"),
    ("PLN", "Polish zloty"),
    ("RUB", "Russian ruble"),
    ("SEK", "Swedish krona"),
    ("SGD", "Singapore dollar"),
    ("THB", "Thai baht"),
    ("TRY", "Turkish lira"),
    ("USD", "United States dollar"),
    ("ZAR", "South African rand"),
];

pub static CRYPTOCURRENCIES: &[(&str, &str)] = &[
    ("ADA", "Cardano"),
    ("BCH", "Bitcoin Cash"),
    ("BTC", "Bitcoin"),
    ("DASH", "Dash"),
    ("DOGE", "Dogecoin"),
    ("ETC", "Ethereum Classic"),
    ("ETH", "Ethereum"),
    ("LTC", "Litecoin"),
    ("NEO", "Neo"),
    ("XLM", "Stellar"),
    ("XMR", "Monero"),
    ("XRP", "Ripple"),
    ("ZEC", "Zcash"),
];

pub static TIMEZONES: &[&str] = &[
    "Africa/Cairo", "Africa/Johannesburg", "Africa/Lagos", "Africa/Nairobi",
    "America/Argentina/Buenos_Aires", "America/Bogota", "America/Chicago", "America/Denver",
    "America/Los_Angeles", "America/Mexico_City", "America/New_York", "America/Sao_Paulo",
    "America/Toronto", "Asia/Bangkok", "Asia/Dubai", "Asia/Hong_Kong", "Asia/Jakarta",
    "Asia/Kolkata", "Asia/Seoul", "Asia/Shanghai", "Asia/Singapore", "Asia/Tehran",
    "Asia/Tokyo", "Atlantic/Reykjavik", "Australia/Perth", "Australia/Sydney",
    "Europe/Amsterdam", "Europe/Berlin", "Europe/Brussels", "Europe/Dublin",
    "Europe/Helsinki", "Europe/Istanbul", "Europe/Lisbon", "Europe/London", "Europe/Madrid",
    "Europe/Moscow", "Europe/Paris", "Europe/Rome", "Europe/Stockholm", "Europe/Warsaw",
    "Pacific/Auckland", "Pacific/Honolulu",
];

pub static LANGUAGE_CODES: &[&str] = &[
    "ar", "bg", "bs", "cs", "da", "de", "el", "en", "es", "et", "fa", "fi", "fr", "he", "hi",
    "hr", "hu", "id", "it", "ja", "ka", "ko", "la", "lt", "lv", "ne", "nl", "no", "pl", "pt",
    "ru", "sk", "sl", "sv", "th", "tr", "tw", "uk", "zh",
];

pub static URI_PAGES: &[&str] = &[
    "index", "home", "search", "main", "post", "homepage", "category", "register", "login",
    "faq", "about", "terms", "privacy", "author",
];

pub static URI_PATHS: &[&str] = &[
    "app", "main", "wp-content", "search", "category", "tag", "categories", "tags", "blog",
    "posts", "list", "explore",
];

pub static URI_EXTENSIONS: &[&str] = &[".html", ".html", ".html", ".htm", ".htm", ".php", ".php", ".jsp", ".asp"];

pub static SAFE_EMAIL_TLDS: &[&str] = &["org", "com", "net"];

pub static USER_AGENT_FORMATS: &[&str] = &[
    "Mozilla/5.0 (Windows NT {win_version}; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{chrome_version} Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X {mac_version}) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/{safari_version} Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64; rv:{firefox_version}) Gecko/20100101 Firefox/{firefox_version}",
    "Mozilla/5.0 (Windows NT {win_version}; Win64; x64; rv:{firefox_version}) Gecko/20100101 Firefox/{firefox_version}",
    "Opera/9.80 (X11; Linux i686; en-US) Presto/2.12.{opera_build} Version/12.{opera_minor}",
];

/// Card networks: (provider name, number prefixes, number length, security code length).
pub static CREDIT_CARDS: &[(&str, &[&str], usize, usize)] = &[
    ("VISA 16 digit", &["4"], 16, 3),
    ("VISA 13 digit", &["4"], 13, 3),
    ("VISA 19 digit", &["4"], 19, 3),
    ("Mastercard", &["51", "52", "53", "54", "55", "2221", "2720"], 16, 3),
    ("American Express", &["34", "37"], 15, 4),
    ("Discover", &["6011", "65"], 16, 3),
    ("Diners Club / Carte Blanche", &["300", "301", "302", "303", "304", "305", "36", "38"], 14, 3),
    ("JCB 16 digit", &["3528", "3589"], 16, 3),
    ("JCB 15 digit", &["2131", "1800"], 15, 3),
    ("Maestro", &["5018", "5020", "5038", "6304"], 12, 3),
];
