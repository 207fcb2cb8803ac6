//! Word lists backing the text generators

pub(crate) const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Alice", "Amara", "Anton", "Beatrix", "Bruno", "Camille", "Carlos", "Chen",
    "Clara", "Dmitri", "Elena", "Emil", "Farah", "Felix", "Greta", "Hana", "Hugo", "Ines",
    "Ivan", "Jonas", "Julia", "Kai", "Kenji", "Lara", "Leon", "Lucia", "Marek", "Maya",
    "Nadia", "Nils", "Olga", "Omar", "Paula", "Priya", "Rafael", "Rosa", "Sami", "Sofia",
    "Tariq", "Thea", "Umar", "Vera", "Viktor", "Wanda", "Yara", "Yusuf", "Zoe", "Zoran",
];

pub(crate) const LAST_NAMES: &[&str] = &[
    "Abbott", "Alvarez", "Bauer", "Bennett", "Castillo", "Chowdhury", "Dalton", "Duarte",
    "Eriksen", "Fischer", "Garcia", "Hartmann", "Hughes", "Ibrahim", "Jansen", "Kowalski",
    "Larsen", "Lindqvist", "Moreau", "Nakamura", "Novak", "Okafor", "Petrov", "Quinn",
    "Ramirez", "Rossi", "Schneider", "Silva", "Tanaka", "Torres", "Underwood", "Vasquez",
    "Weber", "Whitaker", "Xu", "Yilmaz", "Zielinski",
];

pub(crate) const OCCUPATIONS: &[&str] = &[
    "Accountant", "Architect", "Baker", "Biologist", "Carpenter", "Cartographer", "Chemist",
    "Civil Engineer", "Dentist", "Economist", "Electrician", "Editor", "Firefighter",
    "Geologist", "Graphic Designer", "Historian", "Interpreter", "Journalist", "Librarian",
    "Machinist", "Nurse", "Optician", "Pharmacist", "Photographer", "Pilot", "Plumber",
    "Software Developer", "Statistician", "Surveyor", "Teacher", "Translator", "Veterinarian",
];

pub(crate) const STREET_NAMES: &[&str] = &[
    "Acacia", "Birch", "Cedar", "Chestnut", "Elm", "Harbor", "Highland", "Juniper", "Lake",
    "Maple", "Meadow", "Mill", "Oak", "Orchard", "Park", "Pine", "Ridge", "River", "Spruce",
    "Sunset", "Valley", "Willow",
];

pub(crate) const STREET_SUFFIXES: &[&str] = &[
    "Avenue", "Boulevard", "Court", "Drive", "Lane", "Place", "Road", "Street", "Terrace", "Way",
];

pub(crate) const EMAIL_DOMAINS: &[&str] = &[
    "example.com",
    "example.org",
    "example.net",
    "mail.test",
    "inbox.test",
];

pub(crate) const URL_WORDS: &[&str] = &[
    "amber", "atlas", "beacon", "canvas", "cobalt", "delta", "ember", "fable", "garnet",
    "harbor", "indigo", "jasper", "kestrel", "lumen", "meridian", "nimbus", "onyx", "prism",
    "quartz", "raven", "sierra", "tundra", "umbra", "vertex", "willow", "zephyr",
];

pub(crate) const TOP_LEVEL_DOMAINS: &[&str] = &[".com", ".org", ".net", ".io", ".dev", ".app"];

pub(crate) const PASSWORD_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!#$%&*+-=?@^_";
