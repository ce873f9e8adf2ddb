//! Fixed vocabularies shared by the generator, the row shaper and `verify`.

/// Content rating codes from the major rating systems (MPA, BBFC, CBFC,
/// ACB, ESRB, US TV guidelines, ...).
pub const AGE_CERTIFICATIONS: &[&str] = &[
    "G", "PG", "PG-13", "R", "NC-17", "U", "U/A", "A", "S", "AL", "6", "9", "12", "12A", "15",
    "18", "18R", "R18", "R21", "M", "MA15+", "R16", "R18+", "X18", "T", "E", "E10+", "EC", "C",
    "CA", "GP", "M/PG", "TV-Y", "TV-Y7", "TV-G", "TV-PG", "TV-14", "TV-MA",
];

/// Job roles a credit can carry
pub const ROLES: &[&str] = &[
    "Director",
    "Producer",
    "Screenwriter",
    "Actor",
    "Actress",
    "Cinematographer",
    "Film Editor",
    "Production Designer",
    "Costume Designer",
    "Music Composer",
];

/// Genre names drawn for the `genres` column
pub const GENRES: &[&str] = &[
    "Rock",
    "Pop",
    "Hip Hop",
    "Jazz",
    "Blues",
    "Country",
    "Classical",
    "Electronic",
    "Folk",
    "Reggae",
    "Latin",
    "Metal",
    "Soul",
    "Funk",
    "Rap",
    "World",
    "Stage And Screen",
    "Non Music",
    "Children's",
    "Easy Listening",
];

pub fn is_age_certification(code: &str) -> bool {
    AGE_CERTIFICATIONS.contains(&code)
}

pub fn is_role(role: &str) -> bool {
    ROLES.contains(&role)
}
