//! US state name utilities.
//!
//! Provides mappings between full state names and two-letter state
//! abbreviations for the 50 US states + DC.

/// `(name, abbreviation)` pairs for the 50 states + DC.
pub const STATES: &[(&str, &str)] = &[
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("District of Columbia", "DC"),
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
];

/// Maps a full state name to its two-letter abbreviation.
///
/// Matching is case-insensitive and ignores surrounding whitespace.
/// `"Washington DC"` is accepted as an alias for the District of Columbia.
/// Returns `None` for unrecognized names.
#[must_use]
pub fn abbr_for_name(name: &str) -> Option<&'static str> {
    let name = name.trim();
    if name.eq_ignore_ascii_case("Washington DC") || name.eq_ignore_ascii_case("Washington D.C.")
    {
        return Some("DC");
    }

    STATES
        .iter()
        .find(|(state, _)| state.eq_ignore_ascii_case(name))
        .map(|(_, abbr)| *abbr)
}

/// Maps a two-letter abbreviation to the full state name.
///
/// Returns `None` for unrecognized abbreviations.
#[must_use]
pub fn name_for_abbr(abbr: &str) -> Option<&'static str> {
    let abbr = abbr.trim();
    STATES
        .iter()
        .find(|(_, a)| a.eq_ignore_ascii_case(abbr))
        .map(|(name, _)| *name)
}
