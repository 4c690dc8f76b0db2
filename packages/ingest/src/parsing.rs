//! Field-level parsing for the brewery export.
//!
//! The export packs lists into single CSV cells: nearby cities as
//! `index-dist|index-dist|...` and beer styles as
//! `abv-score-reviews|...`. An empty cell is an empty list.

use brew_map_brewery_models::{Beer, CityProximity};

/// Longest display name kept for a brewery.
pub const MAX_NAME_LEN: usize = 35;

/// Parses a packed nearby-city list.
///
/// # Errors
///
/// Returns a description of the first malformed entry.
pub fn parse_cities(raw: &str) -> Result<Vec<CityProximity>, String> {
    split_entries(raw)
        .map(|entry| {
            let parts: Vec<&str> = entry.split('-').collect();
            let [index, dist] = parts.as_slice() else {
                return Err(format!("expected index-dist, got {entry:?}"));
            };
            let index = index
                .trim()
                .parse::<u32>()
                .map_err(|e| format!("bad city index in {entry:?}: {e}"))?;
            let dist = parse_finite(dist, entry)?;
            Ok(CityProximity { index, dist })
        })
        .collect()
}

/// Parses a packed beer list.
///
/// # Errors
///
/// Returns a description of the first malformed entry.
pub fn parse_beers(raw: &str) -> Result<Vec<Beer>, String> {
    split_entries(raw)
        .map(|entry| {
            let parts: Vec<&str> = entry.split('-').collect();
            let [abv, score, reviews] = parts.as_slice() else {
                return Err(format!("expected abv-score-reviews, got {entry:?}"));
            };
            Ok(Beer {
                abv: parse_finite(abv, entry)?,
                score: parse_finite(score, entry)?,
                reviews: reviews
                    .trim()
                    .parse::<u32>()
                    .map_err(|e| format!("bad review count in {entry:?}: {e}"))?,
            })
        })
        .collect()
}

fn split_entries(raw: &str) -> impl Iterator<Item = &str> {
    raw.split('|').map(str::trim).filter(|s| !s.is_empty())
}

/// Parses a non-negative finite number. Negative values cannot appear in
/// the packed format since `-` is the separator.
fn parse_finite(raw: &str, entry: &str) -> Result<f64, String> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad number {raw:?} in {entry:?}: {e}"))?;
    if !value.is_finite() {
        return Err(format!("non-finite number {raw:?} in {entry:?}"));
    }
    Ok(value)
}

/// Cleans a brewery name for display.
///
/// Drops anything from the first `(` or `/` onward and caps the result at
/// [`MAX_NAME_LEN`] characters, ending long names with `...`.
#[must_use]
pub fn clean_name(name: &str) -> String {
    let first = name.split(['(', '/']).next().unwrap_or_default();
    let first: String = first.chars().take(MAX_NAME_LEN).collect();

    if first.chars().count() > MAX_NAME_LEN - 3 {
        let cut: String = first.chars().take(MAX_NAME_LEN - 3).collect();
        return format!("{cut}...");
    }
    first
}
