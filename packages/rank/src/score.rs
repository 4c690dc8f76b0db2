//! City scoring.
//!
//! Aggregates reduced breweries per city into a [`ScoredCity`]. Every city
//! passed in here must appear in the reduction's presence set, so each
//! scored city has at least one brewery and every brewery has a non-zero
//! review total; the weighted mean therefore never divides by zero.

use std::collections::BTreeMap;

use brew_map_brewery_models::City;
use brew_map_rank_models::ScoredCity;

use crate::reduce::{ReducedBrewery, Reduction};

/// Number of brewery names kept per city.
pub const TOP_BREWERIES: usize = 5;

/// Returns the cities referenced by the reduction, in city input order.
#[must_use]
pub fn reduce_cities<'a>(cities: &'a [City], reduction: &Reduction) -> Vec<&'a City> {
    cities
        .iter()
        .filter(|c| reduction.city_indices.contains(&c.index))
        .collect()
}

/// Review-weighted mean score over a set of breweries.
#[allow(clippy::cast_precision_loss)]
fn tally_score(breweries: &[&ReducedBrewery]) -> f64 {
    let total: f64 = breweries.iter().map(|b| b.beers.score).sum();
    let reviews: u64 = breweries.iter().map(|b| b.beers.reviews).sum();
    total / reviews as f64
}

/// Names of the best breweries by mean score, descending. Ties keep input
/// order.
fn top_breweries(breweries: &[&ReducedBrewery]) -> Vec<String> {
    let mut ranked: Vec<(f64, &str)> = breweries
        .iter()
        .map(|b| (b.beers.mean(), b.name.as_str()))
        .collect();
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));
    ranked
        .into_iter()
        .take(TOP_BREWERIES)
        .map(|(_, name)| name.to_string())
        .collect()
}

/// Scores each city against its attributing breweries and drops cities
/// with fewer than `nearby` of them.
#[must_use]
pub fn score_cities(cities: &[&City], reduction: &Reduction, nearby: usize) -> Vec<ScoredCity> {
    let mut by_city: BTreeMap<u32, Vec<&ReducedBrewery>> = BTreeMap::new();
    for brewery in &reduction.breweries {
        by_city.entry(brewery.city_index).or_default().push(brewery);
    }

    let scored: Vec<ScoredCity> = cities
        .iter()
        .filter_map(|city| {
            let breweries = by_city.get(&city.index)?;
            if breweries.is_empty() || breweries.len() < nearby {
                return None;
            }

            Some(ScoredCity {
                city: (*city).clone(),
                score: tally_score(breweries),
                count: breweries.len(),
                brewery_names: top_breweries(breweries),
                brewery_coords: breweries.iter().map(|b| b.coordinates).collect(),
            })
        })
        .collect();

    log::debug!(
        "Scored {} of {} candidate cities (nearby={nearby})",
        scored.len(),
        cities.len(),
    );

    scored
}
