#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! City ranking engine.
//!
//! Turns per-brewery and per-city records into an ordered ranking of
//! cities by microbrew quality. The work is split into two tiers:
//!
//! 1. [`reduce_and_score`] joins breweries to cities under a set of
//!    [`RankFilters`] and aggregates per-city statistics. It is the
//!    expensive step and only needs re-running when the filters change.
//! 2. [`apply_weights`] normalizes and combines those statistics under a
//!    [`Balance`] and sorts the result. It is cheap and can run on every
//!    slider movement against a cached base ranking.
//!
//! Both operations are pure: they take their inputs explicitly and return
//! freshly built sequences owned by the caller.

pub mod reduce;
pub mod scale;
pub mod score;
pub mod weigh;

use brew_map_brewery_models::{Brewery, City};
use brew_map_rank_models::{Balance, RankFilters, RankedCity, ScoredCity};

/// Reduces breweries to cities and scores each qualifying city.
///
/// The output is in city input order and is not ranked; pass it to
/// [`apply_weights`] for the final ordering. At most `filters.max` cities
/// are returned.
#[must_use]
pub fn reduce_and_score(
    cities: &[City],
    breweries: &[Brewery],
    filters: &RankFilters,
) -> Vec<ScoredCity> {
    let reduction = reduce::reduce_breweries(breweries, filters.dist, filters.abv);
    let candidates = score::reduce_cities(cities, &reduction);
    let mut scored = score::score_cities(&candidates, &reduction, filters.nearby);
    scored.truncate(filters.max);
    scored
}

/// Weighs and ranks a base ranking produced by [`reduce_and_score`].
///
/// Ranks the full candidate set; callers truncate the result to however
/// many rows they display.
#[must_use]
pub fn apply_weights(base: &[ScoredCity], balance: Balance) -> Vec<RankedCity> {
    weigh::weigh(base, balance)
}

#[cfg(test)]
mod tests {
    use brew_map_brewery_models::{AbvBand, Beer, CityProximity, Coordinates};

    use super::*;

    fn city(index: u32, name: &str) -> City {
        City {
            index,
            name: name.to_string(),
            state: "Vermont".to_string(),
            state_abbr: Some("VT".to_string()),
            coordinates: Coordinates {
                lat: 44.5,
                lng: -73.2,
            },
            population: 42_000,
        }
    }

    fn brewery(
        name: &str,
        home: Option<u32>,
        nearby: &[(u32, f64)],
        beers: &[(f64, f64, u32)],
    ) -> Brewery {
        Brewery {
            name: name.to_string(),
            coordinates: Coordinates {
                lat: 44.4,
                lng: -73.1,
            },
            year: None,
            city_index: home,
            cities: nearby
                .iter()
                .map(|&(index, dist)| CityProximity { index, dist })
                .collect(),
            beers: beers
                .iter()
                .map(|&(abv, score, reviews)| Beer {
                    abv,
                    score,
                    reviews,
                })
                .collect(),
        }
    }

    fn fixture() -> (Vec<City>, Vec<Brewery>) {
        let cities = vec![city(0, "Burlington"), city(1, "Waterbury"), city(2, "Stowe")];
        let breweries = vec![
            brewery("A", Some(0), &[], &[(5.0, 4.0, 10)]),
            brewery("B", None, &[(0, 3.0)], &[(5.0, 5.0, 1)]),
            brewery("C", Some(1), &[(0, 12.0)], &[(8.0, 4.6, 40), (3.5, 3.2, 5)]),
            brewery("D", None, &[(1, 8.0), (2, 1.0)], &[(6.2, 4.3, 25)]),
            brewery("E", None, &[(2, 25.0)], &[(5.0, 4.9, 100)]),
            brewery("F", Some(1), &[], &[(4.5, 3.9, 12)]),
        ];
        (cities, breweries)
    }

    fn permissive() -> RankFilters {
        RankFilters {
            nearby: 1,
            ..RankFilters::default()
        }
    }

    #[test]
    fn review_weighted_city_score() {
        let (cities, breweries) = fixture();
        let base = reduce_and_score(&cities, &breweries, &permissive());

        let burlington = base.iter().find(|c| c.city.index == 0).unwrap();
        assert_eq!(burlington.count, 2);
        assert!((burlington.score - 45.0 / 11.0).abs() < 1e-9);
    }

    #[test]
    fn base_ranking_keeps_city_order_and_drops_unreached() {
        let (cities, breweries) = fixture();
        let base = reduce_and_score(&cities, &breweries, &permissive());

        // Stowe is only reachable by E, which is 25 away.
        let indices: Vec<u32> = base.iter().map(|c| c.city.index).collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(base[1].count, 3);
    }

    #[test]
    fn abv_band_changes_attribution() {
        let (cities, breweries) = fixture();
        let filters = RankFilters {
            abv: AbvBand::Heavy,
            ..permissive()
        };
        let base = reduce_and_score(&cities, &breweries, &filters);
        assert_eq!(base.len(), 1);
        assert_eq!(base[0].city.index, 1);
        assert_eq!(base[0].brewery_names, ["C"]);
        assert!((base[0].score - 4.6).abs() < 1e-9);
    }

    #[test]
    fn max_bounds_base_ranking() {
        let (cities, breweries) = fixture();
        let filters = RankFilters {
            max: 1,
            ..permissive()
        };
        assert_eq!(reduce_and_score(&cities, &breweries, &filters).len(), 1);

        let filters = RankFilters {
            max: 0,
            ..permissive()
        };
        assert!(reduce_and_score(&cities, &breweries, &filters).is_empty());
    }

    #[test]
    fn default_nearby_threshold_excludes_small_cities() {
        let (cities, breweries) = fixture();
        let base = reduce_and_score(&cities, &breweries, &RankFilters::default());
        assert!(base.is_empty());
        assert!(apply_weights(&base, Balance::default()).is_empty());
    }

    #[test]
    fn reweighting_reuses_base_ranking() {
        let (cities, breweries) = fixture();
        let base = reduce_and_score(&cities, &breweries, &permissive());

        let quality_first = apply_weights(&base, Balance::from_quantity(0.0));
        let quantity_first = apply_weights(&base, Balance::from_quantity(100.0));
        assert_eq!(quality_first, apply_weights(&base, Balance::from_quantity(0.0)));

        let top = |ranked: &[RankedCity]| ranked[0].scored.city.index;
        assert_eq!(top(&quantity_first), 1);
        assert_eq!(
            top(&quality_first),
            if base[0].score > base[1].score { 0 } else { 1 }
        );
    }

    #[test]
    fn full_pipeline_is_deterministic() {
        let (cities, breweries) = fixture();
        let run = || {
            let base = reduce_and_score(&cities, &breweries, &permissive());
            apply_weights(&base, Balance::default())
        };
        let first = run();
        assert_eq!(first, run());

        let ranks: Vec<usize> = first.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, (0..first.len()).collect::<Vec<_>>());
    }
}
