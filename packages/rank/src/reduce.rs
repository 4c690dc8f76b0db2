//! Brewery reduction.
//!
//! Filters every brewery down to the beers inside the active ABV band and
//! to the single city it is attributed to within the distance threshold.
//! Breweries left without a qualifying beer or city are dropped silently;
//! their absence is the signal, not an error.

use std::collections::BTreeSet;

use brew_map_brewery_models::{AbvBand, Beer, Brewery, CityProximity, Coordinates};

/// Maximum number of cities a single brewery is attributed to.
pub const PER_CITY: usize = 1;

/// Review-weighted beer totals for one brewery.
///
/// `score` is the sum of `beer.score * beer.reviews`, not a mean; divide by
/// `reviews` for the mean. Weighting by reviews means a heavily reviewed
/// 4-star beer outweighs a rarely reviewed 5-star one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeerTally {
    /// Sum of score times reviews over the qualifying beers.
    pub score: f64,
    /// Sum of reviews over the qualifying beers. Always non-zero.
    pub reviews: u64,
}

impl BeerTally {
    /// Mean review score represented by this tally.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> f64 {
        self.score / self.reviews as f64
    }
}

/// A brewery after reduction, attributed to exactly one city.
#[derive(Debug, Clone, PartialEq)]
pub struct ReducedBrewery {
    pub name: String,
    pub coordinates: Coordinates,
    /// Index of the city this brewery is attributed to.
    pub city_index: u32,
    pub beers: BeerTally,
}

/// Output of [`reduce_breweries`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reduction {
    /// Surviving breweries, in input order.
    pub breweries: Vec<ReducedBrewery>,
    /// Indices of every city at least one surviving brewery is attributed to.
    pub city_indices: BTreeSet<u32>,
}

/// Aggregates the beers that fall inside `abv` into a [`BeerTally`].
///
/// Beers with a non-finite ABV or score are treated as absent. Returns
/// `None` when no beer qualifies or the qualifying beers carry no reviews.
#[must_use]
pub fn compact_beers(beers: &[Beer], abv: AbvBand) -> Option<BeerTally> {
    let mut qualifying = beers
        .iter()
        .filter(|b| b.abv.is_finite() && b.score.is_finite() && abv.contains(b.abv))
        .peekable();
    qualifying.peek()?;

    let (score, reviews) = qualifying.fold((0.0, 0_u64), |(score, reviews), beer| {
        (
            beer.score.mul_add(f64::from(beer.reviews), score),
            reviews + u64::from(beer.reviews),
        )
    });

    (reviews > 0).then_some(BeerTally { score, reviews })
}

/// Returns the indices of the cities within `dist`, home city first.
///
/// The home city, when present, is prepended at distance 0. Declared order
/// is preserved; entries are not re-sorted by distance.
#[must_use]
pub fn compact_cities(cities: &[CityProximity], dist: f64, home: Option<u32>) -> Vec<u32> {
    home.map(|index| CityProximity { index, dist: 0.0 })
        .into_iter()
        .chain(cities.iter().copied())
        .filter(|c| c.dist <= dist)
        .map(|c| c.index)
        .collect()
}

/// Reduces the full brewery list for the given distance and ABV band.
#[must_use]
pub fn reduce_breweries(breweries: &[Brewery], dist: f64, abv: AbvBand) -> Reduction {
    let mut reduction = Reduction::default();

    for brewery in breweries {
        let Some(beers) = compact_beers(&brewery.beers, abv) else {
            continue;
        };
        let cities = compact_cities(&brewery.cities, dist, brewery.city_index);
        let Some(&city_index) = cities.iter().take(PER_CITY).next() else {
            continue;
        };

        reduction.city_indices.insert(city_index);
        reduction.breweries.push(ReducedBrewery {
            name: brewery.name.clone(),
            coordinates: brewery.coordinates,
            city_index,
            beers,
        });
    }

    log::debug!(
        "Reduced {} breweries to {} across {} cities (dist={dist}, abv={abv})",
        breweries.len(),
        reduction.breweries.len(),
        reduction.city_indices.len(),
    );

    reduction
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beer(abv: f64, score: f64, reviews: u32) -> Beer {
        Beer {
            abv,
            score,
            reviews,
        }
    }

    fn brewery(home: Option<u32>, cities: &[(u32, f64)], beers: &[Beer]) -> Brewery {
        Brewery {
            name: "Test Brewing".to_string(),
            coordinates: Coordinates {
                lat: 45.5,
                lng: -122.6,
            },
            year: Some(2010),
            city_index: home,
            cities: cities
                .iter()
                .map(|&(index, dist)| CityProximity { index, dist })
                .collect(),
            beers: beers.to_vec(),
        }
    }

    #[test]
    fn tally_is_review_weighted() {
        let tally = compact_beers(&[beer(5.0, 4.0, 10), beer(6.0, 5.0, 1)], AbvBand::All).unwrap();
        assert!((tally.score - 45.0).abs() < 1e-9);
        assert_eq!(tally.reviews, 11);
        assert!((tally.mean() - 45.0 / 11.0).abs() < 1e-9);
    }

    #[test]
    fn no_beers_in_band() {
        assert_eq!(compact_beers(&[beer(5.0, 4.0, 10)], AbvBand::Heavy), None);
        assert_eq!(compact_beers(&[], AbvBand::All), None);
    }

    #[test]
    fn unreviewed_beers_do_not_qualify() {
        assert_eq!(compact_beers(&[beer(5.0, 4.0, 0)], AbvBand::All), None);
    }

    #[test]
    fn non_finite_beers_are_absent() {
        let tally = compact_beers(
            &[beer(f64::NAN, 4.0, 10), beer(5.0, f64::NAN, 3), beer(5.0, 3.0, 2)],
            AbvBand::All,
        )
        .unwrap();
        assert_eq!(tally.reviews, 2);
        assert!((tally.mean() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn band_partition_reconstructs_all() {
        let beers = [
            beer(3.2, 3.0, 4),
            beer(4.0, 3.5, 7),
            beer(6.9, 4.1, 12),
            beer(7.0, 4.4, 9),
            beer(11.0, 4.8, 2),
        ];
        let all = compact_beers(&beers, AbvBand::All).unwrap();

        let parts: Vec<BeerTally> = AbvBand::partition()
            .iter()
            .filter_map(|band| compact_beers(&beers, *band))
            .collect();
        assert_eq!(parts.len(), 3);

        let reviews: u64 = parts.iter().map(|t| t.reviews).sum();
        let score: f64 = parts.iter().map(|t| t.score).sum();
        assert_eq!(reviews, all.reviews);
        assert!((score - all.score).abs() < 1e-9);

        for b in &beers {
            let owners = AbvBand::partition()
                .iter()
                .filter(|band| band.contains(b.abv))
                .count();
            assert_eq!(owners, 1, "beer at abv {} not in exactly one band", b.abv);
        }
    }

    #[test]
    fn home_city_is_prepended() {
        let cities = [CityProximity { index: 3, dist: 25.0 }];
        assert_eq!(compact_cities(&cities, 20.0, Some(7)), vec![7]);
        assert_eq!(compact_cities(&cities, 30.0, Some(7)), vec![7, 3]);
        assert_eq!(compact_cities(&cities, 30.0, None), vec![3]);
    }

    #[test]
    fn declared_order_is_authoritative() {
        let cities = [
            CityProximity { index: 1, dist: 15.0 },
            CityProximity { index: 2, dist: 5.0 },
        ];
        assert_eq!(compact_cities(&cities, 20.0, None), vec![1, 2]);
    }

    #[test]
    fn distance_cutoff_attributes_home_city() {
        let breweries = [brewery(Some(7), &[(3, 25.0)], &[beer(5.0, 4.0, 10)])];

        let near = reduce_breweries(&breweries, 20.0, AbvBand::All);
        assert_eq!(near.breweries.len(), 1);
        assert_eq!(near.breweries[0].city_index, 7);
        assert_eq!(near.city_indices, BTreeSet::from([7]));

        let far = reduce_breweries(&breweries, 30.0, AbvBand::All);
        assert_eq!(far.breweries[0].city_index, 7);
        assert_eq!(far.city_indices, BTreeSet::from([7]));
    }

    #[test]
    fn drops_breweries_without_city_or_beer() {
        let breweries = [
            brewery(None, &[(3, 25.0)], &[beer(5.0, 4.0, 10)]),
            brewery(Some(4), &[], &[beer(9.0, 4.0, 10)]),
            brewery(None, &[(5, 2.0)], &[beer(5.0, 4.0, 10)]),
        ];
        let reduction = reduce_breweries(&breweries, 20.0, AbvBand::Medium);
        assert_eq!(reduction.breweries.len(), 1);
        assert_eq!(reduction.breweries[0].city_index, 5);
        assert_eq!(reduction.city_indices, BTreeSet::from([5]));
    }

    #[test]
    fn zero_distance_threshold_keeps_home_only() {
        let breweries = [
            brewery(Some(1), &[(2, 0.5)], &[beer(5.0, 4.0, 10)]),
            brewery(None, &[(2, 0.0)], &[beer(5.0, 4.0, 10)]),
        ];
        let reduction = reduce_breweries(&breweries, 0.0, AbvBand::All);
        let assigned: Vec<u32> = reduction.breweries.iter().map(|b| b.city_index).collect();
        assert_eq!(assigned, vec![1, 2]);
    }
}
