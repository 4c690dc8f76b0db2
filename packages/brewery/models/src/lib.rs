#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Brewery, beer, and city record types.
//!
//! These are the already-parsed input records the ranking engine consumes.
//! They are produced by the ingestion crate and never mutated afterwards.
//! A city's `index` is the sole join key between the two datasets.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A WGS84 point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

/// A single beer style produced by a brewery, with its aggregate rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beer {
    /// Alcohol by volume, in percent.
    pub abv: f64,
    /// Mean review score for this style.
    pub score: f64,
    /// Number of reviews behind `score`.
    pub reviews: u32,
}

/// Declared proximity between a brewery and a nearby city.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityProximity {
    /// Index of the city in the city dataset.
    pub index: u32,
    /// Distance to the city. Never negative.
    pub dist: f64,
}

/// A brewery as loaded from the source dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brewery {
    /// Display name (already cleaned for presentation).
    pub name: String,
    /// Location of the brewery.
    pub coordinates: Coordinates,
    /// Founding year, when known.
    pub year: Option<u16>,
    /// The city the brewery is located in, if it is one of the known cities.
    pub city_index: Option<u32>,
    /// Nearby cities in declared order. The order is authoritative and is
    /// not re-sorted by distance.
    pub cities: Vec<CityProximity>,
    /// Beer styles produced by this brewery.
    pub beers: Vec<Beer>,
}

/// A US city as loaded from the source dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    /// Unique index; the join key referenced by [`CityProximity::index`].
    pub index: u32,
    /// City name (e.g. "Portland").
    pub name: String,
    /// Full state name (e.g. "Oregon").
    pub state: String,
    /// Two-letter state abbreviation, when the state name is recognized.
    pub state_abbr: Option<String>,
    /// City center.
    pub coordinates: Coordinates,
    /// Resident population.
    pub population: u64,
}

/// Alcohol-by-volume band used to filter beers.
///
/// Each band is a half-open interval `[low, high)` over ABV percent.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AbvBand {
    /// Every beer, `[0, 100)`.
    #[default]
    All,
    /// `[0, 4)`
    Light,
    /// `[4, 7)`
    Medium,
    /// `[7, 100)`
    Heavy,
}

impl AbvBand {
    /// Returns the `(low, high)` bounds of this band. `low` is inclusive,
    /// `high` is exclusive.
    #[must_use]
    pub const fn bounds(self) -> (f64, f64) {
        match self {
            Self::All => (0.0, 100.0),
            Self::Light => (0.0, 4.0),
            Self::Medium => (4.0, 7.0),
            Self::Heavy => (7.0, 100.0),
        }
    }

    /// Whether the given ABV falls within this band.
    #[must_use]
    pub fn contains(self, abv: f64) -> bool {
        let (low, high) = self.bounds();
        abv >= low && abv < high
    }

    /// Returns all bands.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::All, Self::Light, Self::Medium, Self::Heavy]
    }

    /// Returns the bands that partition [`Self::All`] without overlap.
    #[must_use]
    pub const fn partition() -> &'static [Self] {
        &[Self::Light, Self::Medium, Self::Heavy]
    }
}
