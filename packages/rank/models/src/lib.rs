#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Configuration and result types for the city ranking engine.
//!
//! The engine runs in two tiers. [`RankFilters`] drives the expensive
//! reduction that produces [`ScoredCity`] rows; [`Balance`] drives the
//! cheap re-weighting that turns those rows into [`RankedCity`] rows.

use brew_map_brewery_models::{AbvBand, City, Coordinates};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Default distance threshold for attributing a brewery to a city.
pub const DEFAULT_DIST: f64 = 20.0;

/// Default minimum number of attributing breweries for a city to qualify.
pub const DEFAULT_NEARBY: usize = 5;

/// Default bound on the number of scored cities returned by the reducer.
pub const DEFAULT_MAX: usize = 1000;

/// Filter inputs for the reduce-and-score tier.
///
/// Changing any of these requires re-running the full reduction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct RankFilters {
    /// Maximum distance between a brewery and the city it is attributed to.
    pub dist: f64,
    /// ABV band beers must fall into to count.
    pub abv: AbvBand,
    /// Minimum number of attributing breweries for a city to be kept.
    pub nearby: usize,
    /// Upper bound on the number of scored cities returned.
    pub max: usize,
}

impl Default for RankFilters {
    fn default() -> Self {
        Self {
            dist: DEFAULT_DIST,
            abv: AbvBand::All,
            nearby: DEFAULT_NEARBY,
            max: DEFAULT_MAX,
        }
    }
}

impl RankFilters {
    /// Checks that the distance threshold is a finite, non-negative number.
    ///
    /// # Errors
    ///
    /// Returns an error if `dist` is negative, `NaN`, or infinite.
    pub fn validate(&self) -> Result<(), InvalidFilterError> {
        if !self.dist.is_finite() || self.dist < 0.0 {
            return Err(InvalidFilterError::Distance(self.dist));
        }
        Ok(())
    }
}

/// Split of the 0-100 composite score between quality and quantity.
///
/// The two halves are expected to sum to 100; this is the caller's
/// responsibility and is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Balance {
    /// Points awarded to the best-scoring city.
    pub quality: f64,
    /// Points awarded to the city with the most breweries.
    pub quantity: f64,
}

impl Default for Balance {
    fn default() -> Self {
        Self {
            quality: 80.0,
            quantity: 20.0,
        }
    }
}

impl Balance {
    /// Builds a balance from a single 0-100 quantity slider position.
    #[must_use]
    pub fn from_quantity(quantity: f64) -> Self {
        Self {
            quality: 100.0 - quantity,
            quantity,
        }
    }

    /// Checks that both components are finite.
    ///
    /// # Errors
    ///
    /// Returns an error if either component is `NaN` or infinite.
    pub fn validate(&self) -> Result<(), InvalidFilterError> {
        if !self.quality.is_finite() || !self.quantity.is_finite() {
            return Err(InvalidFilterError::Balance {
                quality: self.quality,
                quantity: self.quantity,
            });
        }
        Ok(())
    }
}

/// Error returned when a [`RankFilters`] or [`Balance`] holds values the
/// engine cannot work with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidFilterError {
    /// The distance threshold is negative or not finite.
    Distance(f64),
    /// A balance component is not finite.
    Balance {
        /// The quality component provided.
        quality: f64,
        /// The quantity component provided.
        quantity: f64,
    },
}

impl std::fmt::Display for InvalidFilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Distance(dist) => {
                write!(f, "invalid distance {dist}: expected a non-negative number")
            }
            Self::Balance { quality, quantity } => write!(
                f,
                "invalid balance quality={quality} quantity={quantity}: expected finite numbers"
            ),
        }
    }
}

impl std::error::Error for InvalidFilterError {}

/// Letter grade over the observed score range, from worst to best.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Grade {
    /// Lowest bucket.
    #[serde(rename = "C-")]
    #[strum(serialize = "C-")]
    CMinus,
    #[serde(rename = "C")]
    #[strum(serialize = "C")]
    C,
    #[serde(rename = "C+")]
    #[strum(serialize = "C+")]
    CPlus,
    #[serde(rename = "B-")]
    #[strum(serialize = "B-")]
    BMinus,
    #[serde(rename = "B")]
    #[strum(serialize = "B")]
    B,
    #[serde(rename = "B+")]
    #[strum(serialize = "B+")]
    BPlus,
    #[serde(rename = "A-")]
    #[strum(serialize = "A-")]
    AMinus,
    #[serde(rename = "A")]
    #[strum(serialize = "A")]
    A,
    /// Highest bucket.
    #[serde(rename = "A+")]
    #[strum(serialize = "A+")]
    APlus,
}

impl Grade {
    /// Returns all grades in ascending order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::CMinus,
            Self::C,
            Self::CPlus,
            Self::BMinus,
            Self::B,
            Self::BPlus,
            Self::AMinus,
            Self::A,
            Self::APlus,
        ]
    }
}

/// A city with brewery statistics aggregated over its attributing
/// breweries. Output of the reduce-and-score tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCity {
    /// The underlying city record.
    #[serde(flatten)]
    pub city: City,
    /// Review-weighted mean beer score across attributing breweries.
    pub score: f64,
    /// Number of attributing breweries.
    pub count: usize,
    /// Up to five brewery names, best mean score first.
    pub brewery_names: Vec<String>,
    /// Locations of every attributing brewery, in input order.
    pub brewery_coords: Vec<Coordinates>,
}

/// A scored city placed in the final weighted ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCity {
    /// Scoring statistics this ranking was computed from.
    #[serde(flatten)]
    pub scored: ScoredCity,
    /// Letter grade of `score` within the candidate set.
    pub grade: Grade,
    /// Composite of normalized quality and quantity.
    pub weighted: f64,
    /// 0-based position in the sorted output.
    pub rank: usize,
}
