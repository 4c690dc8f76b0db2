#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Loads brewery and city records from their CSV exports.
//!
//! The ranking engine only ever sees well-formed records. Rows that fail
//! to parse, hold non-finite numbers, or repeat a city index are rejected
//! here, logged, and skipped. A missing or unreadable file is an error.

pub mod parsing;

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use brew_map_brewery_models::{Brewery, City, Coordinates};
use brew_map_geography_models::states::abbr_for_name;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Errors from loading a dataset.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// CSV reading failed (bad header row, I/O while reading records).
    #[error("CSV error in {path}: {source}")]
    Csv {
        /// Path or label of the input.
        path: String,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// The input file could not be opened.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path that caused the error.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// A brewery export row.
#[derive(Debug, Deserialize)]
struct BreweryRow {
    name: String,
    lat: f64,
    lng: f64,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    year: Option<u16>,
    #[serde(default)]
    cities: String,
    #[serde(default)]
    beers: String,
    #[serde(rename = "cityIndex", default)]
    city_index: Option<u32>,
}

impl BreweryRow {
    fn into_brewery(self) -> Result<Brewery, String> {
        let coordinates = coordinates(self.lat, self.lng)?;
        let cities = parsing::parse_cities(&self.cities)?;
        let beers = parsing::parse_beers(&self.beers)?;

        Ok(Brewery {
            name: parsing::clean_name(&self.name),
            coordinates,
            year: self.year,
            city_index: self.city_index,
            cities,
            beers,
        })
    }
}

/// A city export row.
#[derive(Debug, Deserialize)]
struct CityRow {
    index: u32,
    city: String,
    state: String,
    lat: f64,
    lng: f64,
    population: u64,
}

impl CityRow {
    fn into_city(self) -> Result<City, String> {
        let coordinates = coordinates(self.lat, self.lng)?;
        let state_abbr = abbr_for_name(&self.state).map(str::to_string);
        if state_abbr.is_none() {
            log::debug!("No abbreviation for state {:?} ({})", self.state, self.city);
        }

        Ok(City {
            index: self.index,
            name: self.city,
            state: self.state,
            state_abbr,
            coordinates,
            population: self.population,
        })
    }
}

fn coordinates(lat: f64, lng: f64) -> Result<Coordinates, String> {
    if !lat.is_finite() || !lng.is_finite() {
        return Err(format!("non-finite coordinates ({lat}, {lng})"));
    }
    Ok(Coordinates { lat, lng })
}

/// Reads every row of `reader` as `T`, converting with `convert`. Rows
/// that fail either step are logged and skipped.
fn read_rows<T, R>(
    reader: impl Read,
    label: &str,
    mut convert: impl FnMut(T) -> Result<R, String>,
) -> Result<Vec<R>, IngestError>
where
    T: DeserializeOwned,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.headers().map_err(|e| IngestError::Csv {
        path: label.to_string(),
        source: e,
    })?;

    let mut records = Vec::new();
    let mut skipped = 0u64;

    for (i, result) in csv_reader.deserialize::<T>().enumerate() {
        // Row 1 is the header.
        let row = i + 2;
        let converted = match result {
            Ok(raw) => convert(raw),
            Err(e) if e.is_io_error() => {
                return Err(IngestError::Csv {
                    path: label.to_string(),
                    source: e,
                });
            }
            Err(e) => Err(e.to_string()),
        };

        match converted {
            Ok(record) => records.push(record),
            Err(message) => {
                log::warn!("{label}: skipping row {row}: {message}");
                skipped += 1;
            }
        }
    }

    log::info!(
        "{label}: loaded {} records ({skipped} skipped)",
        records.len()
    );

    Ok(records)
}

/// Loads breweries from any CSV source.
///
/// # Errors
///
/// Returns an error if the header row cannot be read or reading fails
/// with an I/O error.
pub fn read_breweries(reader: impl Read, label: &str) -> Result<Vec<Brewery>, IngestError> {
    read_rows(reader, label, BreweryRow::into_brewery)
}

/// Loads cities from any CSV source. Rows repeating an already-loaded
/// city index are rejected.
///
/// # Errors
///
/// Returns an error if the header row cannot be read or reading fails
/// with an I/O error.
pub fn read_cities(reader: impl Read, label: &str) -> Result<Vec<City>, IngestError> {
    let mut seen = BTreeSet::new();
    read_rows(reader, label, |row: CityRow| {
        let city = row.into_city()?;
        if !seen.insert(city.index) {
            return Err(format!("duplicate city index {}", city.index));
        }
        Ok(city)
    })
}

fn open(path: &Path) -> Result<std::fs::File, IngestError> {
    std::fs::File::open(path).map_err(|e| IngestError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

/// Loads breweries from a CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn load_breweries(path: &Path) -> Result<Vec<Brewery>, IngestError> {
    read_breweries(open(path)?, &path.display().to_string())
}

/// Loads cities from a CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn load_cities(path: &Path) -> Result<Vec<City>, IngestError> {
    read_cities(open(path)?, &path.display().to_string())
}
