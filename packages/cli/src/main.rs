#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI for ranking US cities by microbrew quality.
//!
//! `rank` runs the full pipeline once. `sweep` computes the base ranking
//! once and re-weighs it across a range of quality/quantity balances, the
//! way the interactive slider does.

mod config;
mod output;

use std::path::{Path, PathBuf};

use brew_map_brewery_models::{AbvBand, Brewery, City};
use brew_map_rank::{apply_weights, reduce_and_score};
use brew_map_rank_models::{Balance, RankFilters};
use clap::{Args, Parser, Subcommand};

use crate::config::RankConfig;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "brew_map", about = "Rank US cities by microbrew quality")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank cities and print the top results
    Rank {
        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        filters: FilterArgs,
        /// Quantity share of the composite score (0-100); quality gets the rest
        #[arg(long)]
        quantity: Option<f64>,
        /// Number of ranked cities to print
        #[arg(long, default_value = "100")]
        limit: usize,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Re-weigh one base ranking across a range of quantity shares
    Sweep {
        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        filters: FilterArgs,
        /// First quantity share
        #[arg(long, default_value = "0")]
        from: f64,
        /// Last quantity share (inclusive)
        #[arg(long, default_value = "100")]
        to: f64,
        /// Increment between quantity shares
        #[arg(long, default_value = "10")]
        step: f64,
    },
}

#[derive(Args)]
struct DataArgs {
    /// Brewery CSV export
    #[arg(long, env = "BREW_MAP_BREWERIES")]
    breweries: PathBuf,
    /// City CSV export
    #[arg(long, env = "BREW_MAP_CITIES")]
    cities: PathBuf,
    /// TOML file with default filters and balance
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct FilterArgs {
    /// Maximum brewery-to-city distance
    #[arg(long)]
    dist: Option<f64>,
    /// ABV band: all, light, medium, heavy
    #[arg(long)]
    abv: Option<AbvBand>,
    /// Minimum number of breweries a city needs to be ranked
    #[arg(long)]
    nearby: Option<usize>,
    /// Upper bound on the number of candidate cities
    #[arg(long)]
    max: Option<usize>,
}

impl FilterArgs {
    /// Applies the flags that were given on top of `base`.
    fn apply(&self, base: RankFilters) -> RankFilters {
        RankFilters {
            dist: self.dist.unwrap_or(base.dist),
            abv: self.abv.unwrap_or(base.abv),
            nearby: self.nearby.unwrap_or(base.nearby),
            max: self.max.unwrap_or(base.max),
        }
    }
}

fn load_data(data: &DataArgs) -> Result<(Vec<City>, Vec<Brewery>), Box<dyn std::error::Error>> {
    let cities = brew_map_ingest::load_cities(&data.cities)?;
    let breweries = brew_map_ingest::load_breweries(&data.breweries)?;
    Ok((cities, breweries))
}

fn resolve(
    config: Option<&Path>,
    filters: &FilterArgs,
    quantity: Option<f64>,
) -> Result<RankConfig, Box<dyn std::error::Error>> {
    let base = RankConfig::load(config)?;
    let resolved = RankConfig {
        filters: filters.apply(base.filters),
        balance: quantity.map_or(base.balance, Balance::from_quantity),
    };
    resolved.validate()?;
    Ok(resolved)
}

fn run_rank(
    data: &DataArgs,
    filters: &FilterArgs,
    quantity: Option<f64>,
    limit: usize,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve(data.config.as_deref(), filters, quantity)?;
    let (cities, breweries) = load_data(data)?;

    let base = reduce_and_score(&cities, &breweries, &config.filters);
    let mut ranked = apply_weights(&base, config.balance);
    log::info!(
        "Ranked {} cities (quality={}, quantity={})",
        ranked.len(),
        config.balance.quality,
        config.balance.quantity,
    );
    ranked.truncate(limit);

    print!("{}", output::render(&ranked, format)?);
    Ok(())
}

fn run_sweep(
    data: &DataArgs,
    filters: &FilterArgs,
    from: f64,
    to: f64,
    step: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    if !(step.is_finite() && step > 0.0) {
        return Err(format!("step must be a positive number, got {step}").into());
    }

    let config = resolve(data.config.as_deref(), filters, None)?;
    let (cities, breweries) = load_data(data)?;

    let base = reduce_and_score(&cities, &breweries, &config.filters);
    log::info!("Base ranking has {} candidate cities", base.len());

    let mut quantity = from;
    while quantity <= to {
        let balance = Balance::from_quantity(quantity);
        let ranked = apply_weights(&base, balance);
        match ranked.first() {
            Some(top) => println!(
                "quality={:>5.1} quantity={:>5.1}  #1 {} ({}) weighted={:.2}",
                balance.quality,
                balance.quantity,
                top.scored.city.name,
                top.grade,
                top.weighted,
            ),
            None => println!(
                "quality={:>5.1} quantity={:>5.1}  no qualifying cities",
                balance.quality, balance.quantity,
            ),
        }
        quantity += step;
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank {
            data,
            filters,
            quantity,
            limit,
            format,
        } => run_rank(&data, &filters, quantity, limit, format)?,
        Commands::Sweep {
            data,
            filters,
            from,
            to,
            step,
        } => run_sweep(&data, &filters, from, to, step)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "brew_map",
            "rank",
            "--breweries",
            "b.csv",
            "--cities",
            "c.csv",
            "--abv",
            "heavy",
            "--nearby",
            "2",
            "--quantity",
            "40",
        ]);
        let Commands::Rank {
            data,
            filters,
            quantity,
            ..
        } = cli.command
        else {
            panic!("expected rank command");
        };

        let config = resolve(data.config.as_deref(), &filters, quantity).unwrap();
        assert_eq!(config.filters.abv, AbvBand::Heavy);
        assert_eq!(config.filters.nearby, 2);
        assert!((config.filters.dist - 20.0).abs() < f64::EPSILON);
        assert!((config.balance.quality - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_distance_flag_is_rejected() {
        let filters = FilterArgs {
            dist: Some(-2.0),
            abv: None,
            nearby: None,
            max: None,
        };
        assert!(resolve(None, &filters, None).is_err());
    }
}
