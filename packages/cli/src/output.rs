//! Rendering of ranked cities for the terminal.

use std::fmt::Write as _;

use brew_map_rank_models::RankedCity;
use clap::ValueEnum;

/// Output format for `rank`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text table.
    #[default]
    Table,
    /// Pretty-printed JSON array.
    Json,
}

/// Renders ranked cities in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(ranked: &[RankedCity], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Table => Ok(render_table(ranked)),
        OutputFormat::Json => serde_json::to_string_pretty(ranked),
    }
}

/// Renders ranked cities as a plain-text table.
#[must_use]
pub fn render_table(ranked: &[RankedCity]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<28} {:<5} {:<5} {:>6} {:>6} {:>8}",
        "RANK", "CITY", "STATE", "GRADE", "SCORE", "COUNT", "WEIGHTED"
    );

    for city in ranked {
        let scored = &city.scored;
        let state = scored
            .city
            .state_abbr
            .as_deref()
            .unwrap_or(scored.city.state.as_str());
        let _ = writeln!(
            out,
            "{:>4}  {:<28} {:<5} {:<5} {:>6.2} {:>6} {:>8.2}",
            city.rank + 1,
            scored.city.name,
            state,
            city.grade,
            scored.score,
            scored.count,
            city.weighted,
        );
    }

    out
}
