//! Weighted ranking.
//!
//! Normalizes quality (`score`) and quantity (`count`) onto the split given
//! by a [`Balance`], sums them into a composite, and orders the cities.
//! This never touches raw brewery or city data, so it is cheap enough to
//! run on every slider movement.

use std::cmp::Ordering;

use brew_map_rank_models::{Balance, Grade, RankedCity, ScoredCity};

use crate::scale::{LinearScale, QuantizeScale, extent};

/// Descending by `weighted`, then `score`, then `count`.
fn compare(a: &RankedCity, b: &RankedCity) -> Ordering {
    b.weighted
        .total_cmp(&a.weighted)
        .then_with(|| b.scored.score.total_cmp(&a.scored.score))
        .then_with(|| b.scored.count.cmp(&a.scored.count))
}

/// Weighs and ranks the scored cities.
///
/// Equal entries keep their input order, so identical input always yields
/// identical output.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn weigh(data: &[ScoredCity], balance: Balance) -> Vec<RankedCity> {
    let (Some(score_extent), Some(count_extent)) = (
        extent(data.iter().map(|d| d.score)),
        extent(data.iter().map(|d| d.count as f64)),
    ) else {
        return Vec::new();
    };

    let scale_score = LinearScale::new(score_extent, (0.0, balance.quality));
    let scale_count = LinearScale::new(count_extent, (0.0, balance.quantity));
    let scale_grade = QuantizeScale::new(score_extent, Grade::all());

    let mut ranked: Vec<RankedCity> = data
        .iter()
        .map(|d| RankedCity {
            scored: d.clone(),
            grade: scale_grade.apply(d.score),
            weighted: scale_score.apply(d.score) + scale_count.apply(d.count as f64),
            rank: 0,
        })
        .collect();

    ranked.sort_by(compare);

    ranked
        .into_iter()
        .enumerate()
        .map(|(rank, city)| RankedCity { rank, ..city })
        .collect()
}
