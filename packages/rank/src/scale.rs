//! Numeric scales used by the weigher.
//!
//! Both scales are built from the observed extent of a value across the
//! candidate set. A zero-width extent never divides by zero.

/// Returns the `(min, max)` of the values, or `None` when empty.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((min, max)) => Some((min.min(v), max.max(v))),
    })
}

/// Linear map from a domain `[d0, d1]` onto a range `[r0, r1]`.
///
/// Values outside the domain extrapolate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    #[must_use]
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps `value` onto the range. A zero-width domain maps everything to
    /// the lower bound of the range.
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let width = d1 - d0;
        if width == 0.0 || !width.is_finite() {
            return r0;
        }
        r0 + (value - d0) / width * (r1 - r0)
    }
}

/// Quantized map from a continuous domain onto an ordered set of labels,
/// using equal-width buckets.
#[derive(Debug, Clone, Copy)]
pub struct QuantizeScale<'a, T> {
    domain: (f64, f64),
    labels: &'a [T],
}

impl<'a, T: Copy> QuantizeScale<'a, T> {
    /// # Panics
    ///
    /// Panics if `labels` is empty.
    #[must_use]
    pub fn new(domain: (f64, f64), labels: &'a [T]) -> Self {
        assert!(!labels.is_empty(), "quantize scale needs at least one label");
        Self { domain, labels }
    }

    /// Returns the label for `value`. A value on a bucket boundary belongs
    /// to the upper bucket. A zero-width domain collapses every bucket
    /// boundary onto the single domain value, so everything maps to the
    /// last label.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn apply(&self, value: f64) -> T {
        let (d0, d1) = self.domain;
        let last = self.labels.len() - 1;
        let width = d1 - d0;
        if width == 0.0 || !width.is_finite() {
            return self.labels[last];
        }

        let position = (value - d0) / width * self.labels.len() as f64;
        let bucket = if position <= 0.0 {
            0
        } else {
            (position.floor() as usize).min(last)
        };
        self.labels[bucket]
    }
}
