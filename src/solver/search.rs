//! Best-pair search over an extended E-series candidate set.

use tracing::{debug, trace};

use crate::error::{RdivError, Result};
use crate::series::ESeries;

use super::request::{DividerRequest, DividerResult, Preference};

/// A scored candidate pair, as indices into the candidate set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairScore {
    /// Index of the bottom resistor (R2)
    pub bottom: usize,
    /// Index of the top resistor (R1, before decade scaling)
    pub top: usize,
    /// Signed error `mult * C[bottom] - C[top]`; positive means output above target
    pub error: f64,
}

/// Build the extended candidate set: the table followed by the same values
/// one decade higher.
pub fn candidates(series: ESeries) -> Vec<f64> {
    let values = series.values();
    let mut extended = Vec::with_capacity(2 * series.per_decade());
    extended.extend_from_slice(values);
    extended.extend(values.iter().map(|v| v * 10.0));
    extended
}

/// Ideal R1/R2 ratio for a lossless divider.
///
/// Fails when either voltage is zero or not finite, or when the ratio is not
/// strictly positive (for positive voltages, `vout >= vin`).
pub fn ideal_ratio(vin: f64, vout: f64) -> Result<f64> {
    if vin == 0.0 || !vin.is_finite() {
        return Err(RdivError::invalid_voltage("input", vin));
    }
    if vout == 0.0 || !vout.is_finite() {
        return Err(RdivError::invalid_voltage("output", vout));
    }

    let ratio = vin / vout - 1.0;
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(RdivError::undefined_ratio(vin, vout, ratio));
    }
    Ok(ratio)
}

/// Split a positive ratio into a mantissa in `[1.0, 10.0)` and its decade.
pub fn normalize_ratio(ratio: f64) -> (f64, i32) {
    let mut decade = ratio.log10().floor() as i32;
    let mut mult = ratio * 10f64.powi(-decade);

    // log10 can round across a decade boundary just below a power of ten
    if mult < 1.0 {
        mult *= 10.0;
        decade -= 1;
    } else if mult >= 10.0 {
        mult /= 10.0;
        decade += 1;
    }
    (mult, decade)
}

/// Find the pair minimizing `|mult * C[i] - C[j]|` over `i <= j`.
///
/// Pairs are scanned row-major and only a strictly smaller score replaces
/// the current best, so ties resolve to the lowest bottom index and then the
/// lowest top index.
pub fn best_pair(mult: f64, candidates: &[f64], preference: Preference) -> Option<PairScore> {
    let mut best: Option<PairScore> = None;

    for (bottom, &r2) in candidates.iter().enumerate() {
        for (top, &r1) in candidates.iter().enumerate().skip(bottom) {
            let error = mult * r2 - r1;
            if !preference.admits(error) {
                continue;
            }
            if best.map_or(true, |b| error.abs() < b.error.abs()) {
                best = Some(PairScore { bottom, top, error });
            }
        }
    }

    best
}

/// Select the standard-value resistor pair closest to the requested divider.
pub fn solve(request: &DividerRequest) -> Result<DividerResult> {
    let ratio = ideal_ratio(request.vin, request.vout)?;
    let (mult, decade) = normalize_ratio(ratio);
    debug!(ratio, mult, decade, series = %request.series, "normalized ideal ratio");

    let candidates = candidates(request.series);
    trace!(count = candidates.len(), "built candidate set");

    let pair = best_pair(mult, &candidates, request.preference).ok_or(RdivError::NoCandidate)?;

    let r1 = candidates[pair.top] * 10f64.powi(decade);
    let r2 = candidates[pair.bottom];
    let result = DividerResult::from_pair(request.vin, r1, r2);

    // Extreme ratios push R1 past f64 range
    if !result.r1.is_finite() || !result.vout.is_finite() {
        return Err(RdivError::out_of_range(request.vin, request.vout));
    }

    debug!(
        r1,
        r2,
        vout = result.vout,
        ratio = result.ratio(),
        vout_error = result.error(request.vout),
        pair_error = pair.error,
        preference = ?request.preference,
        "selected resistor pair"
    );

    Ok(result)
}
