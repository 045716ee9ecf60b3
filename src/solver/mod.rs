//! Divider solver.
//!
//! This module finds the pair of standard-value resistors whose ratio best
//! approximates an ideal voltage divider.
//!
//! ## Search
//!
//! For a divider with top resistor R1 and bottom resistor R2:
//! ```text
//! Vout = Vin * R2 / (R1 + R2)   =>   R1 / R2 = Vin / Vout - 1
//! ```
//!
//! The ideal ratio is split into a mantissa `mult` in `[1, 10)` and a decade
//! exponent. Candidates `C` are the table values plus the same values one
//! decade up. Every pair `(i, j)` with `i <= j` is scored by
//! ```text
//! e(i, j) = mult * C[i] - C[j]
//! ```
//! where `C[i]` is R2 and `C[j] * 10^decade` is R1. A positive error means
//! R1 is smaller than ideal, so the achieved output is above the target.

mod request;
mod search;

pub use request::{DividerRequest, DividerResult, Preference};
pub use search::{best_pair, candidates, ideal_ratio, normalize_ratio, solve, PairScore};
