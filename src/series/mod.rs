//! E-series resistor value tables.
//!
//! Each table holds the preferred values of one decade, in ascending order,
//! with every entry in `[1.0, 10.0)`. Actual resistances are obtained by
//! scaling an entry by a power of ten.

mod tables;

use std::fmt;
use std::str::FromStr;

use crate::error::{RdivError, Result};

pub use tables::{E12, E24, E48, E96};

/// Selector for one of the embedded E-series tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ESeries {
    /// 12 values per decade
    #[default]
    #[cfg_attr(feature = "cli", value(name = "E12"))]
    E12,
    /// 24 values per decade
    #[cfg_attr(feature = "cli", value(name = "E24"))]
    E24,
    /// 48 values per decade
    #[cfg_attr(feature = "cli", value(name = "E48"))]
    E48,
    /// 96 values per decade
    #[cfg_attr(feature = "cli", value(name = "E96"))]
    E96,
}

impl ESeries {
    /// All supported series, smallest first.
    pub const ALL: [ESeries; 4] = [ESeries::E12, ESeries::E24, ESeries::E48, ESeries::E96];

    /// The decade values of this series.
    pub fn values(&self) -> &'static [f64] {
        match self {
            ESeries::E12 => &E12,
            ESeries::E24 => &E24,
            ESeries::E48 => &E48,
            ESeries::E96 => &E96,
        }
    }

    /// Number of values per decade.
    pub fn per_decade(&self) -> usize {
        self.values().len()
    }

    /// Canonical table name.
    pub fn name(&self) -> &'static str {
        match self {
            ESeries::E12 => "E12",
            ESeries::E24 => "E24",
            ESeries::E48 => "E48",
            ESeries::E96 => "E96",
        }
    }
}

impl fmt::Display for ESeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ESeries {
    type Err = RdivError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        ESeries::ALL
            .into_iter()
            .find(|series| series.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| RdivError::UnknownSeries {
                name: name.to_string(),
            })
    }
}
