//! Divider request and result types.

use std::fmt;

use crate::error::{RdivError, Result};
use crate::series::ESeries;

/// Which side of the target the achieved output may fall on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preference {
    /// Closest pair regardless of direction
    #[default]
    None,
    /// Only pairs whose output is at or above the target
    Over,
    /// Only pairs whose output is at or below the target
    Under,
}

impl Preference {
    /// Build a preference from the two mutually exclusive CLI flags.
    pub fn from_flags(prefer_over: bool, prefer_under: bool) -> Result<Self> {
        match (prefer_over, prefer_under) {
            (true, true) => Err(RdivError::ConflictingPreferences),
            (true, false) => Ok(Preference::Over),
            (false, true) => Ok(Preference::Under),
            (false, false) => Ok(Preference::None),
        }
    }

    /// Whether a pair with the given signed error is allowed.
    ///
    /// A positive error means the achieved output is above the target.
    pub fn admits(&self, error: f64) -> bool {
        match self {
            Preference::None => true,
            Preference::Over => error >= 0.0,
            Preference::Under => error <= 0.0,
        }
    }
}

/// A request for the best standard-value divider.
#[derive(Debug, Clone, PartialEq)]
pub struct DividerRequest {
    /// Divider input voltage
    pub vin: f64,
    /// Desired output voltage
    pub vout: f64,
    /// Table the resistors are drawn from
    pub series: ESeries,
    /// Directional constraint on the achieved output
    pub preference: Preference,
}

impl DividerRequest {
    /// Create a request using E12 and no directional preference.
    pub fn new(vin: f64, vout: f64) -> Self {
        Self {
            vin,
            vout,
            series: ESeries::default(),
            preference: Preference::default(),
        }
    }

    /// Set the resistor table.
    pub fn with_series(mut self, series: ESeries) -> Self {
        self.series = series;
        self
    }

    /// Set the directional preference.
    pub fn with_preference(mut self, preference: Preference) -> Self {
        self.preference = preference;
        self
    }
}

/// The selected resistor pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerResult {
    /// Top resistor (input to output)
    pub r1: f64,
    /// Bottom resistor (output to ground)
    pub r2: f64,
    /// Output voltage actually produced by the pair
    pub vout: f64,
}

impl DividerResult {
    /// Build a result from a resistor pair, computing the achieved output.
    pub fn from_pair(vin: f64, r1: f64, r2: f64) -> Self {
        Self {
            r1,
            r2,
            vout: vin * r2 / (r1 + r2),
        }
    }

    /// Achieved minus requested output voltage.
    pub fn error(&self, target: f64) -> f64 {
        self.vout - target
    }

    /// Achieved R1/R2 ratio.
    pub fn ratio(&self) -> f64 {
        self.r1 / self.r2
    }
}

impl fmt::Display for DividerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug formatting keeps the decimal point on whole numbers (10.0)
        write!(f, "R1={:?}, R2={:?}, Vout={:?}", self.r1, self.r2, self.vout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_preference_flags() {
        assert_eq!(Preference::from_flags(false, false), Ok(Preference::None));
        assert_eq!(Preference::from_flags(true, false), Ok(Preference::Over));
        assert_eq!(Preference::from_flags(false, true), Ok(Preference::Under));
        assert_eq!(
            Preference::from_flags(true, true),
            Err(RdivError::ConflictingPreferences)
        );
    }

    #[test]
    fn test_preference_admits() {
        assert!(Preference::None.admits(-1.0));
        assert!(Preference::Over.admits(0.5));
        assert!(Preference::Over.admits(0.0));
        assert!(!Preference::Over.admits(-0.5));
        assert!(Preference::Under.admits(-0.5));
        assert!(Preference::Under.admits(0.0));
        assert!(!Preference::Under.admits(0.5));
    }

    #[test]
    fn test_request_builder() {
        let request = DividerRequest::new(5.0, 3.3)
            .with_series(ESeries::E96)
            .with_preference(Preference::Under);
        assert_eq!(request.series, ESeries::E96);
        assert_eq!(request.preference, Preference::Under);

        let defaults = DividerRequest::new(5.0, 3.3);
        assert_eq!(defaults.series, ESeries::E12);
        assert_eq!(defaults.preference, Preference::None);
    }

    #[test]
    fn test_result_from_pair() {
        let result = DividerResult::from_pair(10.0, 1.0, 1.0);
        assert_relative_eq!(result.vout, 5.0);
        assert_relative_eq!(result.error(4.0), 1.0);
        assert_relative_eq!(result.ratio(), 1.0);
    }

    #[test]
    fn test_result_display() {
        let result = DividerResult {
            r1: 10.0,
            r2: 4.7,
            vout: 1.6,
        };
        assert_eq!(result.to_string(), "R1=10.0, R2=4.7, Vout=1.6");
    }
}
