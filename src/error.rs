//! Error types for the rdiv divider calculator.
//!
//! This module provides a unified error type [`RdivError`] that covers
//! argument validation, value parsing, and the pair search itself.

use thiserror::Error;

/// Result type alias using [`RdivError`].
pub type Result<T> = std::result::Result<T, RdivError>;

/// Unified error type for all rdiv operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RdivError {
    // ============ Usage Errors ============
    /// Both directional preferences were requested
    #[error("--prefer-over and --prefer-under are mutually exclusive")]
    ConflictingPreferences,

    /// Unknown E-series table name
    #[error("Unknown resistor table '{name}' (expected one of E12, E24, E48, E96)")]
    UnknownSeries { name: String },

    /// Value string could not be parsed as a number
    #[error("Invalid value '{text}'")]
    InvalidValue { text: String },

    // ============ Domain Errors ============
    /// A voltage is zero, NaN, or infinite
    #[error("Invalid {name} voltage {value}: must be finite and nonzero")]
    InvalidVoltage { name: &'static str, value: f64 },

    /// The ideal R1/R2 ratio is not a positive finite number
    #[error("No divider can produce {vout} V from {vin} V (ideal R1/R2 ratio {ratio} is not positive)")]
    UndefinedRatio { vin: f64, vout: f64, ratio: f64 },

    /// The selected pair does not fit in floating point range
    #[error("Divider for {vout} V from {vin} V needs a resistor ratio outside the representable range")]
    OutOfRange { vin: f64, vout: f64 },

    // ============ Search Errors ============
    /// Directional filtering left no candidate pair
    #[error("No resistor pair satisfies the requested direction")]
    NoCandidate,
}

impl RdivError {
    /// Create an invalid voltage error
    pub fn invalid_voltage(name: &'static str, value: f64) -> Self {
        Self::InvalidVoltage { name, value }
    }

    /// Create an undefined ratio error
    pub fn undefined_ratio(vin: f64, vout: f64, ratio: f64) -> Self {
        Self::UndefinedRatio { vin, vout, ratio }
    }

    /// Create an out of range error
    pub fn out_of_range(vin: f64, vout: f64) -> Self {
        Self::OutOfRange { vin, vout }
    }

    /// Create an invalid value error
    pub fn invalid_value(text: impl Into<String>) -> Self {
        Self::InvalidValue { text: text.into() }
    }

    /// Whether this error comes from how the tool was invoked rather than
    /// from the requested voltages.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::ConflictingPreferences | Self::UnknownSeries { .. } | Self::InvalidValue { .. }
        )
    }
}
