//! Parsing of voltage arguments.
//!
//! Voltages are plain floating point numbers with an optional SI suffix
//! (`p`, `n`, `u`/`µ`, `m`, `k`/`K`, `M`, `G`) and an optional trailing
//! unit `V`, so `3.3`, `3300m`, `3.3V` and `3300mV` all mean 3.3 volts.

use crate::error::{RdivError, Result};

/// Parse a voltage string into volts.
///
/// `nan`, `inf` and values that overflow after scaling are rejected.
pub fn parse_voltage(text: &str) -> Result<f64> {
    parse_value(text)
        .filter(|v| v.is_finite())
        .ok_or_else(|| RdivError::invalid_value(text.trim()))
}

/// Parse a number with optional SI suffix and unit.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    let text = text
        .strip_suffix('V')
        .or_else(|| text.strip_suffix('v'))
        .unwrap_or(text);
    if text.is_empty() {
        return None;
    }

    let last = text.chars().last()?;
    let multiplier = match last {
        'p' => 1e-12,
        'n' => 1e-9,
        'u' | 'µ' => 1e-6,
        'm' => 1e-3,
        'k' | 'K' => 1e3,
        'M' => 1e6,
        'G' => 1e9,
        _ => return text.parse::<f64>().ok(),
    };

    text[..text.len() - last.len_utf8()]
        .parse::<f64>()
        .ok()
        .map(|v| v * multiplier)
}
