//! # rdiv
//!
//! Standard-value resistor divider calculator.
//!
//! Given an input voltage and a desired output voltage, rdiv picks the pair
//! of E-series resistors whose divider output comes closest to the target,
//! optionally only accepting outputs above or below it.
//!
//! ## Architecture
//!
//! - [`series`] - Embedded E12/E24/E48/E96 value tables
//! - [`solver`] - Candidate construction and best-pair search
//! - [`units`] - Voltage argument parsing
//! - [`error`] - Unified error type
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! rdiv 5 3.3 --table E24 --prefer-over
//! ```
//!
//! ### Library
//!
//! ```
//! use rdiv::{solve, DividerRequest, ESeries, Preference};
//!
//! let request = DividerRequest::new(5.0, 3.3)
//!     .with_series(ESeries::E24)
//!     .with_preference(Preference::Over);
//! let result = solve(&request).unwrap();
//! assert!(result.vout >= 3.3);
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { solve_divider } from 'rdiv';
//!
//! const pair = solve_divider(5.0, 3.3, "E24", false, false);
//! console.log(pair.r1, pair.r2, pair.vout);
//! ```

pub mod error;
pub mod series;
pub mod solver;
pub mod units;

// Re-export main types for convenience
pub use error::{RdivError, Result};
pub use series::ESeries;
pub use solver::{solve, DividerRequest, DividerResult, Preference};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::{solve_divider, WasmDivider};

/// Environment variable holding the CLI's log filter.
pub const LOG_ENV: &str = "RDIV_LOG";
