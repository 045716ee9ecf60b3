//! rdiv - Standard-Value Resistor Divider Calculator
//!
//! Picks the E-series resistor pair whose divider output is closest to a
//! target voltage.
//!
//! # Usage
//!
//! ```bash
//! rdiv 5 3.3 --table E24 --prefer-under
//! ```

use std::process::ExitCode;

use clap::Parser;
use rdiv::{
    error::Result, solve, units::parse_voltage, DividerRequest, DividerResult, ESeries,
    Preference, LOG_ENV,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Standard table 2-resistor divider calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    /// Divider input voltage
    #[arg(value_name = "VIN")]
    vin: String,

    /// Divider output voltage
    #[arg(value_name = "VOUT")]
    vout: String,

    /// Resistor table
    #[arg(long, value_enum, ignore_case = true, default_value_t = ESeries::E12)]
    table: ESeries,

    /// Ignore solutions with lower Vout
    #[arg(long)]
    prefer_over: bool,

    /// Ignore solutions with higher Vout
    #[arg(long)]
    prefer_under: bool,
}

fn run(args: &Args) -> Result<DividerResult> {
    // Flag conflict is reported before anything else is looked at
    let preference = Preference::from_flags(args.prefer_over, args.prefer_under)?;

    let request = DividerRequest::new(parse_voltage(&args.vin)?, parse_voltage(&args.vout)?)
        .with_series(args.table)
        .with_preference(preference);

    solve(&request)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(result) => {
            println!("{result}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(error = %e, usage = e.is_usage(), "no divider computed");
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdiv::RdivError;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("rdiv").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let parsed = args(&["5", "3.3"]);
        assert_eq!(parsed.table, ESeries::E12);
        assert!(!parsed.prefer_over);
        assert!(!parsed.prefer_under);
    }

    #[test]
    fn test_table_option() {
        assert_eq!(args(&["5", "3.3", "--table", "E96"]).table, ESeries::E96);
        assert_eq!(args(&["5", "3.3", "--table", "e24"]).table, ESeries::E24);
        assert!(Args::try_parse_from(["rdiv", "5", "3.3", "--table", "E6"]).is_err());
    }

    #[test]
    fn test_run_prints_pair() {
        let result = run(&args(&["5", "3.3"])).unwrap();
        let line = result.to_string();
        assert!(line.starts_with("R1="));
        assert!(line.contains(", R2="));
        assert!(line.contains(", Vout="));
    }

    #[test]
    fn test_conflicting_flags_fail_before_parsing_voltages() {
        let parsed = args(&["not-a-number", "3.3", "--prefer-over", "--prefer-under"]);
        assert_eq!(run(&parsed), Err(RdivError::ConflictingPreferences));
    }

    #[test]
    fn test_equal_voltages_fail() {
        let err = run(&args(&["12", "12"])).unwrap_err();
        assert!(matches!(err, RdivError::UndefinedRatio { .. }));
    }

    #[test]
    fn test_negative_voltages_accepted() {
        let result = run(&args(&["-5", "-2.5"])).unwrap();
        assert_eq!(result.r1, 1.0);
        assert_eq!(result.r2, 1.0);
    }
}
