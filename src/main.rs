//! buckdiv - Buck Converter Feedback Divider Calculator
//!
//! # Usage
//!
//! ```bash
//! buckdiv resistors --vout 12 --vfb 0.85 --error 5
//! buckdiv voltage --top 130 --bottom 10 --vfb 0.85
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use buck_divider::{
    error::Result,
    format::INVALID_INPUT_MESSAGE,
    solver::{DEFAULT_REFERENCE_VOLTAGE, DEFAULT_TARGET_VOLTAGE, DEFAULT_TOLERANCE_PERCENT},
    units::parse_number,
    DividerQuery, DividerSolver, Request, ResistorCatalog, VoltageQuery,
};

/// Exit status when an input field is rejected.
const EXIT_INVALID_INPUT: u8 = 2;

/// Exit status for any other failure.
const EXIT_FAILURE: u8 = 1;

/// Feedback resistor divider calculator for buck converters
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find Rfbt/Rfbb pairs for a target output voltage
    Resistors {
        /// Target output voltage (V)
        #[arg(long, default_value_t = DEFAULT_TARGET_VOLTAGE.to_string())]
        vout: String,

        /// Feedback reference voltage (V)
        #[arg(long, default_value_t = DEFAULT_REFERENCE_VOLTAGE.to_string())]
        vfb: String,

        /// Allowed error span (%)
        #[arg(
            long,
            default_value_t = DEFAULT_TOLERANCE_PERCENT as u8,
            value_parser = clap::value_parser!(u8).range(1..=10)
        )]
        error: u8,

        /// Keep pairs that use resistors below 1 kΩ
        #[arg(long)]
        include_sub_kilo_ohm: bool,

        /// Base value table, one value per line (defaults to built-in E24)
        #[arg(long, value_name = "PATH", env = "BUCKDIV_CATALOG")]
        catalog: Option<PathBuf>,
    },

    /// Compute the output voltage of a resistor pair
    Voltage {
        /// Top resistor Rfbt in kΩ; R, k or M suffixes are taken literally (470R, 1M)
        #[arg(long)]
        top: String,

        /// Bottom resistor Rfbb in kΩ; R, k or M suffixes are taken literally
        #[arg(long)]
        bottom: String,

        /// Feedback reference voltage (V)
        #[arg(long, default_value_t = DEFAULT_REFERENCE_VOLTAGE.to_string())]
        vfb: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let outcome = run(cli.command);
    match report(outcome, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            error!("failed to write output: {}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(command: Command) -> Result<Vec<String>> {
    let (catalog, request) = match command {
        Command::Resistors {
            vout,
            vfb,
            error,
            include_sub_kilo_ohm,
            catalog,
        } => {
            let catalog = match catalog {
                Some(path) => ResistorCatalog::from_file(&path)?,
                None => ResistorCatalog::builtin()?,
            };
            let query = DividerQuery::new(
                parse_number("vout", &vout)?,
                parse_number("vfb", &vfb)?,
                f64::from(error),
                !include_sub_kilo_ohm,
            );
            (catalog, Request::Resistors(query))
        }
        Command::Voltage { top, bottom, vfb } => {
            let query = VoltageQuery::from_text(&top, &bottom, &vfb)?;
            (ResistorCatalog::builtin()?, Request::Voltage(query))
        }
    };

    let solver = DividerSolver::new(catalog);
    debug!(mode = %request.mode(), catalog = solver.catalog().len(), "running calculation");
    let report = solver.run(&request)?;
    Ok(report.lines())
}

/// Write the outcome of [`run`] and return the process exit status.
///
/// Rejected input prints only the generic message, never a panic or a
/// partial report.
fn report(outcome: Result<Vec<String>>, out: &mut impl Write, err: &mut impl Write) -> io::Result<u8> {
    match outcome {
        Ok(lines) => {
            for line in lines {
                writeln!(out, "{}", line)?;
            }
            Ok(0)
        }
        Err(e) if e.is_invalid_input() => {
            debug!("rejected input: {}", e);
            writeln!(err, "{}", INVALID_INPUT_MESSAGE)?;
            Ok(EXIT_INVALID_INPUT)
        }
        Err(e) => {
            writeln!(err, "error: {}", e)?;
            Ok(EXIT_FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parse arguments, run, and capture (status, stdout, stderr).
    fn invoke(args: &[&str]) -> (u8, String, String) {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let status = report(run(cli.command), &mut out, &mut err).unwrap();
        (
            status,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_resistor_defaults_come_from_solver_constants() {
        let cli = Cli::try_parse_from(["buckdiv", "resistors"]).unwrap();
        match cli.command {
            Command::Resistors {
                vout,
                vfb,
                error,
                include_sub_kilo_ohm,
                catalog,
            } => {
                assert_eq!(vout, DEFAULT_TARGET_VOLTAGE.to_string());
                assert_eq!(vfb, DEFAULT_REFERENCE_VOLTAGE.to_string());
                assert_eq!(f64::from(error), DEFAULT_TOLERANCE_PERCENT);
                assert!(!include_sub_kilo_ohm);
                assert!(catalog.is_none() || std::env::var_os("BUCKDIV_CATALOG").is_some());
            }
            other => panic!("expected resistors command, got {:?}", other),
        }
    }

    #[test]
    fn test_error_span_is_limited() {
        assert!(Cli::try_parse_from(["buckdiv", "resistors", "--error", "11"]).is_err());
        assert!(Cli::try_parse_from(["buckdiv", "resistors", "--error", "0"]).is_err());
    }

    #[test]
    fn test_voltage_command_output() {
        let (status, out, err) = invoke(&["buckdiv", "voltage", "--top", "130", "--bottom", "10"]);
        assert_eq!(status, 0);
        assert_eq!(out, "Rfbt = 130k, Rfbb = 10k, Vout = 11.900V\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_resistors_command_output() {
        let (status, out, _) = invoke(&[
            "buckdiv", "resistors", "--vout", "12", "--vfb", "0.85", "--error", "1", "--catalog",
            "/nonexistent/buckdiv.txt",
        ]);
        // An unreadable catalog is not an input error
        assert_eq!(status, EXIT_FAILURE);
        assert!(out.is_empty());

        let (status, out, _) = invoke(&["buckdiv", "resistors", "--vout", "12", "--error", "1"]);
        assert_eq!(status, 0);
        assert!(out.lines().any(|l| l == "Rfbt(Vout) = 13k, Rfbb(Gnd) = 1k, Err = -0.8%, Vout = 11.900V"));
        assert!(out.lines().all(|l| l.starts_with("Rfbt(Vout) = ")));
    }

    #[test]
    fn test_invalid_numbers_exit_with_message() {
        for args in [
            &["buckdiv", "resistors", "--vout", "twelve"][..],
            &["buckdiv", "resistors", "--vout", "0"][..],
            &["buckdiv", "voltage", "--top", "10", "--bottom", "0"][..],
            &["buckdiv", "voltage", "--top", "1m", "--bottom", "10"][..],
            &["buckdiv", "voltage", "--top", "10", "--bottom", "1", "--vfb", "abc"][..],
        ] {
            let (status, out, err) = invoke(args);
            assert_eq!(status, EXIT_INVALID_INPUT, "args: {:?}", args);
            assert!(out.is_empty());
            assert_eq!(err, format!("{}\n", INVALID_INPUT_MESSAGE));
        }
    }
}
