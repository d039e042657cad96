//! Calculation mode selection.
//!
//! The calculator either solves for a resistor pair given a target voltage,
//! or solves for the output voltage given a resistor pair. A [`Request`]
//! carries the inputs for exactly one of the two, and
//! [`DividerSolver::run`](crate::solver::DividerSolver::run) turns it into a
//! [`Report`].

use std::fmt;

use crate::solver::{DividerQuery, DividerResult, VoltageQuery, VoltageResult};

/// Which quantity the calculator solves for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Search the catalog for Rfbt/Rfbb given Vout and Vfb
    #[default]
    SolveForResistors,
    /// Compute Vout from a given Rfbt/Rfbb and Vfb
    SolveForVoltage,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::SolveForResistors => write!(f, "Calc Resistor"),
            Mode::SolveForVoltage => write!(f, "Calc Voltage"),
        }
    }
}

/// Inputs for one calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Request {
    Resistors(DividerQuery),
    Voltage(VoltageQuery),
}

impl Request {
    pub fn mode(&self) -> Mode {
        match self {
            Request::Resistors(_) => Mode::SolveForResistors,
            Request::Voltage(_) => Mode::SolveForVoltage,
        }
    }
}

/// Outcome of a [`Request`].
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Dividers(Vec<DividerResult>),
    Voltage(VoltageResult),
}

impl Report {
    pub fn mode(&self) -> Mode {
        match self {
            Report::Dividers(_) => Mode::SolveForResistors,
            Report::Voltage(_) => Mode::SolveForVoltage,
        }
    }

    /// One display line per result.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Report::Dividers(results) => results.iter().map(ToString::to_string).collect(),
            Report::Voltage(result) => vec![result.to_string()],
        }
    }
}
