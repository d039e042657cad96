//! # Buck Divider
//!
//! Feedback resistor divider calculator for buck converters.
//!
//! This library provides:
//! - A catalog of standard resistor values built from a preferred-number table
//! - An exhaustive search for Rfbt/Rfbb pairs that hit a target output voltage
//! - Output voltage evaluation for a chosen pair
//! - Display formatting with engineering prefixes
//!
//! ## Architecture
//!
//! - [`catalog`] - Resistor value tables and decade expansion
//! - [`solver`] - The divider search and voltage evaluation
//! - [`mode`] - Mode selection between the two calculations
//! - [`format`] - Resistance, voltage and report line formatting
//! - [`units`] - Numeric input parsing with SI suffixes
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! buckdiv resistors --vout 3.3 --vfb 0.8 --error 2
//! buckdiv voltage --top 10 --bottom 2.2 --vfb 0.6
//! ```
//!
//! ### Library
//!
//! ```
//! use buck_divider::{DividerQuery, DividerSolver};
//!
//! let solver = DividerSolver::builtin().unwrap();
//! let query = DividerQuery::new(12.0, 0.85, 1.0, true);
//! for divider in solver.enumerate_dividers(&query).unwrap() {
//!     println!("{}", divider);
//! }
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmDividerSolver } from 'buck_divider';
//!
//! const solver = new WasmDividerSolver();
//! const report = solver.solve_resistors(12, 0.85, 5, true);
//! ```
//!
//! ## Divider Equation
//!
//! ```text
//! Vout = Vfb * (1 + Rfbt / Rfbb)
//! ```

pub mod catalog;
pub mod error;
pub mod format;
pub mod mode;
pub mod solver;
pub mod units;

// Re-export main types for convenience
pub use catalog::ResistorCatalog;
pub use error::{DividerError, Result};
pub use format::format_resistance;
pub use mode::{Mode, Report, Request};
pub use solver::{DividerQuery, DividerResult, DividerSolver, VoltageQuery, VoltageResult};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmDividerSolver;
