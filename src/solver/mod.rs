//! Feedback divider solver.
//!
//! A buck converter regulates its feedback pin to the reference voltage
//! Vfb. With a top resistor Rfbt from Vout to the pin and a bottom resistor
//! Rfbb from the pin to ground, the regulated output is:
//!
//! ```text
//! Vout = Vfb * (1 + Rfbt / Rfbb)
//! ```
//!
//! The solver works in both directions:
//!
//! - [`DividerSolver::enumerate_dividers`] searches every (Rfbt, Rfbb) pair
//!   of a [`ResistorCatalog`](crate::catalog::ResistorCatalog) for outputs
//!   within a percentage of a target voltage
//! - [`DividerSolver::compute_output_voltage`] evaluates one chosen pair
//!
//! The search is an exhaustive O(n²) scan. With the built-in catalog of 120
//! values that is 14 400 evaluations per query.

mod divider;
mod query;

pub use divider::{DividerSolver, SolverConfig};
pub use query::{DividerQuery, DividerResult, VoltageQuery, VoltageResult};

/// Resistors below this value are dropped when sub-kΩ filtering is on.
pub const SUB_KILO_OHM_THRESHOLD: f64 = 1_000.0;

/// Default target output voltage (V).
pub const DEFAULT_TARGET_VOLTAGE: f64 = 12.0;

/// Default feedback reference voltage (V).
pub const DEFAULT_REFERENCE_VOLTAGE: f64 = 0.85;

/// Default allowed error span (%).
pub const DEFAULT_TOLERANCE_PERCENT: f64 = 5.0;

/// Output voltage of a feedback divider.
///
/// No validation: a zero `bottom` yields infinity. Use
/// [`DividerSolver::compute_output_voltage`] for checked evaluation.
#[inline]
pub fn output_voltage(top: f64, bottom: f64, reference_voltage: f64) -> f64 {
    reference_voltage * (1.0 + top / bottom)
}

/// Signed deviation of `actual` from `target`, in percent of `target`.
#[inline]
pub fn percent_error(actual: f64, target: f64) -> f64 {
    (actual - target) / target * 100.0
}
