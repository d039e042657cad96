//! Exhaustive divider search.

use tracing::debug;

use crate::catalog::ResistorCatalog;
use crate::error::{DividerError, Result};
use crate::mode::{Report, Request};

use super::query::{DividerQuery, DividerResult, VoltageQuery, VoltageResult};
use super::{output_voltage, percent_error, SUB_KILO_OHM_THRESHOLD};

/// Configuration for the solver.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Minimum resistance kept when a query excludes small resistors (Ω).
    pub min_filtered_resistance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            min_filtered_resistance: SUB_KILO_OHM_THRESHOLD,
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resistance below which filtered queries drop a pair.
    pub fn with_min_filtered_resistance(mut self, ohms: f64) -> Self {
        self.min_filtered_resistance = ohms;
        self
    }
}

/// Searches a resistor catalog for feedback dividers.
#[derive(Debug, Clone)]
pub struct DividerSolver {
    catalog: ResistorCatalog,
    config: SolverConfig,
}

impl DividerSolver {
    /// Create a solver over `catalog`.
    pub fn new(catalog: ResistorCatalog) -> Self {
        Self::with_config(catalog, SolverConfig::default())
    }

    pub fn with_config(catalog: ResistorCatalog, config: SolverConfig) -> Self {
        Self { catalog, config }
    }

    /// A solver over the built-in E24 catalog.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(ResistorCatalog::builtin()?))
    }

    pub fn catalog(&self) -> &ResistorCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find every catalog pair whose output is within tolerance of the target.
    ///
    /// Every ordered (top, bottom) combination is tried, including a value
    /// paired with itself. Results are sorted ascending by top resistance;
    /// pairs sharing a top value stay in ascending bottom order.
    pub fn enumerate_dividers(&self, query: &DividerQuery) -> Result<Vec<DividerResult>> {
        query.validate()?;

        let min = self.config.min_filtered_resistance;
        let values = self.catalog.values();
        let mut results = Vec::new();

        for &bottom in values {
            for &top in values {
                if query.exclude_sub_kilo_ohm && (top < min || bottom < min) {
                    continue;
                }

                let resulting_voltage = output_voltage(top, bottom, query.reference_voltage);
                if !resulting_voltage.is_finite() {
                    continue;
                }
                let error = percent_error(resulting_voltage, query.target_voltage);

                if error.abs() <= query.tolerance_percent {
                    results.push(DividerResult {
                        top,
                        bottom,
                        percent_error: error,
                        resulting_voltage,
                    });
                }
            }
        }

        // Stable, so equal tops keep the bottom-major scan order
        results.sort_by(|a, b| a.top.total_cmp(&b.top));

        debug!(
            target = query.target_voltage,
            reference = query.reference_voltage,
            tolerance = query.tolerance_percent,
            exclude_sub_kilo_ohm = query.exclude_sub_kilo_ohm,
            matches = results.len(),
            "enumerated dividers"
        );
        Ok(results)
    }

    /// Output voltage of one resistor pair.
    ///
    /// Resistances are in ohms. Fails with `InvalidInput` when `bottom` is zero
    /// or so small against `top` that the ratio overflows.
    pub fn compute_output_voltage(&self, query: &VoltageQuery) -> Result<VoltageResult> {
        query.validate()?;
        let resulting_voltage = output_voltage(query.top, query.bottom, query.reference_voltage);
        if !resulting_voltage.is_finite() {
            return Err(DividerError::invalid_input(
                "rfbb",
                format!("division by zero: ratio {} / {} overflows", query.top, query.bottom),
            ));
        }
        debug!(
            top = query.top,
            bottom = query.bottom,
            reference = query.reference_voltage,
            resulting_voltage,
            "computed output voltage"
        );
        Ok(VoltageResult {
            top: query.top,
            bottom: query.bottom,
            resulting_voltage,
        })
    }

    /// Run whichever operation the request's mode selects.
    pub fn run(&self, request: &Request) -> Result<Report> {
        match request {
            Request::Resistors(query) => self.enumerate_dividers(query).map(Report::Dividers),
            Request::Voltage(query) => self.compute_output_voltage(query).map(Report::Voltage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn small_solver() -> DividerSolver {
        DividerSolver::new(ResistorCatalog::from_values(vec![1000.0, 2000.0, 3000.0]).unwrap())
    }

    #[test]
    fn test_unreachable_target_is_empty() {
        // Largest ratio is 3000/1000, giving 0.85 * 4 = 3.4 V
        let query = DividerQuery::new(12.0, 0.85, 5.0, false);
        let results = small_solver().enumerate_dividers(&query).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_unity_ratio_pairs() {
        // 0.85 * (1 + 1) = 1.7 V; ratios 2/3 and 3/2 are 33% and 23% off
        let query = DividerQuery::new(1.7, 0.85, 5.0, false);
        let results = small_solver().enumerate_dividers(&query).unwrap();

        let pairs: Vec<(f64, f64)> = results.iter().map(|r| (r.top, r.bottom)).collect();
        assert_eq!(pairs, vec![(1000.0, 1000.0), (2000.0, 2000.0), (3000.0, 3000.0)]);
        for r in &results {
            assert_relative_eq!(r.resulting_voltage, 1.7);
            assert_relative_eq!(r.percent_error, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_single_match() {
        // 0.8 * (1 + 3) = 3.2 V, -3.03% from 3.3 V
        let query = DividerQuery::new(3.3, 0.8, 5.0, false);
        let results = small_solver().enumerate_dividers(&query).unwrap();
        assert_eq!(results.len(), 1);
        assert_relative_eq!(results[0].top, 3000.0);
        assert_relative_eq!(results[0].bottom, 1000.0);
        assert_relative_eq!(results[0].resulting_voltage, 3.2, epsilon = 1e-12);
        assert_relative_eq!(results[0].percent_error, -100.0 / 33.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sub_kilo_ohm_filter() {
        let solver = DividerSolver::new(ResistorCatalog::from_values(vec![500.0, 1000.0]).unwrap());

        let all = solver
            .enumerate_dividers(&DividerQuery::new(1.7, 0.85, 1.0, false))
            .unwrap();
        assert_eq!(all.len(), 2);

        let filtered = solver
            .enumerate_dividers(&DividerQuery::new(1.7, 0.85, 1.0, true))
            .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_relative_eq!(filtered[0].top, 1000.0);
        assert_relative_eq!(filtered[0].bottom, 1000.0);
    }

    #[test]
    fn test_custom_filter_threshold() {
        let config = SolverConfig::new().with_min_filtered_resistance(2000.0);
        let solver = DividerSolver::with_config(
            ResistorCatalog::from_values(vec![1000.0, 2000.0, 3000.0]).unwrap(),
            config,
        );
        assert_relative_eq!(solver.config().min_filtered_resistance, 2000.0);
        let results = solver
            .enumerate_dividers(&DividerQuery::new(1.7, 0.85, 5.0, true))
            .unwrap();
        assert!(results.iter().all(|r| r.top >= 2000.0 && r.bottom >= 2000.0));
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_equal_tops_keep_bottom_order() {
        let solver = DividerSolver::new(ResistorCatalog::from_values(vec![1000.0, 1100.0]).unwrap());
        let results = solver
            .enumerate_dividers(&DividerQuery::new(1.7, 0.85, 10.0, false))
            .unwrap();
        let pairs: Vec<(f64, f64)> = results.iter().map(|r| (r.top, r.bottom)).collect();
        assert_eq!(
            pairs,
            vec![(1000.0, 1000.0), (1000.0, 1100.0), (1100.0, 1000.0), (1100.0, 1100.0)]
        );
    }

    #[test]
    fn test_zero_target_is_invalid() {
        let err = small_solver()
            .enumerate_dividers(&DividerQuery::new(0.0, 0.85, 5.0, false))
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_compute_output_voltage() {
        let result = small_solver()
            .compute_output_voltage(&VoltageQuery::new(10_000.0, 1_000.0, 0.85))
            .unwrap();
        assert_relative_eq!(result.resulting_voltage, 9.35, epsilon = 1e-12);

        let err = small_solver()
            .compute_output_voltage(&VoltageQuery::new(10_000.0, 0.0, 0.85))
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_overflowing_ratio_is_invalid() {
        let err = small_solver()
            .compute_output_voltage(&VoltageQuery::new(1e308, 1e-300, 0.85))
            .unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("rfbb"));
    }

    #[test]
    fn test_enumerate_skips_overflowing_pairs() {
        let solver = DividerSolver::new(ResistorCatalog::from_values(vec![1e-300, 1e308]).unwrap());
        let results = solver
            .enumerate_dividers(&DividerQuery::new(1.7, 0.85, 10.0, false))
            .unwrap();
        assert!(results.iter().all(|r| r.resulting_voltage.is_finite()));
        assert_eq!(results.len(), 2);
    }
}
