//! Standard resistor value catalog.
//!
//! A catalog is built from a short table of base values (one decade of a
//! preferred-number series such as E24) expanded across five decades:
//!
//! ```text
//! base  = 1.0, 2.2, 4.7
//! scale = 1, 10, 100, 1000, 10000
//! =>      1, 2.2, 4.7, 10, 22, 47, ..., 10k, 22k, 47k
//! ```
//!
//! The expanded values are sorted ascending and deduplicated, so the
//! sequence is strictly increasing.
//!
//! # File format
//!
//! ```text
//! # E6 series
//! 1.0
//! 1.5
//! 2.2
//! ```
//!
//! One decimal per line. Blank lines and lines starting with `#` are ignored.

use tracing::debug;

use crate::error::{DividerError, Result};

/// Decade scale factors applied to every base value.
pub const DECADE_MULTIPLIERS: [f64; 5] = [1.0, 10.0, 100.0, 1_000.0, 10_000.0];

/// The E24 base table shipped with the crate.
pub const BUILTIN_BASE_VALUES: &str = include_str!("../data/resistor_list.txt");

/// Relative distance under which two scaled values count as the same part.
const DEDUP_EPSILON: f64 = 1e-9;

/// An immutable, strictly increasing list of resistances in ohms.
#[derive(Debug, Clone, PartialEq)]
pub struct ResistorCatalog {
    values: Vec<f64>,
}

impl ResistorCatalog {
    /// Build a catalog from already-scaled resistances in ohms.
    pub fn from_values(values: impl Into<Vec<f64>>) -> Result<Self> {
        let mut values = values.into();
        if values.is_empty() {
            return Err(DividerError::EmptyCatalog);
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v <= 0.0) {
            return Err(DividerError::invalid_input(
                "catalog",
                format!("resistance must be positive, got {}", bad),
            ));
        }

        values.sort_by(f64::total_cmp);
        values.dedup_by(|a, b| (*a - *b).abs() <= b.abs() * DEDUP_EPSILON);

        debug!(count = values.len(), "built resistor catalog");
        Ok(Self { values })
    }

    /// Expand base values by [`DECADE_MULTIPLIERS`].
    pub fn from_base_values(base: &[f64]) -> Result<Self> {
        Self::with_multipliers(base, &DECADE_MULTIPLIERS)
    }

    /// Expand base values by a custom set of scale factors.
    pub fn with_multipliers(base: &[f64], multipliers: &[f64]) -> Result<Self> {
        let expanded: Vec<f64> = base
            .iter()
            .flat_map(|value| multipliers.iter().map(move |m| value * m))
            .collect();
        Self::from_values(expanded)
    }

    /// Parse a base table (one value per line) and expand it.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_base_values(&parse_base_values(text)?)
    }

    /// Read and parse a base table file.
    #[cfg(feature = "cli")]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DividerError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// The built-in E24 catalog, 1 Ω to 91 kΩ.
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_BASE_VALUES)
    }

    /// Resistances in ascending order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parse the lines of a base table into numbers.
pub fn parse_base_values(text: &str) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let value: f64 = line
            .parse()
            .map_err(|_| DividerError::catalog_parse(idx + 1, format!("'{}' is not a number", line)))?;
        if !value.is_finite() || value <= 0.0 {
            return Err(DividerError::catalog_parse(
                idx + 1,
                format!("'{}' is not a positive value", line),
            ));
        }
        values.push(value);
    }
    if values.is_empty() {
        return Err(DividerError::EmptyCatalog);
    }
    Ok(values)
}
