//! Query and result types for the divider solver.

use crate::error::{DividerError, Result};
use crate::units::{parse_kilo_ohms, parse_number};

/// Inputs for a resistor search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerQuery {
    /// Desired output voltage (V)
    pub target_voltage: f64,
    /// Feedback reference voltage of the regulator (V)
    pub reference_voltage: f64,
    /// Allowed |error| in percent of the target
    pub tolerance_percent: f64,
    /// Drop pairs where either resistor is below 1 kΩ
    pub exclude_sub_kilo_ohm: bool,
}

impl DividerQuery {
    pub fn new(
        target_voltage: f64,
        reference_voltage: f64,
        tolerance_percent: f64,
        exclude_sub_kilo_ohm: bool,
    ) -> Self {
        Self {
            target_voltage,
            reference_voltage,
            tolerance_percent,
            exclude_sub_kilo_ohm,
        }
    }

    /// Build a query from text fields as typed by a user.
    pub fn from_text(
        target_voltage: &str,
        reference_voltage: &str,
        tolerance_percent: &str,
        exclude_sub_kilo_ohm: bool,
    ) -> Result<Self> {
        Ok(Self::new(
            parse_number("vout", target_voltage)?,
            parse_number("vfb", reference_voltage)?,
            parse_number("error", tolerance_percent)?,
            exclude_sub_kilo_ohm,
        ))
    }

    /// Check the query can be evaluated.
    ///
    /// The target is a divisor in the error computation, so zero is rejected.
    pub fn validate(&self) -> Result<()> {
        require_positive("vout", self.target_voltage)?;
        require_positive("vfb", self.reference_voltage)?;
        if !self.tolerance_percent.is_finite() || self.tolerance_percent < 0.0 {
            return Err(DividerError::invalid_input(
                "error",
                format!("tolerance must be a non-negative percentage, got {}", self.tolerance_percent),
            ));
        }
        Ok(())
    }
}

/// Inputs for evaluating one resistor pair. Resistances are in ohms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoltageQuery {
    /// Rfbt, from Vout to the feedback pin (Ω)
    pub top: f64,
    /// Rfbb, from the feedback pin to ground (Ω)
    pub bottom: f64,
    /// Feedback reference voltage (V)
    pub reference_voltage: f64,
}

impl VoltageQuery {
    pub fn new(top: f64, bottom: f64, reference_voltage: f64) -> Self {
        Self {
            top,
            bottom,
            reference_voltage,
        }
    }

    /// Build a query from text fields. Resistances are read as kΩ.
    pub fn from_text(top_kilo_ohms: &str, bottom_kilo_ohms: &str, reference_voltage: &str) -> Result<Self> {
        Ok(Self::new(
            parse_kilo_ohms("rfbt", top_kilo_ohms)?,
            parse_kilo_ohms("rfbb", bottom_kilo_ohms)?,
            parse_number("vfb", reference_voltage)?,
        ))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.top.is_finite() || self.top < 0.0 {
            return Err(DividerError::invalid_input(
                "rfbt",
                format!("resistance must be non-negative, got {}", self.top),
            ));
        }
        if self.bottom == 0.0 {
            return Err(DividerError::invalid_input("rfbb", "division by zero"));
        }
        require_positive("rfbb", self.bottom)?;
        require_positive("vfb", self.reference_voltage)
    }
}

fn require_positive(field: &str, value: f64) -> Result<()> {
    if value == 0.0 {
        return Err(DividerError::invalid_input(field, "must not be zero"));
    }
    if !value.is_finite() || value < 0.0 {
        return Err(DividerError::invalid_input(
            field,
            format!("must be a positive number, got {}", value),
        ));
    }
    Ok(())
}

/// A catalog pair that meets a [`DividerQuery`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerResult {
    /// Rfbt (Ω)
    pub top: f64,
    /// Rfbb (Ω)
    pub bottom: f64,
    /// Signed deviation from the target (%)
    pub percent_error: f64,
    /// Output voltage this pair produces (V)
    pub resulting_voltage: f64,
}

/// The output of a [`VoltageQuery`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoltageResult {
    pub top: f64,
    pub bottom: f64,
    pub resulting_voltage: f64,
}
