//! Display formatting for resistances, voltages and report lines.
//!
//! Resistances use engineering prefixes with trailing zeros trimmed:
//!
//! | Value (Ω) | Display |
//! |-----------|---------|
//! | 47 | `47` |
//! | 1 500 | `1.5k` |
//! | 150 000 | `150k` |
//! | 1 000 000 | `1M` |

use std::fmt;

use crate::solver::{DividerResult, VoltageResult};

/// Message shown in place of a report when input is rejected.
pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid numbers";

/// Format a resistance in ohms for display.
///
/// At or above 1 MΩ: mega-ohms with two decimals. At or above 1 kΩ: kilo-ohms
/// with one decimal from 100k up, two below. Otherwise plain ohms with one
/// decimal. Trailing zeros and a dangling decimal point are removed.
pub fn format_resistance(value: f64) -> String {
    if value >= 1e6 {
        format!("{}M", trim_fraction(&format!("{:.2}", value / 1e6)))
    } else if value >= 1e3 {
        let kilo = value / 1e3;
        let text = if kilo >= 100.0 {
            format!("{:.1}", kilo)
        } else {
            format!("{:.2}", kilo)
        };
        format!("{}k", trim_fraction(&text))
    } else {
        trim_fraction(&format!("{:.1}", value)).to_string()
    }
}

/// Format a voltage with three decimals and a `V` unit.
pub fn format_voltage(volts: f64) -> String {
    format!("{:.3}V", volts)
}

/// Format a signed error with one decimal, `+` on positive values.
pub fn format_error_percent(percent: f64) -> String {
    let sign = if percent > 0.0 { "+" } else { "" };
    format!("{}{:.1}%", sign, percent)
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

impl fmt::Display for DividerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rfbt(Vout) = {}, Rfbb(Gnd) = {}, Err = {}, Vout = {}",
            format_resistance(self.top),
            format_resistance(self.bottom),
            format_error_percent(self.percent_error),
            format_voltage(self.resulting_voltage)
        )
    }
}

impl fmt::Display for VoltageResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rfbt = {}, Rfbb = {}, Vout = {}",
            format_resistance(self.top),
            format_resistance(self.bottom),
            format_voltage(self.resulting_voltage)
        )
    }
}
