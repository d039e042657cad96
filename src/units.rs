//! Numeric text parsing for user-supplied fields.
//!
//! Values may carry an SI suffix (`10k`, `4.7u`, `1M`). Resistances entered
//! without a suffix are taken as kilo-ohms, the unit the calculator has always
//! used for its resistor fields.

use crate::error::{DividerError, Result};

/// Ohms per kilo-ohm.
pub const OHMS_PER_KILO_OHM: f64 = 1e3;

/// Split a trailing SI suffix off `text`.
///
/// Returns the numeric part and its multiplier, or `None` for the multiplier
/// when no suffix is present. `R`/`r` is accepted as an explicit "ohms" marker.
fn split_suffix(text: &str) -> (&str, Option<f64>) {
    let Some(last) = text.chars().last() else {
        return (text, None);
    };
    let mult = match last {
        'p' => 1e-12,
        'n' => 1e-9,
        'u' | 'µ' => 1e-6,
        'm' => 1e-3,
        'R' | 'r' => 1.0,
        'k' | 'K' => 1e3,
        'M' => 1e6,
        'G' => 1e9,
        _ => return (text, None),
    };
    (&text[..text.len() - last.len_utf8()], Some(mult))
}

/// Parse a value with an optional SI suffix.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let (num_str, mult) = split_suffix(text);
    num_str
        .trim_end()
        .parse::<f64>()
        .ok()
        .map(|v| v * mult.unwrap_or(1.0))
}

/// Parse a numeric field, naming the field in the error.
///
/// NaN and infinities are rejected along with unparseable text.
pub fn parse_number(field: &str, text: &str) -> Result<f64> {
    match parse_value(text) {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(DividerError::invalid_input(
            field,
            format!("'{}' is not a number", text.trim()),
        )),
    }
}

/// Parse a resistance entered in kilo-ohms and return ohms.
///
/// A bare number is scaled by 1000; a suffixed value is taken literally, so
/// `"4.7"` and `"4.7k"` both give 4700 Ω while `"470R"` gives 470 Ω.
/// Sub-ohm suffixes are rejected: `1m` here is a mistyped `1M`, not 1 mΩ.
pub fn parse_kilo_ohms(field: &str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let (_, mult) = split_suffix(trimmed);
    let value = parse_number(field, trimmed)?;
    match mult {
        Some(m) if m < 1.0 => Err(DividerError::invalid_input(
            field,
            format!("'{}' uses a sub-ohm suffix; use R, k or M", trimmed),
        )),
        Some(_) => Ok(value),
        None => Ok(value * OHMS_PER_KILO_OHM),
    }
}
