//! WASM bindings for Buck Divider.
//!
//! This module provides JavaScript-friendly bindings for running the
//! calculator in a web page.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmDividerSolver } from 'buck_divider';
//!
//! await init();
//!
//! const solver = new WasmDividerSolver();
//! const lines = solver.solve_resistors(12, 0.85, 5, true).split('\n');
//! const vout = solver.solve_voltage(130, 10, 0.85);
//! ```

use wasm_bindgen::prelude::*;

use crate::catalog::ResistorCatalog;
use crate::error::DividerError;
use crate::format::INVALID_INPUT_MESSAGE;
use crate::solver::{DividerQuery, DividerSolver, VoltageQuery};
use crate::units::OHMS_PER_KILO_OHM;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: DividerError) -> JsValue {
    if err.is_invalid_input() {
        JsValue::from_str(INVALID_INPUT_MESSAGE)
    } else {
        JsValue::from_str(&err.to_string())
    }
}

/// WASM-compatible divider calculator.
#[wasm_bindgen]
pub struct WasmDividerSolver {
    solver: DividerSolver,
}

#[wasm_bindgen]
impl WasmDividerSolver {
    /// Create a solver over the built-in E24 catalog.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WasmDividerSolver, JsValue> {
        let solver = DividerSolver::builtin().map_err(to_js)?;
        Ok(WasmDividerSolver { solver })
    }

    /// Create a solver from a base value table (one value per line).
    #[wasm_bindgen]
    pub fn from_catalog(text: &str) -> Result<WasmDividerSolver, JsValue> {
        let catalog = ResistorCatalog::parse(text).map_err(to_js)?;
        Ok(WasmDividerSolver {
            solver: DividerSolver::new(catalog),
        })
    }

    /// Find divider pairs; returns report lines joined by `\n`.
    ///
    /// # Arguments
    /// * `vout` - Target output voltage (V)
    /// * `vfb` - Feedback reference voltage (V)
    /// * `error_percent` - Allowed error span (%)
    /// * `exclude_sub_kilo_ohm` - Drop pairs using resistors below 1 kΩ
    #[wasm_bindgen]
    pub fn solve_resistors(
        &self,
        vout: f64,
        vfb: f64,
        error_percent: f64,
        exclude_sub_kilo_ohm: bool,
    ) -> Result<String, JsValue> {
        let query = DividerQuery::new(vout, vfb, error_percent, exclude_sub_kilo_ohm);
        let results = self.solver.enumerate_dividers(&query).map_err(to_js)?;
        Ok(results
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Output voltage for a pair given in kΩ.
    #[wasm_bindgen]
    pub fn solve_voltage(&self, top_kilo_ohms: f64, bottom_kilo_ohms: f64, vfb: f64) -> Result<f64, JsValue> {
        let query = VoltageQuery::new(
            top_kilo_ohms * OHMS_PER_KILO_OHM,
            bottom_kilo_ohms * OHMS_PER_KILO_OHM,
            vfb,
        );
        let result = self.solver.compute_output_voltage(&query).map_err(to_js)?;
        Ok(result.resulting_voltage)
    }

    /// Number of resistor values in the catalog.
    #[wasm_bindgen]
    pub fn len(&self) -> usize {
        self.solver.catalog().len()
    }

    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.solver.catalog().is_empty()
    }
}
