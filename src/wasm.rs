//! WASM bindings for rdiv.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { solve_divider } from 'rdiv';
//!
//! await init();
//!
//! const pair = solve_divider(12.0, 3.3, "E96", false, true);
//! console.log(`R1=${pair.r1} R2=${pair.r2} Vout=${pair.vout}`);
//! ```

use wasm_bindgen::prelude::*;

use crate::series::ESeries;
use crate::solver::{self, DividerRequest, DividerResult, Preference};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// A resistor pair selected by [`solve_divider`].
#[wasm_bindgen]
pub struct WasmDivider {
    result: DividerResult,
}

#[wasm_bindgen]
impl WasmDivider {
    /// Top resistor value.
    #[wasm_bindgen(getter)]
    pub fn r1(&self) -> f64 {
        self.result.r1
    }

    /// Bottom resistor value.
    #[wasm_bindgen(getter)]
    pub fn r2(&self) -> f64 {
        self.result.r2
    }

    /// Output voltage produced by the pair.
    #[wasm_bindgen(getter)]
    pub fn vout(&self) -> f64 {
        self.result.vout
    }

    /// The `R1=..., R2=..., Vout=...` line printed by the CLI.
    #[wasm_bindgen(js_name = toString)]
    pub fn to_display_string(&self) -> String {
        self.result.to_string()
    }
}

/// Select the closest standard-value divider.
///
/// # Arguments
/// * `vin` - Divider input voltage
/// * `vout` - Desired output voltage
/// * `table` - One of `"E12"`, `"E24"`, `"E48"`, `"E96"`
/// * `prefer_over` - Only accept outputs at or above `vout`
/// * `prefer_under` - Only accept outputs at or below `vout`
#[wasm_bindgen]
pub fn solve_divider(
    vin: f64,
    vout: f64,
    table: &str,
    prefer_over: bool,
    prefer_under: bool,
) -> Result<WasmDivider, JsValue> {
    let to_js = |e: crate::RdivError| JsValue::from_str(&e.to_string());

    let preference = Preference::from_flags(prefer_over, prefer_under).map_err(to_js)?;
    let series: ESeries = table.parse().map_err(to_js)?;
    let request = DividerRequest::new(vin, vout)
        .with_series(series)
        .with_preference(preference);

    let result = solver::solve(&request).map_err(to_js)?;
    Ok(WasmDivider { result })
}

/// Decade values of the named table.
#[wasm_bindgen]
pub fn series_values(table: &str) -> Result<Vec<f64>, JsValue> {
    let series: ESeries = table
        .parse()
        .map_err(|e: crate::RdivError| JsValue::from_str(&e.to_string()))?;
    Ok(series.values().to_vec())
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
