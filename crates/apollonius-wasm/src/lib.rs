//! WebAssembly bindings for Apollonian gasket generation.
//!
//! Gaskets are returned as a flat `Float64Array` laid out as
//! `[bend0, x0, y0, bend1, x1, y1, ...]`, in the generator's output order.

use apollonius_gasket::{Circle, Complex, GasketError, GasketLimits};
use js_sys::Float64Array;
use wasm_bindgen::prelude::*;

/// Values per circle in the flat layout.
pub const STRIDE: usize = 3;

/// Flatten circles into `[bend, x, y]` triples.
pub fn flatten(circles: &[Circle]) -> Vec<f64> {
    let mut flat = Vec::with_capacity(circles.len() * STRIDE);
    for circle in circles {
        flat.extend_from_slice(&[circle.bend, circle.center.re, circle.center.im]);
    }
    flat
}

fn to_js(result: Result<Vec<Circle>, GasketError>) -> Result<Float64Array, JsValue> {
    result
        .map(|circles| Float64Array::from(flatten(&circles).as_slice()))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// `maxCount` arrives as a JS number; negative and NaN mean zero.
fn limits(max_bend: f64, max_count: f64) -> GasketLimits {
    let count = if max_count >= usize::MAX as f64 {
        usize::MAX
    } else if max_count > 0.0 {
        max_count as usize
    } else {
        0
    };
    GasketLimits::new(max_bend, count)
}

#[wasm_bindgen(js_name = fromBends)]
pub fn from_bends(
    b1: f64,
    b2: f64,
    b3: f64,
    max_bend: f64,
    max_count: f64,
) -> Result<Float64Array, JsValue> {
    to_js(apollonius_gasket::from_bends(
        b1,
        b2,
        b3,
        limits(max_bend, max_count),
    ))
}

#[wasm_bindgen(js_name = fromCentersPair)]
pub fn from_centers_pair(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    max_bend: f64,
    max_count: f64,
) -> Result<Float64Array, JsValue> {
    to_js(apollonius_gasket::from_centers_pair(
        Complex::new(x1, y1),
        Complex::new(x2, y2),
        limits(max_bend, max_count),
    ))
}

#[allow(clippy::too_many_arguments)]
#[wasm_bindgen(js_name = fromCentersTriplet)]
pub fn from_centers_triplet(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    max_bend: f64,
    max_count: f64,
) -> Result<Float64Array, JsValue> {
    to_js(apollonius_gasket::from_centers_triplet(
        Complex::new(x1, y1),
        Complex::new(x2, y2),
        Complex::new(x3, y3),
        limits(max_bend, max_count),
    ))
}

/// Bend of the fourth circle, tangent to and enclosing three.
#[wasm_bindgen(js_name = getOuterBend)]
pub fn get_outer_bend(b1: f64, b2: f64, b3: f64) -> f64 {
    apollonius_gasket::get_outer_bend(b1, b2, b3)
}
