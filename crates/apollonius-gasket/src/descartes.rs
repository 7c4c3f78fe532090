//! Scalar Descartes solver and the bend walk.
//!
//! Given bends `b1, b2, b3` of three mutually tangent circles, the two
//! circles tangent to all three have bends
//!
//! ```text
//! b = b1 + b2 + b3 ± 2·sqrt(b1·b2 + b2·b3 + b1·b3)
//! ```
//!
//! The `-` root is the smaller one, usually the enclosing circle.

use crate::complex::Sign;

/// Upper bound on bend walk iterations.
///
/// Every step strictly shrinks the largest bend, so the walk ends long before
/// this for any finite input.
pub const WALK_STEP_LIMIT: usize = 10_000;

/// Discriminants within this fraction of `|b1·b2| + |b2·b3| + |b1·b3|` of
/// zero are rounding noise around a double root.
pub(crate) const DISCRIMINANT_EPSILON: f64 = 1e-12;

/// Real Descartes formula.
pub fn descartes(b1: f64, b2: f64, b3: f64, sign: Sign) -> f64 {
    b1 + b2 + b3 + 2.0 * sign.value() * (b1 * b2 + b2 * b3 + b1 * b3).sqrt()
}

/// The discriminant `b1·b2 + b2·b3 + b1·b3` under the square root.
pub fn discriminant(b1: f64, b2: f64, b3: f64) -> f64 {
    b1 * b2 + b2 * b3 + b1 * b3
}

/// Magnitude scale of the discriminant terms.
pub(crate) fn discriminant_scale(b1: f64, b2: f64, b3: f64) -> f64 {
    (b1 * b2).abs() + (b2 * b3).abs() + (b1 * b3).abs()
}

/// The `-` root, taking the double root `b1 + b2 + b3` when the discriminant
/// is zero up to rounding.
pub(crate) fn minus_root(b1: f64, b2: f64, b3: f64) -> f64 {
    if discriminant(b1, b2, b3).abs() <= DISCRIMINANT_EPSILON * discriminant_scale(b1, b2, b3) {
        return b1 + b2 + b3;
    }
    descartes(b1, b2, b3, Sign::Minus)
}

/// Walk inward to the smallest generating quadruplet containing three bends.
///
/// Starts from `[descartes(b1, b2, b3, -), b1, b2, b3]` and repeatedly
/// replaces the largest bend `b` by its reflection `2·(others) − b`, stopping
/// as soon as the reflection would not be smaller. The result is sorted
/// ascending.
///
/// Some inputs never reach a signed quadruplet. `(2, 3, 10)` shrinks through
/// two dozen reflections to four tiny positive bends; that output is kept
/// as-is.
pub fn bend_walk(b1: f64, b2: f64, b3: f64) -> [f64; 4] {
    let mut bends = [minus_root(b1, b2, b3), b1, b2, b3];
    if bends.iter().any(|b| !b.is_finite()) {
        return bends;
    }

    for _ in 0..WALK_STEP_LIMIT {
        bends.sort_by(f64::total_cmp);
        let largest = bends[3];
        let next = 2.0 * (bends[0] + bends[1] + bends[2]) - largest;
        if next >= largest {
            break;
        }
        bends[3] = next;
    }
    bends.sort_by(f64::total_cmp);
    bends
}

/// Bend of the outermost circle of the gasket generated by three bends.
pub fn get_outer_bend(b1: f64, b2: f64, b3: f64) -> f64 {
    bend_walk(b1, b2, b3)[0]
}

/// The `max_bend` that stops expansion at `min_radius`, measured relative to
/// an outer circle rescaled to unit radius.
pub fn max_bend_for_min_radius(b1: f64, b2: f64, b3: f64, min_radius: f64) -> f64 {
    get_outer_bend(b1, b2, b3).abs() / min_radius
}
