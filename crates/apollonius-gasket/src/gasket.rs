//! Public gasket entry points.
//!
//! Each constructor builds a seed, expands it, and returns circles with
//! Euclidean centers sorted ascending by bend. When the first circle has a
//! negative bend it is the bounding circle.

use tracing::debug;

use crate::circle::{Circle, Quadruplet};
use crate::complex::Complex;
use crate::error::Result;
use crate::expand::{Expander, GasketLimits};
use crate::seed::{seed_from_bends, seed_from_centers_pair, seed_from_centers_triplet};

/// Gasket generated from three bends.
pub fn from_bends(b1: f64, b2: f64, b3: f64, limits: GasketLimits) -> Result<Vec<Circle>> {
    generate(seed_from_bends(b1, b2, b3)?, Expander::new(limits))
}

/// Gasket generated from two centers inside the unit circle.
pub fn from_centers_pair(
    c1: impl Into<Complex>,
    c2: impl Into<Complex>,
    limits: GasketLimits,
) -> Result<Vec<Circle>> {
    generate(
        seed_from_centers_pair(c1.into(), c2.into())?,
        Expander::new(limits),
    )
}

/// Gasket generated from three centers forming a curvilinear triangle.
pub fn from_centers_triplet(
    c1: impl Into<Complex>,
    c2: impl Into<Complex>,
    c3: impl Into<Complex>,
    limits: GasketLimits,
) -> Result<Vec<Circle>> {
    generate(
        seed_from_centers_triplet(c1.into(), c2.into(), c3.into())?,
        Expander::new(limits),
    )
}

/// Expand `seed` with `expander` and normalize the result.
pub fn generate(seed: Quadruplet, expander: Expander) -> Result<Vec<Circle>> {
    let expansion = expander.expand(seed)?;
    debug!(
        circles = expansion.circles.len(),
        generations = expansion.generations,
        "gasket generated"
    );
    Ok(normalize(expansion.circles))
}

/// Divide bend-scaled centers out and sort ascending by bend.
///
/// The sort is stable, so circles with equal bends keep generation order.
pub fn normalize(circles: Vec<Circle>) -> Vec<Circle> {
    let mut circles: Vec<Circle> = circles.iter().map(Circle::normalized).collect();
    circles.sort_by(|a, b| a.bend.total_cmp(&b.bend));
    circles
}
