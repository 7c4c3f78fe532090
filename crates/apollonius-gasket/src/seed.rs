//! Seed quadruplet construction.
//!
//! Three independent ways to obtain a mutually tangent quadruplet with
//! bend-scaled centers:
//!
//! - from three bends, via the bend walk and a closed-form placement;
//! - from two interior centers, each circle internally tangent to the unit
//!   circle;
//! - from three centers, each pair of circles externally tangent.
//!
//! The complex Descartes formula has two roots. Both center-based seeds try
//! the `+` root first and fall back to the `-` root when the `+` candidate
//! does not pass [`descartes_check`].

use tracing::trace;

use crate::circle::{Circle, Quadruplet};
use crate::complex::{self, descartes_check, Complex, Sign};
use crate::descartes::{
    bend_walk, discriminant, discriminant_scale, minus_root, DISCRIMINANT_EPSILON,
};
use crate::error::{GasketError, Result};

/// Side-sum differences below this fraction of the perimeter count as a
/// collinear triangle.
const COLLINEAR_EPSILON: f64 = 1e-12;

/// Squared offsets within this fraction of the squared distance from the
/// origin are rounding noise for a circle centered on the real axis.
const PLACEMENT_EPSILON: f64 = 1e-12;

/// Seed from three bends.
pub fn seed_from_bends(b1: f64, b2: f64, b3: f64) -> Result<Quadruplet> {
    for b in [b1, b2, b3] {
        if !b.is_finite() || b == 0.0 {
            return Err(GasketError::invalid_seed(format!(
                "bend {} must be finite and non-zero",
                b
            )));
        }
    }
    check_discriminant(b1, b2, b3)?;

    let bends = bend_walk(b1, b2, b3);
    let centers = bend_placement(bends)?;
    finish(Quadruplet::new(std::array::from_fn(|i| {
        Circle::new(centers[i], bends[i])
    })))
}

/// Place four bends as tangent circles.
///
/// Circle 0 sits at the origin, circle 1 on the positive or negative real
/// axis, circles 2 and 3 below and above it. Returned centers are already
/// multiplied by their bends.
pub fn bend_placement(bends: [f64; 4]) -> Result<[Complex; 4]> {
    let [b0, b1, b2, b3] = bends;
    if b0 == 0.0 || b1 + b0 == 0.0 {
        return Err(GasketError::invalid_seed(format!(
            "cannot place bends {:?}: b0 and b0 + b1 must be non-zero",
            bends
        )));
    }

    let shift = (b1 - b0) / (b1 + b0);

    let c0 = Complex::ZERO;
    let c1 = Complex::real(1.0 + b1 / b0);

    let x2 = b2 / b0 + shift;
    let y2 = -axis_height(1.0 + b2 / b0, x2, bends)?;

    let x3 = b3 / b0 + shift;
    let y3 = axis_height(1.0 + b3 / b0, x3, bends)?;

    Ok([c0, c1, Complex::new(x2, y2), Complex::new(x3, y3)])
}

/// `sqrt(distance² - x²)`, treating rounding noise around zero as zero.
fn axis_height(distance: f64, x: f64, bends: [f64; 4]) -> Result<f64> {
    let squared = distance * distance;
    let height = squared - x * x;
    if height.abs() <= PLACEMENT_EPSILON * squared {
        return Ok(0.0);
    }
    if height > 0.0 {
        return Ok(height.sqrt());
    }
    Err(GasketError::invalid_seed(format!(
        "cannot place bends {:?}: no real position for offset {}",
        bends, x
    )))
}

/// Seed from two circle centers inside the unit circle.
///
/// Each circle is internally tangent to the unit circle, so its bend is
/// `1 / (1 - |c|)`. The unit circle itself becomes the bounding circle with
/// bend `-1`.
pub fn seed_from_centers_pair(c1: Complex, c2: Complex) -> Result<Quadruplet> {
    for c in [c1, c2] {
        if !c.is_finite() {
            return Err(GasketError::invalid_seed(format!("center {} is not finite", c)));
        }
        if c.abs() >= 1.0 {
            return Err(GasketError::invalid_seed(format!(
                "center {} must lie strictly inside the unit circle",
                c
            )));
        }
    }

    let b1 = 1.0 / (1.0 - c1.abs());
    let b2 = 1.0 / (1.0 - c2.abs());
    let b3 = outer_bend(-1.0, b1, b2)?;

    let c1 = c1.scale(b1);
    let c2 = c2.scale(b2);

    // With the bounding circle at the origin, the complex formula reduces to
    // c1 + c2 ± 2·sqrt(c1·c2)
    let root = (c1 * c2).sqrt().scale(2.0);
    let bends = [-1.0, b1, b2, b3];
    let plus = complex::sum(&[c1, c2, root]);
    let c3 = if descartes_check(&[Complex::ZERO, c1, c2, plus], &bends) {
        trace!("pair seed: taking + root");
        plus
    } else {
        trace!("pair seed: + root not tangent, taking - root");
        complex::sum(&[c1, c2, -root])
    };

    finish(Quadruplet::new([
        Circle::new(Complex::ZERO, -1.0),
        Circle::new(c1, b1),
        Circle::new(c2, b2),
        Circle::new(c3, b3),
    ]))
}

/// Seed from three circle centers forming a triangle.
///
/// Each pair of circles touches externally, so the radius at a vertex is
/// half the sum of the two adjacent sides minus the opposite side.
pub fn seed_from_centers_triplet(c1: Complex, c2: Complex, c3: Complex) -> Result<Quadruplet> {
    for c in [c1, c2, c3] {
        if !c.is_finite() {
            return Err(GasketError::invalid_seed(format!("center {} is not finite", c)));
        }
    }

    // Side opposite each vertex
    let s1 = (c2 - c3).abs();
    let s2 = (c1 - c3).abs();
    let s3 = (c1 - c2).abs();

    let perimeter = s1 + s2 + s3;
    let spans = [s2 + s3 - s1, s1 + s3 - s2, s1 + s2 - s3];
    if spans.iter().any(|&d| d <= perimeter * COLLINEAR_EPSILON) {
        return Err(GasketError::invalid_seed(
            "centers are coincident or collinear",
        ));
    }

    let [b1, b2, b3] = spans.map(|d| 2.0 / d);
    let b0 = outer_bend(b1, b2, b3)?;

    let c1 = c1.scale(b1);
    let c2 = c2.scale(b2);
    let c3 = c3.scale(b3);

    let bends = [b0, b1, b2, b3];
    let plus = complex::descartes(c1, c2, c3, Sign::Plus);
    let c0 = if descartes_check(&[plus, c1, c2, c3], &bends) {
        trace!("triplet seed: taking + root");
        plus
    } else {
        trace!("triplet seed: + root not tangent, taking - root");
        complex::descartes(c1, c2, c3, Sign::Minus)
    };

    finish(Quadruplet::new([
        Circle::new(c0, b0),
        Circle::new(c1, b1),
        Circle::new(c2, b2),
        Circle::new(c3, b3),
    ]))
}

fn check_discriminant(b1: f64, b2: f64, b3: f64) -> Result<()> {
    let d = discriminant(b1, b2, b3);
    if !d.is_finite() || d < -DISCRIMINANT_EPSILON * discriminant_scale(b1, b2, b3) {
        return Err(GasketError::invalid_seed(format!(
            "bends ({}, {}, {}) have no real tangent circle (discriminant {})",
            b1, b2, b3, d
        )));
    }
    Ok(())
}

/// The `-` root of the scalar Descartes formula, rejecting triples with no
/// real root.
fn outer_bend(b1: f64, b2: f64, b3: f64) -> Result<f64> {
    check_discriminant(b1, b2, b3)?;
    Ok(minus_root(b1, b2, b3))
}

fn finish(seed: Quadruplet) -> Result<Quadruplet> {
    if !seed.is_finite() {
        return Err(GasketError::invalid_seed(format!(
            "seed has non-finite or zero values: {:?}",
            seed.circles()
        )));
    }
    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DESCARTES_TOLERANCE;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn true_center(circle: &Circle) -> Complex {
        circle.normalized().center
    }

    #[test]
    fn bends_seed_is_tangent() {
        let seed = seed_from_bends(2.0, 2.0, 3.0).unwrap();
        assert_eq!(seed.bends(), [-1.0, 2.0, 2.0, 3.0]);
        assert!(seed.is_tangent());
        assert!(seed.satisfies_descartes(DESCARTES_TOLERANCE));
    }

    #[test]
    fn placement_puts_outer_circle_at_origin() {
        let centers = bend_placement([-1.0, 2.0, 2.0, 3.0]).unwrap();
        assert_eq!(centers[0], Complex::ZERO);
        assert_eq!(centers[1], Complex::real(-1.0));
        assert!(centers[2].im <= 0.0);
        assert!(centers[3].im >= 0.0);
    }

    #[test]
    fn placement_rejects_zero_denominators() {
        assert!(bend_placement([0.0, 1.0, 1.0, 1.0]).is_err());
        assert!(bend_placement([-1.0, 1.0, 2.0, 2.0]).is_err());
    }

    #[test]
    fn bends_seed_rejects_bad_input() {
        assert!(matches!(
            seed_from_bends(0.0, 2.0, 3.0),
            Err(GasketError::InvalidSeed { .. })
        ));
        assert!(seed_from_bends(f64::NAN, 2.0, 3.0).is_err());
        assert!(seed_from_bends(f64::INFINITY, 2.0, 3.0).is_err());
        assert!(seed_from_bends(-1.0, -1.0, 2.0).is_err());
    }

    #[test]
    fn bends_seed_scaled_copies() {
        // Every placed circle sits on the real axis, where the offset under
        // the square root rounds to either side of zero
        for i in 1..=200 {
            let s = i as f64 * 0.1;
            let t = i as f64 * 0.37;
            for (b1, b2, b3) in [
                (2.0 * s, 2.0 * s, 3.0 * s),
                (2.0 * s, 3.0 * s, 2.0 * s),
                (-t, 2.0 * t, 2.0 * t),
                (-2.0 * s, 3.0 * s, 6.0 * s),
            ] {
                let seed = seed_from_bends(b1, b2, b3)
                    .unwrap_or_else(|e| panic!("({}, {}, {}): {}", b1, b2, b3, e));
                assert!(seed.is_tangent(), "({}, {}, {}): {:?}", b1, b2, b3, seed);
                assert!(seed.satisfies_descartes(DESCARTES_TOLERANCE));
            }
        }
    }

    #[test]
    fn placement_on_real_axis_has_zero_height() {
        let centers = bend_placement([-0.7, 1.4, 1.4, 2.1]).unwrap();
        assert_eq!(centers[2].im, 0.0);
        assert!(centers[3].im > 0.0);
    }

    #[test]
    fn placement_rejects_unplaceable_bends() {
        assert!(matches!(
            bend_placement([-1.0, 2.0, 1.0, 3.0]),
            Err(GasketError::InvalidSeed { .. })
        ));
    }

    #[test]
    fn bends_seed_keeps_anomaly() {
        let seed = seed_from_bends(2.0, 3.0, 10.0).unwrap();
        assert!(seed.bends().iter().all(|&b| b > 0.0));
        assert_eq!(seed.negative_count(), 0);
    }

    #[test]
    fn pair_seed_symmetric() {
        let seed = seed_from_centers_pair(Complex::new(0.5, 0.0), Complex::new(-0.5, 0.0)).unwrap();
        let circles = seed.circles();

        assert_eq!(circles[0], Circle::new(Complex::ZERO, -1.0));
        assert!(close(circles[1].bend, 2.0));
        assert!(close(circles[2].bend, 2.0));
        assert!(close(circles[3].bend, 3.0));

        let c3 = true_center(&circles[3]);
        assert!(close(c3.re, 0.0));
        assert!(close(c3.im.abs(), 2.0 / 3.0));
        assert!(seed.is_tangent());
    }

    #[test]
    fn pair_seed_unequal_radii() {
        let seed = seed_from_centers_pair(Complex::new(0.4, 0.0), Complex::new(-0.6, 0.0)).unwrap();
        assert!(close(seed.circles()[1].radius(), 0.6));
        assert!(close(seed.circles()[2].radius(), 0.4));
        assert!(seed.is_tangent());
        assert!(seed.satisfies_descartes(DESCARTES_TOLERANCE));
    }

    #[test]
    fn pair_seed_rejects_points_outside_unit_circle() {
        assert!(seed_from_centers_pair(Complex::new(1.0, 0.0), Complex::new(-0.5, 0.0)).is_err());
        assert!(seed_from_centers_pair(Complex::new(0.5, 0.0), Complex::new(0.0, -2.0)).is_err());
    }

    #[test]
    fn pair_seed_rejects_coincident_origin() {
        // Two unit circles at the origin have no real fourth circle
        assert!(seed_from_centers_pair(Complex::ZERO, Complex::ZERO).is_err());
    }

    #[test]
    fn triplet_seed_three_four_five() {
        // Radii 1, 2, 3 around a 3-4-5 right triangle
        let seed = seed_from_centers_triplet(
            Complex::ZERO,
            Complex::new(3.0, 0.0),
            Complex::new(0.0, 4.0),
        )
        .unwrap();
        let circles = seed.circles();

        assert!(close(circles[1].bend, 1.0));
        assert!(close(circles[2].bend, 0.5));
        assert!(close(circles[3].bend, 1.0 / 3.0));
        assert!(close(circles[0].bend, -1.0 / 6.0));

        let outer = true_center(&circles[0]);
        assert!(close(outer.re, 3.0));
        assert!(close(outer.im, 4.0));
        assert!(seed.is_tangent());
    }

    #[test]
    fn triplet_seed_equilateral() {
        let seed = seed_from_centers_triplet(
            Complex::new(-1.0, 0.0),
            Complex::new(1.0, 0.0),
            Complex::new(0.0, 3f64.sqrt()),
        )
        .unwrap();
        assert!(close(seed.circles()[0].bend, 3.0 - 2.0 * 3f64.sqrt()));
        let outer = true_center(&seed.circles()[0]);
        assert!(close(outer.re, 0.0));
        assert!(close(outer.im, 1.0 / 3f64.sqrt()));
        assert!(seed.is_tangent());
    }

    #[test]
    fn triplet_seed_rejects_degenerate_triangles() {
        let collinear = seed_from_centers_triplet(
            Complex::ZERO,
            Complex::new(1.0, 0.0),
            Complex::new(2.0, 0.0),
        );
        assert!(matches!(collinear, Err(GasketError::InvalidSeed { .. })));

        let coincident = seed_from_centers_triplet(
            Complex::new(1.0, 1.0),
            Complex::new(1.0, 1.0),
            Complex::new(0.0, 2.0),
        );
        assert!(coincident.is_err());
    }
}
