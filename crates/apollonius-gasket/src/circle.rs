//! Circles and mutually tangent quadruplets.

use crate::complex::{descartes_check, Complex};

/// A circle given by its center and signed curvature.
///
/// Inside the generator the center is stored multiplied by the bend; the
/// circles handed back to callers carry true Euclidean centers. A negative
/// bend marks a bounding circle whose interior holds the packing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// Center (bend-scaled during generation, Euclidean in output)
    pub center: Complex,
    /// Signed curvature, `±1/radius`
    pub bend: f64,
}

impl Circle {
    /// Create a circle.
    pub const fn new(center: Complex, bend: f64) -> Self {
        Self { center, bend }
    }

    /// Unsigned radius.
    pub fn radius(&self) -> f64 {
        1.0 / self.bend.abs()
    }

    /// Whether this circle encloses the packing.
    pub fn is_bounding(&self) -> bool {
        self.bend < 0.0
    }

    /// Multiply the center by the bend.
    pub fn scaled(&self) -> Self {
        Self {
            center: self.center.scale(self.bend),
            bend: self.bend,
        }
    }

    /// Divide a bend-scaled center back out to its Euclidean position.
    pub fn normalized(&self) -> Self {
        Self {
            center: self.center.scale(1.0 / self.bend),
            bend: self.bend,
        }
    }
}

/// Four mutually tangent circles with bend-scaled centers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadruplet(pub [Circle; 4]);

impl Quadruplet {
    /// Wrap four bend-scaled circles.
    pub const fn new(circles: [Circle; 4]) -> Self {
        Self(circles)
    }

    /// The circles, in order.
    pub fn circles(&self) -> &[Circle; 4] {
        &self.0
    }

    /// The four bends.
    pub fn bends(&self) -> [f64; 4] {
        self.0.map(|c| c.bend)
    }

    /// The four bend-scaled centers.
    pub fn centers(&self) -> [Complex; 4] {
        self.0.map(|c| c.center)
    }

    /// Number of circles with negative bend.
    pub fn negative_count(&self) -> usize {
        self.0.iter().filter(|c| c.is_bounding()).count()
    }

    /// Relative residual of `(Σb)² = 2·Σb²`.
    ///
    /// Zero for an exact Descartes quadruplet. Scaled by `max(2·Σb², 1)` so
    /// that large bends are compared relatively and tiny ones absolutely.
    pub fn descartes_residual(&self) -> f64 {
        let bends = self.bends();
        let total: f64 = bends.iter().sum();
        let squares: f64 = bends.iter().map(|b| b * b).sum();
        let lhs = total * total;
        let rhs = 2.0 * squares;
        (lhs - rhs).abs() / rhs.abs().max(1.0)
    }

    /// Whether the bends satisfy the Descartes relation within `tolerance`.
    pub fn satisfies_descartes(&self, tolerance: f64) -> bool {
        self.descartes_residual() <= tolerance
    }

    /// Whether every pair of circles is tangent.
    pub fn is_tangent(&self) -> bool {
        descartes_check(&self.centers(), &self.bends())
    }

    /// Whether every bend and center is finite and no bend is zero.
    pub fn is_finite(&self) -> bool {
        self.0
            .iter()
            .all(|c| c.bend.is_finite() && c.bend != 0.0 && c.center.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DESCARTES_TOLERANCE;

    fn symmetric() -> Quadruplet {
        Quadruplet::new([
            Circle::new(Complex::ZERO, -1.0).scaled(),
            Circle::new(Complex::new(0.5, 0.0), 2.0).scaled(),
            Circle::new(Complex::new(-0.5, 0.0), 2.0).scaled(),
            Circle::new(Complex::new(0.0, 2.0 / 3.0), 3.0).scaled(),
        ])
    }

    #[test]
    fn radius_is_unsigned() {
        assert_eq!(Circle::new(Complex::ZERO, -4.0).radius(), 0.25);
        assert_eq!(Circle::new(Complex::ZERO, 4.0).radius(), 0.25);
    }

    #[test]
    fn scale_then_normalize() {
        let circle = Circle::new(Complex::new(0.25, -0.5), 4.0);
        let scaled = circle.scaled();
        assert_eq!(scaled.center, Complex::new(1.0, -2.0));
        assert_eq!(scaled.normalized(), circle);
    }

    #[test]
    fn bounding_circle_detection() {
        let q = symmetric();
        assert!(q.circles()[0].is_bounding());
        assert_eq!(q.negative_count(), 1);
    }

    #[test]
    fn descartes_relation_holds() {
        let q = symmetric();
        assert_eq!(q.descartes_residual(), 0.0);
        assert!(q.satisfies_descartes(DESCARTES_TOLERANCE));
    }

    #[test]
    fn descartes_relation_fails_for_wrong_bend() {
        let mut circles = *symmetric().circles();
        circles[3].bend = 4.0;
        assert!(!Quadruplet::new(circles).satisfies_descartes(DESCARTES_TOLERANCE));
    }

    #[test]
    fn symmetric_quadruplet_is_tangent() {
        assert!(symmetric().is_tangent());
        assert!(symmetric().is_finite());
    }

    #[test]
    fn zero_bend_is_not_finite() {
        let mut circles = *symmetric().circles();
        circles[1].bend = 0.0;
        assert!(!Quadruplet::new(circles).is_finite());
    }
}
