//! Apollonian Gasket Generation
//!
//! Builds a finite Apollonian gasket: a set of mutually tangent circles grown
//! recursively from one tangent quadruplet using the Descartes Circle Theorem.
//!
//! # Descartes Circle Theorem
//!
//! Four mutually tangent circles with signed curvatures ("bends") satisfy
//!
//! ```text
//! (b0 + b1 + b2 + b3)² = 2·(b0² + b1² + b2² + b3²)
//! ```
//!
//! and the same relation holds for their centers multiplied by their bends,
//! read as complex numbers. Replacing one circle of a quadruplet with the
//! other solution is a *reflection*: `b' = 2·(b1 + b2 + b3) − b0`, and the
//! same linear rule for the bend-scaled center.
//!
//! # Generation
//!
//! 1. A seed quadruplet is built from three bends, two centers inside the
//!    unit circle, or three centers forming a triangle.
//! 2. The seed is expanded breadth-first by reflection. Branches with a bend
//!    at or above `max_bend` are dropped, and expansion stops once the
//!    collection holds more than `max_count` circles.
//! 3. Centers are divided by their bends and the circles sorted by bend.
//!
//! ```
//! use apollonius_gasket::{from_bends, GasketLimits};
//!
//! let circles = from_bends(2.0, 2.0, 3.0, GasketLimits::new(100.0, 0)).unwrap();
//! let bends: Vec<f64> = circles.iter().map(|c| c.bend).collect();
//! assert_eq!(bends, vec![-1.0, 2.0, 2.0, 3.0]);
//! ```

mod circle;
mod complex;
mod descartes;
mod error;
mod expand;
mod gasket;
mod seed;

pub use circle::{Circle, Quadruplet};
pub use complex::{descartes_check, prod, reflect, sum, Complex, Sign};
pub use descartes::{bend_walk, descartes, discriminant, get_outer_bend, max_bend_for_min_radius, WALK_STEP_LIMIT};
pub use error::{GasketError, Result};
pub use expand::{Branch, Expander, Expansion, ExpansionCeiling, GasketLimits};
pub use gasket::{from_bends, from_centers_pair, from_centers_triplet, generate, normalize};
pub use seed::{bend_placement, seed_from_bends, seed_from_centers_pair, seed_from_centers_triplet};

/// Complex-valued Descartes formula, re-exported under its own name.
pub use complex::descartes as complex_descartes;

/// Absolute tolerance for pairwise tangency distances.
pub const TANGENCY_TOLERANCE: f64 = 1e-8;

/// Relative tolerance for the Descartes curvature relation.
pub const DESCARTES_TOLERANCE: f64 = 1e-6;

// Compile-time ordering of the two tolerances
const _: () = assert!(TANGENCY_TOLERANCE <= DESCARTES_TOLERANCE);
