//! Breadth-first gasket expansion.
//!
//! Every active branch is a tangent quadruplet plus the index of the circle
//! that was just produced by reflection. A branch's children reflect each of
//! its other circles across the remaining three:
//!
//! - the seed (generation 0) has no fixed circle, so it branches 4 ways;
//! - every reflected quadruplet keeps its new circle at index 0 and fixes it,
//!   so it branches 3 ways and never immediately undoes its own reflection.
//!
//! Expansion stops when no branch survives the bend filter or when the
//! collection has grown past `max_count`. The count is checked after each
//! whole generation, so the result can overshoot `max_count` by up to one
//! generation.

use tracing::{debug, warn};

use crate::circle::{Circle, Quadruplet};
use crate::complex::reflect;
use crate::error::{GasketError, Result};

/// Caller-chosen stopping bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasketLimits {
    /// Branches containing a bend of this magnitude or more are dropped
    pub max_bend: f64,
    /// Expansion stops once the collection holds more circles than this
    pub max_count: usize,
}

impl GasketLimits {
    /// Create limits.
    pub const fn new(max_bend: f64, max_count: usize) -> Self {
        Self {
            max_bend,
            max_count,
        }
    }

    /// No bend bound and no count bound. Only the [`ExpansionCeiling`] stops
    /// expansion.
    pub const fn unbounded() -> Self {
        Self {
            max_bend: f64::INFINITY,
            max_count: usize::MAX,
        }
    }

    /// Whether a child quadruplet may stay active.
    ///
    /// Every bend must be below `max_bend` in magnitude, and at most one
    /// circle may be a bounding circle.
    pub fn admits(&self, quadruplet: &Quadruplet) -> bool {
        quadruplet
            .bends()
            .iter()
            .all(|b| b.abs() < self.max_bend)
            && quadruplet.negative_count() <= 1
    }
}

/// Hard cap on expansion work, independent of [`GasketLimits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionCeiling {
    /// Most generations expanded after the seed
    pub max_generations: usize,
    /// Most circles the collection may hold
    pub max_circles: usize,
}

impl ExpansionCeiling {
    /// Default generation cap.
    pub const DEFAULT_MAX_GENERATIONS: usize = 4096;

    /// Default circle cap.
    pub const DEFAULT_MAX_CIRCLES: usize = 1 << 21;
}

impl Default for ExpansionCeiling {
    fn default() -> Self {
        Self {
            max_generations: Self::DEFAULT_MAX_GENERATIONS,
            max_circles: Self::DEFAULT_MAX_CIRCLES,
        }
    }
}

/// An active branch of the expansion tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Branch {
    /// The tangent quadruplet
    pub quadruplet: Quadruplet,
    /// Circle that must not be reflected again
    pub fixed: Option<usize>,
}

impl Branch {
    /// The seed branch; every circle may be reflected.
    pub const fn root(quadruplet: Quadruplet) -> Self {
        Self {
            quadruplet,
            fixed: None,
        }
    }

    /// The circle this branch introduced (index 0 for reflected branches).
    pub fn newest(&self) -> Circle {
        self.quadruplet.circles()[0]
    }

    /// Reflect each non-fixed circle across the other three.
    ///
    /// Each child is laid out as `[reflection, other three in order]` with
    /// index 0 fixed.
    pub fn children(&self) -> impl Iterator<Item = Branch> + '_ {
        (0..4)
            .filter(move |&i| self.fixed != Some(i))
            .map(move |i| Branch {
                quadruplet: reflect_out(&self.quadruplet, i),
                fixed: Some(0),
            })
    }
}

/// Indices of the other three circles, for each singled-out circle.
const OTHERS: [[usize; 3]; 4] = [[1, 2, 3], [0, 2, 3], [0, 1, 3], [0, 1, 2]];

/// Replace circle `index` with the other circle tangent to the remaining three.
fn reflect_out(quadruplet: &Quadruplet, index: usize) -> Quadruplet {
    let circles = quadruplet.circles();
    let singlet = circles[index];
    let [a, b, c] = OTHERS[index].map(|i| circles[i]);

    let bend = 2.0 * (a.bend + b.bend + c.bend) - singlet.bend;
    let center = reflect(singlet.center, [a.center, b.center, c.center]);

    Quadruplet::new([Circle::new(center, bend), a, b, c])
}

/// Raw expansion output.
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion {
    /// Circles with bend-scaled centers, in generation order
    pub circles: Vec<Circle>,
    /// Generations expanded after the seed
    pub generations: usize,
}

/// Expands a seed under caller limits and a hard ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expander {
    limits: GasketLimits,
    ceiling: ExpansionCeiling,
}

impl Expander {
    /// Create an expander with the default ceiling.
    pub fn new(limits: GasketLimits) -> Self {
        Self {
            limits,
            ceiling: ExpansionCeiling::default(),
        }
    }

    /// Replace the hard ceiling.
    pub fn with_ceiling(mut self, ceiling: ExpansionCeiling) -> Self {
        self.ceiling = ceiling;
        self
    }

    /// Expand `seed` generation by generation.
    pub fn expand(&self, seed: Quadruplet) -> Result<Expansion> {
        let mut circles: Vec<Circle> = seed.circles().to_vec();
        let mut active = vec![Branch::root(seed)];
        let mut generations = 0;

        while !active.is_empty() {
            if circles.len() > self.limits.max_count {
                debug!(
                    circles = circles.len(),
                    max_count = self.limits.max_count,
                    "count bound reached"
                );
                break;
            }
            if generations >= self.ceiling.max_generations {
                return Err(self.exhausted(generations, circles.len()));
            }

            let mut next = Vec::with_capacity(active.len() * 3);
            for branch in active.iter().flat_map(|branch| branch.children()) {
                if !self.limits.admits(&branch.quadruplet) {
                    continue;
                }
                if circles.len() + next.len() >= self.ceiling.max_circles {
                    return Err(self.exhausted(generations, circles.len()));
                }
                next.push(branch);
            }

            circles.extend(next.iter().map(Branch::newest));
            active = next;
            generations += 1;

            debug!(
                generation = generations,
                active = active.len(),
                circles = circles.len(),
                "expanded generation"
            );
        }

        Ok(Expansion {
            circles,
            generations,
        })
    }

    fn exhausted(&self, generations: usize, circles: usize) -> GasketError {
        warn!(
            generations,
            circles,
            max_generations = self.ceiling.max_generations,
            max_circles = self.ceiling.max_circles,
            "expansion ceiling reached"
        );
        GasketError::ResourceExhausted {
            generations,
            circles,
        }
    }
}
