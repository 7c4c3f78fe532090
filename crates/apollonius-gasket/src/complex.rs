//! Complex-plane arithmetic for circle centers.
//!
//! Centers are points in the complex plane. During generation every center is
//! stored multiplied by its own bend, which turns the Descartes relation on
//! centers into the same quadratic form as the relation on bends:
//!
//! ```text
//! c0 = c1 + c2 + c3 ± 2·sqrt(c1·c2 + c2·c3 + c1·c3)
//! ```
//!
//! Both roots are legitimate; [`descartes_check`] tells the caller which one
//! actually touches all three given circles.

use std::ops::{Add, Mul, Neg, Sub};

use crate::TANGENCY_TOLERANCE;

/// A point in the complex plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex {
    /// Real part (x)
    pub re: f64,
    /// Imaginary part (y)
    pub im: f64,
}

impl Complex {
    /// The origin.
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// Multiplicative identity.
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    /// Create a new complex value.
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Embed a real scalar as `(s, 0)`.
    pub const fn real(s: f64) -> Self {
        Self { re: s, im: 0.0 }
    }

    /// Build a value from modulus and argument.
    pub fn from_polar(modulus: f64, argument: f64) -> Self {
        Self {
            re: modulus * argument.cos(),
            im: modulus * argument.sin(),
        }
    }

    /// Euclidean modulus.
    pub fn abs(&self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Principal square root, computed in polar form.
    ///
    /// The argument is halved from `atan2(im, re)`, so the result always lies
    /// in the right half-plane (or on the positive imaginary axis). Zero maps
    /// to zero.
    pub fn sqrt(&self) -> Self {
        let argument = self.im.atan2(self.re) / 2.0;
        let modulus = self.abs().sqrt();
        Self::from_polar(modulus, argument)
    }

    /// Multiply by a real scalar.
    #[inline]
    pub fn scale(&self, s: f64) -> Self {
        Self {
            re: s * self.re,
            im: s * self.im,
        }
    }

    /// Whether both components are finite.
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }
}

impl Neg for Complex {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
}

impl From<f64> for Complex {
    fn from(value: f64) -> Self {
        Self::real(value)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Self { re, im }
    }
}

impl From<[f64; 2]> for Complex {
    fn from([re, im]: [f64; 2]) -> Self {
        Self { re, im }
    }
}

impl std::fmt::Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.re, self.im)
    }
}

/// Which root of a Descartes formula to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// The `+` root.
    Plus,
    /// The `-` root.
    Minus,
}

impl Sign {
    /// `+1.0` or `-1.0`.
    pub const fn value(self) -> f64 {
        match self {
            Sign::Plus => 1.0,
            Sign::Minus => -1.0,
        }
    }
}

/// Left-to-right sum. The empty sum is zero.
pub fn sum(values: &[Complex]) -> Complex {
    values.iter().fold(Complex::ZERO, |acc, &z| acc + z)
}

/// Left-to-right product. The empty product is one.
pub fn prod(values: &[Complex]) -> Complex {
    values
        .iter()
        .copied()
        .reduce(|acc, z| acc * z)
        .unwrap_or(Complex::ONE)
}

/// Complex Descartes theorem for bend-scaled centers.
///
/// Returns the bend-scaled center of a fourth circle tangent to the three
/// given ones, taking the root selected by `sign`.
pub fn descartes(c1: Complex, c2: Complex, c3: Complex, sign: Sign) -> Complex {
    let root = (c1 * c2 + c2 * c3 + c1 * c3).sqrt();
    sum(&[c1, c2, c3, root.scale(2.0 * sign.value())])
}

/// Check pairwise tangency of a bend-scaled quadruplet.
///
/// For each of the six pairs, the distance between true centers must equal
/// `|1/b_i + 1/b_j|` within [`TANGENCY_TOLERANCE`]. A negative bend makes its
/// radius term negative, which covers internal tangency with a bounding
/// circle.
pub fn descartes_check(centers: &[Complex; 4], bends: &[f64; 4]) -> bool {
    let true_centers: [Complex; 4] = std::array::from_fn(|i| centers[i].scale(1.0 / bends[i]));
    let radii: [f64; 4] = bends.map(|b| 1.0 / b);

    PAIRS.iter().all(|&(i, j)| {
        let distance = (true_centers[i] - true_centers[j]).abs();
        (distance - (radii[i] + radii[j]).abs()).abs() <= TANGENCY_TOLERANCE
    })
}

/// The six unordered index pairs of a quadruplet.
const PAIRS: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

/// Reflect a bend-scaled center across a tangent triple: `2·(c1+c2+c3) − center`.
#[inline]
pub fn reflect(center: Complex, about: [Complex; 3]) -> Complex {
    sum(&about).scale(2.0) - center
}
