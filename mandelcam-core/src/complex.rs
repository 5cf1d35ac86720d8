use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::CoreError;

/// A complex number represented as two `f64` components.
///
/// `Complex` is an immutable `Copy` value: every operation returns a new
/// number. Arithmetic follows IEEE semantics and never fails, so dividing by
/// [`Complex::ZERO`] yields non-finite components instead of an error.
///
/// Equality and hashing compare bit patterns rather than using IEEE `==`:
/// every NaN equals every other NaN, and `-0.0` is distinct from `+0.0`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 0.0);
    /// The imaginary unit, whose square is `-1`.
    pub const I: Self = Self::new(0.0, 1.0);

    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Embeds a real number: `re + 0i`.
    #[inline]
    pub const fn from_real(re: f64) -> Self {
        Self::new(re, 0.0)
    }

    /// The unit complex number `cos θ + i sin θ`.
    ///
    /// Multiplying by the result rotates a point counter-clockwise by
    /// `radians` around the origin.
    #[inline]
    pub fn rotation(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin)
    }

    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Returns `re² + im²` without taking the square root.
    #[inline]
    pub fn modulus2(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Returns `√(re² + im²)`, the distance to the origin.
    #[inline]
    pub fn modulus(self) -> f64 {
        self.modulus2().sqrt()
    }

    /// The multiplicative inverse `conj(z) / |z|²`.
    ///
    /// The inverse of zero has non-finite components.
    #[inline]
    pub fn inverse(self) -> Self {
        let m = self.modulus2();
        Self::new(self.re / m, -self.im / m)
    }

    /// Scalar multiplication: `λ·z`.
    #[inline]
    pub fn scale(self, lambda: f64) -> Self {
        Self::new(lambda * self.re, lambda * self.im)
    }

    /// Raises `self` to a non-negative integer power by repeated squaring,
    /// using `O(log p)` multiplications.
    pub fn pow(self, p: u32) -> Self {
        match p {
            0 => Self::ONE,
            p if p % 2 == 0 => (self * self).pow(p / 2),
            p => self * self.pow(p - 1),
        }
    }

    /// Like [`pow`](Self::pow) but takes a signed exponent, rejecting
    /// negative values and exponents wider than `u32`.
    pub fn try_pow(self, p: i64) -> crate::Result<Self> {
        if p < 0 {
            return Err(CoreError::NegativeExponent(p));
        }
        let p = u32::try_from(p).map_err(|_| CoreError::ExponentTooLarge(p))?;
        Ok(self.pow(p))
    }

    /// `true` when both components are neither infinite nor NaN.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

/// Bit pattern used for equality and hashing. All NaNs collapse to one
/// canonical pattern; signed zeros stay distinct.
#[inline]
pub(crate) fn canonical_bits(x: f64) -> u64 {
    if x.is_nan() {
        f64::NAN.to_bits()
    } else {
        x.to_bits()
    }
}

impl PartialEq for Complex {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        canonical_bits(self.re) == canonical_bits(other.re)
            && canonical_bits(self.im) == canonical_bits(other.im)
    }
}

impl Eq for Complex {}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.re).hash(state);
        canonical_bits(self.im).hash(state);
    }
}

// -- Arithmetic operators --

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl AddAssign for Complex {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl SubAssign for Complex {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl MulAssign for Complex {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for Complex {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl DivAssign for Complex {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
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

/// Scalar multiplication: `Complex * f64`, same as [`Complex::scale`].
impl Mul<f64> for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl std::fmt::Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.im.is_nan() || !self.im.is_sign_negative() {
            write!(f, "{} + {}i", self.re, self.im)
        } else {
            write!(f, "{} - {}i", self.re, -self.im)
        }
    }
}
