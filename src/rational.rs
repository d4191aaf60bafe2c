//! Exact rational coefficients.
//!
//! Backed by `num_rational::BigRational` rather than a fixed-width integer pair, following
//! `mathhook-core`'s choice of `BigRational` for its own `SparsePolynomial` coefficients:
//! Buchberger's intermediate coefficients can grow without bound even for small integer
//! inputs, and the teacher's ecosystem crate already handles that.

use crate::error::{GroebnerError, Result};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// An exact rational number, always stored in canonical form: `gcd(num, den) = 1`,
/// `den > 0`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rational(BigRational);

impl Rational {
    /// Constructs `num / den`. Fails with [`GroebnerError::ArithmeticError`] if `den` is
    /// zero. The result is always reduced and sign-normalized.
    pub fn new(num: impl Into<BigInt>, den: impl Into<BigInt>) -> Result<Self> {
        let den = den.into();
        if den.is_zero() {
            return Err(GroebnerError::ArithmeticError);
        }
        Ok(Rational(BigRational::new(num.into(), den)))
    }

    /// Constructs an integer rational `n / 1`.
    pub fn from_integer(n: impl Into<BigInt>) -> Self {
        Rational(BigRational::from_integer(n.into()))
    }

    pub fn zero() -> Self {
        Rational(BigRational::zero())
    }

    pub fn one() -> Self {
        Rational(BigRational::one())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn numerator(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denominator(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    /// Fallible division, matching the rest of the crate's error-propagating API rather
    /// than panicking the way `BigRational`'s own `/` would on a literal zero divisor.
    pub fn checked_div(&self, other: &Rational) -> Result<Rational> {
        if other.is_zero() {
            return Err(GroebnerError::ArithmeticError);
        }
        Ok(Rational(&self.0 / &other.0))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_integer() {
            write!(f, "{}", self.0.numer())
        } else {
            write!(f, "{}/{}", self.0.numer(), self.0.denom())
        }
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Rational::from_integer(n)
    }
}

macro_rules! forward_binop {
    ($trait_:ident, $method:ident, $op:tt) => {
        impl $trait_ for Rational {
            type Output = Rational;
            fn $method(self, rhs: Rational) -> Rational {
                Rational(self.0 $op rhs.0)
            }
        }

        impl $trait_ for &Rational {
            type Output = Rational;
            fn $method(self, rhs: &Rational) -> Rational {
                Rational(&self.0 $op &rhs.0)
            }
        }
    };
}

forward_binop!(Add, add, +);
forward_binop!(Sub, sub, -);
forward_binop!(Mul, mul, *);

impl Div for Rational {
    type Output = Rational;
    fn div(self, rhs: Rational) -> Rational {
        Rational(self.0 / rhs.0)
    }
}

impl Div for &Rational {
    type Output = Rational;
    fn div(self, rhs: &Rational) -> Rational {
        Rational(&self.0 / &rhs.0)
    }
}

impl AddAssign for Rational {
    fn add_assign(&mut self, rhs: Rational) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Rational {
    fn sub_assign(&mut self, rhs: Rational) {
        self.0 -= rhs.0;
    }
}

impl MulAssign for Rational {
    fn mul_assign(&mut self, rhs: Rational) {
        self.0 *= rhs.0;
    }
}

impl DivAssign for Rational {
    fn div_assign(&mut self, rhs: Rational) {
        self.0 /= rhs.0;
    }
}

impl Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational(-self.0.clone())
    }
}

impl Signed for Rational {
    fn abs(&self) -> Self {
        Rational(self.0.abs())
    }
    fn abs_sub(&self, other: &Self) -> Self {
        if self.0 <= other.0 {
            Rational::zero()
        } else {
            Rational(&self.0 - &other.0)
        }
    }
    fn signum(&self) -> Self {
        Rational(self.0.signum())
    }
    fn is_positive(&self) -> bool {
        self.0.is_positive()
    }
    fn is_negative(&self) -> bool {
        self.0.is_negative()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Rational::zero()
    }
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational::one()
    }
}
