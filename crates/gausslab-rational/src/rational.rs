//! Arbitrary precision rational numbers.
//!
//! Values are immutable: every operation returns a new `Rational`, and
//! every constructor reduces to lowest terms, so two equal values always
//! have identical numerator/denominator pairs.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use dashu::base::{Gcd, Signed};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use thiserror::Error;

/// Errors raised by rational construction, parsing, and division.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RationalError {
    /// A zero denominator, a zero divisor, or the reciprocal of zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Text that is not an integer or `numerator/denominator` literal.
    #[error("invalid rational literal: {0:?}")]
    InvalidFormat(String),
}

/// An exact rational number over arbitrary precision integers.
///
/// Invariants: `gcd(|numerator|, |denominator|) = 1` and the denominator
/// is strictly positive, so the sign always lives on the numerator.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    num: IBig,
    den: IBig,
}

impl Rational {
    /// Creates a rational from numerator and denominator, reduced to
    /// lowest terms.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the denominator is zero.
    pub fn new(num: IBig, den: IBig) -> Result<Self, RationalError> {
        if den == IBig::ZERO {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::reduced(num, den))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the denominator is zero.
    pub fn from_i64(num: i64, den: i64) -> Result<Self, RationalError> {
        Self::new(IBig::from(num), IBig::from(den))
    }

    /// Returns the numerator. Carries the sign of the value.
    #[must_use]
    pub fn numerator(&self) -> &IBig {
        &self.num
    }

    /// Returns the denominator. Always positive.
    #[must_use]
    pub fn denominator(&self) -> &IBig {
        &self.den
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.den == IBig::ONE
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the value is zero.
    pub fn recip(&self) -> Result<Self, RationalError> {
        if self.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::reduced(self.den.clone(), self.num.clone()))
    }

    /// Divides by another rational.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the divisor is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, RationalError> {
        if rhs.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::reduced(&self.num * &rhs.den, &self.den * &rhs.num))
    }

    /// Normalizes a numerator/denominator pair: positive denominator,
    /// lowest terms, zero stored as 0/1.
    ///
    /// The denominator must already be known non-zero.
    fn reduced(num: IBig, den: IBig) -> Self {
        debug_assert!(den != IBig::ZERO);
        let (num, den) = if Signed::is_negative(&den) {
            (-num, -den)
        } else {
            (num, den)
        };
        if num == IBig::ZERO {
            return Self {
                num,
                den: IBig::ONE,
            };
        }
        let g = IBig::from(num.clone().gcd(den.clone()));
        Self {
            num: num / &g,
            den: den / &g,
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self {
            num: IBig::ZERO,
            den: IBig::ONE,
        }
    }

    fn is_zero(&self) -> bool {
        self.num == IBig::ZERO
    }
}

impl One for Rational {
    fn one() -> Self {
        Self {
            num: IBig::ONE,
            den: IBig::ONE,
        }
    }

    fn is_one(&self) -> bool {
        self.num == IBig::ONE && self.den == IBig::ONE
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    /// Parses an optionally-signed integer (`"5"`, `"-3"`) or a fraction
    /// literal (`"-3/2"`), tolerating surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || RationalError::InvalidFormat(s.to_string());
        if text.is_empty() {
            return Err(invalid());
        }
        match text.split_once('/') {
            Some((num, den)) => {
                if den.contains('/') {
                    return Err(invalid());
                }
                let num = IBig::from_str_radix(num.trim(), 10).map_err(|_| invalid())?;
                let den = IBig::from_str_radix(den.trim(), 10).map_err(|_| invalid())?;
                Self::new(num, den)
            }
            None => {
                let num = IBig::from_str_radix(text, 10).map_err(|_| invalid())?;
                Ok(Self::from(num))
            }
        }
    }
}

impl Ord for Rational {
    /// Exact ordering by cross-multiplication; both denominators are
    /// positive, so no sign flip is involved.
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.num * &other.den).cmp(&(&other.num * &self.den))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Arithmetic operations: cross-multiplication, then reduction.
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        &self + rhs
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational::reduced(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        &self - rhs
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational::reduced(
            &self.num * &rhs.den - &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        &self * rhs
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational::reduced(&self.num * &rhs.num, &self.den * &rhs.den)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            num: -&self.num,
            den: self.den.clone(),
        }
    }
}

impl From<IBig> for Rational {
    fn from(num: IBig) -> Self {
        Self {
            num,
            den: IBig::ONE,
        }
    }
}

impl From<i64> for Rational {
    fn from(num: i64) -> Self {
        Self::from(IBig::from(num))
    }
}

impl From<i32> for Rational {
    fn from(num: i32) -> Self {
        Self::from(i64::from(num))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(num: i64, den: i64) -> Rational {
        Rational::from_i64(num, den).unwrap()
    }

    #[test]
    fn test_basic_ops() {
        let a = q(1, 2);
        let b = q(1, 3);

        // 1/2 + 1/3 = 5/6
        assert_eq!(a.clone() + b.clone(), q(5, 6));
        // 1/2 - 1/3 = 1/6
        assert_eq!(a.clone() - b.clone(), q(1, 6));
        // 1/2 * 1/3 = 1/6
        assert_eq!(a.clone() * b.clone(), q(1, 6));
        // (1/2) / (1/3) = 3/2
        assert_eq!(a.checked_div(&b).unwrap(), q(3, 2));
    }

    #[test]
    fn test_reduction() {
        // 4/6 reduces to 2/3
        let r = q(4, 6);
        assert_eq!(r.numerator(), &IBig::from(2));
        assert_eq!(r.denominator(), &IBig::from(3));
    }

    #[test]
    fn test_negative_denominator() {
        // Sign moves to the numerator
        let r = q(1, -2);
        assert_eq!(r, q(-1, 2));
        assert_eq!(r.denominator(), &IBig::from(2));

        // Two negatives cancel
        assert_eq!(q(-3, -6), q(1, 2));
    }

    #[test]
    fn test_zero_normalization() {
        let z = q(0, 5);
        assert!(z.is_zero());
        assert_eq!(z.denominator(), &IBig::ONE);
        assert_eq!(z, Rational::zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(q(3, 1).to_string(), "3");
        assert_eq!(q(2, 3).to_string(), "2/3");
        assert_eq!(q(-1, 2).to_string(), "-1/2");
        assert_eq!(q(0, 7).to_string(), "0");
    }

    #[test]
    fn test_parse() {
        assert_eq!("5".parse::<Rational>().unwrap(), q(5, 1));
        assert_eq!("-3".parse::<Rational>().unwrap(), q(-3, 1));
        assert_eq!(" -3/2 ".parse::<Rational>().unwrap(), q(-3, 2));
        assert_eq!("4/6".parse::<Rational>().unwrap(), q(2, 3));
        assert_eq!("3/-6".parse::<Rational>().unwrap(), q(-1, 2));
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", "   ", "abc", "1/2/3", "1.5", "/2", "3/"] {
            assert!(matches!(
                bad.parse::<Rational>(),
                Err(RationalError::InvalidFormat(_))
            ));
        }
        assert_eq!(
            "1/0".parse::<Rational>(),
            Err(RationalError::DivisionByZero)
        );
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(Rational::from_i64(1, 0), Err(RationalError::DivisionByZero));
        assert_eq!(
            q(1, 2).checked_div(&Rational::zero()),
            Err(RationalError::DivisionByZero)
        );
        assert_eq!(Rational::zero().recip(), Err(RationalError::DivisionByZero));
    }

    #[test]
    fn test_recip() {
        assert_eq!(q(3, 5).recip().unwrap(), q(5, 3));
        assert_eq!(q(-2, 7).recip().unwrap(), q(-7, 2));
    }

    #[test]
    fn test_ordering() {
        assert!(q(1, 2) >= q(1, 3));
        assert!(q(-1, 2) < q(1, 3));
        assert!(q(2, 4) >= q(1, 2));
        assert!(q(-3, 2) < q(-1, 2));
    }

    #[test]
    fn test_large_values() {
        let n = IBig::from_str_radix("123456789012345678901234567890", 10).unwrap();
        let r = Rational::new(n, IBig::from(3)).unwrap();
        assert_eq!(r.to_string(), "41152263004115226300411522630");
    }
}
