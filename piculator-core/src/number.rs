//! Arbitrary precision decimal numbers using dashu
//!
//! Uses dashu-float (DBig) for arbitrary precision decimal arithmetic.
//! Every constructor takes an explicit working precision; there is no
//! process-wide precision setting, so two algorithm runs at different
//! precisions can coexist without stepping on each other.

use dashu_float::ops::{Abs, SquareRoot};
use dashu_float::DBig;
use dashu_int::IBig;
use thiserror::Error;

/// Error type for number operations
#[derive(Debug, Clone, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    Parse(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Domain error: {0}")]
    Domain(String),
}

/// Arbitrary precision decimal number with a fixed working precision
///
/// Built on dashu-float's DBig. All fallible operations return Results -
/// never panic. Each value remembers its precision, and binary operations
/// carry the larger precision of the two operands forward.
#[derive(Debug, Clone)]
pub struct Number {
    inner: DBig,
}

impl Number {
    // ========== Construction ==========

    /// Clamp a DBig to a concrete working precision. Unlimited-precision
    /// values must never escape into arithmetic: division would have no
    /// precision to round to.
    fn limited(val: DBig, precision: usize) -> DBig {
        val.with_precision(precision).value()
    }

    /// Parse a plain decimal string ("123", "3.14", "-42", "0.25")
    pub fn parse(s: &str, precision: usize) -> Result<Self, NumberError> {
        let inner: DBig = s
            .trim()
            .parse()
            .map_err(|_| NumberError::Parse(s.to_string()))?;
        Ok(Self {
            inner: Self::limited(inner, precision),
        })
    }

    /// Create from i64 with the given working precision
    pub fn from_i64(n: i64, precision: usize) -> Self {
        Self {
            inner: Self::limited(DBig::from(n), precision),
        }
    }

    /// Zero at the given working precision
    pub fn zero(precision: usize) -> Self {
        Self {
            inner: Self::limited(DBig::ZERO, precision),
        }
    }

    /// One at the given working precision
    pub fn one(precision: usize) -> Self {
        Self {
            inner: Self::limited(DBig::ONE, precision),
        }
    }

    /// Exact power of ten, `10^exponent`. Used for convergence thresholds
    /// like `1e-(digits+25)` without going through string parsing.
    pub fn pow10(exponent: isize, precision: usize) -> Self {
        Self {
            inner: Self::limited(DBig::from_parts(IBig::ONE, exponent), precision),
        }
    }

    /// The working precision this value was built with
    pub fn precision(&self) -> usize {
        self.inner.precision()
    }

    // ========== Predicates ==========

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.inner == DBig::ZERO
    }

    /// Check if negative
    pub fn is_negative(&self) -> bool {
        self.inner < DBig::ZERO
    }

    // ========== Basic Arithmetic ==========

    /// Addition
    pub fn add(&self, other: &Self) -> Self {
        Self {
            inner: &self.inner + &other.inner,
        }
    }

    /// Subtraction
    pub fn sub(&self, other: &Self) -> Self {
        Self {
            inner: &self.inner - &other.inner,
        }
    }

    /// Multiplication
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            inner: &self.inner * &other.inner,
        }
    }

    /// Safe division (returns Result, never panics)
    pub fn checked_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            Err(NumberError::DivisionByZero)
        } else {
            Ok(Self {
                inner: &self.inner / &other.inner,
            })
        }
    }

    /// Negation
    pub fn neg(&self) -> Self {
        Self {
            inner: -self.inner.clone(),
        }
    }

    /// Absolute value
    pub fn abs(&self) -> Self {
        Self {
            inner: Abs::abs(self.inner.clone()),
        }
    }

    /// Square root via dashu's built-in
    pub fn sqrt(&self) -> Result<Self, NumberError> {
        if self.is_negative() {
            return Err(NumberError::Domain(
                "square root of negative number".to_string(),
            ));
        }
        if self.is_zero() {
            return Ok(self.clone());
        }
        Ok(Self {
            inner: self.inner.clone().sqrt(),
        })
    }

    /// Round half-away-from-zero to `places` decimal places
    pub fn round_to_places(&self, places: usize) -> Self {
        let precision = self.inner.precision();
        // Shifting by an exact power of ten only moves the exponent, so the
        // scale and unscale steps lose nothing.
        let scale = Self::limited(DBig::from_parts(IBig::ONE, places as isize), precision);
        let shifted = &self.inner * &scale;
        let half = Self::limited(DBig::from_parts(IBig::from(5), -1), precision);
        let rounded = if shifted < DBig::ZERO {
            (shifted - half).ceil()
        } else {
            (shifted + half).floor()
        };
        Self {
            inner: Self::limited(&rounded / &scale, precision),
        }
    }

    // ========== Display ==========

    /// Render as a plain positional decimal string, never scientific
    /// notation. "3.14159", "4", "0.001". This is the form the display
    /// frames truncate and pad.
    pub fn to_plain_string(&self) -> String {
        // DBig stores as significand * 10^exponent
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();
        let negative = significand < IBig::ZERO;
        let digits = if negative {
            (-significand).to_string()
        } else {
            significand.to_string()
        };

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        if exponent >= 0 {
            out.push_str(&digits);
            for _ in 0..exponent {
                out.push('0');
            }
        } else {
            let frac = exponent.unsigned_abs();
            if digits.len() > frac {
                let split = digits.len() - frac;
                out.push_str(&digits[..split]);
                out.push('.');
                out.push_str(&digits[split..]);
            } else {
                out.push_str("0.");
                for _ in 0..(frac - digits.len()) {
                    out.push('0');
                }
                out.push_str(&digits);
            }
        }
        out
    }
}

// ========== Trait Implementations ==========

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // DBig implements PartialOrd, use it and treat None as Equal
        self.inner
            .partial_cmp(&other.inner)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREC: usize = 50;

    #[test]
    fn test_parse_and_render() {
        let n = Number::parse("3.14159", PREC).unwrap();
        assert_eq!(n.to_plain_string(), "3.14159");

        let n = Number::parse("-42", PREC).unwrap();
        assert_eq!(n.to_plain_string(), "-42");

        let n = Number::parse("0.001", PREC).unwrap();
        assert_eq!(n.to_plain_string(), "0.001");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Number::parse("not a number", PREC).is_err());
    }

    #[test]
    fn test_integer_render_has_no_point() {
        let n = Number::from_i64(4, PREC);
        assert_eq!(n.to_plain_string(), "4");
    }

    #[test]
    fn test_arithmetic() {
        let a = Number::from_i64(10, PREC);
        let b = Number::from_i64(32, PREC);
        assert_eq!(a.add(&b).to_plain_string(), "42");
        assert_eq!(b.sub(&a).to_plain_string(), "22");
        assert_eq!(a.mul(&b).to_plain_string(), "320");
        assert_eq!(
            b.checked_div(&Number::from_i64(4, PREC)).unwrap().to_plain_string(),
            "8"
        );
    }

    #[test]
    fn test_div_by_zero() {
        let a = Number::from_i64(42, PREC);
        assert!(matches!(
            a.checked_div(&Number::zero(PREC)),
            Err(NumberError::DivisionByZero)
        ));
    }

    #[test]
    fn test_division_rounds_to_working_precision() {
        let third = Number::one(10)
            .checked_div(&Number::from_i64(3, 10))
            .unwrap();
        let s = third.to_plain_string();
        assert!(s.starts_with("0.333333333"), "1/3 at 10 digits: {}", s);
    }

    #[test]
    fn test_neg_abs() {
        let n = Number::from_i64(-7, PREC);
        assert!(n.is_negative());
        assert_eq!(n.abs().to_plain_string(), "7");
        assert_eq!(n.neg().to_plain_string(), "7");
        assert_eq!(Number::from_i64(7, PREC).neg().to_plain_string(), "-7");
    }

    #[test]
    fn test_sqrt() {
        let n = Number::from_i64(2, PREC);
        let root = n.sqrt().unwrap();
        assert!(root.to_plain_string().starts_with("1.4142135623"));
    }

    #[test]
    fn test_sqrt_negative() {
        assert!(Number::from_i64(-4, PREC).sqrt().is_err());
    }

    #[test]
    fn test_pow10() {
        assert_eq!(Number::pow10(3, PREC).to_plain_string(), "1000");
        assert_eq!(Number::pow10(-2, PREC).to_plain_string(), "0.01");
    }

    #[test]
    fn test_round_to_places() {
        let n = Number::parse("2.675", PREC).unwrap();
        assert_eq!(n.round_to_places(2).to_plain_string(), "2.68");

        let n = Number::parse("3.14159", PREC).unwrap();
        assert_eq!(n.round_to_places(3).to_plain_string(), "3.142");

        let n = Number::parse("-2.5", PREC).unwrap();
        assert_eq!(n.round_to_places(0).to_plain_string(), "-3");
    }

    #[test]
    fn test_ordering() {
        let small = Number::parse("3.14", PREC).unwrap();
        let large = Number::parse("3.15", PREC).unwrap();
        assert!(small < large);
        assert_eq!(small, small.clone());
        assert!(small.sub(&large).abs() < Number::parse("0.02", PREC).unwrap());
    }
}
