//! Precision-aware primitives shared by every algorithm
//!
//! Integer exponentiation by squaring, Newton's-method root extraction,
//! and the factorial pair used for incremental term updates.

use piculator_core::{EngineError, Number, NumberError, Precision};

/// Largest exponent (or root degree) magnitude accepted by `int_pow` and
/// `nth_root`. Past this bound the exponent no longer fits the exact
/// integer range of a double-width significand, and a general power
/// implementation would fall back to a slower, precision-risking
/// approximation. The primitives refuse instead of degrading.
pub const MAX_SAFE_EXPONENT: u64 = 9_007_199_254_740_991;

fn guard_exponent(exponent: i64) -> Result<(), EngineError> {
    if exponent.unsigned_abs() > MAX_SAFE_EXPONENT {
        return Err(EngineError::PrecisionOverflow(exponent));
    }
    Ok(())
}

/// `base^exponent` by repeated squaring, so the multiplication count stays
/// logarithmic in the exponent. A negative exponent gives the reciprocal
/// of the positive-exponent result.
pub fn int_pow(base: &Number, exponent: i64) -> Result<Number, EngineError> {
    guard_exponent(exponent)?;

    let mut result = Number::one(base.precision());
    let mut square = base.clone();
    let mut remaining = exponent.unsigned_abs();
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result.mul(&square);
        }
        remaining >>= 1;
        if remaining > 0 {
            square = square.mul(&square);
        }
    }

    if exponent < 0 {
        result = Number::one(base.precision()).checked_div(&result)?;
    }
    Ok(result)
}

/// The real `degree`-th root of `value` by Newton-Raphson.
///
/// For x^m - A = 0:
///   x_n+1 = x_n - (x_n^m - A) / (m * x_n^(m-1))
///         = ( (m-1) * x_n^(m-1) * x_n + A ) / ( m * x_n^(m-1) )
///
/// Starts from `value / 2`, converges once successive iterates differ by
/// less than `10^-(digits+25)`, and rounds the result to `digits+25`
/// decimal places. A negative radicand with an even degree has no real
/// root and is rejected.
pub fn nth_root(value: &Number, degree: i64, precision: &Precision) -> Result<Number, EngineError> {
    guard_exponent(degree)?;
    if degree < 1 {
        return Err(NumberError::Domain(format!("root degree {} must be positive", degree)).into());
    }
    if value.is_negative() && degree % 2 == 0 {
        return Err(NumberError::Domain("even root of a negative value".to_string()).into());
    }

    let working = precision.working();
    if value.is_zero() {
        return Ok(Number::zero(working));
    }

    let places = precision.root_places();
    let eps = Number::pow10(-(places as isize), working);
    let one = Number::one(working);
    let two = Number::from_i64(2, working);
    let deg = Number::from_i64(degree, working);

    let mut prev = Number::zero(working);
    let mut x = value.checked_div(&two)?;
    loop {
        if x.sub(&prev).abs() < eps {
            return Ok(x.round_to_places(places));
        }
        prev = x.clone();
        let pow = int_pow(&prev, degree - 1)?;
        let numer = deg.sub(&one).mul(&pow).mul(&prev).add(value);
        x = numer.checked_div(&deg.mul(&pow))?;
    }
}

/// Falling factorial `x * (x-1) * ... * (x-n+1)`; 1 when `n` is 0
pub fn falling_factorial(x: &Number, n: u64) -> Number {
    let one = Number::one(x.precision());
    let mut product = one.clone();
    let mut factor = x.clone();
    for _ in 0..n {
        product = product.mul(&factor);
        factor = factor.sub(&one);
    }
    product
}

/// `n!`; 1 when `n` is 0
pub fn factorial(n: u64, precision: usize) -> Number {
    let mut product = Number::one(precision);
    for i in 1..=n {
        product = product.mul(&Number::from_i64(i as i64, precision));
    }
    product
}
