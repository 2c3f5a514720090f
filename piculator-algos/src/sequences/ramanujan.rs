//! Ramanujan-type series: Borwein quartic and Chudnovsky
//!
//! Both series share the factorial skeleton
//! `(6x)! / ((3x)! * (x!)^3) * (a + b*x) / d^x`. Recomputing the factorials
//! from scratch would make each term cost more than the last, so the
//! coefficient is carried between terms and advanced by the ratio
//! `ff(6x,6) / (ff(3x,3) * x^3)` instead, and the power `d^x` by a single
//! multiplication. This incremental formulation can place rounding drift
//! in the last guard digits differently than direct recomputation would;
//! the 75 guard digits keep it away from the output.
//!
//! Series constants come from root extractions, which are deferred to the
//! first step so that construction stays free.

use piculator_core::{EngineError, Number, NumberError, Precision};

use crate::primitives::{falling_factorial, int_pow, nth_root};

/// Accumulator for `sum_x ff-coefficient(x) * (a + b*x) / d^x`
struct SeriesTerms {
    a: Number,
    b: Number,
    d: Number,
    /// `(6x)! / ((3x)! * (x!)^3)` at the current index
    coefficient: Number,
    /// `d^x` at the current index
    power: Number,
    sum: Number,
    x: u64,
}

impl SeriesTerms {
    fn new(a: Number, b: Number, d: Number, working: usize) -> Self {
        Self {
            a,
            b,
            d,
            coefficient: Number::one(working),
            power: Number::one(working),
            sum: Number::zero(working),
            x: 0,
        }
    }

    /// Fold one more term into the running sum
    fn accumulate(&mut self) -> Result<&Number, EngineError> {
        let working = self.sum.precision();
        if self.x > 0 {
            let six_x = Number::from_i64(6 * self.x as i64, working);
            let three_x = Number::from_i64(3 * self.x as i64, working);
            let x = Number::from_i64(self.x as i64, working);
            let numer = falling_factorial(&six_x, 6);
            let denom = falling_factorial(&three_x, 3).mul(&int_pow(&x, 3)?);
            self.coefficient = self.coefficient.mul(&numer).checked_div(&denom)?;
            self.power = self.power.mul(&self.d);
        }
        let x = Number::from_i64(self.x as i64, working);
        let linear = self.a.add(&x.mul(&self.b));
        let term = self.coefficient.mul(&linear).checked_div(&self.power)?;
        self.sum = self.sum.add(&term);
        self.x += 1;
        Ok(&self.sum)
    }
}

struct SeriesState {
    /// The constant numerator divided by the running sum gives pi
    numerator: Number,
    terms: SeriesTerms,
}

/// Borwein's quartic-root series. The three constants are surd expressions
/// over sqrt(5); each term adds dozens of correct digits.
pub struct Borwein {
    precision: Precision,
    state: Option<SeriesState>,
}

impl Borwein {
    pub fn new(precision: &Precision) -> Self {
        Self {
            precision: *precision,
            state: None,
        }
    }

    fn setup(precision: &Precision) -> Result<SeriesState, EngineError> {
        let w = precision.working();
        let root = |s: &str| -> Result<Number, EngineError> {
            nth_root(&Number::parse(s, w)?, 2, precision)
        };
        let parse = |s: &str| -> Result<Number, NumberError> { Number::parse(s, w) };

        let rt5 = root("5")?;
        let a = parse("63365028312971999585426220")?
            .add(&parse("28337702140800842046825600")?.mul(&rt5))
            .add(&Number::from_i64(384, w).mul(&rt5).mul(&nth_root(
                &parse("10891728551171178200467436212395209160385656017")?
                    .add(&parse("4870929086578810225077338534541688721351255040")?.mul(&rt5)),
                2,
                precision,
            )?));
        let b = parse("7849910453496627210289749000")?
            .add(&parse("3510586678260932028965606400")?.mul(&rt5))
            .add(&parse("2515968")?.mul(&root("3110")?).mul(&nth_root(
                &parse("6260208323789001636993322654444020882161")?
                    .add(&parse("2799650273060444296577206890718825190235")?.mul(&rt5)),
                2,
                precision,
            )?));
        let c = parse("-214772995063512240")?
            .sub(&parse("96049403338648032")?.mul(&rt5))
            .sub(&parse("1296")?.mul(&rt5).mul(&nth_root(
                &parse("10985234579463550323713318473")?
                    .add(&parse("4912746253692362754607395912")?.mul(&rt5)),
                2,
                precision,
            )?));

        let numerator = nth_root(&int_pow(&c.neg(), 3)?, 2, precision)?;
        let c_cubed = int_pow(&c, 3)?;
        Ok(SeriesState {
            numerator,
            terms: SeriesTerms::new(a, b, c_cubed, w),
        })
    }

    pub fn step(&mut self) -> Result<Number, EngineError> {
        if self.state.is_none() {
            self.state = Some(Self::setup(&self.precision)?);
        }
        let state = self.state.as_mut().ok_or(EngineError::InvalidState)?;
        let sum = state.terms.accumulate()?;
        Ok(state.numerator.checked_div(sum)?)
    }
}

/// Chudnovsky series:
/// pi = 426880 * sqrt(10005)
///    / sum (6k)! * (13591409 + 545140134k) / ((3k)! * (k!)^3 * C^k)
/// with C = -262537412640768000 = -640320^3. Around 14 correct digits per
/// term, the fastest fixed-rate series here.
pub struct Chudnovsky {
    precision: Precision,
    state: Option<SeriesState>,
}

impl Chudnovsky {
    pub fn new(precision: &Precision) -> Self {
        Self {
            precision: *precision,
            state: None,
        }
    }

    fn setup(precision: &Precision) -> Result<SeriesState, EngineError> {
        let w = precision.working();
        let numerator = Number::from_i64(426_880, w)
            .mul(&nth_root(&Number::from_i64(10_005, w), 2, precision)?);
        let a = Number::from_i64(13_591_409, w);
        let b = Number::from_i64(545_140_134, w);
        let d = Number::from_i64(-262_537_412_640_768_000, w);
        Ok(SeriesState {
            numerator,
            terms: SeriesTerms::new(a, b, d, w),
        })
    }

    pub fn step(&mut self) -> Result<Number, EngineError> {
        if self.state.is_none() {
            self.state = Some(Self::setup(&self.precision)?);
        }
        let state = self.state.as_mut().ok_or(EngineError::InvalidState)?;
        let sum = state.terms.accumulate()?;
        Ok(state.numerator.checked_div(sum)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::factorial;
    use crate::sequences::testing::{assert_pi_prefix, precision};

    #[test]
    fn test_incremental_coefficient_matches_direct_factorials() {
        let w = 60;
        let mut terms = SeriesTerms::new(
            Number::one(w),
            Number::zero(w),
            Number::one(w),
            w,
        );
        for _ in 0..4 {
            terms.accumulate().unwrap();
        }
        // After stepping past x = 3 the carried coefficient must equal
        // (18)! / ((9)! * (3!)^3)
        let direct = factorial(18, w)
            .checked_div(&factorial(9, w).mul(&int_pow(&factorial(3, w), 3).unwrap()))
            .unwrap();
        assert_eq!(
            terms.coefficient.to_plain_string(),
            direct.to_plain_string()
        );
    }

    #[test]
    fn test_borwein_first_term() {
        let p = precision(20);
        let mut seq = Borwein::new(&p);
        let first = seq.step().unwrap();
        assert_pi_prefix(&first.to_plain_string(), 21, "borwein after 1 term");
    }

    #[test]
    fn test_borwein_second_term() {
        let p = precision(40);
        let mut seq = Borwein::new(&p);
        seq.step().unwrap();
        let second = seq.step().unwrap();
        assert_pi_prefix(&second.to_plain_string(), 41, "borwein after 2 terms");
    }

    #[test]
    fn test_chudnovsky_first_term() {
        let p = precision(12);
        let mut seq = Chudnovsky::new(&p);
        let first = seq.step().unwrap();
        assert_pi_prefix(&first.to_plain_string(), 13, "chudnovsky after 1 term");
    }

    #[test]
    fn test_chudnovsky_gains_fourteen_digits_per_term() {
        let p = precision(40);
        let mut seq = Chudnovsky::new(&p);
        seq.step().unwrap();
        seq.step().unwrap();
        let third = seq.step().unwrap();
        assert_pi_prefix(&third.to_plain_string(), 41, "chudnovsky after 3 terms");
    }
}
