//! Plain summation series: Leibniz, BBP, and the zeta(2) baseline

use piculator_core::{EngineError, Number, Precision};

use crate::primitives::{int_pow, nth_root};

/// Alternating Leibniz series: pi = 4 * sum (-1)^x / (2x+1)
///
/// The slowest algorithm in the library; roughly one correct digit per
/// tenfold increase in terms. Kept for its pedagogical value.
pub struct Leibniz {
    neg_one: Number,
    one: Number,
    two: Number,
    four: Number,
    sum: Number,
    x: u64,
}

impl Leibniz {
    pub fn new(precision: &Precision) -> Self {
        let working = precision.working();
        Self {
            neg_one: Number::from_i64(-1, working),
            one: Number::one(working),
            two: Number::from_i64(2, working),
            four: Number::from_i64(4, working),
            sum: Number::zero(working),
            x: 0,
        }
    }

    pub fn step(&mut self) -> Result<Number, EngineError> {
        let x = Number::from_i64(self.x as i64, self.sum.precision());
        let denom = x.mul(&self.two).add(&self.one);
        let term = int_pow(&self.neg_one, self.x as i64)?.checked_div(&denom)?;
        self.sum = self.sum.add(&term);
        self.x += 1;
        Ok(self.sum.mul(&self.four))
    }
}

/// Bailey-Borwein-Plouffe base-16 digit series:
/// sum (1/16)^x * (4/(8x+1) - 2/(8x+4) - 1/(8x+5) - 1/(8x+6))
pub struct Bbp {
    one: Number,
    two: Number,
    four: Number,
    five: Number,
    six: Number,
    eight: Number,
    sixteenth: Number,
    sum: Number,
    x: u64,
}

impl Bbp {
    pub fn new(precision: &Precision) -> Self {
        let working = precision.working();
        // 1/16 = 625 * 10^-4, exact in decimal
        let sixteenth = Number::from_i64(625, working).mul(&Number::pow10(-4, working));
        Self {
            one: Number::one(working),
            two: Number::from_i64(2, working),
            four: Number::from_i64(4, working),
            five: Number::from_i64(5, working),
            six: Number::from_i64(6, working),
            eight: Number::from_i64(8, working),
            sixteenth,
            sum: Number::zero(working),
            x: 0,
        }
    }

    pub fn step(&mut self) -> Result<Number, EngineError> {
        let x = Number::from_i64(self.x as i64, self.sum.precision());
        let p8x = self.eight.mul(&x);
        let bracket = self
            .four
            .checked_div(&p8x.add(&self.one))?
            .sub(&self.two.checked_div(&p8x.add(&self.four))?)
            .sub(&self.one.checked_div(&p8x.add(&self.five))?)
            .sub(&self.one.checked_div(&p8x.add(&self.six))?);
        let term = int_pow(&self.sixteenth, self.x as i64)?.mul(&bracket);
        self.sum = self.sum.add(&term);
        self.x += 1;
        Ok(self.sum.clone())
    }
}

/// Basel-problem baseline: sum 1/n^2 converges to pi^2/6, so each step
/// yields sqrt(6 * sum). Very slow; included as a reference point.
pub struct Zeta {
    precision: Precision,
    one: Number,
    six: Number,
    sum: Number,
    n: u64,
}

impl Zeta {
    pub fn new(precision: &Precision) -> Self {
        let working = precision.working();
        Self {
            precision: *precision,
            one: Number::one(working),
            six: Number::from_i64(6, working),
            sum: Number::zero(working),
            n: 0,
        }
    }

    pub fn step(&mut self) -> Result<Number, EngineError> {
        self.n += 1;
        let n = Number::from_i64(self.n as i64, self.sum.precision());
        self.sum = self.sum.add(&self.one.checked_div(&n.mul(&n))?);
        nth_root(&self.six.mul(&self.sum), 2, &self.precision)
    }
}
