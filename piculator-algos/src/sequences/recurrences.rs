//! Nonlinear recurrences: Gauss-Legendre AGM and the Borwein nonic
//!
//! Unlike the summation series, these refine a small tuple of state values
//! each step. Gauss-Legendre roughly doubles the correct digit count per
//! iteration; the nonic recurrence roughly triples it... at the cost of two
//! root extractions per step.

use piculator_core::{EngineError, Number, Precision};

use crate::primitives::{int_pow, nth_root};

/// Gauss-Legendre arithmetic-geometric mean iteration on (a, b, t, p)
pub struct GaussLegendre {
    precision: Precision,
    state: Option<AgmState>,
}

struct AgmState {
    two: Number,
    four: Number,
    a: Number,
    b: Number,
    t: Number,
    p: Number,
}

impl GaussLegendre {
    pub fn new(precision: &Precision) -> Self {
        Self {
            precision: *precision,
            state: None,
        }
    }

    fn setup(precision: &Precision) -> Result<AgmState, EngineError> {
        let w = precision.working();
        let one = Number::one(w);
        let two = Number::from_i64(2, w);
        // b0 = 1 / sqrt(2); t0 = 1/4
        let b = one.checked_div(&two.sqrt()?)?;
        let t = Number::from_i64(25, w).mul(&Number::pow10(-2, w));
        Ok(AgmState {
            four: Number::from_i64(4, w),
            a: one.clone(),
            b,
            t,
            p: one,
            two,
        })
    }

    pub fn step(&mut self) -> Result<Number, EngineError> {
        if self.state.is_none() {
            self.state = Some(Self::setup(&self.precision)?);
        }
        let state = self.state.as_mut().ok_or(EngineError::InvalidState)?;

        let a_prev = state.a.clone();
        state.a = a_prev.add(&state.b).checked_div(&state.two)?;
        state.b = nth_root(&a_prev.mul(&state.b), 2, &self.precision)?;
        let shrink = a_prev.sub(&state.a);
        state.t = state.t.sub(&state.p.mul(&int_pow(&shrink, 2)?));
        state.p = state.p.mul(&state.two);

        let closed = int_pow(&state.a.add(&state.b), 2)?;
        Ok(closed.checked_div(&state.four)?.checked_div(&state.t)?)
    }
}

/// Borwein's nonic (ninth-order) recurrence on the triple (a, r, s)
pub struct BorweinNonic {
    precision: Precision,
    state: Option<NonicState>,
}

struct NonicState {
    one: Number,
    two: Number,
    three: Number,
    nine: Number,
    twenty_seven: Number,
    a: Number,
    r: Number,
    s: Number,
    x: u64,
}

impl BorweinNonic {
    pub fn new(precision: &Precision) -> Self {
        Self {
            precision: *precision,
            state: None,
        }
    }

    fn setup(precision: &Precision) -> Result<NonicState, EngineError> {
        let w = precision.working();
        let one = Number::one(w);
        let two = Number::from_i64(2, w);
        let three = Number::from_i64(3, w);
        // a0 = 1/3; r0 = (sqrt(3) - 1) / 2; s0 = (1 - r0^3)^(1/3)
        let a = one.checked_div(&three)?;
        let r = nth_root(&three, 2, precision)?
            .sub(&one)
            .checked_div(&two)?;
        let s = nth_root(&one.sub(&int_pow(&r, 3)?), 3, precision)?;
        Ok(NonicState {
            nine: Number::from_i64(9, w),
            twenty_seven: Number::from_i64(27, w),
            one,
            two,
            three,
            a,
            r,
            s,
            x: 0,
        })
    }

    pub fn step(&mut self) -> Result<Number, EngineError> {
        if self.state.is_none() {
            self.state = Some(Self::setup(&self.precision)?);
        }
        let state = self.state.as_mut().ok_or(EngineError::InvalidState)?;

        let t = state.one.add(&state.two.mul(&state.r));
        let u = nth_root(
            &state
                .nine
                .mul(&state.r)
                .mul(&state.one.add(&state.r).add(&int_pow(&state.r, 2)?)),
            3,
            &self.precision,
        )?;
        let v = int_pow(&t, 2)?.add(&t.mul(&u)).add(&int_pow(&u, 2)?);
        let w = state
            .twenty_seven
            .mul(&state.one.add(&state.s).add(&int_pow(&state.s, 2)?))
            .checked_div(&v)?;
        state.a = w.mul(&state.a).add(
            &int_pow(&state.three, 2 * state.x as i64 - 1)?.mul(&state.one.sub(&w)),
        );
        state.s = int_pow(&state.one.sub(&state.r), 3)?
            .checked_div(&t.add(&state.two.mul(&u)).mul(&v))?;
        state.r = nth_root(&state.one.sub(&int_pow(&state.s, 3)?), 3, &self.precision)?;
        state.x += 1;

        Ok(state.one.checked_div(&state.a)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequences::testing::{assert_pi_prefix, precision};

    #[test]
    fn test_gauss_legendre_first_iteration() {
        let p = precision(10);
        let mut seq = GaussLegendre::new(&p);
        let first = seq.step().unwrap();
        // First AGM refinement already gives 3.140...
        assert_pi_prefix(&first.to_plain_string(), 4, "gauss-legendre after 1 step");
    }

    #[test]
    fn test_gauss_legendre_doubles_digits() {
        let p = precision(20);
        let mut seq = GaussLegendre::new(&p);
        seq.step().unwrap();
        seq.step().unwrap();
        let third = seq.step().unwrap();
        // Three iterations are good for ~18 digits
        assert_pi_prefix(&third.to_plain_string(), 17, "gauss-legendre after 3 steps");
    }

    #[test]
    fn test_borwein_nonic_triples_digits() {
        let p = precision(20);
        let mut seq = BorweinNonic::new(&p);
        // The first refinement collapses to 3 (a1 = w/3 + (1-w)/3 = 1/3),
        // give or take rounding in the last guard digits
        let first = seq.step().unwrap();
        let rendered = first.to_plain_string();
        assert!(
            rendered == "3" || rendered.starts_with("3.000000000000") || rendered.starts_with("2.999999999999"),
            "nonic after 1 step: {}",
            rendered
        );
        let second = seq.step().unwrap();
        assert_pi_prefix(&second.to_plain_string(), 5, "nonic after 2 steps");
        let third = seq.step().unwrap();
        assert_pi_prefix(&third.to_plain_string(), 21, "nonic after 3 steps");
    }
}
