//! The step controller: initialize once, then pull one term at a time

use piculator_algos::{AlgorithmKind, PiSequence};
use piculator_core::{EngineError, Precision};

use crate::frame::{self, DisplayFrame};

/// Owns the active algorithm instance and the diff baseline.
///
/// The protocol is strictly single-writer/single-reader: each `advance()`
/// runs one CPU-bound step to completion before returning, and callers
/// must not overlap calls on one stepper. There is no way to interrupt a
/// step in flight; the only cancellation is replacing the whole run via
/// `initialize()`.
pub struct Stepper {
    run: Option<Run>,
}

struct Run {
    kind: AlgorithmKind,
    precision: Precision,
    sequence: PiSequence,
    baseline: Option<String>,
}

impl Stepper {
    pub fn new() -> Self {
        Self { run: None }
    }

    /// Start a fresh run, discarding any previous one wholesale.
    ///
    /// Fails with `UnknownAlgorithm` for an unregistered identifier and
    /// `InvalidPrecision` for zero digits; either failure leaves a prior
    /// run untouched. Performs no computation.
    pub fn initialize(&mut self, algorithm: &str, digits: usize) -> Result<(), EngineError> {
        let kind = AlgorithmKind::parse(algorithm)?;
        let precision = Precision::new(digits)?;
        self.run = Some(Run {
            kind,
            precision,
            sequence: kind.sequence(&precision),
            baseline: None,
        });
        Ok(())
    }

    /// Pull exactly one more term and format it for display.
    ///
    /// The yielded value is truncated to the run's fixed frame width,
    /// padded with zeros, diffed against the previously returned frame,
    /// and becomes the baseline for the next call.
    pub fn advance(&mut self) -> Result<DisplayFrame, EngineError> {
        let run = self.run.as_mut().ok_or(EngineError::InvalidState)?;
        let value = run.sequence.step()?;
        let digits = frame::truncate_and_pad(&value.to_plain_string(), run.precision.frame_width());
        let out = frame::diff(run.baseline.as_deref(), digits);
        run.baseline = Some(out.digits.clone());
        Ok(out)
    }

    /// The active algorithm, if a run has been initialized
    pub fn algorithm(&self) -> Option<AlgorithmKind> {
        self.run.as_ref().map(|run| run.kind)
    }

    /// The active run's precision
    pub fn precision(&self) -> Option<Precision> {
        self.run.as_ref().map(|run| run.precision)
    }
}

impl Default for Stepper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_before_initialize() {
        let mut stepper = Stepper::new();
        assert!(matches!(stepper.advance(), Err(EngineError::InvalidState)));
    }

    #[test]
    fn test_initialize_unknown_algorithm() {
        let mut stepper = Stepper::new();
        let err = stepper.initialize("machin", 10).unwrap_err();
        assert!(matches!(err, EngineError::UnknownAlgorithm(_)));
        // Nothing was established
        assert!(stepper.algorithm().is_none());
    }

    #[test]
    fn test_initialize_zero_digits() {
        let mut stepper = Stepper::new();
        assert!(matches!(
            stepper.initialize("bbp", 0),
            Err(EngineError::InvalidPrecision(0))
        ));
    }

    #[test]
    fn test_failed_initialize_preserves_active_run() {
        let mut stepper = Stepper::new();
        stepper.initialize("bbp", 10).unwrap();
        stepper.advance().unwrap();
        let before = stepper.advance().unwrap();

        assert!(stepper.initialize("nonsense", 10).is_err());
        assert_eq!(stepper.algorithm(), Some(AlgorithmKind::Bbp));

        // The run continues exactly where it left off: the next frame
        // diffs against the last one returned before the failed call
        let after = stepper.advance().unwrap();
        assert!(after.deltas.is_some(), "baseline survived: {:?}", after);
        assert_ne!(before.digits, after.digits);
    }

    #[test]
    fn test_first_frame_has_no_deltas() {
        let mut stepper = Stepper::new();
        stepper.initialize("leibniz", 10).unwrap();
        let frame = stepper.advance().unwrap();
        assert_eq!(frame.digits, "4.0000000000");
        assert!(frame.deltas.is_none());
    }

    #[test]
    fn test_frames_keep_fixed_width() {
        let mut stepper = Stepper::new();
        stepper.initialize("gauss_legendre", 10).unwrap();
        for _ in 0..5 {
            let frame = stepper.advance().unwrap();
            assert_eq!(frame.digits.len(), 12);
            if let Some(deltas) = &frame.deltas {
                assert_eq!(deltas.len(), 12);
                // Position 1 is always the decimal point
                assert_eq!(deltas[1], None);
            }
        }
    }

    #[test]
    fn test_second_frame_marks_changes() {
        let mut stepper = Stepper::new();
        stepper.initialize("leibniz", 5).unwrap();
        // 4.00000 then 2.66666: every digit position but one changes
        stepper.advance().unwrap();
        let frame = stepper.advance().unwrap();
        assert_eq!(frame.digits, "2.66666");
        let deltas = frame.deltas.expect("second frame is diffed");
        assert_eq!(deltas[0], Some(2));
        assert_eq!(deltas[1], None);
        assert_eq!(deltas[2], Some(6));
    }

    #[test]
    fn test_step_count_is_exact() {
        // n advances equal the n-th term of the bare sequence
        let digits = 10;
        let precision = Precision::new(digits).unwrap();
        let mut sequence = AlgorithmKind::Bbp.sequence(&precision);
        let mut direct = sequence.step().unwrap();
        for _ in 1..6 {
            direct = sequence.step().unwrap();
        }

        let mut stepper = Stepper::new();
        stepper.initialize("bbp", digits).unwrap();
        let mut frame = stepper.advance().unwrap();
        for _ in 1..6 {
            frame = stepper.advance().unwrap();
        }

        let rendered = direct.to_plain_string();
        assert_eq!(frame.digits, super::frame::truncate_and_pad(&rendered, digits + 2));
    }

    #[test]
    fn test_reinitialize_discards_baseline() {
        let mut stepper = Stepper::new();
        stepper.initialize("bbp", 10).unwrap();
        stepper.advance().unwrap();
        stepper.advance().unwrap();

        stepper.initialize("bbp", 10).unwrap();
        let frame = stepper.advance().unwrap();
        assert!(frame.deltas.is_none(), "fresh run has no baseline");
    }
}
