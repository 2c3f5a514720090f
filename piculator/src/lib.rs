//! Piculator: step-at-a-time pi approximation with display framing.
//!
//! This crate ties the numeric engine together behind a small synchronous
//! surface: pick an algorithm, pick an output precision, then call
//! [`Stepper::advance`] once per term. Each call returns a fixed-width
//! digit string together with per-position change annotations, ready to
//! render.

pub mod frame;
pub mod stepper;

pub use frame::DisplayFrame;
pub use stepper::Stepper;

pub use piculator_algos::{AlgorithmKind, PiSequence};
pub use piculator_core::{EngineError, Number, Precision};
