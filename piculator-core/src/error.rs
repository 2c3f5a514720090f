//! Engine-level errors
//!
//! All of these are fatal for the current computation: the engine never
//! silently degrades to a slower or less precise path. Recovery is always
//! wholesale - discard the run and initialize a new one.

use crate::NumberError;
use thiserror::Error;

/// Errors surfaced across the initialize/advance boundary
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// An integer power or root degree whose magnitude exceeds the bound
    /// below which exponentiation by squaring stays exact. Refused up
    /// front; no computation is performed.
    #[error("exponent magnitude {0} exceeds the safe integer bound")]
    PrecisionOverflow(i64),

    /// Identifier not present in the algorithm registry
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// advance() without a prior successful initialize(). A caller bug,
    /// not recoverable by the engine.
    #[error("advance() called before a successful initialize()")]
    InvalidState,

    /// Output precision of zero digits
    #[error("output precision must be at least 1 digit, got {0}")]
    InvalidPrecision(usize),

    /// Arithmetic failure inside a computation step
    #[error(transparent)]
    Number(#[from] NumberError),
}
