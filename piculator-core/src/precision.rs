//! Output precision and derived working precisions
//!
//! The requested number of output digits is fixed for the lifetime of a run.
//! Internally every computation carries 75 guard digits beyond the output
//! precision so that root extraction (which itself rounds to 25 guard
//! digits) never lets rounding error reach the displayed digits.

use crate::error::EngineError;

/// Guard digits carried by every working value beyond the output digits
pub const GUARD_DIGITS: usize = 75;

/// Guard digits kept by Newton root extraction beyond the output digits
pub const ROOT_GUARD_DIGITS: usize = 25;

/// Validated output precision for one algorithm run
///
/// Immutable once a run starts; changing precision means creating a new run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    digits: usize,
}

impl Precision {
    /// At least one output digit is required
    pub fn new(digits: usize) -> Result<Self, EngineError> {
        if digits == 0 {
            return Err(EngineError::InvalidPrecision(digits));
        }
        Ok(Self { digits })
    }

    /// Requested output digits
    pub fn digits(&self) -> usize {
        self.digits
    }

    /// Working precision used by all intermediate arithmetic
    pub fn working(&self) -> usize {
        self.digits + GUARD_DIGITS
    }

    /// Decimal places kept by `nth_root` results and its convergence test
    pub fn root_places(&self) -> usize {
        self.digits + ROOT_GUARD_DIGITS
    }

    /// Fixed display width: output digits plus the leading integer digit
    /// and the decimal point
    pub fn frame_width(&self) -> usize {
        self.digits + 2
    }
}
