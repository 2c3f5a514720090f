//! Piculator Core - Fundamental types
//!
//! This crate provides the types shared by the whole engine:
//! - `Number`: arbitrary precision decimal values with explicit precision
//! - `Precision`: output digits and the guard-digit precisions derived
//!   from them
//! - `EngineError`: fatal errors crossing the initialize/advance boundary

mod error;
mod number;
mod precision;

pub use error::EngineError;
pub use number::{Number, NumberError};
pub use precision::{Precision, GUARD_DIGITS, ROOT_GUARD_DIGITS};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{EngineError, Number, NumberError, Precision};
}
