//! Piculator Algorithms - pi approximation sequences
//!
//! This crate provides:
//! - precision-aware primitives: `int_pow`, `nth_root`, `falling_factorial`
//!   and `factorial`
//! - the seven pi refinement sequences (Leibniz, BBP, Borwein quartic,
//!   Borwein nonic, Gauss-Legendre, Chudnovsky, Zeta)
//! - `AlgorithmKind`, the closed registry that constructs them

mod primitives;
mod registry;
mod sequences;

pub use primitives::{factorial, falling_factorial, int_pow, nth_root, MAX_SAFE_EXPONENT};
pub use registry::{AlgorithmKind, PiSequence};
pub use sequences::{Bbp, Borwein, BorweinNonic, Chudnovsky, GaussLegendre, Leibniz, Zeta};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{AlgorithmKind, PiSequence};
    pub use piculator_core::prelude::*;
}
