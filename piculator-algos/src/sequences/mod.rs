//! The seven pi refinement sequences
//!
//! Each sequence is a resumable, infinite producer: construction performs no
//! computation, every `step()` performs exactly one unit of additional work
//! (one series term or one recurrence refinement) and returns the cumulative
//! estimate of pi. Sequences never terminate and cannot seek; the only way
//! out is dropping the instance.

mod ramanujan;
mod recurrences;
mod series;

pub use ramanujan::{Borwein, Chudnovsky};
pub use recurrences::{BorweinNonic, GaussLegendre};
pub use series::{Bbp, Leibniz, Zeta};
