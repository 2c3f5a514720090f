//! The algorithm registry
//!
//! A closed enumeration of the seven algorithms, dispatched by exhaustive
//! match at construction time. Adding or removing an algorithm is a
//! compile-checked change; the string identifiers exist only at the
//! protocol boundary.

use piculator_core::{EngineError, Number, Precision};

use crate::sequences::{Bbp, Borwein, BorweinNonic, Chudnovsky, GaussLegendre, Leibniz, Zeta};

/// Identifier for one of the registered algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    Leibniz,
    Bbp,
    Borwein,
    BorweinNonic,
    GaussLegendre,
    Chudnovsky,
    Zeta,
}

impl AlgorithmKind {
    /// Every registered algorithm, in registry order
    pub const ALL: [Self; 7] = [
        Self::Leibniz,
        Self::Bbp,
        Self::Borwein,
        Self::BorweinNonic,
        Self::GaussLegendre,
        Self::Chudnovsky,
        Self::Zeta,
    ];

    /// The wire identifier for this algorithm
    pub fn id(&self) -> &'static str {
        match self {
            Self::Leibniz => "leibniz",
            Self::Bbp => "bbp",
            Self::Borwein => "borwein",
            Self::BorweinNonic => "borwein_nonic",
            Self::GaussLegendre => "gauss_legendre",
            Self::Chudnovsky => "chudnovsky",
            Self::Zeta => "zeta",
        }
    }

    /// Look up a wire identifier
    pub fn parse(id: &str) -> Result<Self, EngineError> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.id() == id)
            .ok_or_else(|| EngineError::UnknownAlgorithm(id.to_string()))
    }

    /// Construct a fresh sequence in its created state. Performs no
    /// computation; the first `step()` does any one-time constant setup.
    pub fn sequence(&self, precision: &Precision) -> PiSequence {
        match self {
            Self::Leibniz => PiSequence::Leibniz(Leibniz::new(precision)),
            Self::Bbp => PiSequence::Bbp(Bbp::new(precision)),
            Self::Borwein => PiSequence::Borwein(Borwein::new(precision)),
            Self::BorweinNonic => PiSequence::BorweinNonic(BorweinNonic::new(precision)),
            Self::GaussLegendre => PiSequence::GaussLegendre(GaussLegendre::new(precision)),
            Self::Chudnovsky => PiSequence::Chudnovsky(Chudnovsky::new(precision)),
            Self::Zeta => PiSequence::Zeta(Zeta::new(precision)),
        }
    }
}

impl std::fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// A running instance of one algorithm
///
/// Strictly sequential and infinite: every `step()` does exactly one unit
/// of work and returns the cumulative estimate of pi.
pub enum PiSequence {
    Leibniz(Leibniz),
    Bbp(Bbp),
    Borwein(Borwein),
    BorweinNonic(BorweinNonic),
    GaussLegendre(GaussLegendre),
    Chudnovsky(Chudnovsky),
    Zeta(Zeta),
}

impl PiSequence {
    /// Advance by one term or refinement and return the new estimate
    pub fn step(&mut self) -> Result<Number, EngineError> {
        match self {
            Self::Leibniz(seq) => seq.step(),
            Self::Bbp(seq) => seq.step(),
            Self::Borwein(seq) => seq.step(),
            Self::BorweinNonic(seq) => seq.step(),
            Self::GaussLegendre(seq) => seq.step(),
            Self::Chudnovsky(seq) => seq.step(),
            Self::Zeta(seq) => seq.step(),
        }
    }
}

impl Iterator for PiSequence {
    type Item = Result<Number, EngineError>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.step())
    }
}
