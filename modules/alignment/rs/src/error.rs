use thiserror::Error;

/// Preconditions violated by an alignment call. Every check runs before any DP matrix is built.
#[derive(Error, Clone, Eq, PartialEq, Debug)]
pub enum Error {
    #[error("match and mismatch scores must be specified together")]
    PartialSubstitution,

    #[error("banded alignment requires sequences of equal length, got {seq1} and {seq2}")]
    LengthMismatch { seq1: usize, seq2: usize },

    #[error(
        "band half-width {width} leaves no path between sequences of length {seq1} and {seq2}"
    )]
    BandTooNarrow {
        width: usize,
        seq1: usize,
        seq2: usize,
    },

    #[error("Hirschberg alignment is defined only for linear gap penalties")]
    AffineHirschberg,

    #[error("alignment steps consume {steps:?} symbols, but the sequences have {sequences:?}")]
    StepsMismatch {
        steps: (usize, usize),
        sequences: (usize, usize),
    },

    #[error("alignment step length must be greater than zero")]
    EmptyStep,

    #[error("alignment scores do not fit the score type, use a wider integer")]
    ScoreOverflow,
}

pub type Result<T> = std::result::Result<T, Error>;
