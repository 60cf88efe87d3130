pub use pairalign_core_rs::alignment::{Alignable, Reversed, Window, alignable};
use pairalign_core_rs::num::PrimSInt;

pub use error::{Error, Result};

mod error;
pub mod pairwise;

/// Alignment score. Any signed primitive integer can be used.
pub trait Score: PrimSInt {
    /// Value of the DP cells that no alignment path can reach. Real scores always stay strictly
    /// above it.
    #[inline(always)]
    fn unreachable() -> Self {
        Self::min_value()
    }
}

impl<T: PrimSInt> Score for T {}

/// Converts a small constant into any score type.
pub(crate) fn constant<S: Score>(value: i8) -> S {
    num::cast(value).unwrap_or_else(|| unreachable!("every signed primitive integer holds an i8"))
}

/// Adds `delta` to a DP cell. Unreachable cells stay unreachable, a real score that leaves the
/// range of the score type (or hits the sentinel) is an error.
pub(crate) fn advance<S: Score>(cell: S, delta: S) -> Result<S> {
    if cell == S::unreachable() {
        return Ok(cell);
    }
    cell.checked_add(&delta)
        .filter(|value| *value != S::unreachable())
        .ok_or(Error::ScoreOverflow)
}

/// Sum of `len` copies of `value`.
pub(crate) fn repeated<S: Score>(value: S, len: usize) -> Result<S> {
    (0..len).try_fold(S::zero(), |acc, _| advance(acc, value))
}
