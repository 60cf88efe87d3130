use num::Zero;

use crate::Result;
use crate::pairwise::scoring::Score;

/// Gap cost model. Costs are additive and context independent: a run of `len` gap columns costs
/// `gap_open() + (len - 1) * gap_extend()`.
pub trait Scorer {
    type Score: Score;

    fn gap_open(&self) -> Self::Score;
    fn gap_extend(&self) -> Self::Score;

    /// Total cost of a single gap run.
    fn run(&self, len: usize) -> Result<Self::Score> {
        match len {
            0 => Ok(Self::Score::zero()),
            _ => crate::advance(self.gap_open(), crate::repeated(self.gap_extend(), len - 1)?),
        }
    }
}

/// The same cost for every gap column.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Linear<S: Score> {
    pub penalty: S,
}

impl<S: Score> Scorer for Linear<S> {
    type Score = S;

    #[inline(always)]
    fn gap_open(&self) -> Self::Score {
        self.penalty
    }

    #[inline(always)]
    fn gap_extend(&self) -> Self::Score {
        self.penalty
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Affine<S: Score> {
    pub open: S,
    pub extend: S,
}

impl<S: Score> Scorer for Affine<S> {
    type Score = S;

    #[inline(always)]
    fn gap_open(&self) -> Self::Score {
        self.open
    }

    #[inline(always)]
    fn gap_extend(&self) -> Self::Score {
        self.extend
    }
}

/// Gap model selected at runtime.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Model<S: Score> {
    Linear(Linear<S>),
    Affine(Affine<S>),
}

impl<S: Score> Model<S> {
    pub fn linear(penalty: S) -> Self {
        Model::Linear(Linear { penalty })
    }

    pub fn affine(open: S, extend: S) -> Self {
        Model::Affine(Affine { open, extend })
    }
}

impl<S: Score> Default for Model<S> {
    fn default() -> Self {
        Model::linear(crate::constant(-10))
    }
}

impl<S: Score> Scorer for Model<S> {
    type Score = S;

    #[inline(always)]
    fn gap_open(&self) -> Self::Score {
        match self {
            Model::Linear(x) => x.gap_open(),
            Model::Affine(x) => x.gap_open(),
        }
    }

    #[inline(always)]
    fn gap_extend(&self) -> Self::Score {
        match self {
            Model::Linear(x) => x.gap_extend(),
            Model::Affine(x) => x.gap_extend(),
        }
    }
}
