use std::marker::PhantomData;

use crate::pairwise::scoring::Score;
use crate::{Error, Result};

/// Substitution score of a pair of symbols. Must be deterministic: engines evaluate it many times
/// for the same pair.
pub trait Scorer {
    type Score: Score;
    type Symbol;

    fn score(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Self::Score;
}

/// Constant scores for identical and different symbols.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Equality<S: Score, Symbol> {
    pub equal: S,
    pub different: S,
    _phantom: PhantomData<Symbol>,
}

impl<S: Score, Symbol: PartialEq> Scorer for Equality<S, Symbol> {
    type Score = S;
    type Symbol = Symbol;

    #[inline(always)]
    fn score(&self, a: &Self::Symbol, b: &Self::Symbol) -> Self::Score {
        if a == b { self.equal } else { self.different }
    }
}

impl<S: Score, Symbol: PartialEq> Equality<S, Symbol> {
    pub fn new(equal: S, different: S) -> Self {
        Self {
            equal,
            different,
            _phantom: Default::default(),
        }
    }

    /// Match and mismatch scores coming from user options. Both must be given, or neither (the
    /// defaults are used then).
    pub fn from_options(equal: Option<S>, different: Option<S>) -> Result<Self> {
        match (equal, different) {
            (Some(equal), Some(different)) => Ok(Self::new(equal, different)),
            (None, None) => Ok(Self::default()),
            _ => Err(Error::PartialSubstitution),
        }
    }
}

impl<S: Score, Symbol: PartialEq> Default for Equality<S, Symbol> {
    fn default() -> Self {
        Self::new(crate::constant(5), crate::constant(-4))
    }
}

/// Arbitrary substitution function, e.g. a lookup into a substitution matrix.
#[derive(Clone, Copy)]
pub struct Function<F, S, Symbol> {
    func: F,
    _phantom: PhantomData<(S, Symbol)>,
}

impl<F, S, Symbol> Function<F, S, Symbol>
where
    F: Fn(&Symbol, &Symbol) -> S,
    S: Score,
{
    pub fn new(func: F) -> Self {
        Self {
            func,
            _phantom: Default::default(),
        }
    }
}

impl<F, S, Symbol> Scorer for Function<F, S, Symbol>
where
    F: Fn(&Symbol, &Symbol) -> S,
    S: Score,
{
    type Score = S;
    type Symbol = Symbol;

    #[inline(always)]
    fn score(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Self::Score {
        (self.func)(s1, s2)
    }
}

/// Scores pairs with the arguments swapped. Used when an engine aligns the transposed problem.
#[derive(Clone, Copy, Debug)]
pub struct Swapped<'a, T: Scorer> {
    base: &'a T,
}

impl<'a, T: Scorer> Swapped<'a, T> {
    pub fn new(base: &'a T) -> Self {
        Self { base }
    }
}

impl<T: Scorer> Scorer for Swapped<'_, T> {
    type Score = T::Score;
    type Symbol = T::Symbol;

    #[inline(always)]
    fn score(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Self::Score {
        self.base.score(s2, s1)
    }
}
