//! Needleman-Wunsch global alignment engines.
//!
//! [`linear`] and [`affine`] fill full score matrices (or a diagonal band of them) and trace back
//! one optimal alignment. [`hirschberg`] produces optimal linear gap alignments in linear memory
//! on top of the [`score_only`] pass. [`Aligner`] picks the engine from a runtime [`Config`].

use derive_getters::Dissolve;
use derive_more::Constructor;

use crate::pairwise::alignment::Alignment;
use crate::pairwise::scoring::{Score, gaps, symbols};
use crate::{Alignable, Error, Result};

pub mod affine;
pub mod grid;
pub mod hirschberg;
pub mod linear;
pub mod score_only;

/// Which DP engine to run.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum Mode {
    /// The full O(n * m) matrix
    #[default]
    Dense,
    /// Only cells with |i - j| <= width. Requires sequences of equal length.
    Banded { width: usize },
    /// Linear memory divide and conquer. Linear gap penalties only.
    Hirschberg,
}

#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash, Constructor, Dissolve)]
pub struct Config<S: Score> {
    pub gaps: gaps::Model<S>,
    pub mode: Mode,
}

impl<S: Score> Default for Config<S> {
    fn default() -> Self {
        Self {
            gaps: gaps::Model::default(),
            mode: Mode::default(),
        }
    }
}

/// Global pairwise aligner: a substitution scorer plus the gap model and the engine to use.
#[derive(Clone, Debug)]
pub struct Aligner<Sc: symbols::Scorer> {
    scorer: Sc,
    config: Config<Sc::Score>,
}

impl<Sc: symbols::Scorer> Aligner<Sc> {
    pub fn new(scorer: Sc, config: Config<Sc::Score>) -> Result<Self> {
        if let (Mode::Hirschberg, gaps::Model::Affine(_)) = (config.mode, config.gaps) {
            return Err(Error::AffineHirschberg);
        }
        Ok(Self { scorer, config })
    }

    pub fn scorer(&self) -> &Sc {
        &self.scorer
    }

    pub fn config(&self) -> &Config<Sc::Score> {
        &self.config
    }

    pub fn align<A, B>(&self, seq1: &A, seq2: &B) -> Result<Alignment<Sc::Score>>
    where
        A: Alignable<Symbol = Sc::Symbol>,
        B: Alignable<Symbol = Sc::Symbol>,
        Sc::Symbol: PartialEq,
    {
        let (n, m) = (seq1.len(), seq2.len());
        log::debug!(
            "Aligning {n} x {m} symbols: {:?}, {:?}",
            self.config.mode,
            self.config.gaps
        );

        let band = match self.config.mode {
            Mode::Dense => None,
            Mode::Banded { width } => {
                if n != m {
                    return Err(Error::LengthMismatch { seq1: n, seq2: m });
                }
                if width < n.max(m) {
                    log::debug!(
                        "Band half-width {width} is narrower than the sequences ({n}); \
                         the alignment is optimal only if an optimal path fits the band"
                    );
                }
                Some(width)
            }
            Mode::Hirschberg => {
                return match self.config.gaps {
                    gaps::Model::Linear(linear) => {
                        hirschberg::align(seq1, seq2, &self.scorer, linear.penalty)
                    }
                    gaps::Model::Affine(_) => Err(Error::AffineHirschberg),
                };
            }
        };

        match self.config.gaps {
            gaps::Model::Linear(linear) => {
                linear::align(seq1, seq2, &self.scorer, linear.penalty, band)
            }
            gaps::Model::Affine(affine) => {
                affine::align(seq1, seq2, &self.scorer, affine.open, affine.extend, band)
            }
        }
    }
}

/// The terminal cell (n, m) must be inside the band, otherwise no path can reach it.
fn ensure_band(width: usize, seq1: usize, seq2: usize) -> Result<()> {
    if seq1.abs_diff(seq2) > width {
        return Err(Error::BandTooNarrow { width, seq1, seq2 });
    }
    Ok(())
}
