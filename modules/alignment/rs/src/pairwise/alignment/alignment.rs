use derive_getters::{Dissolve, Getters};
use derive_more::{Constructor, From, Into};

use crate::pairwise::scoring::{Score, gaps, symbols};
use crate::{Alignable, Error, Result};

use super::op::Op;
use super::step::Step;

/// A global alignment of two sequences: its score and the run-length encoded alignment columns.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Constructor, Dissolve, From, Into)]
pub struct Alignment<S: Score> {
    score: S,
    steps: Vec<Step>,
}

impl<S: Score> Alignment<S> {
    /// Alignment of a sequence against an all-gap counterpart.
    pub fn gaps_only(op: Op, len: usize, score: S) -> Self {
        debug_assert!(!op.is_diagonal());
        // Zero-length runs produce no step
        let steps = Step::new(op, len).into_iter().collect();
        Self { score, steps }
    }

    /// Checks if the alignment is empty.
    pub fn is_empty(&self) -> bool {
        // Note: length of each step is guaranteed to be non-zero.
        self.steps.is_empty()
    }

    /// Returns the total length of the alignment - the number of alignment columns.
    pub fn len(&self) -> usize {
        self.steps.iter().map(|x| *x.len()).sum()
    }

    /// Returns the RLE representation of the alignment.
    pub fn rle(&self) -> String {
        Step::rle_string(self.steps.iter())
    }

    /// Alignment columns one by one.
    pub fn ops(&self) -> impl Iterator<Item = Op> + '_ {
        self.steps
            .iter()
            .flat_map(|step| std::iter::repeat_n(*step.op(), *step.len()))
    }

    /// Number of symbols consumed from the first and the second sequence.
    pub fn consumes(&self) -> (usize, usize) {
        self.steps.iter().fold((0, 0), |(seq1, seq2), step| {
            let (s1, s2) = step.consumes();
            (seq1 + s1, seq2 + s2)
        })
    }

    /// The alignment of (seq2, seq1) that corresponds to this alignment of (seq1, seq2).
    pub fn transposed(&self) -> Self {
        Self {
            score: self.score,
            steps: self.steps.iter().map(Step::transposed).collect(),
        }
    }

    /// Append an alignment of the following sub-sequences. Scores are summed.
    pub fn append(&mut self, other: Alignment<S>) -> Result<()> {
        self.score = crate::advance(self.score, other.score)?;
        self.steps.extend(other.steps);
        Step::collapse(&mut self.steps);
        Ok(())
    }

    fn ensure_consumes(&self, seq1: usize, seq2: usize) -> Result<()> {
        let steps = self.consumes();
        if steps != (seq1, seq2) {
            return Err(Error::StepsMismatch {
                steps,
                sequences: (seq1, seq2),
            });
        }
        Ok(())
    }

    /// Materialize the aligned sequences, placing `gap` at every gap column.
    pub fn render<A, B>(
        &self,
        seq1: &A,
        seq2: &B,
        gap: A::Symbol,
    ) -> Result<(Vec<A::Symbol>, Vec<A::Symbol>)>
    where
        A: Alignable,
        B: Alignable<Symbol = A::Symbol>,
        A::Symbol: Clone,
    {
        self.ensure_consumes(seq1.len(), seq2.len())?;

        let total = self.len();
        let (mut aligned1, mut aligned2) = (Vec::with_capacity(total), Vec::with_capacity(total));
        let (mut pos1, mut pos2) = (0, 0);
        for op in self.ops() {
            match op {
                Op::Match | Op::Mismatch => {
                    aligned1.push(seq1.at(pos1).clone());
                    aligned2.push(seq2.at(pos2).clone());
                    pos1 += 1;
                    pos2 += 1;
                }
                Op::GapFirst => {
                    aligned1.push(gap.clone());
                    aligned2.push(seq2.at(pos2).clone());
                    pos2 += 1;
                }
                Op::GapSecond => {
                    aligned1.push(seq1.at(pos1).clone());
                    aligned2.push(gap.clone());
                    pos1 += 1;
                }
            }
        }
        Ok((aligned1, aligned2))
    }

    /// Recompute the score from the alignment columns alone.
    pub fn rescore<A, B, Sc, G>(&self, seq1: &A, seq2: &B, scorer: &Sc, gaps: &G) -> Result<S>
    where
        A: Alignable,
        B: Alignable<Symbol = A::Symbol>,
        Sc: symbols::Scorer<Score = S, Symbol = A::Symbol>,
        G: gaps::Scorer<Score = S>,
    {
        self.ensure_consumes(seq1.len(), seq2.len())?;

        let mut total = S::zero();
        let (mut pos1, mut pos2) = (0, 0);
        for step in &self.steps {
            let len = *step.len();
            match step.op() {
                Op::Match | Op::Mismatch => {
                    for _ in 0..len {
                        let score = scorer.score(seq1.at(pos1), seq2.at(pos2));
                        total = crate::advance(total, score)?;
                        pos1 += 1;
                        pos2 += 1;
                    }
                }
                // Steps are collapsed, so every gap step is a complete gap run
                Op::GapFirst => {
                    total = crate::advance(total, gaps.run(len)?)?;
                    pos2 += len;
                }
                Op::GapSecond => {
                    total = crate::advance(total, gaps.run(len)?)?;
                    pos1 += len;
                }
            }
        }
        Ok(total)
    }
}
