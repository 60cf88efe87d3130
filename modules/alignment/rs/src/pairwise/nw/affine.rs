use crate::pairwise::alignment::{Alignment, Op, Step};
use crate::pairwise::scoring::{Score, symbols};
use crate::{Alignable, Result, advance};

use super::grid::{Band, Full, Layout, Matrix};

/// Gotoh three-state DP matrices.
pub struct Matrices<S: Score, L: Layout> {
    /// Paths ending with a substitution column
    pub substitution: Matrix<S, L>,
    /// Paths ending with a gap in the first sequence
    pub insertion: Matrix<S, L>,
    /// Paths ending with a gap in the second sequence
    pub deletion: Matrix<S, L>,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum State {
    Substitution,
    Insertion,
    Deletion,
}

/// Global alignment with affine gap costs: a run of `len` gap columns costs
/// `open + (len - 1) * extend`. With `band = Some(k)` only cells with |i - j| <= k are evaluated.
///
/// A gap run can't directly follow a gap run in the other sequence. With `open == extend` the
/// score is therefore at most the linear gap score and can be lower when the linear optimum
/// replaces a mismatch with two gaps.
pub fn align<A, B, S, Sc>(
    seq1: &A,
    seq2: &B,
    scorer: &Sc,
    open: S,
    extend: S,
    band: Option<usize>,
) -> Result<Alignment<S>>
where
    A: Alignable,
    B: Alignable<Symbol = A::Symbol>,
    A::Symbol: PartialEq,
    S: Score,
    Sc: symbols::Scorer<Score = S, Symbol = A::Symbol>,
{
    let (rows, cols) = (seq1.len() + 1, seq2.len() + 1);
    match band {
        None => run(seq1, seq2, scorer, open, extend, Full::new(rows, cols)),
        Some(width) => {
            super::ensure_band(width, seq1.len(), seq2.len())?;
            run(seq1, seq2, scorer, open, extend, Band::new(rows, cols, width))
        }
    }
}

fn run<A, B, S, Sc, L>(
    seq1: &A,
    seq2: &B,
    scorer: &Sc,
    open: S,
    extend: S,
    layout: L,
) -> Result<Alignment<S>>
where
    A: Alignable,
    B: Alignable<Symbol = A::Symbol>,
    A::Symbol: PartialEq,
    S: Score,
    Sc: symbols::Scorer<Score = S, Symbol = A::Symbol>,
    L: Layout,
{
    let matrices = fill(seq1, seq2, scorer, open, extend, layout)?;
    if log::log_enabled!(log::Level::Trace) {
        log::trace!(
            "Affine gap score matrices:\nSubstitution:\n{}Insertion:\n{}Deletion:\n{}",
            matrices.substitution,
            matrices.insertion,
            matrices.deletion
        );
    }

    let (row, col) = (seq1.len(), seq2.len());
    let (score, state) = [
        (matrices.substitution.get(row, col), State::Substitution),
        (matrices.insertion.get(row, col), State::Insertion),
        (matrices.deletion.get(row, col), State::Deletion),
    ]
    .into_iter()
    .rev()
    .max_by_key(|(score, _)| *score)
    .unwrap_or((S::zero(), State::Substitution));

    let ops = traceback(&matrices, state, seq1, seq2, scorer, extend);
    Ok(Alignment::new(score, Step::from_ops(ops)))
}

pub fn fill<A, B, S, Sc, L>(
    seq1: &A,
    seq2: &B,
    scorer: &Sc,
    open: S,
    extend: S,
    layout: L,
) -> Result<Matrices<S, L>>
where
    A: Alignable,
    B: Alignable<Symbol = A::Symbol>,
    S: Score,
    Sc: symbols::Scorer<Score = S, Symbol = A::Symbol>,
    L: Layout,
{
    debug_assert_eq!((layout.rows(), layout.cols()), (seq1.len() + 1, seq2.len() + 1));

    let unreachable = S::unreachable();
    let mut mat = Matrices {
        substitution: Matrix::<S, L>::new(layout.clone()),
        insertion: Matrix::<S, L>::new(layout.clone()),
        deletion: Matrix::<S, L>::new(layout),
    };

    for row in 0..mat.substitution.rows() {
        for col in mat.substitution.columns(row) {
            let substitution = match (row, col) {
                (0, 0) => S::zero(),
                (0, _) | (_, 0) => unreachable,
                _ => {
                    let (r, c) = (row - 1, col - 1);
                    let best = mat
                        .substitution
                        .get(r, c)
                        .max(mat.insertion.get(r, c))
                        .max(mat.deletion.get(r, c));
                    advance(best, scorer.score(seq1.at(r), seq2.at(c)))?
                }
            };
            let insertion = match col {
                0 => unreachable,
                _ => {
                    let extended = advance(mat.insertion.get(row, col - 1), extend)?;
                    let opened = advance(mat.substitution.get(row, col - 1), open)?;
                    extended.max(opened)
                }
            };
            let deletion = match row {
                0 => unreachable,
                _ => {
                    let extended = advance(mat.deletion.get(row - 1, col), extend)?;
                    let opened = advance(mat.substitution.get(row - 1, col), open)?;
                    extended.max(opened)
                }
            };

            mat.substitution.set(row, col, substitution);
            mat.insertion.set(row, col, insertion);
            mat.deletion.set(row, col, deletion);
        }
    }
    Ok(mat)
}

fn traceback<A, B, S, Sc, L>(
    mat: &Matrices<S, L>,
    mut state: State,
    seq1: &A,
    seq2: &B,
    scorer: &Sc,
    extend: S,
) -> Vec<Op>
where
    A: Alignable,
    B: Alignable<Symbol = A::Symbol>,
    A::Symbol: PartialEq,
    S: Score,
    Sc: symbols::Scorer<Score = S, Symbol = A::Symbol>,
    L: Layout,
{
    let (mut row, mut col) = (seq1.len(), seq2.len());
    let mut ops = Vec::with_capacity(row + col);

    while row > 0 || col > 0 {
        match state {
            State::Substitution => {
                if row == 0 {
                    state = State::Insertion;
                    continue;
                }
                if col == 0 {
                    state = State::Deletion;
                    continue;
                }

                let (s1, s2) = (seq1.at(row - 1), seq2.at(col - 1));
                let current = mat.substitution.get(row, col);
                let score = scorer.score(s1, s2);
                let from =
                    |matrix: &Matrix<S, L>| advance(matrix.get(row - 1, col - 1), score).ok();
                state = if from(&mat.substitution) == Some(current) {
                    State::Substitution
                } else if from(&mat.insertion) == Some(current) {
                    State::Insertion
                } else {
                    State::Deletion
                };

                ops.push(if s1 == s2 { Op::Match } else { Op::Mismatch });
                row -= 1;
                col -= 1;
            }
            State::Insertion => {
                if col == 0 {
                    // Nothing left in seq2, the rest of seq1 can only be gapped
                    ops.push(Op::GapSecond);
                    row -= 1;
                    continue;
                }

                let current = mat.insertion.get(row, col);
                if advance(mat.insertion.get(row, col - 1), extend).ok() != Some(current) {
                    state = State::Substitution;
                }
                ops.push(Op::GapFirst);
                col -= 1;
            }
            State::Deletion => {
                if row == 0 {
                    ops.push(Op::GapFirst);
                    col -= 1;
                    continue;
                }

                let current = mat.deletion.get(row, col);
                if advance(mat.deletion.get(row - 1, col), extend).ok() != Some(current) {
                    state = State::Substitution;
                }
                ops.push(Op::GapSecond);
                row -= 1;
            }
        }
    }
    ops.reverse();
    ops
}
