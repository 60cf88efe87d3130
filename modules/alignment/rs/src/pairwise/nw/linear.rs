use crate::pairwise::alignment::{Alignment, Op, Step};
use crate::pairwise::scoring::{Score, symbols};
use crate::{Alignable, Result, advance};

use super::grid::{Band, Full, Layout, Matrix};

/// Global alignment with a linear gap penalty. With `band = Some(k)` only cells with |i - j| <= k
/// are evaluated, and the result is optimal only if an optimal path stays inside the corridor.
pub fn align<A, B, S, Sc>(
    seq1: &A,
    seq2: &B,
    scorer: &Sc,
    gap: S,
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
        None => run(seq1, seq2, scorer, gap, Full::new(rows, cols)),
        Some(width) => {
            super::ensure_band(width, seq1.len(), seq2.len())?;
            run(seq1, seq2, scorer, gap, Band::new(rows, cols, width))
        }
    }
}

fn run<A, B, S, Sc, L>(seq1: &A, seq2: &B, scorer: &Sc, gap: S, layout: L) -> Result<Alignment<S>>
where
    A: Alignable,
    B: Alignable<Symbol = A::Symbol>,
    A::Symbol: PartialEq,
    S: Score,
    Sc: symbols::Scorer<Score = S, Symbol = A::Symbol>,
    L: Layout,
{
    let matrix = fill(seq1, seq2, scorer, gap, layout)?;
    if log::log_enabled!(log::Level::Trace) {
        log::trace!("Linear gap score matrix:\n{matrix}");
    }
    let score = matrix.get(seq1.len(), seq2.len());
    let ops = traceback(&matrix, seq1, seq2, scorer, gap);
    Ok(Alignment::new(score, Step::from_ops(ops)))
}

/// Fill the score matrix. Cell (i, j) holds the best score of aligning `seq1[..i]` with `seq2[..j]`.
pub fn fill<A, B, S, Sc, L>(
    seq1: &A,
    seq2: &B,
    scorer: &Sc,
    gap: S,
    layout: L,
) -> Result<Matrix<S, L>>
where
    A: Alignable,
    B: Alignable<Symbol = A::Symbol>,
    S: Score,
    Sc: symbols::Scorer<Score = S, Symbol = A::Symbol>,
    L: Layout,
{
    debug_assert_eq!((layout.rows(), layout.cols()), (seq1.len() + 1, seq2.len() + 1));

    let mut matrix = Matrix::<S, L>::new(layout);
    for row in 0..matrix.rows() {
        for col in matrix.columns(row) {
            let value = match (row, col) {
                (0, 0) => S::zero(),
                (0, _) => advance(matrix.get(0, col - 1), gap)?,
                (_, 0) => advance(matrix.get(row - 1, 0), gap)?,
                _ => {
                    let score = scorer.score(seq1.at(row - 1), seq2.at(col - 1));
                    let diagonal = advance(matrix.get(row - 1, col - 1), score)?;
                    let up = advance(matrix.get(row - 1, col), gap)?;
                    let left = advance(matrix.get(row, col - 1), gap)?;
                    diagonal.max(up).max(left)
                }
            };
            matrix.set(row, col, value);
        }
    }
    Ok(matrix)
}

/// Reconstruct one optimal path from the bottom-right corner. Ties are resolved as
/// diagonal > up (gap in seq2) > left (gap in seq1).
fn traceback<A, B, S, Sc, L>(
    matrix: &Matrix<S, L>,
    seq1: &A,
    seq2: &B,
    scorer: &Sc,
    gap: S,
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
        let current = matrix.get(row, col);
        let diagonal = (row > 0 && col > 0).then(|| {
            let score = scorer.score(seq1.at(row - 1), seq2.at(col - 1));
            advance(matrix.get(row - 1, col - 1), score).ok()
        });
        let up = (row > 0).then(|| advance(matrix.get(row - 1, col), gap).ok());
        let left = (col > 0).then(|| advance(matrix.get(row, col - 1), gap).ok());

        let candidates = [
            (diagonal.flatten(), Direction::Diagonal),
            (up.flatten(), Direction::Up),
            (left.flatten(), Direction::Left),
        ];
        let exact = candidates.iter().find(|(value, _)| *value == Some(current));
        debug_assert!(exact.is_some(), "cell ({row}, {col}) has no optimal predecessor");
        let direction = exact
            .or_else(|| candidates.iter().find(|(value, _)| value.is_some()))
            .map_or(Direction::Diagonal, |(_, direction)| *direction);

        match direction {
            Direction::Diagonal => {
                if seq1.at(row - 1) == seq2.at(col - 1) {
                    ops.push(Op::Match);
                } else {
                    ops.push(Op::Mismatch);
                }
                row -= 1;
                col -= 1;
            }
            Direction::Up => {
                ops.push(Op::GapSecond);
                row -= 1;
            }
            Direction::Left => {
                ops.push(Op::GapFirst);
                col -= 1;
            }
        }
    }
    ops.reverse();
    ops
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Direction {
    Diagonal,
    Up,
    Left,
}
