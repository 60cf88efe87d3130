use crate::pairwise::scoring::{Score, symbols};
use crate::{Alignable, Result, advance};

/// Last row of the linear gap score matrix, computed with two rolling rows of `seq2.len() + 1`
/// cells. `row[j]` is the best score of aligning the whole `seq1` with `seq2[..j]`.
pub fn last_row<A, B, S, Sc>(seq1: &A, seq2: &B, scorer: &Sc, gap: S) -> Result<Vec<S>>
where
    A: Alignable,
    B: Alignable<Symbol = A::Symbol>,
    S: Score,
    Sc: symbols::Scorer<Score = S, Symbol = A::Symbol>,
{
    let cols = seq2.len() + 1;

    let mut previous = Vec::with_capacity(cols);
    previous.push(S::zero());
    for col in 1..cols {
        previous.push(advance(previous[col - 1], gap)?);
    }
    let mut current = vec![S::zero(); cols];

    for row in 1..=seq1.len() {
        let symbol = seq1.at(row - 1);
        current[0] = advance(previous[0], gap)?;
        for col in 1..cols {
            let diagonal = advance(previous[col - 1], scorer.score(symbol, seq2.at(col - 1)))?;
            let up = advance(previous[col], gap)?;
            let left = advance(current[col - 1], gap)?;
            current[col] = diagonal.max(up).max(left);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    Ok(previous)
}
