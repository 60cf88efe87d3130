use std::ops::Range;

use crate::pairwise::alignment::{Alignment, Op};
use crate::pairwise::scoring::Score;
use crate::pairwise::scoring::symbols::{self, Swapped};
use crate::{Alignable, Result, advance, repeated};

use super::{linear, score_only};

/// Optimal global alignment with a linear gap penalty in O(min(n, m)) working memory.
///
/// The first sequence is split in half, and forward/backward score-only passes locate the column
/// of the second sequence where an optimal path crosses the split. Both halves are aligned
/// recursively; sub-problems with a single symbol on either side are aligned densely.
///
/// The score always matches the dense algorithm, the alignment itself can be a different
/// co-optimal one.
pub fn align<A, B, S, Sc>(seq1: &A, seq2: &B, scorer: &Sc, gap: S) -> Result<Alignment<S>>
where
    A: Alignable,
    B: Alignable<Symbol = A::Symbol>,
    A::Symbol: PartialEq,
    S: Score,
    Sc: symbols::Scorer<Score = S, Symbol = A::Symbol>,
{
    // Working rows are sized by the second sequence, keep it the shorter one
    if seq2.len() > seq1.len() {
        log::debug!(
            "Hirschberg: aligning the transposed problem ({} x {})",
            seq2.len(),
            seq1.len()
        );
        let swapped = Swapped::new(scorer);
        let aln = recurse(seq2, 0..seq2.len(), seq1, 0..seq1.len(), &swapped, gap)?;
        return Ok(aln.transposed());
    }
    recurse(seq1, 0..seq1.len(), seq2, 0..seq2.len(), scorer, gap)
}

fn recurse<A, B, S, Sc>(
    seq1: &A,
    r1: Range<usize>,
    seq2: &B,
    r2: Range<usize>,
    scorer: &Sc,
    gap: S,
) -> Result<Alignment<S>>
where
    A: Alignable,
    B: Alignable<Symbol = A::Symbol>,
    A::Symbol: PartialEq,
    S: Score,
    Sc: symbols::Scorer<Score = S, Symbol = A::Symbol>,
{
    let (n, m) = (r1.len(), r2.len());
    if n == 0 {
        return Ok(Alignment::gaps_only(Op::GapFirst, m, repeated(gap, m)?));
    }
    if m == 0 {
        return Ok(Alignment::gaps_only(Op::GapSecond, n, repeated(gap, n)?));
    }
    if n == 1 || m == 1 {
        return linear::align(&seq1.window(r1), &seq2.window(r2), scorer, gap, None);
    }

    let mid = r1.start + n / 2;
    let target = seq2.window(r2.clone());
    let forward = score_only::last_row(&seq1.window(r1.start..mid), &target, scorer, gap)?;
    let backward = score_only::last_row(
        &seq1.window(mid..r1.end).reversed(),
        &target.reversed(),
        scorer,
        gap,
    )?;

    // The first best column wins
    let (mut split, mut best) = (0, advance(forward[0], backward[m])?);
    for col in 1..=m {
        let total = advance(forward[col], backward[m - col])?;
        if total > best {
            best = total;
            split = col;
        }
    }
    let split = r2.start + split;
    log::trace!(
        "Hirschberg: seq1 {:?} split at {mid}, seq2 {:?} split at {split}, score {best}",
        r1,
        r2
    );

    let mut aln = recurse(seq1, r1.start..mid, seq2, r2.start..split, scorer, gap)?;
    aln.append(recurse(seq1, mid..r1.end, seq2, split..r2.end, scorer, gap)?)?;
    Ok(aln)
}
