use crate::Alignable;

/// Levenshtein (edit) distance: the minimum number of single-symbol insertions, deletions and
/// substitutions turning one sequence into the other. Uses a single row sized by the shorter input.
pub fn levenshtein<A, B>(seq1: &A, seq2: &B) -> usize
where
    A: Alignable,
    B: Alignable<Symbol = A::Symbol>,
    A::Symbol: PartialEq,
{
    if seq1.len() > seq2.len() {
        rolling(seq2, seq1)
    } else {
        rolling(seq1, seq2)
    }
}

fn rolling<A, B>(shorter: &A, longer: &B) -> usize
where
    A: Alignable,
    B: Alignable<Symbol = A::Symbol>,
    A::Symbol: PartialEq,
{
    let mut row: Vec<usize> = (0..=shorter.len()).collect();

    for j in 1..=longer.len() {
        let mut diagonal = row[0];
        row[0] += 1;

        for i in 1..=shorter.len() {
            let above = row[i];
            row[i] = if shorter.at(i - 1) == longer.at(j - 1) {
                diagonal
            } else {
                row[i - 1].min(row[i]).min(diagonal) + 1
            };
            diagonal = above;
        }
    }
    row[shorter.len()]
}
