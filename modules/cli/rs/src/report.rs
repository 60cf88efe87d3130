use std::fmt::{Display, Formatter};

/// Symbols per output line
pub const LINE_WIDTH: usize = 80;

/// Printable alignment: both aligned sequences wrapped into blocks of `LINE_WIDTH` columns,
/// followed by the score.
pub struct Report<'a> {
    aligned1: &'a [char],
    aligned2: &'a [char],
    score: i64,
}

impl<'a> Report<'a> {
    pub fn new(aligned1: &'a [char], aligned2: &'a [char], score: i64) -> Self {
        debug_assert_eq!(aligned1.len(), aligned2.len());
        Self {
            aligned1,
            aligned2,
            score,
        }
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Pairwise alignment:")?;
        for (line1, line2) in self
            .aligned1
            .chunks(LINE_WIDTH)
            .zip(self.aligned2.chunks(LINE_WIDTH))
        {
            writeln!(f, "seq1: {}", line1.iter().collect::<String>())?;
            writeln!(f, "seq2: {}", line2.iter().collect::<String>())?;
            writeln!(f)?;
        }
        writeln!(f, "Score: {}", self.score)
    }
}
