use pairalign_alignment_rs::pairwise::nw::{self, Mode};
use pairalign_alignment_rs::pairwise::scoring::gaps::{Linear, Model};
use pairalign_alignment_rs::pairwise::scoring::symbols::{Equality, Function};

use super::{aligner, render, ungapped};

#[test]
fn test_scenarios() -> eyre::Result<()> {
    let workload: [(&[u8], &[u8], i32, i32); 8] = [
        (b"ACGT", b"ACGT", -10, 20),
        (b"ACAGT", b"ACGT", -10, 10),
        (b"AAAAAA", b"CCCCCC", -10, -24),
        (b"ACGT", b"A", -10, -25),
        (b"", b"ACGT", -10, -40),
        (b"TAGT", b"ACGT", 10, 80),
        (b"GGAGCCAAGGTGAAGTTGTAGCAGTGTGTCC", b"GACTTGTGGAACCTCTGTCCTCCGAGCTCTC", -5, 8),
        (b"AAAAAAATTTTTTT", b"TTTTTTTAAAAAAA", -5, -35),
    ];

    for (seq1, seq2, gap, score) in workload {
        let aln = aligner(Model::linear(gap), Mode::Hirschberg).align(&seq1, &seq2)?;
        assert_eq!(*aln.score(), score);

        let (aligned1, aligned2) = render(&aln, seq1, seq2)?;
        assert_eq!(aligned1.len(), aligned2.len());
        assert_eq!(ungapped(&aligned1).as_bytes(), seq1);
        assert_eq!(ungapped(&aligned2).as_bytes(), seq2);

        let gaps = Linear { penalty: gap };
        assert_eq!(aln.rescore(&seq1, &seq2, &Equality::new(5, -4), &gaps)?, score);
    }
    Ok(())
}

#[test]
fn test_unambiguous_alignments() -> eyre::Result<()> {
    let workload: [(&[u8], &[u8], (&str, &str)); 3] = [
        (b"ACAGT", b"ACGT", ("ACAGT", "AC-GT")),
        (b"ACGT", b"ACAGT", ("AC-GT", "ACAGT")),
        (b"ACGT", b"", ("ACGT", "----")),
    ];
    for (seq1, seq2, expected) in workload {
        let aln = aligner(Model::linear(-10), Mode::Hirschberg).align(&seq1, &seq2)?;
        let (aligned1, aligned2) = render(&aln, seq1, seq2)?;
        assert_eq!((aligned1.as_str(), aligned2.as_str()), expected);
    }
    Ok(())
}

#[test]
fn test_substitution_matrix() -> eyre::Result<()> {
    // Transitions (A<->G, C<->T) are penalized less than transversions
    let scorer = Function::new(|a: &u8, b: &u8| -> i64 {
        match (a, b) {
            _ if a == b => 4,
            (b'A', b'G') | (b'G', b'A') | (b'C', b'T') | (b'T', b'C') => -1,
            _ => -3,
        }
    });
    let (seq1, seq2): (&[u8], &[u8]) = (b"GATTACAGATTACA", b"GACTATAGGTTCA");

    for gap in [-6, -3, -1] {
        let dense = nw::linear::align(&seq1, &seq2, &scorer, gap, None)?;
        let aln = nw::hirschberg::align(&seq1, &seq2, &scorer, gap)?;
        assert_eq!(aln.score(), dense.score());
        assert_eq!(aln.rescore(&seq1, &seq2, &scorer, &Linear { penalty: gap })?, *dense.score());
    }
    Ok(())
}
