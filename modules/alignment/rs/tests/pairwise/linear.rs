use pairalign_alignment_rs::pairwise::nw::Mode;
use pairalign_alignment_rs::pairwise::scoring::gaps::Model;

use super::{Workload, ensure};

fn workload() -> Vec<Workload<'static>> {
    let gaps = |penalty| Model::linear(penalty);
    vec![
        Workload {
            seq1: b"ACGT",
            seq2: b"ACGT",
            gaps: gaps(-10),
            score: 20,
            aligned: ("ACGT", "ACGT"),
        },
        Workload {
            seq1: b"ACG",
            seq2: b"ACGT",
            gaps: gaps(-10),
            score: 5,
            aligned: ("ACG-", "ACGT"),
        },
        Workload {
            seq1: b"ACGT",
            seq2: b"ACG",
            gaps: gaps(-10),
            score: 5,
            aligned: ("ACGT", "ACG-"),
        },
        Workload {
            seq1: b"ACAGT",
            seq2: b"ACGT",
            gaps: gaps(-10),
            score: 10,
            aligned: ("ACAGT", "AC-GT"),
        },
        Workload {
            seq1: b"ACGT",
            seq2: b"ACAGT",
            gaps: gaps(-10),
            score: 10,
            aligned: ("AC-GT", "ACAGT"),
        },
        Workload {
            seq1: b"CAGT",
            seq2: b"ACAGT",
            gaps: gaps(-10),
            score: 10,
            aligned: ("-CAGT", "ACAGT"),
        },
        Workload {
            seq1: b"ACAGT",
            seq2: b"CAGT",
            gaps: gaps(-10),
            score: 10,
            aligned: ("ACAGT", "-CAGT"),
        },
        Workload {
            seq1: b"ACGT",
            seq2: b"A",
            gaps: gaps(-10),
            score: -25,
            aligned: ("ACGT", "A---"),
        },
        Workload {
            seq1: b"A",
            seq2: b"ACGT",
            gaps: gaps(-10),
            score: -25,
            aligned: ("A---", "ACGT"),
        },
        Workload {
            seq1: b"ACGT",
            seq2: b"",
            gaps: gaps(-10),
            score: -40,
            aligned: ("ACGT", "----"),
        },
        Workload {
            seq1: b"",
            seq2: b"ACGT",
            gaps: gaps(-10),
            score: -40,
            aligned: ("----", "ACGT"),
        },
        Workload {
            seq1: b"",
            seq2: b"",
            gaps: gaps(-10),
            score: 0,
            aligned: ("", ""),
        },
        Workload {
            seq1: b"TACGT",
            seq2: b"ATGT",
            gaps: gaps(-10),
            score: 1,
            aligned: ("TACGT", "-ATGT"),
        },
        Workload {
            seq1: b"TACGT",
            seq2: b"ACTGT",
            gaps: gaps(-10),
            score: 0,
            aligned: ("TAC-GT", "-ACTGT"),
        },
        Workload {
            seq1: b"ACGT",
            seq2: b"TAGTA",
            gaps: gaps(-5),
            score: 0,
            aligned: ("-ACGT-", "TA-GTA"),
        },
        Workload {
            seq1: b"TAGTA",
            seq2: b"ACGT",
            gaps: gaps(-5),
            score: 0,
            aligned: ("TA-GTA", "-ACGT-"),
        },
        Workload {
            seq1: b"ACGT",
            seq2: b"TAGT",
            gaps: gaps(0),
            score: 15,
            aligned: ("-ACGT", "TA-GT"),
        },
        Workload {
            seq1: b"TAGT",
            seq2: b"ACGT",
            gaps: gaps(10),
            score: 80,
            aligned: ("----TAGT", "ACGT----"),
        },
        Workload {
            seq1: b"GGAGCCAAGGTGAAGTTGTAGCAGTGTGTCC",
            seq2: b"GACTTGTGGAACCTCTGTCCTCCGAGCTCTC",
            gaps: gaps(-5),
            score: 8,
            aligned: (
                "GGAGCCAAG-GTGAA-GT-TGT-AGCAGTG-TGTCC",
                "-GA--CTTGTG-GAACCTCTGTCCTCCGAGCTCT-C",
            ),
        },
        Workload {
            seq1: b"AAAAAAATTTTTTT",
            seq2: b"TTTTTTTAAAAAAA",
            gaps: gaps(-5),
            score: -35,
            aligned: ("-------AAAAAAATTTTTTT", "TTTTTTTAAAAAAA-------"),
        },
        Workload {
            seq1: b"ACTGGTCAACTGGTCAACTGGTCAACTGGTCA",
            seq2: b"TACTGGTCAACTGGTCAACTGTCAACTGGTCA",
            gaps: gaps(-10),
            score: 135,
            aligned: (
                "-ACTGGTCAACTGGTCAACTGGTCAACTGGTCA",
                "TACTGGTCAACTGGTCAACT-GTCAACTGGTCA",
            ),
        },
        Workload {
            seq1: b"AAAAAA",
            seq2: b"CCCCCC",
            gaps: gaps(-10),
            score: -24,
            aligned: ("AAAAAA", "CCCCCC"),
        },
    ]
}

#[test]
fn test_dense() -> eyre::Result<()> {
    for w in workload() {
        ensure(Mode::Dense, w)?;
    }
    Ok(())
}

#[test]
fn test_wide_band_matches_dense() -> eyre::Result<()> {
    // Banded mode requires equal lengths
    for w in workload()
        .into_iter()
        .filter(|w| w.seq1.len() == w.seq2.len())
    {
        let width = w.seq1.len();
        ensure(Mode::Banded { width }, w)?;
    }
    Ok(())
}
