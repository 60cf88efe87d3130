use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pairalign_alignment_rs::pairwise::Alignment;
use pairalign_alignment_rs::pairwise::nw::{self, Mode};
use pairalign_alignment_rs::pairwise::scoring::gaps::{self, Model};
use pairalign_alignment_rs::pairwise::scoring::symbols::Equality;

use super::{Score, aligner, render, ungapped};

const ITERATIONS: usize = 200;

fn sequence(rng: &mut StdRng, alphabet: &[u8], max_len: usize) -> Vec<u8> {
    let len = rng.gen_range(0..=max_len);
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

fn pair(rng: &mut StdRng) -> (Vec<u8>, Vec<u8>) {
    // Small alphabets produce plenty of ties and gaps
    let alphabet: &[u8] = if rng.gen_bool(0.5) { b"ACGT" } else { b"AC" };
    (sequence(rng, alphabet, 24), sequence(rng, alphabet, 24))
}

fn gap_model(rng: &mut StdRng, linear: bool) -> Model<Score> {
    if linear || rng.gen_bool(0.3) {
        Model::linear(rng.gen_range(-12..=0))
    } else {
        let extend = rng.gen_range(-4..=0);
        Model::affine(extend + rng.gen_range(-12..=0), extend)
    }
}

fn assert_valid(
    aln: &Alignment<Score>,
    seq1: &[u8],
    seq2: &[u8],
    gaps: &Model<Score>,
) -> eyre::Result<()> {
    let (aligned1, aligned2) = render(aln, seq1, seq2)?;
    assert_eq!(aligned1.len(), aligned2.len());
    assert_eq!(ungapped(&aligned1).as_bytes(), seq1);
    assert_eq!(ungapped(&aligned2).as_bytes(), seq2);

    let rescored = aln.rescore(&seq1, &seq2, &Equality::new(5, -4), gaps)?;
    assert_eq!(rescored, *aln.score(), "{aligned1} vs {aligned2} ({gaps:?})");
    Ok(())
}

#[test]
fn test_dense_round_trip_and_score() -> eyre::Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..ITERATIONS {
        let (seq1, seq2) = pair(&mut rng);
        let gaps = gap_model(&mut rng, false);
        let aln = aligner(gaps, Mode::Dense).align(&seq1, &seq2)?;
        assert_valid(&aln, &seq1, &seq2, &gaps)?;
    }
    Ok(())
}

#[test]
fn test_hirschberg_matches_dense() -> eyre::Result<()> {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..ITERATIONS {
        let (seq1, seq2) = pair(&mut rng);
        let gaps = gap_model(&mut rng, true);

        let dense = aligner(gaps, Mode::Dense).align(&seq1, &seq2)?;
        let hirschberg = aligner(gaps, Mode::Hirschberg).align(&seq1, &seq2)?;
        assert_eq!(hirschberg.score(), dense.score());
        assert_valid(&hirschberg, &seq1, &seq2, &gaps)?;
    }
    Ok(())
}

#[test]
fn test_wide_band_matches_dense() -> eyre::Result<()> {
    let mut rng = StdRng::seed_from_u64(13);
    let scorer = Equality::new(5, -4);
    for _ in 0..ITERATIONS {
        let (seq1, seq2) = pair(&mut rng);
        let width = seq1.len().max(seq2.len()) + rng.gen_range(0..3);

        let aln = match gap_model(&mut rng, false) {
            Model::Linear(gaps::Linear { penalty }) => (
                nw::linear::align(&seq1, &seq2, &scorer, penalty, None)?,
                nw::linear::align(&seq1, &seq2, &scorer, penalty, Some(width))?,
            ),
            Model::Affine(gaps::Affine { open, extend }) => (
                nw::affine::align(&seq1, &seq2, &scorer, open, extend, None)?,
                nw::affine::align(&seq1, &seq2, &scorer, open, extend, Some(width))?,
            ),
        };
        assert_eq!(aln.0, aln.1);
    }
    Ok(())
}

#[test]
fn test_narrow_band_is_valid() -> eyre::Result<()> {
    let mut rng = StdRng::seed_from_u64(21);
    for _ in 0..ITERATIONS {
        let len = rng.gen_range(0..=24);
        let seq1 = sequence(&mut rng, b"ACGT", len);
        let seq2 = sequence(&mut rng, b"ACGT", len);
        // Equal lengths are required by the banded mode
        let seq2 = seq2
            .into_iter()
            .chain(std::iter::repeat(b'A'))
            .take(seq1.len())
            .collect::<Vec<_>>();

        let gaps = gap_model(&mut rng, false);
        let dense = aligner(gaps, Mode::Dense).align(&seq1, &seq2)?;
        for width in 0..4 {
            let banded = aligner(gaps, Mode::Banded { width }).align(&seq1, &seq2)?;
            assert!(banded.score() <= dense.score());
            assert_valid(&banded, &seq1, &seq2, &gaps)?;
        }
    }
    Ok(())
}
