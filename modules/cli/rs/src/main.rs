use clap::Parser;
use eyre::Result;

use pairalign_alignment_rs::pairwise::nw::Aligner;

use args::Args;
use report::Report;

mod args;
mod report;

/// Symbol printed in gap columns
const GAP: char = '-';

fn run(args: &Args) -> Result<String> {
    // Both validated before any matrix is built
    let scorer = args.scorer()?;
    let config = args.config()?;
    log::debug!(
        "Scores: match {}, mismatch {}, gaps {:?}",
        scorer.equal,
        scorer.different,
        config.gaps
    );

    let aligner = Aligner::new(scorer, config)?;
    // Sequences are aligned by characters, not by UTF-8 bytes
    let seq1: Vec<char> = args.seq1.chars().collect();
    let seq2: Vec<char> = args.seq2.chars().collect();
    let alignment = aligner.align(&seq1, &seq2)?;
    log::debug!("Alignment: {}", alignment.rle());

    let (aligned1, aligned2) = alignment.render(&seq1, &seq2, GAP)?;
    Ok(Report::new(&aligned1, &aligned2, *alignment.score()).to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();

    let report = run(&args)?;
    print!("{report}");
    Ok(())
}
