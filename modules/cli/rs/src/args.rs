use clap::{Parser, ValueEnum};
use eyre::{Result, WrapErr, eyre};
use log::LevelFilter;

use pairalign_alignment_rs::pairwise::nw::{Config, Mode};
use pairalign_alignment_rs::pairwise::scoring::{gaps, symbols};

pub type Score = i64;

#[derive(Parser, Debug)]
#[command(name = "pairalign")]
#[command(about = "Global pairwise alignment of two sequences", long_about = None)]
#[command(version, allow_negative_numbers = true)]
pub struct Args {
    /// First sequence
    #[arg(value_name = "SEQ1")]
    pub seq1: String,

    /// Second sequence
    #[arg(value_name = "SEQ2")]
    pub seq2: String,

    /// Score for identical symbols [default: 5]. Requires --mismatch
    #[arg(long = "match", value_name = "INT")]
    pub match_score: Option<Score>,

    /// Score for different symbols [default: -4]. Requires --match
    #[arg(long, value_name = "INT")]
    pub mismatch: Option<Score>,

    /// Linear gap penalty, charged for every gap column
    #[arg(long, value_name = "INT", default_value_t = -10)]
    pub gap: Score,

    /// Affine gap open penalty. Replaces --gap with the affine gap model
    #[arg(long, value_name = "INT", conflicts_with = "gap")]
    pub gap_open: Option<Score>,

    /// Affine gap extension penalty, used together with --gap-open
    #[arg(long, value_name = "INT", default_value_t = -1)]
    pub gap_extend: Score,

    /// Alignment engine
    #[arg(long, value_enum, default_value_t = Engine::Dense)]
    pub mode: Engine,

    /// Band half-width for the banded engine
    #[arg(short = 'k', long, value_name = "INT")]
    pub band_width: Option<usize>,

    /// Print DP matrices and other debug information
    #[arg(long)]
    pub debug: bool,
}

#[derive(ValueEnum, Clone, Copy, Eq, PartialEq, Debug)]
pub enum Engine {
    Dense,
    Banded,
    Hirschberg,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Trace
        } else {
            LevelFilter::Info
        }
    }

    pub fn scorer(&self) -> Result<symbols::Equality<Score, char>> {
        symbols::Equality::from_options(self.match_score, self.mismatch)
            .wrap_err("Invalid substitution scores")
    }

    pub fn config(&self) -> Result<Config<Score>> {
        let gaps = match self.gap_open {
            Some(open) => gaps::Model::affine(open, self.gap_extend),
            None => gaps::Model::linear(self.gap),
        };
        let mode = match (self.mode, self.band_width) {
            (Engine::Dense, _) => Mode::Dense,
            (Engine::Hirschberg, _) => Mode::Hirschberg,
            (Engine::Banded, Some(width)) => Mode::Banded { width },
            (Engine::Banded, None) => {
                return Err(eyre!("--band-width is required for --mode banded"));
            }
        };
        Ok(Config::new(gaps, mode))
    }
}
