use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use lib_nwalign::{alignment_configuration::AlignmentConfiguration, pairwise::align_all_pairs};
use log::{LevelFilter, debug, info};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use crate::align::fasta_parser::parse_sequence_file;

mod fasta_parser;

#[derive(Parser)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    /// The path to a sequence file containing at least two records.
    input: PathBuf,

    #[clap(long, short, default_value = "1")]
    match_score: i64,

    #[clap(long, short = 's', default_value = "-1")]
    mismatch_score: i64,

    #[clap(long, short, default_value = "-2")]
    gap_score: i64,

    /// A toml file holding the three scores, overriding the score flags.
    #[clap(long, short = 'c')]
    scoring: Option<PathBuf>,
}

pub fn cli(cli: Cli) -> Result<()> {
    // The logger may already be initialised when several tests drive the
    // CLI within one process.
    let _ = TermLogger::init(
        cli.log_level,
        Default::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let configuration = load_configuration(&cli)?;

    info!("Loading sequence file {:?}", cli.input);
    let records = parse_sequence_file(&cli.input)?;
    debug!("Parsed {} sequence records", records.len());

    let results = align_all_pairs(&records, configuration)
        .with_context(|| format!("Unable to align the sequences in {:?}", cli.input))?;

    for result in &results {
        println!("{result}");
    }

    Ok(())
}

fn load_configuration(cli: &Cli) -> Result<AlignmentConfiguration> {
    if let Some(path) = &cli.scoring {
        #[derive(serde::Deserialize)]
        struct ScoringConfig {
            match_score: i64,
            mismatch_score: i64,
            gap_score: i64,
        }

        debug!("Loading scoring file {path:?}");
        let scoring = fs::read_to_string(path)
            .with_context(|| format!("Unable to read scoring file {path:?}"))?;
        let scoring: ScoringConfig = toml::from_str(&scoring)
            .with_context(|| format!("Unable to parse scoring file {path:?}"))?;

        Ok(AlignmentConfiguration {
            match_score: scoring.match_score.into(),
            mismatch_score: scoring.mismatch_score.into(),
            gap_score: scoring.gap_score.into(),
        })
    } else {
        Ok(AlignmentConfiguration {
            match_score: cli.match_score.into(),
            mismatch_score: cli.mismatch_score.into(),
            gap_score: cli.gap_score.into(),
        })
    }
}
