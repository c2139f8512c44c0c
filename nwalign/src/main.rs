use clap::Parser;
use nwalign::align::{self, Cli};

fn main() -> anyhow::Result<()> {
    align::cli(Cli::parse())
}
