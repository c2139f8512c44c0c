use std::{env, ffi::OsStr};

use anyhow::{Result, anyhow};
use clap::Parser;
use nwalign::align::{self, Cli};

pub fn run_in_repo_root(args: &str) -> Result<()> {
    // working directory is this crate, a.k.a. "[...]/nwalign-tests"
    // simulate a call from the repo root by traversing to "../"
    let current = env::current_dir()?;
    if current.file_name() == Some(OsStr::new("nwalign-tests")) {
        env::set_current_dir(current.parent().ok_or(anyhow!("No parent directory"))?)?;
    }

    let cli = Cli::parse_from(args.split_whitespace());
    align::cli(cli)
}
