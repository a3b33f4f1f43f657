// src/bin/cli.rs
use nba_roster::{cli, config::options::AppOptions};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run(AppOptions::default())
}
