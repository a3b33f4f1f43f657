// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::io;

use color_eyre::eyre::{eyre, WrapErr};
use nba_roster::{chart::ChartSpec, gui};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let spec = ChartSpec::from_reader(io::stdin().lock())
        .wrap_err("reading chart data from stdin")?;

    gui::run(spec).map_err(|e| eyre!("chart window failed: {e}"))
}
