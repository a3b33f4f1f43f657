// src/cli.rs
use std::io;

use color_eyre::eyre::WrapErr;

use crate::{
    chart::ViewerPresenter,
    config::options::AppOptions,
    core::net::HttpFetcher,
    session::Session,
    teams::TeamRegistry,
};

/// Load teams, wire the real fetcher and chart viewer to the console, and loop.
pub fn run(options: AppOptions) -> color_eyre::Result<()> {
    let registry = TeamRegistry::load(&options.teams_file);
    for team in registry.entries() {
        println!("{}", team);
    }
    logf!("Init: teams={}, season={}, policy={:?}, height={:?}",
        registry.len(), options.season, options.match_policy, options.height_mode);

    let fetcher = HttpFetcher::new(&options.base_url, options.season)
        .wrap_err("setting up HTTP client")?;
    let presenter = ViewerPresenter::new(options.viewer.clone(), options.height_mode);

    let stdin = io::stdin();
    let mut session = Session::new(registry, &options, fetcher, presenter, stdin.lock(), io::stdout());
    session.run().wrap_err("console I/O failed")?;
    Ok(())
}
