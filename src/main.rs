#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! addycsv — back up addy.io email aliases to a CSV file.

mod api;
mod cli;
mod credential;
mod project;
mod run;
mod schema;
mod writer;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    // --log-level sets the filter; ADDYCSV_LOG overrides it for ad-hoc
    // debugging. The token itself is never logged at any level.
    let filter = EnvFilter::try_from_env("ADDYCSV_LOG").unwrap_or_else(|_| {
        EnvFilter::new(format!("addycsv={}", cli.log_level.as_directive()))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    if let Err(err) = run::run(&cli) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}
