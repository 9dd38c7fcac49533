// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;
use file_classify::{app, cli::Args, config::Config, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(&args.logging);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::try_from(args)?;
    log::debug!("resolved configuration: {config:?}");
    app::run(&config)?;
    Ok(())
}
