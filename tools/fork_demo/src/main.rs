//! fork-demo CLI

use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use fork_demo::{run, Census, Cli, System, PROGRAM};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("off")).init();

    let _cli = Cli::parse();

    if log::log_enabled!(log::Level::Debug) {
        log::debug!("expected without failures: {}", Census::of(PROGRAM));
    }

    run(PROGRAM, &mut System);

    // Every process that comes out of run() ends here.
    ExitCode::SUCCESS
}
