//! Stackbot server
//!
//! Serves the disc stacking puzzle over HTTP: a robot on a 3x3 grid picks up
//! and drops colored discs until every occupied cell holds a green-blue-red
//! tower.

use clap::Parser;
use stackbot::config::Config;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    match stackbot::server::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("stackbot: {e}");
            ExitCode::FAILURE
        }
    }
}
