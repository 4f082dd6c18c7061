//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `check_ip` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the result and choosing the exit code
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use log::warn;
use std::process;

use check_ip::initialization::init_logger_with;
use check_ip::{run_check, Config, Opt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let (opt, parse_error) = Opt::parse_lenient(std::env::args_os());
    let config = Config::from(opt);

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Some(e) = parse_error {
        let reason = e.to_string();
        warn!(
            "Unrecognized command line, using the first argument as the address: {}",
            reason.lines().next().unwrap_or_default()
        );
    }

    match run_check(config).await {
        Ok(report) => {
            println!("{}", report.output);
            if report.exit_code != 0 {
                process::exit(report.exit_code);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("CheckIP error: {:#}", e);
            process::exit(1);
        }
    }
}
