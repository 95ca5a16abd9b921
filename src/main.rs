mod cli;
mod config;
mod error;
mod git;
mod issue;
mod workflow;

use std::ffi::OsString;

use tracing::error;

use crate::config::Config;
use crate::error::{BranchError, Result};
use crate::git::runner::GitCli;

fn main() {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    )
    .init();

  let argv: Vec<OsString> = std::env::args_os().collect();

  if let Err(e) = run(&argv) {
    match &e {
      BranchError::Usage(usage) => eprintln!("{usage}"),
      _ => error!("{e}"),
    }
    std::process::exit(e.exit_code());
  }
}

fn run(argv: &[OsString]) -> Result<()> {
  let invocation = cli::parse_from(argv)?;

  let config = Config::from_env()?;
  let base_dir = std::env::current_dir()?;

  workflow::run(&GitCli, &invocation, &config, &base_dir)?;
  Ok(())
}
