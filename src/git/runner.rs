use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{BranchError, Result};
use crate::workflow::Step;

pub trait Git {
  /// Runs `git <args>` in `cwd` and waits for it to exit.
  /// A non-zero exit is reported as [`BranchError::Git`] for `step`.
  fn run(&self, step: Step, args: &[&str], cwd: &Path) -> Result<()>;
}

/// Invokes the `git` binary found on `PATH`.
///
/// Stdio is inherited so clone progress and git's own error text reach the
/// terminal directly.
#[derive(Debug)]
pub struct GitCli;

impl Git for GitCli {
  fn run(&self, step: Step, args: &[&str], cwd: &Path) -> Result<()> {
    debug!("git {} (in {})", args.join(" "), cwd.display());

    let status = Command::new("git")
      .args(args)
      .current_dir(cwd)
      .status()
      .map_err(|e| BranchError::Git {
        step,
        details: format!("could not run git: {e}"),
      })?;

    if !status.success() {
      return Err(BranchError::Git {
        step,
        details: format!("git exited with {status}"),
      });
    }

    Ok(())
  }
}
