//! The clone / remote / branch / checkout sequence for one issue.
//!
//! Steps run strictly in order and the first failure stops the run. Nothing
//! is rolled back: a clone that succeeded stays on disk even when a later
//! step fails.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::cli::Invocation;
use crate::config::{Config, UPSTREAM_REMOTE};
use crate::error::{BranchError, Result};
use crate::git::repo;
use crate::git::runner::Git;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
  Clone,
  EnterDir,
  AddUpstream,
  CreateBranch,
  Checkout,
}

impl std::fmt::Display for Step {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let name = match self {
      Step::Clone => "clone",
      Step::EnterDir => "enter directory",
      Step::AddUpstream => "remote add",
      Step::CreateBranch => "branch",
      Step::Checkout => "checkout",
    };
    f.write_str(name)
  }
}

pub fn steps(create_branch: bool) -> Vec<Step> {
  let mut steps = vec![Step::Clone, Step::EnterDir, Step::AddUpstream];
  if create_branch {
    steps.push(Step::CreateBranch);
  }
  steps.push(Step::Checkout);
  steps
}

/// Runs every step for `invocation` with `base_dir` as the starting
/// directory. Returns the path of the new clone.
pub fn run(
  git: &impl Git,
  invocation: &Invocation,
  config: &Config,
  base_dir: &Path,
) -> Result<PathBuf> {
  let issue = &invocation.issue;
  let dir_name = issue.dir_name();
  let branch = issue.branch_name();
  let clone_path = issue.clone_path(base_dir);

  debug!("steps for issue {issue}: {:?}", steps(invocation.create_branch));

  for step in steps(invocation.create_branch) {
    match step {
      Step::Clone => repo::clone(git, &config.fork_url, &dir_name, base_dir)?,
      Step::EnterDir => enter(&clone_path)?,
      Step::AddUpstream => {
        repo::add_remote(git, &clone_path, UPSTREAM_REMOTE, &config.upstream_url)?
      }
      Step::CreateBranch => repo::create_branch(git, &clone_path, &branch)?,
      Step::Checkout => repo::checkout(git, &clone_path, &branch)?,
    }
  }

  info!("issue {issue} ready: {} on {branch}", clone_path.display());
  Ok(clone_path)
}

fn enter(clone_path: &Path) -> Result<()> {
  if !clone_path.is_dir() {
    return Err(BranchError::MissingClone(clone_path.to_path_buf()));
  }
  debug!("working in {}", clone_path.display());
  Ok(())
}
