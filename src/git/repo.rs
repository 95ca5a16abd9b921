use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::git::runner::Git;
use crate::workflow::Step;

pub fn clone(git: &impl Git, url: &str, dest: &str, cwd: &Path) -> Result<()> {
  info!("cloning {url} into {dest}");
  git.run(Step::Clone, &["clone", url, dest], cwd)
}

pub fn add_remote(git: &impl Git, repo_path: &Path, name: &str, url: &str) -> Result<()> {
  info!("adding remote {name} -> {url}");
  git.run(Step::AddUpstream, &["remote", "add", name, url], repo_path)
}

pub fn create_branch(git: &impl Git, repo_path: &Path, branch: &str) -> Result<()> {
  info!("creating branch {branch}");
  git.run(Step::CreateBranch, &["branch", branch], repo_path)
}

pub fn checkout(git: &impl Git, repo_path: &Path, branch: &str) -> Result<()> {
  info!("checking out {branch}");
  git.run(Step::Checkout, &["checkout", branch], repo_path)
}
