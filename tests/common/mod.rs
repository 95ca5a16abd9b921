//! Isolated working directory plus a stub `git` for driving the binary.

use assert_cmd::Command;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const FORK_URL: &str = "https://example.com/fork.git";

/// Appends `<physical cwd>|<args>` to `$GIT_STUB_LOG`. `clone` creates its
/// destination directory; `checkout` fails when `$GIT_STUB_FAIL_CHECKOUT`
/// is set, like checking out a branch the fork does not have.
#[cfg(unix)]
const STUB_GIT: &str = r#"#!/bin/sh
printf '%s|%s\n' "$(pwd -P)" "$*" >> "$GIT_STUB_LOG"
case "$1" in
  clone) mkdir -p "$3" ;;
  checkout) if [ -n "$GIT_STUB_FAIL_CHECKOUT" ]; then exit 1; fi ;;
esac
exit 0
"#;

#[allow(dead_code)]
pub struct TestContext {
  root: TempDir,
  work_dir: PathBuf,
  bin_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
  pub fn new() -> Self {
    let root = TempDir::new().expect("Failed to create temp directory for tests");
    let work_dir = root.path().join("work");
    let bin_dir = root.path().join("bin");
    fs::create_dir_all(&work_dir).expect("Failed to create work directory");
    fs::create_dir_all(&bin_dir).expect("Failed to create bin directory");

    #[cfg(unix)]
    {
      use std::os::unix::fs::PermissionsExt;
      let git = bin_dir.join("git");
      fs::write(&git, STUB_GIT).expect("Failed to write stub git");
      fs::set_permissions(&git, fs::Permissions::from_mode(0o755))
        .expect("Failed to make stub git executable");
    }

    Self {
      root,
      work_dir,
      bin_dir,
    }
  }

  pub fn work_dir(&self) -> &Path {
    &self.work_dir
  }

  /// Physical path of the work directory, as the stub sees it.
  pub fn canonical_work_dir(&self) -> PathBuf {
    self.work_dir.canonicalize().expect("Failed to canonicalize work dir")
  }

  pub fn log_path(&self) -> PathBuf {
    self.root.path().join("git.log")
  }

  /// Lines written by the stub git, empty if it never ran.
  pub fn git_calls(&self) -> Vec<String> {
    fs::read_to_string(self.log_path())
      .map(|log| log.lines().map(str::to_string).collect())
      .unwrap_or_default()
  }

  /// The binary, run in the work directory with the stub git first on `PATH`
  /// and `MY_TF_REPO_URL` unset.
  pub fn cli(&self) -> Command {
    let path = match env::var_os("PATH") {
      Some(existing) => {
        let mut dirs = vec![self.bin_dir.clone()];
        dirs.extend(env::split_paths(&existing));
        env::join_paths(dirs).expect("Failed to build PATH")
      }
      None => self.bin_dir.clone().into_os_string(),
    };

    let mut cmd = Command::cargo_bin("tf-branch").expect("Failed to locate tf-branch binary");
    cmd
      .current_dir(&self.work_dir)
      .env("PATH", path)
      .env("GIT_STUB_LOG", self.log_path())
      .env_remove("MY_TF_REPO_URL")
      .env_remove("GIT_STUB_FAIL_CHECKOUT")
      .env_remove("RUST_LOG");
    cmd
  }

  pub fn cli_with_fork(&self) -> Command {
    let mut cmd = self.cli();
    cmd.env("MY_TF_REPO_URL", FORK_URL);
    cmd
  }
}
