use std::path::{Path, PathBuf};

/// Issue identifier as typed on the command line. Used verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueId(String);

impl IssueId {
  pub fn new(id: impl Into<String>) -> Self {
    Self(id.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn dir_name(&self) -> String {
    format!("tf-{}", self.0)
  }

  pub fn branch_name(&self) -> String {
    format!("issue-{}", self.0)
  }

  pub fn clone_path(&self, base_dir: &Path) -> PathBuf {
    base_dir.join(self.dir_name())
  }
}

impl std::fmt::Display for IssueId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}
