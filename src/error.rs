use std::path::PathBuf;

use crate::workflow::Step;

#[derive(Debug, thiserror::Error)]
pub enum BranchError {
  #[error("usage error: {0}")]
  Usage(String),

  #[error("config error: {0}")]
  Config(String),

  #[error("git {step} failed: {details}")]
  Git { step: Step, details: String },

  #[error("clone directory not found after clone: {0}")]
  MissingClone(PathBuf),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

impl BranchError {
  /// Process exit status for this error.
  pub fn exit_code(&self) -> i32 {
    match self {
      BranchError::Usage(_) => 2,
      _ => 1,
    }
  }
}

pub type Result<T> = std::result::Result<T, BranchError>;
