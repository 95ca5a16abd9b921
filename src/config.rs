use std::env::VarError;

use crate::error::{BranchError, Result};

pub const FORK_URL_VAR: &str = "MY_TF_REPO_URL";
pub const UPSTREAM_URL: &str = "https://github.com/tensorflow/tensorflow.git";
pub const UPSTREAM_REMOTE: &str = "upstream";

const EXAMPLE_FORK_URL: &str = "https://github.com/frreiss/tensorflow-fred.git";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub fork_url: String,
  pub upstream_url: String,
}

impl Config {
  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|key| std::env::var(key))
  }

  /// Builds the config from an arbitrary variable lookup.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> std::result::Result<String, VarError>,
  {
    let fork_url = match lookup(FORK_URL_VAR) {
      Ok(url) if !url.is_empty() => url,
      Ok(_) | Err(VarError::NotPresent) => return Err(missing_fork_url()),
      Err(VarError::NotUnicode(_)) => {
        return Err(BranchError::Config(format!(
          "{FORK_URL_VAR} is not valid UTF-8"
        )))
      }
    };

    Ok(Self {
      fork_url,
      upstream_url: UPSTREAM_URL.to_string(),
    })
  }
}

fn missing_fork_url() -> BranchError {
  BranchError::Config(format!(
    "please set the environment variable {FORK_URL_VAR} to the URL of your fork \
     of TensorFlow on GitHub, for example: {EXAMPLE_FORK_URL}"
  ))
}
