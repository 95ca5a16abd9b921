use std::ffi::OsString;

use clap::Parser;

use crate::error::{BranchError, Result};
use crate::issue::IssueId;

const CREATE_FLAG: &str = "-c";

/// Collects the raw tokens. Anything may be an issue id, including `-5`,
/// `-c` or `--help`, so clap's own flags are off and the shape is checked
/// by [`parse_from`].
#[derive(Parser, Debug)]
#[command(
  name = "tf-branch",
  disable_help_flag = true,
  disable_version_flag = true
)]
struct Cli {
  #[arg(
    value_name = "issue #",
    num_args = 0..,
    allow_hyphen_values = true,
    trailing_var_arg = true
  )]
  args: Vec<OsString>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Invocation {
  pub issue: IssueId,
  pub create_branch: bool,
}

/// Parses the full argument vector, program name included.
///
/// Accepts `<issue>` and `-c <issue>` only; any other shape is a
/// [`BranchError::Usage`] carrying the one-line usage message.
pub fn parse_from(argv: &[OsString]) -> Result<Invocation> {
  let program = argv
    .first()
    .map(|p| p.to_string_lossy().into_owned())
    .unwrap_or_else(|| "tf-branch".to_string());

  let cli = Cli::try_parse_from(argv).map_err(|_| usage_error(&program))?;

  // clap swallows a leading `--` as end-of-options; the raw tokens win then.
  let raw = argv.get(1..).unwrap_or_default();
  let args = if cli.args.len() == raw.len() {
    cli.args.as_slice()
  } else {
    raw
  };

  let (issue, create_branch) = match args {
    [issue] => (issue, false),
    [flag, issue] if flag == CREATE_FLAG => (issue, true),
    _ => return Err(usage_error(&program)),
  };

  let issue = issue
    .to_str()
    .ok_or_else(|| usage_error(&program))?;

  Ok(Invocation {
    issue: IssueId::new(issue),
    create_branch,
  })
}

pub fn usage(program: &str) -> String {
  format!("Usage: {program} [-c] <issue #>")
}

fn usage_error(program: &str) -> BranchError {
  BranchError::Usage(usage(program))
}
