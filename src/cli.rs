//! Command line entry point shared by both binaries.

use crate::config::Variant;
use crate::error::{Result, SalesError};
use crate::pipeline::{self, RunSummary};
use std::path::Path;

/// Runs one variant against the arguments that follow the program name.
///
/// Exactly one argument, the input directory, is accepted.
pub fn run<I, S>(args: I, variant: Variant) -> Result<RunSummary>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();
    if args.len() != 1 {
        return Err(SalesError::InvalidArguments);
    }

    let dir: &str = args[0].as_ref();
    let config = variant.config()?;
    pipeline::run(Path::new(dir), &config)
}
