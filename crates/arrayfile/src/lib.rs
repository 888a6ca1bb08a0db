mod config;
mod ops;

use std::ffi::OsString;

use clap::{Parser, Subcommand};
use config::FileArgs;
use ops::{dump, roundtrip, write};

pub use config::{DEFAULT_PATH, LAYOUT_VAR, PATH_VAR};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(flatten)]
    file: FileArgs,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Writes an ascending array, reads it back and compares both (default)
    Roundtrip(roundtrip::Args),

    /// Writes the specified integers to an array file
    Write(write::Args),

    /// Prints the contents of an array file
    Dump(dump::Args),
}

#[derive(Copy, Debug, Clone, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<bool> for ExitStatus {
    fn from(value: bool) -> Self {
        if value {
            ExitStatus::Success
        } else {
            ExitStatus::Error
        }
    }
}

pub fn run_with_args<T, I>(args: I) -> Result<ExitStatus, anyhow::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::parse_from(args);
    let file = args.file.resolve();
    match args.command {
        None => roundtrip::roundtrip(roundtrip::Args::default(), file),
        Some(Command::Roundtrip(args)) => roundtrip::roundtrip(args, file),
        Some(Command::Write(args)) => write::write(args, file),
        Some(Command::Dump(args)) => dump::dump(args, file),
    }
}

/// Returns the process exit code for the outcome of [`run_with_args`].
///
/// Failures of the array file codec map onto the exit code of their class; any other error
/// results in `1`.
pub fn exit_code(result: &Result<ExitStatus, anyhow::Error>) -> i32 {
    match result {
        Ok(ExitStatus::Success) => 0,
        Ok(ExitStatus::Error) => 1,
        Err(err) => err
            .downcast_ref::<arrayfile_codec::Error>()
            .map_or(1, |err| err.class().exit_code()),
    }
}
