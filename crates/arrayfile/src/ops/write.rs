use std::convert::TryFrom;

use arrayfile_codec::{encode_with, IntegerArray};

use crate::{config::FileConfig, ExitStatus};

#[derive(clap::Args)]
pub struct Args {
    /// The elements to write, in order
    #[clap(allow_negative_numbers = true)]
    values: Vec<i64>,
}

/// This method is invoked when the executable is run with the `write` argument indicating that a
/// user requested us to store the given integers.
pub fn write(args: Args, file: FileConfig) -> Result<ExitStatus, anyhow::Error> {
    let array = IntegerArray::try_from(args.values)?;
    encode_with(&file.path, &array, file.layout)?;
    println!("Wrote {} elements to '{}'", array.len(), file.path.display());
    Ok(ExitStatus::Success)
}
