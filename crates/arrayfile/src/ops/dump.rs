use std::io::{self, Write};

use arrayfile_codec::{decode_with, IntegerArray};

use crate::{config::FileConfig, ExitStatus};

#[derive(clap::Args)]
pub struct Args {}

/// Reads the array file and prints its length followed by one element per line.
pub fn dump(_args: Args, file: FileConfig) -> Result<ExitStatus, anyhow::Error> {
    let array = decode_with(&file.path, file.layout)?;
    print_array(&mut io::stdout().lock(), &array)?;
    Ok(ExitStatus::Success)
}

fn print_array(out: &mut impl Write, array: &IntegerArray) -> io::Result<()> {
    writeln!(out, "length: {}", array.len())?;
    for value in array {
        writeln!(out, "{value}")?;
    }
    Ok(())
}
