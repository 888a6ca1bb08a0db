use arrayfile_codec::{decode_with, encode_with, IntegerArray};

use crate::{config::FileConfig, ExitStatus};

#[derive(clap::Args)]
pub struct Args {
    /// Number of elements in the array
    #[clap(long, short = 'n', default_value_t = 9)]
    length: u32,
}

impl Default for Args {
    fn default() -> Self {
        Self { length: 9 }
    }
}

/// This method is invoked when the executable is run without a subcommand or with the `roundtrip`
/// argument. The array `[1..=length]` is written to the file, read back and compared with the
/// original.
pub fn roundtrip(args: Args, file: FileConfig) -> Result<ExitStatus, anyhow::Error> {
    log::trace!("starting roundtrip of {} elements", args.length);

    let original = IntegerArray::ascending(args.length);

    println!("Writing to '{}'", file.path.display());
    encode_with(&file.path, &original, file.layout)?;
    println!("Write complete");

    println!("Reading from '{}'", file.path.display());
    let decoded = decode_with(&file.path, file.layout)?;
    println!("Read complete");

    Ok(compare(&original, &decoded))
}

/// Reports whether `decoded` holds the same elements as `original`.
fn compare(original: &IntegerArray, decoded: &IntegerArray) -> ExitStatus {
    let identical = original.equals(decoded);
    if identical {
        println!("The arrays are identical");
    } else {
        eprintln!("The arrays are not identical");
    }
    identical.into()
}
