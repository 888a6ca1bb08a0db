//! Reading and writing of array files: a `u32` element count followed by that many `i64`
//! elements, all stored in native byte order.
//!
//! ```no_run
//! use arrayfile_codec::{decode, encode, IntegerArray};
//!
//! let array = IntegerArray::ascending(9);
//! encode("numbers.bin", &array)?;
//! assert_eq!(decode("numbers.bin")?, array);
//! # Ok::<(), arrayfile_codec::Error>(())
//! ```

mod array;
mod codec;
mod error;
mod layout;

pub use crate::{
    array::{equals, IntegerArray},
    codec::{decode, decode_with, encode, encode_with, read_array, write_array},
    error::{Access, CodecError, Error, FailureClass, Field, OpenMode},
    layout::{Layout, ELEMENT_SIZE, LENGTH_FIELD_SIZE},
};
