use std::{collections::TryReserveError, fmt, io, path::PathBuf};

use thiserror::Error;

/// The class of a failure. Every error maps onto exactly one class which determines the exit
/// status of a process that gives up on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FailureClass {
    /// The file could not be opened in the requested mode
    Open,
    /// The cursor could not be positioned
    Seek,
    /// A read or write transferred fewer bytes than requested
    Io,
    /// Storage for the elements could not be allocated
    Alloc,
    /// Anything else
    Generic,
}

impl FailureClass {
    /// Returns the process exit status associated with this class.
    pub fn exit_code(self) -> i32 {
        match self {
            FailureClass::Open | FailureClass::Alloc | FailureClass::Generic => 1,
            FailureClass::Seek => 2,
            FailureClass::Io => 3,
        }
    }
}

/// The mode in which an array file is opened.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpenMode {
    Read,
    Write,
}

impl fmt::Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenMode::Read => write!(f, "reading"),
            OpenMode::Write => write!(f, "writing"),
        }
    }
}

/// The direction of a failed data transfer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Read => write!(f, "read"),
            Access::Write => write!(f, "write"),
        }
    }
}

/// The field of an array file that was being transferred.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
    Length,
    Element { index: u32 },
    End,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Length => write!(f, "length field"),
            Field::Element { index } => write!(f, "element {index}"),
            Field::End => write!(f, "end of the file"),
        }
    }
}

/// An error that occurs while transferring an array from or to a stream.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to position the cursor at offset {offset}")]
    Seek { offset: u64, source: io::Error },
    #[error("failed to {access} the {field}")]
    Io {
        access: Access,
        field: Field,
        source: io::Error,
    },
    #[error("failed to flush written data")]
    Flush { source: io::Error },
    #[error("found data past the last element, which ends at offset {expected_size}")]
    TrailingData { expected_size: u64 },
    #[error("failed to allocate storage for {length} elements")]
    Alloc {
        length: u32,
        source: TryReserveError,
    },
}

impl CodecError {
    /// Returns the class of this failure.
    pub fn class(&self) -> FailureClass {
        match self {
            CodecError::Seek { .. } => FailureClass::Seek,
            CodecError::Io { .. } | CodecError::Flush { .. } | CodecError::TrailingData { .. } => {
                FailureClass::Io
            }
            CodecError::Alloc { .. } => FailureClass::Alloc,
        }
    }
}

/// An error that occurs while encoding or decoding an array file.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not open '{}' for {mode}", .path.display())]
    Open {
        path: PathBuf,
        mode: OpenMode,
        source: io::Error,
    },
    #[error("array file '{}'", .path.display())]
    Codec { path: PathBuf, source: CodecError },
    #[error("an array of {len} elements does not fit the length field")]
    LengthOverflow { len: usize },
}

impl Error {
    /// Returns the class of this failure.
    pub fn class(&self) -> FailureClass {
        match self {
            Error::Open { .. } => FailureClass::Open,
            Error::Codec { source, .. } => source.class(),
            Error::LengthOverflow { .. } => FailureClass::Generic,
        }
    }
}
