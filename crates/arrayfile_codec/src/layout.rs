use std::mem::size_of;

/// Size in bytes of the length field of an array file.
pub const LENGTH_FIELD_SIZE: u64 = size_of::<u32>() as u64;

/// Size in bytes of a single element of an array file.
pub const ELEMENT_SIZE: u64 = size_of::<i64>() as u64;

/// Describes where the fields of an array file are located.
///
/// An array file consists of a `u32` length field followed by that many `i64` elements, all in
/// native byte order. The length field starts at [`Layout::length_offset`]; any bytes before it
/// are never written and their content is unspecified.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Layout {
    length_offset: u64,
}

impl Layout {
    /// The length field is stored at the very start of the file.
    pub const COMPACT: Layout = Layout { length_offset: 0 };

    /// The length field is preceded by an unwritten region as large as the length field itself.
    pub const PADDED: Layout = Layout {
        length_offset: LENGTH_FIELD_SIZE,
    };

    /// Constructs a layout whose length field starts at `length_offset`.
    pub const fn with_length_offset(length_offset: u64) -> Self {
        Self { length_offset }
    }

    /// Returns the offset of the length field.
    pub const fn length_offset(&self) -> u64 {
        self.length_offset
    }

    /// Returns the offset of the first element.
    pub const fn elements_offset(&self) -> u64 {
        self.length_offset + LENGTH_FIELD_SIZE
    }

    /// Returns the offset of the element at `index`.
    pub const fn element_offset(&self, index: u32) -> u64 {
        self.elements_offset() + ELEMENT_SIZE * index as u64
    }

    /// Returns the total size of a file holding `length` elements.
    pub const fn file_size(&self, length: u32) -> u64 {
        self.element_offset(length)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::COMPACT
    }
}
