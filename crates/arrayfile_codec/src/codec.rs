use std::{
    fs::{File, OpenOptions},
    io::{BufReader, BufWriter, Read, Seek, SeekFrom, Write},
    path::Path,
};

use crate::{
    error::{Access, CodecError, Error, Field, OpenMode},
    layout::{ELEMENT_SIZE, LENGTH_FIELD_SIZE},
    IntegerArray, Layout,
};

/// Writes `array` to the file at `path` using the default layout. The file is created if it does
/// not exist and truncated if it does.
pub fn encode(path: impl AsRef<Path>, array: &IntegerArray) -> Result<(), Error> {
    encode_with(path, array, Layout::default())
}

/// Writes `array` to the file at `path` using the specified `layout`. The file is created if it
/// does not exist and truncated if it does.
pub fn encode_with(
    path: impl AsRef<Path>,
    array: &IntegerArray,
    layout: Layout,
) -> Result<(), Error> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|source| Error::Open {
            path: path.to_path_buf(),
            mode: OpenMode::Write,
            source,
        })?;
    log::debug!("opened '{}' for writing", path.display());

    let mut writer = BufWriter::new(file);
    write_array(&mut writer, array, layout)
        .and_then(|()| writer.flush().map_err(|source| CodecError::Flush { source }))
        .map_err(|source| Error::Codec {
            path: path.to_path_buf(),
            source,
        })?;

    log::debug!("wrote {} elements to '{}'", array.len(), path.display());
    Ok(())
}

/// Reads an array from the file at `path` using the default layout.
pub fn decode(path: impl AsRef<Path>) -> Result<IntegerArray, Error> {
    decode_with(path, Layout::default())
}

/// Reads an array from the file at `path` using the specified `layout`.
pub fn decode_with(path: impl AsRef<Path>, layout: Layout) -> Result<IntegerArray, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        mode: OpenMode::Read,
        source,
    })?;
    log::debug!("opened '{}' for reading", path.display());

    let array = read_array(&mut BufReader::new(file), layout).map_err(|source| Error::Codec {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("read {} elements from '{}'", array.len(), path.display());
    Ok(array)
}

/// Writes `array` to `writer`.
///
/// The cursor is always moved to the length field first, regardless of its current position.
/// Bytes in front of the length field are left untouched.
pub fn write_array<W: Write + Seek>(
    writer: &mut W,
    array: &IntegerArray,
    layout: Layout,
) -> Result<(), CodecError> {
    seek(writer, layout.length_offset())?;

    writer
        .write_all(&array.len().to_ne_bytes())
        .map_err(|source| CodecError::Io {
            access: Access::Write,
            field: Field::Length,
            source,
        })?;
    log::trace!("wrote length field: {}", array.len());

    for (index, value) in (0u32..).zip(array.iter()) {
        writer
            .write_all(&value.to_ne_bytes())
            .map_err(|source| CodecError::Io {
                access: Access::Write,
                field: Field::Element { index },
                source,
            })?;
        log::trace!("wrote element {index}: {value}");
    }

    Ok(())
}

/// Reads an array from `reader`.
///
/// Storage for the elements is reserved up front based on the length field. If any element cannot
/// be read the partially filled storage is released and an error is returned. The stream must end
/// right after the last element, otherwise [`CodecError::TrailingData`] is returned.
pub fn read_array<R: Read + Seek>(
    reader: &mut R,
    layout: Layout,
) -> Result<IntegerArray, CodecError> {
    seek(reader, layout.length_offset())?;

    let mut length = [0u8; LENGTH_FIELD_SIZE as usize];
    reader
        .read_exact(&mut length)
        .map_err(|source| CodecError::Io {
            access: Access::Read,
            field: Field::Length,
            source,
        })?;
    let length = u32::from_ne_bytes(length);
    log::trace!("read length field: {length}");

    let mut elements = Vec::new();
    elements
        .try_reserve_exact(length as usize)
        .map_err(|source| CodecError::Alloc { length, source })?;

    for index in 0..length {
        let mut element = [0u8; ELEMENT_SIZE as usize];
        reader
            .read_exact(&mut element)
            .map_err(|source| CodecError::Io {
                access: Access::Read,
                field: Field::Element { index },
                source,
            })?;
        elements.push(i64::from_ne_bytes(element));
    }

    // A file written with a different layout reads as a valid prefix followed by leftover bytes
    let mut trailing = Vec::new();
    reader
        .take(1)
        .read_to_end(&mut trailing)
        .map_err(|source| CodecError::Io {
            access: Access::Read,
            field: Field::End,
            source,
        })?;
    if !trailing.is_empty() {
        return Err(CodecError::TrailingData {
            expected_size: layout.file_size(length),
        });
    }

    Ok(IntegerArray::from_vec_unchecked(elements))
}

fn seek<S: Seek>(stream: &mut S, offset: u64) -> Result<(), CodecError> {
    stream
        .seek(SeekFrom::Start(offset))
        .map(|_| ())
        .map_err(|source| CodecError::Seek { offset, source })
}
