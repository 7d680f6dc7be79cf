use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use crate::error::{AggregateError, Result};

/// Sequential producer of fixed-size blocks.
pub trait ByteSource {
    /// Appends up to `len` bytes to `buf` and returns how many were added.
    ///
    /// Fewer than `len` bytes are returned only when the input ends, so a
    /// short block is the last non-empty one.
    fn read_block(&mut self, buf: &mut Vec<u8>, len: usize) -> Result<usize>;
}

/// Adapts any [`Read`] into a [`ByteSource`].
pub struct ReadSource<R> {
    reader: R,
    name: PathBuf,
}

impl<R: Read> ReadSource<R> {
    /// `name` only labels I/O errors.
    pub fn new(reader: R, name: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            name: name.into(),
        }
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn read_block(&mut self, buf: &mut Vec<u8>, len: usize) -> Result<usize> {
        (&mut self.reader)
            .take(len as u64)
            .read_to_end(buf)
            .map_err(|source| AggregateError::io(&self.name, source))
    }
}

pub struct FileSource {
    inner: ReadSource<File>,
    file_size: u64,
}

impl FileSource {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(AggregateError::InputNotFound {
                path: path.to_path_buf(),
            });
        }
        let file = File::open(path).map_err(|source| AggregateError::io(path, source))?;
        let file_size = file
            .metadata()
            .map_err(|source| AggregateError::io(path, source))?
            .len();
        Ok(Self {
            inner: ReadSource::new(file, path),
            file_size,
        })
    }

    /// Size reported by the file system when the file was opened.
    pub fn file_size(&self) -> u64 {
        self.file_size
    }
}

impl ByteSource for FileSource {
    fn read_block(&mut self, buf: &mut Vec<u8>, len: usize) -> Result<usize> {
        self.inner.read_block(buf, len)
    }
}
