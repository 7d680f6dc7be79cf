use memchr::memrchr;

use crate::error::{AggregateError, Result};

pub const LINE_BREAK: u8 = b'\n';
pub const SEPARATOR: u8 = b';';

/// Index of the last line break in `block`.
///
/// The scan runs backwards, so its cost is bounded by the length of the
/// trailing partial record rather than by the block.
pub fn find_last_line_break(block: &[u8]) -> Result<usize> {
    memrchr(LINE_BREAK, block).ok_or(AggregateError::NoLineBreak { len: block.len() })
}

/// Splits `block` after its last line break into whole records and the
/// remainder that has to be carried into the next read.
pub fn split_at_last_line_break(block: &[u8]) -> Result<(&[u8], &[u8])> {
    let chunk_end = find_last_line_break(block)?;
    Ok(block.split_at(chunk_end + 1))
}
