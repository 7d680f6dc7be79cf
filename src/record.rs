use memchr::memchr;

use crate::boundary::{LINE_BREAK, SEPARATOR};
use crate::error::{AggregateError, Result};

/// Single forward pass over a chunk that ends on a line break, yielding the
/// station name and measurement bytes of each record.
///
/// The iterator is fused after the first error.
pub struct Records<'a> {
    remainder: &'a [u8],
}

impl<'a> Records<'a> {
    pub fn new(chunk: &'a [u8]) -> Self {
        Self { remainder: chunk }
    }

    fn read_line(&mut self) -> Result<(&'a [u8], &'a [u8])> {
        let text = std::mem::take(&mut self.remainder);
        let Some(separator) = memchr(SEPARATOR, text) else {
            let line = memchr(LINE_BREAK, text).map_or(text, |end| &text[..end]);
            return Err(AggregateError::MissingSeparator { line: lossy(line) });
        };
        let station_name = &text[..separator];
        if let Some(end) = memchr(LINE_BREAK, station_name) {
            return Err(AggregateError::MissingSeparator {
                line: lossy(&text[..end]),
            });
        }
        let Some(line_break) = memchr(LINE_BREAK, &text[separator + 1..]) else {
            return Err(AggregateError::UnterminatedRecord {
                trailing: lossy(text),
            });
        };
        let line_break = separator + 1 + line_break;
        self.remainder = &text[line_break + 1..];
        Ok((station_name, &text[separator + 1..line_break]))
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = Result<(&'a [u8], &'a [u8])>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remainder.is_empty() {
            return None;
        }
        Some(self.read_line())
    }
}

impl std::iter::FusedIterator for Records<'_> {}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
