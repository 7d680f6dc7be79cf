use std::path::Path;

use tracing::{debug, info, trace};

use crate::{
    boundary::{LINE_BREAK, find_last_line_break},
    error::{AggregateError, Result},
    measurement::parse_measurement,
    record::Records,
    size::format_byte_count,
    source::{ByteSource, FileSource},
    summary::Summary,
};

pub const DEFAULT_BLOCK_SIZE: usize = 10 * 1024 * 1024;

/// Counters of one aggregation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AggregateStats {
    pub blocks: u64,
    pub bytes: u64,
    pub records: u64,
}

/// Reads a [`ByteSource`] block by block and folds every record into a
/// [`Summary`].
///
/// The bytes after the last line break of a block are kept at the front of
/// the buffer and completed by the next read, so records never straddle
/// two parse passes. Every full block must contain at least one line break.
pub struct Aggregator {
    block_size: usize,
    summary: Summary,
    stats: AggregateStats,
}

impl Aggregator {
    /// A block size of zero is treated as one byte.
    pub fn new(block_size: usize) -> Self {
        Self {
            block_size: block_size.max(1),
            summary: Summary::with_capacity(1024),
            stats: AggregateStats::default(),
        }
    }

    pub fn run<S: ByteSource + ?Sized>(
        mut self,
        source: &mut S,
    ) -> Result<(Summary, AggregateStats)> {
        // grown by the reads, never reserved up front from `block_size`
        let mut buffer = Vec::new();
        loop {
            let carried = buffer.len();
            let read = source.read_block(&mut buffer, self.block_size)?;
            if read == 0 {
                break;
            }
            self.stats.blocks += 1;
            self.stats.bytes += read as u64;
            trace!(block = self.stats.blocks, read, carried, "read block");

            let chunk_end = match find_last_line_break(&buffer) {
                Ok(line_break) => line_break + 1,
                // short block: the input ended inside the last record
                Err(AggregateError::NoLineBreak { .. }) if read < self.block_size => continue,
                Err(err) => {
                    // a full block can still be the last one
                    if source.read_block(&mut buffer, 1)? == 0 {
                        break;
                    }
                    return Err(err);
                }
            };
            self.process_chunk(&buffer[..chunk_end])?;
            buffer.drain(..chunk_end);
        }

        if !buffer.is_empty() {
            debug!(bytes = buffer.len(), "last record has no trailing line break");
            buffer.push(LINE_BREAK);
            self.process_chunk(&buffer)?;
        }
        Ok((self.summary, self.stats))
    }

    fn process_chunk(&mut self, chunk: &[u8]) -> Result<()> {
        for record in Records::new(chunk) {
            let (station_name, measurement) = record?;
            self.summary.fold(station_name, parse_measurement(measurement)?);
            self.stats.records += 1;
        }
        Ok(())
    }
}

/// Aggregates everything `source` yields, reading `block_size` bytes at a time.
pub fn aggregate<S: ByteSource + ?Sized>(source: &mut S, block_size: usize) -> Result<Summary> {
    let (summary, stats) = Aggregator::new(block_size).run(source)?;
    debug!(
        blocks = stats.blocks,
        bytes = stats.bytes,
        records = stats.records,
        stations = summary.len(),
        "aggregation finished"
    );
    Ok(summary)
}

pub fn aggregate_file(path: &Path, block_size: usize) -> Result<Summary> {
    let mut source = FileSource::open(path)?;
    info!(path = %path.display(), "File is: {}", format_byte_count(source.file_size()));
    aggregate(&mut source, block_size)
}
