//! Streaming per-station min/max/mean aggregation.
//!
//! The input is read in fixed-size blocks; each block is cut after its last
//! line break, the whole records before the cut are parsed straight from the
//! bytes and folded into a [`Summary`], and the tail is carried into the next
//! read.

pub mod boundary;
pub mod config;
pub mod driver;
pub mod error;
pub mod measurement;
pub mod record;
pub mod report;
pub mod size;
pub mod source;
pub mod summary;

pub use driver::{AggregateStats, Aggregator, DEFAULT_BLOCK_SIZE, aggregate, aggregate_file};
pub use error::{AggregateError, Result};
pub use source::{ByteSource, FileSource, ReadSource};
pub use summary::{StationEntry, StationName, Summary};
