use std::path::PathBuf;

use clap::Parser;

use crate::report::OutputFormat;

/// Block size in bytes, written as a plain number or with a `K`, `M` or `G`
/// suffix (binary multiples).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockSize(pub usize);

impl std::str::FromStr for BlockSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().replace('_', "");
        let lower = s.to_ascii_lowercase();
        let (num_str, multiplier) = split_suffix(&lower);
        let num: usize = num_str
            .trim()
            .parse()
            .map_err(|_| format!("Invalid block size: {s}"))?;
        match num.checked_mul(multiplier) {
            Some(0) => Err("Block size must be greater than zero".to_string()),
            Some(bytes) => Ok(Self(bytes)),
            None => Err(format!("Block size too large: {s}")),
        }
    }
}

fn split_suffix(s: &str) -> (&str, usize) {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    const GB: usize = MB * 1024;
    const SUFFIXES: &[(&[&str], usize)] = &[
        (&["gib", "gb", "g"], GB),
        (&["mib", "mb", "m"], MB),
        (&["kib", "kb", "k"], KB),
        (&["b"], 1),
    ];
    for (suffixes, multiplier) in SUFFIXES {
        for suffix in *suffixes {
            if let Some(num) = s.strip_suffix(suffix) {
                return (num, *multiplier);
            }
        }
    }
    (s, 1)
}

#[derive(Parser, Debug)]
#[command(
    name = "station_stats",
    version,
    about = "Per-station min/max/mean of a `name;measurement` file"
)]
pub struct Config {
    /// Measurements file with one `name;measurement` record per line
    #[arg(env = "INPUT_FILE", default_value = "measurements.txt")]
    pub input: PathBuf,

    /// Bytes read per block; must exceed the longest record
    #[arg(long, default_value = "10M")]
    pub block_size: BlockSize,

    /// Output layout
    #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
    pub format: OutputFormat,
}
