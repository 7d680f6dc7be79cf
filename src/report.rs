use std::io::{self, Write};

use clap::ValueEnum;

use crate::summary::{StationEntry, Summary};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `name=min/max/mean` line per station
    #[default]
    Lines,
    /// All stations on one line: `{a=min/max/mean, b=min/max/mean}`
    Braces,
}

/// Rounds half away from zero to one decimal; `-0.0` becomes `0.0`.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0 + 0.0
}

fn write_station(out: &mut impl Write, station_name: &str, e: &StationEntry) -> io::Result<()> {
    let (min, max, mean) = (
        round_to_tenth(e.min),
        round_to_tenth(e.max),
        round_to_tenth(e.mean()),
    );
    write!(out, "{station_name}={min:.1}/{max:.1}/{mean:.1}")
}

/// Writes the stations sorted by name.
pub fn write_summary(
    out: &mut impl Write,
    summary: Summary,
    format: OutputFormat,
) -> io::Result<()> {
    let summary = summary.into_sorted();
    match format {
        OutputFormat::Lines => {
            for (station_name, entry) in &summary {
                write_station(out, station_name, entry)?;
                out.write_all(b"\n")?;
            }
        }
        OutputFormat::Braces => {
            out.write_all(b"{")?;
            for (i, (station_name, entry)) in summary.iter().enumerate() {
                if i > 0 {
                    out.write_all(b", ")?;
                }
                write_station(out, station_name, entry)?;
            }
            out.write_all(b"}\n")?;
        }
    }
    out.flush()
}
