use std::io::BufWriter;

use anyhow::Context;
use clap::Parser;
use station_stats::{aggregate_file, config::Config, report::write_summary};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // stdout carries the result, diagnostics go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "station_stats=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::parse();
    tracing::debug!(?config, "starting");

    let summary = aggregate_file(&config.input, config.block_size.0)
        .with_context(|| format!("failed to aggregate '{}'", config.input.display()))?;

    let mut out = BufWriter::new(std::io::stdout().lock());
    write_summary(&mut out, summary, config.format).context("failed to write the summary")?;
    Ok(())
}
