use std::io::Write;

use clap::Parser;
use stockroom_catalog::Catalog;
use stockroom_demo::{seed, walkthrough};
use stockroom_observability::LogFormat;

/// Load the grocery store sample catalog and exercise its operations.
#[derive(Debug, Parser)]
#[command(name = "stockroom-demo", version)]
struct Args {
    /// Only load the sample data; skip the scripted walkthrough.
    #[arg(long)]
    skip_walkthrough: bool,

    /// Print the final catalog as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Log output format (`json` or `pretty`).
    #[arg(long, default_value = "pretty", value_parser = parse_format)]
    log_format: LogFormat,
}

fn parse_format(s: &str) -> Result<LogFormat, String> {
    s.parse()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    stockroom_observability::init_with(args.log_format);

    let mut catalog = Catalog::new();
    let report = seed::load(&mut catalog)?;
    tracing::info!(
        categories = report.categories.len(),
        products = report.products.len(),
        elapsed_us = report.total().as_micros() as u64,
        "sample data loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if !args.skip_walkthrough {
        walkthrough::run(&mut catalog, &mut out)?;
    }

    if args.json {
        serde_json::to_writer_pretty(&mut out, &catalog.snapshot())?;
        writeln!(out)?;
    } else {
        writeln!(out, "== Inventory")?;
        write!(out, "{catalog}")?;
    }
    Ok(())
}
