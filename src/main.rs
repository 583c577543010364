use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod aggregate;
mod date;
mod error;
mod ingest;
mod models;
mod record;
mod report;

use ingest::IngestOptions;
use record::HoursPolicy;

const USAGE: &str = "Usage: kala <csv filename>";

#[derive(Parser)]
#[command(name = "kala")]
#[command(about = "Summarise IZIN and GHOIB absences per person from an attendance CSV", long_about = None)]
struct Cli {
    /// Attendance CSV with columns date, name, class, hours, category
    file: Option<PathBuf>,
    /// Treat the first row as a header and print it before the summary
    #[arg(long)]
    header: bool,
    /// How to handle an hours value that is not an integer
    #[arg(long, value_enum, default_value_t = HoursPolicy::Strict)]
    hours_policy: HoursPolicy,
    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level);

    let stdout = std::io::stdout();
    run(&cli, &mut stdout.lock())
}

fn setup_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let Some(path) = cli.file.as_deref() else {
        writeln!(out, "{USAGE}")?;
        return Ok(());
    };

    let options = IngestOptions {
        has_header: cli.header,
        hours_policy: cli.hours_policy,
    };
    tracing::info!(path = %path.display(), ?options, "reading attendance file");

    let records = ingest::read_path_with_header(path, &options, |header| {
        writeln!(out, "{}", report::header_preview(header))?;
        Ok(())
    })
    .with_context(|| format!("could not process {}", path.display()))?;

    let index = aggregate::aggregate(&records);
    if index.is_empty() {
        tracing::warn!(path = %path.display(), "no attendance rows found");
    } else {
        tracing::info!(people = index.len(), "aggregated absences");
    }

    write!(out, "{}", report::build_report(records.len(), &index))?;
    Ok(())
}
