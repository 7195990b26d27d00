mod config;
mod engine;
mod models;
mod storage;
mod types;

use std::io::stderr;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::{GeneratorConfig, OutputConfig};
use crate::engine::{seeded_rng, RecordGenerator};
use crate::models::Vocabularies;
use crate::storage::{InsertScript, RecordSink, TransactionTable};
use crate::types::Money;

fn main() -> Result<()> {
    //NOTE: Row count, seed and paths are fixed. The only argument is an optional log level.
    let log_level = std::env::args().nth(1)
        .map(|s| parse_log_level(&s)).unwrap_or(LevelFilter::INFO);

    setup_logging(log_level);

    let generator_config = GeneratorConfig::default();
    let output_config = OutputConfig::default();

    let timer = Instant::now();
    let final_balance = run(generator_config, Vocabularies::default(), &output_config)?;
    let duration = timer.elapsed();

    info!("Final balance: {final_balance}");
    info!("Generated transactions in: {duration:?}");

    Ok(())
}

/// Generates the records once, then hands the same sequence to both sinks.
fn run(generator_config: GeneratorConfig, vocabularies: Vocabularies, output: &OutputConfig) -> Result<Money> {
    let generator = RecordGenerator::new(generator_config, vocabularies)
        .context("Invalid generator configuration")?;
    let seed = generator.config().seed;

    let records = generator.generate(&mut seeded_rng(seed))
        .context("Record generation failed")?;

    info!("Generated {} records with seed {seed}", records.len());

    let database = output.database_path.display();
    let mut table = TransactionTable::open(&output.database_path, output.write_mode)
        .with_context(|| format!("Could not open database at {database}"))?;

    table.create_if_absent().with_context(|| format!("Could not create bank_transactions in {database}"))?;

    let inserted = table.write_all(&records).with_context(|| format!("Could not insert records into {database}"))?;
    let stored = table.load_all().with_context(|| format!("Could not read back bank_transactions from {database}"))?;

    //NOTE: In append mode rows from earlier runs come first, the new run is the tail
    if !stored.ends_with(&records) {
        bail!("Rows read back from {database} do not match the generated records");
    }

    let total = table.count().with_context(|| format!("Could not count rows in {database}"))?;
    info!("Inserted {inserted} rows into {database} ({total} rows total)");

    table.close().with_context(|| format!("Could not close database at {database}"))?;

    let mut script = InsertScript::new(&output.script_path);
    let written = script.write_all(&records)
        .with_context(|| format!("Could not write insert statements to {}", script.path().display()))?;

    info!("Wrote {written} insert statements to {}", script.path().display());

    Ok(records.last().map_or(generator.config().starting_balance, |record| record.balance_after))
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", level);
            LevelFilter::INFO
        }
    }
}

fn setup_logging(level: LevelFilter) {
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
