use std::path::PathBuf;

use chrono::NaiveDate;

use crate::types::Money;

const DEFAULT_ROW_COUNT: usize = 100;
const DEFAULT_SEED: u64 = 42;
const DEFAULT_STARTING_BALANCE: Money = Money::from_cents(500_000);
const DEFAULT_DAY_STEP: u32 = 3;
const DEFAULT_AMOUNT_MIN: f64 = -1500.0;
const DEFAULT_AMOUNT_MAX: f64 = 3000.0;
const DEFAULT_REFERENCE_PREFIX: &str = "REF-";

const DEFAULT_DATABASE_PATH: &str = "bank_transactions.db";
const DEFAULT_SCRIPT_PATH: &str = "bank_transactions_inserts.sql";

/// Inputs to record generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub row_count: usize,
    pub seed: u64,
    pub starting_balance: Money,
    /// Record `i` is dated `start_date + i * day_step` days.
    pub start_date: NaiveDate,
    pub day_step: u32,
    pub amount_min: f64,
    pub amount_max: f64,
    pub reference_prefix: String
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            row_count: DEFAULT_ROW_COUNT,
            seed: DEFAULT_SEED,
            starting_balance: DEFAULT_STARTING_BALANCE,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            day_step: DEFAULT_DAY_STEP,
            amount_min: DEFAULT_AMOUNT_MIN,
            amount_max: DEFAULT_AMOUNT_MAX,
            reference_prefix: DEFAULT_REFERENCE_PREFIX.to_string()
        }
    }
}

/// How the table writer treats rows left over from a previous run.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum WriteMode {
    /// Keep existing rows. Re-inserting an existing id fails on the primary key.
    Append,
    /// Delete existing rows in the same transaction as the insert.
    Replace
}

/// Where the two artifacts are written.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub database_path: PathBuf,
    pub script_path: PathBuf,
    pub write_mode: WriteMode
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            script_path: PathBuf::from(DEFAULT_SCRIPT_PATH),
            write_mode: WriteMode::Replace
        }
    }
}
