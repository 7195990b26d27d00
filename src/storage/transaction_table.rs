use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use rusqlite::{params, Connection};
use tracing::debug;

use crate::config::WriteMode;
use crate::models::{TransactionRecord, TransactionType};
use crate::storage::{RecordSink, StorageError};
use crate::types::{Money, RecordId};

const CREATE_TABLE_SQL: &str = "
CREATE TABLE IF NOT EXISTS bank_transactions (
    id INTEGER PRIMARY KEY,
    transaction_date TEXT NOT NULL,
    description TEXT NOT NULL,
    account_number TEXT NOT NULL,
    amount REAL NOT NULL,
    currency TEXT NOT NULL,
    transaction_type TEXT NOT NULL,
    merchant TEXT NOT NULL,
    balance_after REAL NOT NULL,
    category TEXT NOT NULL,
    status TEXT NOT NULL,
    reference_number TEXT NOT NULL
);
";

const INSERT_SQL: &str = "
INSERT INTO bank_transactions (
    id,
    transaction_date,
    description,
    account_number,
    amount,
    currency,
    transaction_type,
    merchant,
    balance_after,
    category,
    status,
    reference_number
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
";

const SELECT_ALL_SQL: &str = "
SELECT id, transaction_date, description, account_number, amount, currency,
       transaction_type, merchant, balance_after, category, status, reference_number
FROM bank_transactions
ORDER BY id
";

/// The `bank_transactions` table behind a single SQLite connection.
///
/// The connection lives exactly as long as this value, so it is closed on every exit
/// path once the table goes out of scope.
pub struct TransactionTable {
    connection: Connection,
    write_mode: WriteMode
}

impl TransactionTable {
    /// Opens (or creates) the database file at `path`.
    pub fn open(path: &Path, write_mode: WriteMode) -> Result<Self, StorageError> {
        let connection = Connection::open(path)?;
        debug!("Opened SQLite database at {}", path.display());

        Ok(Self { connection, write_mode })
    }

    pub fn in_memory(write_mode: WriteMode) -> Result<Self, StorageError> {
        Ok(Self {
            connection: Connection::open_in_memory()?,
            write_mode
        })
    }

    /// Creates `bank_transactions` unless it already exists.
    pub fn create_if_absent(&self) -> Result<(), StorageError> {
        self.connection.execute_batch(CREATE_TABLE_SQL)?;

        Ok(())
    }

    pub fn count(&self) -> Result<u64, StorageError> {
        let count: i64 = self.connection.query_row("SELECT COUNT(*) FROM bank_transactions", [], |row| row.get(0))?;

        Ok(count.max(0) as u64)
    }

    /// Reads every stored row back as a record, ordered by id.
    pub fn load_all(&self) -> Result<Vec<TransactionRecord>, StorageError> {
        let mut statement = self.connection.prepare(SELECT_ALL_SQL)?;
        let rows = statement.query_map([], |row| {
            Ok(StoredRow {
                id: row.get(0)?,
                transaction_date: row.get(1)?,
                description: row.get(2)?,
                account_number: row.get(3)?,
                amount: row.get(4)?,
                currency: row.get(5)?,
                transaction_type: row.get(6)?,
                merchant: row.get(7)?,
                balance_after: row.get(8)?,
                category: row.get(9)?,
                status: row.get(10)?,
                reference_number: row.get(11)?
            })
        })?;

        let mut records = Vec::new();

        for row in rows {
            records.push(row?.into_record()?);
        }

        Ok(records)
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Closes the connection, surfacing any error SQLite reports while doing so.
    pub fn close(self) -> Result<(), StorageError> {
        self.connection.close().map_err(|(_, error)| StorageError::Sqlite(error))
    }
}

impl RecordSink for TransactionTable {
    /// Inserts all records in one SQLite transaction with bound parameters.
    ///
    /// Nothing is committed unless every insert succeeds; dropping the uncommitted
    /// transaction rolls it back.
    fn write_all(&mut self, records: &[TransactionRecord]) -> Result<usize, StorageError> {
        let transaction = self.connection.transaction()?;

        if self.write_mode == WriteMode::Replace {
            let removed = transaction.execute("DELETE FROM bank_transactions", [])?;
            debug!("Removed {removed} rows from a previous run");
        }

        {
            let mut statement = transaction.prepare(INSERT_SQL)?;

            for record in records {
                statement.execute(params![
                    record.id,
                    record.date_text(),
                    record.description,
                    record.account_number,
                    record.amount.to_f64(),
                    record.currency,
                    record.transaction_type.as_str(),
                    record.merchant,
                    record.balance_after.to_f64(),
                    record.category,
                    record.status,
                    record.reference_number
                ])?;
            }
        }

        transaction.commit()?;

        Ok(records.len())
    }
}

struct StoredRow {
    id: RecordId,
    transaction_date: String,
    description: String,
    account_number: String,
    amount: f64,
    currency: String,
    transaction_type: String,
    merchant: String,
    balance_after: f64,
    category: String,
    status: String,
    reference_number: String
}

impl StoredRow {
    fn into_record(self) -> Result<TransactionRecord, StorageError> {
        let id = self.id;
        let invalid = |reason: String| StorageError::InvalidRow { id, reason };

        let transaction_date = NaiveDate::parse_from_str(&self.transaction_date, "%Y-%m-%d")
            .map_err(|error| invalid(format!("transaction_date: {error}")))?;
        let transaction_type = TransactionType::from_str(&self.transaction_type)
            .map_err(|error| invalid(error.to_string()))?;
        let amount = Money::round_from_f64(self.amount)
            .map_err(|error| invalid(format!("amount: {error}")))?;
        let balance_after = Money::round_from_f64(self.balance_after)
            .map_err(|error| invalid(format!("balance_after: {error}")))?;

        Ok(TransactionRecord {
            id,
            transaction_date,
            description: self.description,
            account_number: self.account_number,
            amount,
            currency: self.currency,
            transaction_type,
            merchant: self.merchant,
            balance_after,
            category: self.category,
            status: self.status,
            reference_number: self.reference_number
        })
    }
}
