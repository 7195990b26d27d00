mod errors;
mod insert_script;
mod transaction_table;

use crate::models::TransactionRecord;

pub use errors::StorageError;
pub use insert_script::InsertScript;
pub use transaction_table::TransactionTable;

pub const TABLE_NAME: &str = "bank_transactions";

/// Column order shared by the parameterized insert and the rendered statements.
pub const COLUMNS: [&str; 12] = [
    "id",
    "transaction_date",
    "description",
    "account_number",
    "amount",
    "currency",
    "transaction_type",
    "merchant",
    "balance_after",
    "category",
    "status",
    "reference_number"
];

/// A destination for a run's records. Each sink receives the full sequence exactly once.
pub trait RecordSink {
    /// Writes every record and returns how many were written.
    fn write_all(&mut self, records: &[TransactionRecord]) -> Result<usize, StorageError>;
}
