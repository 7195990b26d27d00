use chrono::NaiveDate;

use crate::models::TransactionType;
use crate::types::{Money, RecordId};

/// A single synthetic bank transaction, one row of `bank_transactions`.
///
/// Records are produced once per run and never mutated afterwards. Both the table writer
/// and the insert script read from the same values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    /// Dense sequence id starting at 1.
    pub id: RecordId,
    pub transaction_date: NaiveDate,
    pub description: String,
    pub account_number: String,
    /// Signed amount applied to the running balance.
    pub amount: Money,
    pub currency: String,
    pub transaction_type: TransactionType,
    pub merchant: String,
    /// Running balance after `amount` has been applied.
    pub balance_after: Money,
    pub category: String,
    pub status: String,
    pub reference_number: String
}

impl TransactionRecord {
    /// ISO-8601 calendar date, as stored in the TEXT column.
    pub fn date_text(&self) -> String {
        self.transaction_date.format("%Y-%m-%d").to_string()
    }
}
