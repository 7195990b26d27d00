mod errors;
mod record;
#[cfg(test)]
mod tests;
mod vocabulary;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub use errors::UnknownTransactionType;
pub use record::TransactionRecord;
pub use vocabulary::Vocabularies;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TransactionType {
    Debit,
    Credit,
    Transfer
}

impl TransactionType {
    pub const ALL: [TransactionType; 3] = [
        TransactionType::Debit,
        TransactionType::Credit,
        TransactionType::Transfer
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Debit => "debit",
            TransactionType::Credit => "credit",
            TransactionType::Transfer => "transfer"
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = UnknownTransactionType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        TransactionType::ALL.into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| UnknownTransactionType(value.to_string()))
    }
}
