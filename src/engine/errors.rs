use thiserror::Error;

use crate::types::{MoneyError, RecordId};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Vocabulary for [{column}] is empty")]
    EmptyVocabulary {
        column: &'static str
    },
    #[error("Vocabulary for [{column}] contains an empty value")]
    EmptyVocabularyEntry {
        column: &'static str
    },
    #[error("Amount bounds [{min}, {max}] must be finite whole cents with min <= max")]
    InvalidAmountBounds {
        min: f64,
        max: f64
    },
    #[error("Row count [{0}] exceeds the id range")]
    TooManyRows(usize),
    #[error("Running balance overflowed at record [{id}]")]
    BalanceOverflow {
        id: RecordId
    },
    #[error("Transaction date overflowed at record [{id}]")]
    DateOverflow {
        id: RecordId
    },
    #[error(transparent)]
    Money(#[from] MoneyError)
}
