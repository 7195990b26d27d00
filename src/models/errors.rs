use thiserror::Error;

#[derive(Debug, Error)]
#[error("Unknown transaction type [{0}]")]
pub struct UnknownTransactionType(pub String);
