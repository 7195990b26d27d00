use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoneyError {
    #[error("Money error: {0}")]
    InvalidFormat(String),
    #[error("Money error: {0}")]
    ParseInt(#[from] ParseIntError),
    #[error("Money error: {0} is not a finite amount")]
    NotFinite(f64),
    #[error("Money error: Overflow")]
    Overflow
}
