mod errors;
mod money;

pub use errors::MoneyError;
pub use money::Money;

pub type RecordId = u32;
