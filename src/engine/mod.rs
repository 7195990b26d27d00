mod errors;
mod generator;

pub use errors::GenerationError;
pub use generator::{seeded_rng, RecordGenerator};
