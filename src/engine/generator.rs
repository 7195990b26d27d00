use chrono::Days;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::engine::GenerationError;
use crate::models::{TransactionRecord, TransactionType, Vocabularies};
use crate::types::{Money, RecordId};

const REFERENCE_MIN: u32 = 100_000;
const REFERENCE_MAX: u32 = 999_999;

/// Creates the generator every run samples from. Nothing in the crate uses a global RNG.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// The random part of one record, drawn in a fixed order.
///
/// Keeping the draws apart from ids, dates and balances means the derived fields can be
/// checked against hand-picked draws without steering the RNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraw {
    pub merchant: String,
    pub description: String,
    pub account_number: String,
    pub currency: String,
    pub transaction_type: TransactionType,
    pub category: String,
    pub status: String,
    pub amount: Money,
    pub reference_number: String
}

impl RecordDraw {
    /// Samples every random field of a record.
    ///
    /// The call order is part of the output: reordering the draws changes every record
    /// produced under the same seed.
    pub fn sample<R: Rng>(rng: &mut R, vocabularies: &Vocabularies, config: &GeneratorConfig) -> Result<Self, GenerationError> {
        let merchant = pick(rng, &vocabularies.merchants, "merchant")?;
        let description = pick(rng, &vocabularies.descriptions, "description")?;
        let account_number = pick(rng, &vocabularies.accounts, "account_number")?;
        let currency = pick(rng, &vocabularies.currencies, "currency")?;
        let transaction_type = *vocabularies.transaction_types.choose(rng)
            .ok_or(GenerationError::EmptyVocabulary { column: "transaction_type" })?;
        let category = pick(rng, &vocabularies.categories, "category")?;
        let status = pick(rng, &vocabularies.statuses, "status")?;
        let amount = Money::round_from_f64(rng.gen_range(config.amount_min..=config.amount_max))?;
        let reference_number = format!("{}{}", config.reference_prefix, rng.gen_range(REFERENCE_MIN..=REFERENCE_MAX));

        Ok(Self {
            merchant,
            description,
            account_number,
            currency,
            transaction_type,
            category,
            status,
            amount,
            reference_number
        })
    }
}

fn pick<R: Rng>(rng: &mut R, vocabulary: &[String], column: &'static str) -> Result<String, GenerationError> {
    vocabulary.choose(rng).cloned()
        .ok_or(GenerationError::EmptyVocabulary { column })
}

/// Produces the ordered record sequence for one run.
#[derive(Debug, Clone)]
pub struct RecordGenerator {
    config: GeneratorConfig,
    vocabularies: Vocabularies
}

impl RecordGenerator {
    /// Validates the inputs once so generation itself cannot hit an empty vocabulary.
    pub fn new(config: GeneratorConfig, vocabularies: Vocabularies) -> Result<Self, GenerationError> {
        if RecordId::try_from(config.row_count).is_err() {
            return Err(GenerationError::TooManyRows(config.row_count));
        }

        if !is_whole_cents(config.amount_min) || !is_whole_cents(config.amount_max) || config.amount_min > config.amount_max {
            return Err(GenerationError::InvalidAmountBounds { min: config.amount_min, max: config.amount_max });
        }

        for (column, values) in vocabularies.textual() {
            if values.is_empty() {
                return Err(GenerationError::EmptyVocabulary { column });
            }

            if values.iter().any(|value| value.is_empty()) {
                return Err(GenerationError::EmptyVocabularyEntry { column });
            }
        }

        if vocabularies.transaction_types.is_empty() {
            return Err(GenerationError::EmptyVocabulary { column: "transaction_type" });
        }

        Ok(Self { config, vocabularies })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates `row_count` records, drawing from `rng` in record order.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Vec<TransactionRecord>, GenerationError> {
        let draws = (0..self.config.row_count)
            .map(|_| RecordDraw::sample(rng, &self.vocabularies, &self.config))
            .collect::<Result<Vec<_>, _>>()?;

        let records = self.assemble(draws)?;
        debug!("Generated {} records", records.len());

        Ok(records)
    }

    /// Turns draws into records, assigning ids from 1, dates from the day step and the
    /// running balance from the starting balance.
    pub fn assemble<I>(&self, draws: I) -> Result<Vec<TransactionRecord>, GenerationError>
    where
        I: IntoIterator<Item = RecordDraw>
    {
        let mut balance = self.config.starting_balance;
        let mut records = Vec::new();

        for (index, draw) in draws.into_iter().enumerate() {
            let id = RecordId::try_from(index + 1)
                .map_err(|_| GenerationError::TooManyRows(index + 1))?;

            let offset = u64::from(id) * u64::from(self.config.day_step);
            let transaction_date = self.config.start_date.checked_add_days(Days::new(offset))
                .ok_or(GenerationError::DateOverflow { id })?;

            balance = balance.checked_add(draw.amount)
                .ok_or(GenerationError::BalanceOverflow { id })?;

            records.push(TransactionRecord {
                id,
                transaction_date,
                description: draw.description,
                account_number: draw.account_number,
                amount: draw.amount,
                currency: draw.currency,
                transaction_type: draw.transaction_type,
                merchant: draw.merchant,
                balance_after: balance,
                category: draw.category,
                status: draw.status,
                reference_number: draw.reference_number
            });
        }

        Ok(records)
    }
}

fn is_whole_cents(value: f64) -> bool {
    Money::round_from_f64(value).is_ok_and(|money| money.to_f64() == value)
}
