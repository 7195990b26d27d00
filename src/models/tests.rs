use super::{TransactionRecord, TransactionType, Vocabularies};

use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::types::Money;

#[test]
fn test_transaction_type_renders_lowercase_names() {
    let rendered: Vec<String> = TransactionType::ALL.iter().map(|kind| kind.to_string()).collect();

    assert_eq!(rendered, vec!["debit", "credit", "transfer"]);
}

#[test]
fn test_default_vocabularies_are_populated_and_non_empty() {
    let vocabularies = Vocabularies::default();

    for (column, values) in vocabularies.textual() {
        assert!(!values.is_empty(), "{column} vocabulary is empty");
        assert!(values.iter().all(|value| !value.is_empty()), "{column} vocabulary has an empty entry");
    }

    assert_eq!(vocabularies.descriptions.len(), 12);
    assert_eq!(vocabularies.merchants.len(), 10);
    assert_eq!(vocabularies.accounts.len(), 5);
    assert_eq!(vocabularies.currencies, vec!["USD", "EUR", "GBP", "CAD"]);
    assert_eq!(vocabularies.transaction_types.len(), 3);
    assert_eq!(vocabularies.categories.len(), 8);
    assert_eq!(vocabularies.statuses, vec!["completed", "pending", "failed"]);
}

#[test]
fn test_record_formats_date_as_iso_text() -> Result<()> {
    let record = TransactionRecord {
        id: 1,
        transaction_date: NaiveDate::from_ymd_opt(2024, 1, 4).ok_or_else(|| anyhow!("invalid date"))?,
        description: "Refund".to_string(),
        account_number: "ACCT-1083-983".to_string(),
        amount: Money::from_str("120.50")?,
        currency: "USD".to_string(),
        transaction_type: TransactionType::Credit,
        merchant: "Pioneer Tech".to_string(),
        balance_after: Money::from_str("5120.50")?,
        category: "salary".to_string(),
        status: "completed".to_string(),
        reference_number: "REF-123456".to_string()
    };

    assert_eq!(record.date_text(), "2024-01-04");

    Ok(())
}

#[test]
fn test_transaction_type_parses_its_own_names() -> Result<()> {
    for kind in TransactionType::ALL {
        assert_eq!(TransactionType::from_str(kind.as_str())?, kind);
    }

    assert!(TransactionType::from_str("Debit").is_err());
    assert!(TransactionType::from_str("refund").is_err());

    Ok(())
}
