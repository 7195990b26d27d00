use crate::models::TransactionType;

const DESCRIPTIONS: [&str; 12] = [
    "Subscription fee",
    "Card payment",
    "Transfer from savings",
    "Online purchase",
    "Cash deposit",
    "Wire out",
    "Salary posting",
    "Refund",
    "Investment transfer",
    "Mortgage payment",
    "Utility bill",
    "Insurance premium"
];

const MERCHANTS: [&str; 10] = [
    "Northwind Markets",
    "Pioneer Tech",
    "Citywide Utilities",
    "Mercer Grocers",
    "Orbit Mobility",
    "Asteria Health",
    "Bluefin Travel",
    "Peak Apparel",
    "Praxis Electronics",
    "Sunset Insurance"
];

const ACCOUNTS: [&str; 5] = [
    "ACCT-1083-983",
    "ACCT-3301-776",
    "ACCT-4409-224",
    "ACCT-5022-118",
    "ACCT-9011-410"
];

const CURRENCIES: [&str; 4] = ["USD", "EUR", "GBP", "CAD"];

const CATEGORIES: [&str; 8] = [
    "groceries",
    "travel",
    "health",
    "entertainment",
    "utilities",
    "salary",
    "mortgage",
    "investment"
];

const STATUSES: [&str; 3] = ["completed", "pending", "failed"];

/// The fixed value sets every categorical field is sampled from.
#[derive(Debug, Clone)]
pub struct Vocabularies {
    pub descriptions: Vec<String>,
    pub merchants: Vec<String>,
    pub accounts: Vec<String>,
    pub currencies: Vec<String>,
    pub transaction_types: Vec<TransactionType>,
    pub categories: Vec<String>,
    pub statuses: Vec<String>
}

impl Vocabularies {
    /// Textual vocabularies paired with the column they feed.
    pub fn textual(&self) -> [(&'static str, &[String]); 6] {
        [
            ("description", self.descriptions.as_slice()),
            ("merchant", self.merchants.as_slice()),
            ("account_number", self.accounts.as_slice()),
            ("currency", self.currencies.as_slice()),
            ("category", self.categories.as_slice()),
            ("status", self.statuses.as_slice())
        ]
    }
}

impl Default for Vocabularies {
    fn default() -> Self {
        Self {
            descriptions: owned(&DESCRIPTIONS),
            merchants: owned(&MERCHANTS),
            accounts: owned(&ACCOUNTS),
            currencies: owned(&CURRENCIES),
            transaction_types: TransactionType::ALL.to_vec(),
            categories: owned(&CATEGORIES),
            statuses: owned(&STATUSES)
        }
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
