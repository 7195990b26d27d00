use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::models::TransactionRecord;
use crate::storage::{RecordSink, StorageError, COLUMNS, TABLE_NAME};

/// Quotes a value as a SQL string literal by doubling embedded single quotes.
///
/// This is the only place values are spliced into SQL text. The script it feeds is a
/// readable artifact; the live table is always written with bound parameters.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Renders one record as a complete `INSERT` statement ending in `;`.
pub fn render_insert(record: &TransactionRecord) -> String {
    let values = [
        record.id.to_string(),
        quote_literal(&record.date_text()),
        quote_literal(&record.description),
        quote_literal(&record.account_number),
        record.amount.to_string(),
        quote_literal(&record.currency),
        quote_literal(record.transaction_type.as_str()),
        quote_literal(&record.merchant),
        record.balance_after.to_string(),
        quote_literal(&record.category),
        quote_literal(&record.status),
        quote_literal(&record.reference_number)
    ];

    format!("INSERT INTO {} ({}) VALUES ({});", TABLE_NAME, COLUMNS.join(", "), values.join(", "))
}

/// One statement per line, with a trailing newline. An empty slice renders as `"\n"`.
pub fn render_script(records: &[TransactionRecord]) -> String {
    let mut script = records.iter()
        .map(render_insert)
        .collect::<Vec<_>>()
        .join("\n");

    script.push('\n');
    script
}

/// Writes the rendered statements to a text file, replacing any previous contents.
pub struct InsertScript {
    path: PathBuf
}

impl InsertScript {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf()
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for InsertScript {
    fn write_all(&mut self, records: &[TransactionRecord]) -> Result<usize, StorageError> {
        let mut output = BufWriter::new(File::create(&self.path)?);

        output.write_all(render_script(records).as_bytes())?;
        output.flush()?;

        debug!("Wrote {} insert statements to {}", records.len(), self.path.display());

        Ok(records.len())
    }
}
