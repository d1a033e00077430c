use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::errors::ManualEntryError;
use crate::store::{StatementStore, TagStore};
use crate::types::{CanonicalTransaction, TransactionKind};

/// Cor aplicada quando a tag informada ainda não existe para o usuário
pub const DEFAULT_TAG_COLOR: &str = "#ef23ab";

/// One hand-entered transaction, before validation.
#[derive(Debug, Clone)]
pub struct ManualEntry {
    pub description: String,
    pub value: Decimal,
    pub kind: TransactionKind,
    /// ISO-8601; rejected when invalid instead of guessed at.
    pub date: String,
    pub tag: String,
}

/// Records one manually entered transaction: validates the date, resolves
/// the tag by name (creating it with the default color when absent) and
/// inserts a single record carrying the tag. No statement is involved.
pub fn record_manual_transaction<S>(
    store: &S,
    entry: ManualEntry,
    user_id: &str,
) -> Result<CanonicalTransaction, ManualEntryError>
where
    S: StatementStore + TagStore,
{
    let date = DateTime::parse_from_rfc3339(&entry.date)
        .map_err(|_| ManualEntryError::InvalidDate)?
        .with_timezone(&Utc);

    let tag = match store.find_tag(&entry.tag, user_id)? {
        Some(existing) => existing,
        None => store.create_tag(&entry.tag, DEFAULT_TAG_COLOR, user_id)?,
    };

    let record = CanonicalTransaction {
        description: entry.description,
        value: entry.value.abs(),
        kind: entry.kind,
        transaction_date: date,
        fit_id: None,
        tag_id: Some(tag.id),
        bank_statement_id: None,
        user_id: user_id.to_string(),
    };
    store.insert_transactions(std::slice::from_ref(&record))?;

    Ok(record)
}
