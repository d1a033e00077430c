use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::errors::RecordError;
use crate::parsers::prelude::*;
use crate::types::{CanonicalTransaction, TransactionKind};

/// Description used when a record carries no memo.
pub const NO_DESCRIPTION: &str = "No description";

/// Maps one raw node into the canonical record.
///
/// The amount sign decides the kind and is then stripped — `value` is always
/// the magnitude. An unparseable posted date is replaced by `fallback_date`
/// (the ingestion instant): reduced date fidelity beats dropping the
/// movement. A missing or non-numeric amount, or a missing FITID, fails just
/// this record; the batch-level policy is skip and continue.
pub fn normalize(
    raw: &RawTransaction,
    user_id: &str,
    bank_statement_id: &str,
    fallback_date: DateTime<Utc>,
) -> Result<CanonicalTransaction, RecordError> {
    let amount_text = raw.amount.as_deref().ok_or(RecordError::BadAmount)?;
    let amount = Decimal::from_str(amount_text.trim()).map_err(|_| RecordError::BadAmount)?;

    let fit_id = raw
        .fitid
        .as_ref()
        .map(|fitid| fitid.flatten())
        .filter(|flat| !flat.is_empty())
        .ok_or(RecordError::MissingFitId)?;

    let description = raw
        .memo
        .as_deref()
        .map(str::trim)
        .filter(|memo| !memo.is_empty())
        .map_or_else(|| NO_DESCRIPTION.to_string(), str::to_string);

    let transaction_date =
        parse_statement_date(raw.dt_posted.as_deref()).unwrap_or(fallback_date);

    Ok(CanonicalTransaction {
        description,
        value: amount.abs(),
        kind: TransactionKind::from_amount(amount),
        transaction_date,
        fit_id: Some(fit_id),
        tag_id: None,
        bank_statement_id: Some(bank_statement_id.to_string()),
        user_id: user_id.to_string(),
    })
}
