use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Movement direction, derived from the sign of the original amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Credit,
    Debit,
}

impl TransactionKind {
    /// Positive amounts are credits; zero and negative amounts are debits.
    pub fn from_amount(amount: Decimal) -> Self {
        if amount > Decimal::ZERO {
            TransactionKind::Credit
        } else {
            TransactionKind::Debit
        }
    }
}

/// Storage-ready transaction record, independent of source format quirks.
///
/// `value` is always non-negative; the sign of the original amount lives in
/// `kind` only. Statement imports fill `fit_id` and `bank_statement_id` and
/// leave `tag_id` empty; manual entries do the opposite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalTransaction {
    pub description: String,
    pub value: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub transaction_date: DateTime<Utc>,
    pub fit_id: Option<String>,
    pub tag_id: Option<String>,
    pub bank_statement_id: Option<String>,
    pub user_id: String,
}

/// One uploaded file's worth of transactions, grouped under a single record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankStatement {
    pub id: String,
    pub name: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub color: String,
    pub user_id: String,
}

/// Successful import outcome, ready for the HTTP layer to encode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub message: String,
    pub transactions_count: usize,
}
