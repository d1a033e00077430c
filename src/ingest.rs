use chrono::Utc;

use crate::errors::{ImportError, ImportResult};
use crate::normalize::normalize;
use crate::parsers::ofx;
use crate::sanitize::sanitize;
use crate::store::StatementStore;
use crate::types::ImportSummary;

/// One uploaded statement file, as handed over by the HTTP layer.
#[derive(Debug, Clone)]
pub struct StatementUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Runs one uploaded file end-to-end: sanitize, parse (structural first,
/// pattern fallback second), normalize, persist. Synchronous and single
/// pass; concurrent imports for different files are independent.
pub struct StatementImporter<S> {
    store: S,
}

impl<S: StatementStore> StatementImporter<S> {
    pub fn new(store: S) -> Self {
        StatementImporter { store }
    }

    /// Exactly one outcome per call: a summary with the inserted count, or
    /// one of the rejection reasons. Individually defective records are
    /// skipped, never fatal — an upload whose every record is unusable still
    /// succeeds with a count of zero.
    pub fn ingest(
        &self,
        upload: Option<StatementUpload>,
        user_id: &str,
    ) -> ImportResult<ImportSummary> {
        let upload = upload.ok_or(ImportError::NoFileUploaded)?;

        let text = String::from_utf8_lossy(&upload.bytes);
        let sanitized = sanitize(&text);

        if !ofx::is_viable(&sanitized) {
            return Err(ImportError::NotAStatementFile);
        }

        let raw_transactions = match ofx::extract_structural(&sanitized) {
            Some(found) => found,
            None => {
                tracing::warn!(
                    file = %upload.filename,
                    "no transaction list in document tree, trying pattern extraction"
                );
                ofx::extract_by_pattern(&sanitized).ok_or(ImportError::NoTransactionData)?
            }
        };

        let statement = self
            .store
            .create_statement(&upload.filename, user_id)
            .map_err(log_store_error)?;

        let now = Utc::now();
        let mut records = Vec::with_capacity(raw_transactions.len());
        for raw in &raw_transactions {
            match normalize(raw, user_id, &statement.id, now) {
                Ok(record) => records.push(record),
                Err(defect) => {
                    tracing::warn!(statement = %statement.id, %defect, "skipping unusable record");
                }
            }
        }

        let inserted = self
            .store
            .insert_transactions(&records)
            .map_err(log_store_error)?;

        Ok(ImportSummary {
            message: "ok".to_string(),
            transactions_count: inserted,
        })
    }
}

fn log_store_error(error: crate::store::StoreError) -> ImportError {
    tracing::error!(%error, "statement import failed in the storage layer");
    ImportError::Storage(error)
}
