//! Bank statement ingestion core for a personal finance tracker.
//!
//! Takes one uploaded OFX file end-to-end: sanitizes the raw payload, parses
//! the SGML-ish tag structure (with a pattern-matching fallback for broken
//! documents), normalizes dates and amounts into canonical transaction
//! records and persists the batch through an injected storage backend.
//!
//! ```rust,ignore
//! use ofx_ingest_rs::{StatementImporter, StatementUpload};
//!
//! let importer = StatementImporter::new(store);
//! let summary = importer.ingest(
//!     Some(StatementUpload { filename, bytes }),
//!     &user_id,
//! )?;
//! println!("imported {} transactions", summary.transactions_count);
//! ```
//!
//! Re-importing the same file is not deduplicated at this layer: each upload
//! creates its own statement and its own transaction rows, FITIDs included.

mod ingest;
mod manual;
mod normalize;
mod sanitize;
mod types;

pub mod errors;
pub mod parsers;
pub mod store;

pub use errors::{ImportError, ImportResult, ManualEntryError, RecordError};
pub use ingest::{StatementImporter, StatementUpload};
pub use manual::{DEFAULT_TAG_COLOR, ManualEntry, record_manual_transaction};
pub use normalize::{NO_DESCRIPTION, normalize};
pub use parsers::ofx::parse_statement_date;
pub use sanitize::sanitize;
pub use types::{
    BankStatement, CanonicalTransaction, ImportSummary, Tag, TransactionKind,
};
