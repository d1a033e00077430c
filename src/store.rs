use thiserror::Error;

use crate::types::{BankStatement, CanonicalTransaction, Tag};

/// Failure inside a storage backend. The text is for server-side logs;
/// user-facing messages stay generic.
#[derive(Error, Debug)]
#[error("storage backend failure: {0}")]
pub struct StoreError(pub String);

/// Persistence capability consumed by the ingestion pipeline.
///
/// Implementations are constructed by the process entry point and injected;
/// the pipeline holds no global client. Creating the statement and inserting
/// its batch are two separate calls on purpose — a backend that can wrap
/// both in one transaction is free to, the core does not require it, and a
/// crash in between leaves a harmless empty statement to reconcile later.
pub trait StatementStore {
    fn create_statement(&self, name: &str, user_id: &str) -> Result<BankStatement, StoreError>;

    /// Bulk insert; returns how many records were written.
    fn insert_transactions(&self, records: &[CanonicalTransaction]) -> Result<usize, StoreError>;
}

/// Tag lookup/creation capability, consumed by the manual entry path.
/// File ingestion never assigns tags to parsed records.
pub trait TagStore {
    fn find_tag(&self, name: &str, user_id: &str) -> Result<Option<Tag>, StoreError>;

    fn create_tag(&self, name: &str, color: &str, user_id: &str) -> Result<Tag, StoreError>;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use chrono::Utc;

    use super::*;

    /// Fake backend for pipeline tests: everything in vecs, sequential ids.
    #[derive(Default)]
    pub(crate) struct MemoryStore {
        pub statements: RefCell<Vec<BankStatement>>,
        pub transactions: RefCell<Vec<CanonicalTransaction>>,
        pub tags: RefCell<Vec<Tag>>,
        pub fail_inserts: bool,
        next_id: RefCell<u32>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing_inserts() -> Self {
            MemoryStore {
                fail_inserts: true,
                ..Self::default()
            }
        }

        fn next_id(&self, prefix: &str) -> String {
            let mut counter = self.next_id.borrow_mut();
            *counter += 1;
            format!("{prefix}-{counter}")
        }
    }

    impl StatementStore for MemoryStore {
        fn create_statement(
            &self,
            name: &str,
            user_id: &str,
        ) -> Result<BankStatement, StoreError> {
            let statement = BankStatement {
                id: self.next_id("stmt"),
                name: name.to_string(),
                user_id: user_id.to_string(),
                created_at: Utc::now(),
            };
            self.statements.borrow_mut().push(statement.clone());
            Ok(statement)
        }

        fn insert_transactions(
            &self,
            records: &[CanonicalTransaction],
        ) -> Result<usize, StoreError> {
            if self.fail_inserts {
                return Err(StoreError("connection reset".to_string()));
            }
            self.transactions.borrow_mut().extend_from_slice(records);
            Ok(records.len())
        }
    }

    impl TagStore for MemoryStore {
        fn find_tag(&self, name: &str, user_id: &str) -> Result<Option<Tag>, StoreError> {
            Ok(self
                .tags
                .borrow()
                .iter()
                .find(|tag| tag.name == name && tag.user_id == user_id)
                .cloned())
        }

        fn create_tag(&self, name: &str, color: &str, user_id: &str) -> Result<Tag, StoreError> {
            let tag = Tag {
                id: self.next_id("tag"),
                name: name.to_string(),
                color: color.to_string(),
                user_id: user_id.to_string(),
            };
            self.tags.borrow_mut().push(tag.clone());
            Ok(tag)
        }
    }
}
