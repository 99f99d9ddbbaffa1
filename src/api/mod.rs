pub mod esplora;

use async_trait::async_trait;

pub use esplora::EsploraClient;

use crate::error::ApiClientError;
use crate::model::transaction::TransactionRecord;
use crate::model::transaction::TransactionSummary;

/// Read-only view of the ledger. Two idempotent lookups; the tracer memoizes
/// both, so an implementation is called at most once per key per trace.
#[async_trait]
pub trait LedgerDataSource: Send + Sync {
    /// Transactions touching the address, newest first as the provider
    /// returns them.
    async fn address_transactions(
        &self,
        address: &str,
    ) -> Result<Vec<TransactionSummary>, ApiClientError>;

    /// Full record for a transaction id. `Ok(None)` means the provider has
    /// no such record, distinct from an empty-but-successful list and from
    /// a transport failure.
    async fn transaction(
        &self,
        txid: &str,
    ) -> Result<Option<TransactionRecord>, ApiClientError>;
}
