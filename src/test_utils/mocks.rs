use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::LedgerDataSource;
use crate::error::ApiClientError;
use crate::model::transaction::TransactionRecord;
use crate::model::transaction::TransactionSummary;

/// Scriptable in-memory data source. Addresses and transactions are
/// registered up front; per-key call counters let tests assert the tracer's
/// at-most-once fetch discipline. Keys marked as failing return a simulated
/// transport error on every call.
#[derive(Default)]
pub struct MockLedgerSource {
    addresses: Mutex<HashMap<String, Vec<TransactionSummary>>>,
    transactions: Mutex<HashMap<String, TransactionRecord>>,
    failing_addresses: Mutex<HashSet<String>>,
    failing_transactions: Mutex<HashSet<String>>,
    address_calls: Mutex<HashMap<String, usize>>,
    transaction_calls: Mutex<HashMap<String, usize>>,
}

impl MockLedgerSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_address(
        &self,
        address: &str,
        txids: &[&str],
    ) {
        let summaries = txids
            .iter()
            .map(|txid| TransactionSummary { txid: txid.to_string() })
            .collect();
        self.addresses.lock().unwrap().insert(address.to_string(), summaries);
    }

    pub fn register_transaction(
        &self,
        record: TransactionRecord,
    ) {
        self.transactions.lock().unwrap().insert(record.txid.clone(), record);
    }

    pub fn fail_address(
        &self,
        address: &str,
    ) {
        self.failing_addresses.lock().unwrap().insert(address.to_string());
    }

    pub fn fail_transaction(
        &self,
        txid: &str,
    ) {
        self.failing_transactions.lock().unwrap().insert(txid.to_string());
    }

    pub fn address_call_count(
        &self,
        address: &str,
    ) -> usize {
        self.address_calls.lock().unwrap().get(address).copied().unwrap_or(0)
    }

    pub fn transaction_call_count(
        &self,
        txid: &str,
    ) -> usize {
        self.transaction_calls.lock().unwrap().get(txid).copied().unwrap_or(0)
    }

    pub fn total_address_calls(&self) -> usize {
        self.address_calls.lock().unwrap().values().sum()
    }

    pub fn total_transaction_calls(&self) -> usize {
        self.transaction_calls.lock().unwrap().values().sum()
    }

    fn simulated_failure(key: &str) -> ApiClientError {
        ApiClientError::Status {
            status: 500,
            url: format!("mock://{}", key),
        }
    }
}

#[async_trait]
impl LedgerDataSource for MockLedgerSource {
    async fn address_transactions(
        &self,
        address: &str,
    ) -> Result<Vec<TransactionSummary>, ApiClientError> {
        *self.address_calls.lock().unwrap().entry(address.to_string()).or_insert(0) += 1;

        if self.failing_addresses.lock().unwrap().contains(address) {
            return Err(Self::simulated_failure(address));
        }

        Ok(self.addresses.lock().unwrap().get(address).cloned().unwrap_or_default())
    }

    async fn transaction(
        &self,
        txid: &str,
    ) -> Result<Option<TransactionRecord>, ApiClientError> {
        *self.transaction_calls.lock().unwrap().entry(txid.to_string()).or_insert(0) += 1;

        if self.failing_transactions.lock().unwrap().contains(txid) {
            return Err(Self::simulated_failure(txid));
        }

        Ok(self.transactions.lock().unwrap().get(txid).cloned())
    }
}
