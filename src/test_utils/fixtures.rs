use crate::model::transaction::Prevout;
use crate::model::transaction::TransactionRecord;
use crate::model::transaction::TransactionSummary;
use crate::model::transaction::TxInput;
use crate::model::transaction::TxOutput;
use crate::model::transaction::TxStatus;

/// Test fixtures for building consistent ledger records
pub struct TestFixtures;

impl TestFixtures {
    pub fn summary(txid: &str) -> TransactionSummary {
        TransactionSummary { txid: txid.to_string() }
    }

    fn base_record(txid: &str) -> TransactionRecord {
        TransactionRecord {
            txid: txid.to_string(),
            vin: Vec::new(),
            vout: Vec::new(),
            size: Some(250),
            fee: Some(1_000),
            status: Some(TxStatus {
                confirmed: true,
                block_height: Some(800_000),
                block_time: Some(1_700_000_000),
            }),
        }
    }

    /// A coinbase record: single input with no previous-transaction
    /// reference, paying the given address.
    pub fn coinbase_tx(
        txid: &str,
        paid_address: &str,
        value: u64,
    ) -> TransactionRecord {
        let mut record = Self::base_record(txid);
        record.fee = None;
        record.vin = vec![TxInput::default()];
        record.vout = vec![TxOutput {
            scriptpubkey_address: Some(paid_address.to_string()),
            value: Some(value),
        }];
        record
    }

    /// A regular spend funded by the given (address, amount) pairs.
    pub fn spend_tx(
        txid: &str,
        funders: &[(&str, u64)],
    ) -> TransactionRecord {
        let mut record = Self::base_record(txid);
        record.vin = funders
            .iter()
            .enumerate()
            .map(|(index, (address, value))| TxInput {
                txid: Some(format!("{}-funding-{}", txid, index)),
                vout: Some(0),
                prevout: Some(Prevout {
                    scriptpubkey_address: Some(address.to_string()),
                    value: Some(*value),
                }),
            })
            .collect();
        record
    }

    /// A spend whose provenance the provider has pruned: the input carries
    /// a previous txid but no prevout annotation.
    pub fn pruned_input_tx(txid: &str) -> TransactionRecord {
        let mut record = Self::base_record(txid);
        record.vin = vec![TxInput {
            txid: Some(format!("{}-funding", txid)),
            vout: Some(0),
            prevout: None,
        }];
        record
    }
}
