use serde::Deserialize;
use serde::Serialize;

/// One element of an address's transaction list. The provider returns full
/// records here too, but only the id is consumed; details are fetched
/// separately so both paths share one cache.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionSummary {
    pub txid: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TxStatus {
    #[serde(default)]
    pub confirmed: bool,
    pub block_height: Option<u64>,
    pub block_time: Option<i64>,
}

/// The output being spent by an input, as the provider annotates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Prevout {
    pub scriptpubkey_address: Option<String>,
    pub value: Option<u64>,
}

/// A transaction input. `txid` is absent on coinbase inputs; `prevout` is
/// absent when the provider has pruned the funding output.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TxInput {
    pub txid: Option<String>,
    pub vout: Option<u32>,
    pub prevout: Option<Prevout>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TxOutput {
    pub scriptpubkey_address: Option<String>,
    pub value: Option<u64>,
}

/// Full transaction record in the provider's shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    pub txid: String,
    #[serde(default)]
    pub vin: Vec<TxInput>,
    #[serde(default)]
    pub vout: Vec<TxOutput>,
    pub size: Option<u64>,
    pub fee: Option<u64>,
    pub status: Option<TxStatus>,
}

impl TransactionRecord {
    /// Origin (coinbase) heuristic: newly minted coins have either no inputs
    /// at all, or a single input carrying no previous-transaction reference.
    /// These are the "purest" funds, with no further ancestry to trace.
    pub fn is_origin(&self) -> bool {
        match self.vin.as_slice() {
            [] => true,
            [only] => only.txid.is_none(),
            _ => false,
        }
    }

    pub fn block_time(&self) -> Option<i64> {
        self.status.as_ref().and_then(|status| status.block_time)
    }
}
