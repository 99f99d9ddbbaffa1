use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use tracing::error;
use tracing::info;

use crate::Result;
use crate::api::LedgerDataSource;
use crate::constants;
use crate::model::graph::GraphEdge;
use crate::model::graph::GraphNode;
use crate::model::graph::ProvenanceGraph;
use crate::model::graph::TraceResult;
use crate::model::graph::TraceStats;
use crate::model::transaction::TransactionRecord;
use crate::model::transaction::TransactionSummary;

#[derive(Debug, Clone, Copy)]
pub struct TraceLimits {
    /// Hop distance explored, inclusive. Items at exactly this depth still
    /// attach their transaction nodes; only their inputs go unexplored.
    pub max_depth: usize,
    /// Distinct-address budget per trace, root included
    pub max_addresses: usize,
}

impl Default for TraceLimits {
    fn default() -> Self {
        Self {
            max_depth: constants::DEFAULT_MAX_DEPTH,
            max_addresses: constants::DEFAULT_MAX_ADDRESSES,
        }
    }
}

/// Traces the funds received by an address backward through the ledger.
///
/// One tracer = one trace. Fetch caches and visited sets live on the
/// instance, and `trace` consumes it, so state can never leak between
/// invocations; callers needing another trace construct a fresh tracer.
pub struct LineageTracer {
    source: Arc<dyn LedgerDataSource>,
    limits: TraceLimits,
    fetch_delay: Duration,
    address_cache: HashMap<String, Vec<TransactionSummary>>,
    tx_cache: HashMap<String, Option<TransactionRecord>>,
    visited_addresses: HashSet<String>,
    visited_txs: HashSet<String>,
}

impl LineageTracer {
    pub fn new(
        source: Arc<dyn LedgerDataSource>,
        limits: TraceLimits,
        fetch_delay: Duration,
    ) -> Self {
        Self {
            source,
            limits,
            fetch_delay,
            address_cache: HashMap::new(),
            tx_cache: HashMap::new(),
            visited_addresses: HashSet::new(),
            visited_txs: HashSet::new(),
        }
    }

    /// Breadth-first traversal from `root`, going backward through the
    /// inputs of each transaction that paid a discovered address. FIFO
    /// order guarantees minimum-depth-first discovery, which keeps the
    /// coinbase distance and the depth bookkeeping exact.
    pub async fn trace(
        mut self,
        root: &str,
    ) -> Result<TraceResult> {
        let mut graph = ProvenanceGraph::new();
        let mut stats = TraceStats::default();
        let mut frontier: VecDeque<(String, usize)> = VecDeque::new();

        graph.add_node(GraphNode::address(root, 0, true));
        self.visited_addresses.insert(root.to_string());
        frontier.push_back((root.to_string(), 0));

        while let Some((address, depth)) = frontier.pop_front() {
            // Address budget is a hard ceiling; queued work past it is
            // dropped rather than processed
            if self.visited_addresses.len() >= self.limits.max_addresses {
                debug!("address_budget_reached::budget::{}", self.limits.max_addresses);
                break;
            }

            if depth > self.limits.max_depth {
                continue;
            }
            stats.max_depth_reached = stats.max_depth_reached.max(depth);

            for summary in self.cached_address_transactions(&address).await {
                let txid = summary.txid;

                if self.visited_txs.contains(&txid) {
                    // Fan-in: a shared ancestor transaction keeps a single
                    // node but still gets its payout edge to this address
                    if graph.contains(&txid) {
                        graph.add_edge(GraphEdge::output(&txid, &address));
                    }
                    continue;
                }
                self.visited_txs.insert(txid.clone());

                let Some(record) = self.cached_transaction(&txid).await else {
                    // Detail fetch failed; the trace continues without this
                    // transaction
                    continue;
                };

                stats.total_transactions += 1;

                let is_origin = record.is_origin();
                if is_origin {
                    stats.coinbase_found = true;
                    if stats.coinbase_distance.is_none() {
                        stats.coinbase_distance = Some(depth);
                    }
                }

                graph.add_node(GraphNode::transaction(&record, depth));
                graph.add_edge(GraphEdge::output(&txid, &address));

                // Origin transactions mint coins; there is nothing behind
                // them to explore
                if !is_origin && depth < self.limits.max_depth {
                    for input in &record.vin {
                        let Some(prevout) = &input.prevout else { continue };
                        let Some(funder) = &prevout.scriptpubkey_address else { continue };

                        if self.visited_addresses.contains(funder.as_str()) {
                            continue;
                        }
                        if self.visited_addresses.len() >= self.limits.max_addresses {
                            break;
                        }

                        self.visited_addresses.insert(funder.clone());
                        stats.total_addresses += 1;

                        graph.add_node(GraphNode::address(funder, depth + 1, false));
                        graph.add_edge(GraphEdge::input(funder, &txid, prevout.value));
                        frontier.push_back((funder.clone(), depth + 1));
                    }
                }
            }
        }

        info!(
            "trace_completed::root::{}::nodes::{}::edges::{}::max_depth::{}",
            root,
            graph.node_count(),
            graph.edge_count(),
            stats.max_depth_reached
        );

        let (nodes, edges) = graph.into_parts();

        Ok(TraceResult {
            nodes,
            edges,
            stats,
            target_address: root.to_string(),
            educational_note: constants::EDUCATIONAL_NOTE.to_string(),
        })
    }

    /// Memoized address-transactions lookup. A transport failure degrades to
    /// an empty history so one unreachable lookup never aborts the trace;
    /// the empty result is cached to avoid re-fetching after the failure.
    async fn cached_address_transactions(
        &mut self,
        address: &str,
    ) -> Vec<TransactionSummary> {
        if let Some(cached) = self.address_cache.get(address) {
            return cached.clone();
        }

        let summaries = match self.source.address_transactions(address).await {
            Ok(summaries) => summaries,
            Err(e) => {
                error!("address_fetch_failed::address::{}::error::{}", address, e);
                Vec::new()
            },
        };

        self.address_cache.insert(address.to_string(), summaries.clone());
        summaries
    }

    /// Memoized transaction-detail lookup. Every call that actually hits
    /// the provider is followed by the configured courtesy delay, failed or
    /// not, last fetch of the trace included.
    async fn cached_transaction(
        &mut self,
        txid: &str,
    ) -> Option<TransactionRecord> {
        if let Some(cached) = self.tx_cache.get(txid) {
            return cached.clone();
        }

        let record = match self.source.transaction(txid).await {
            Ok(record) => record,
            Err(e) => {
                error!("transaction_fetch_failed::txid::{}::error::{}", txid, e);
                None
            },
        };

        tokio::time::sleep(self.fetch_delay).await;

        self.tx_cache.insert(txid.to_string(), record.clone());
        record
    }
}
