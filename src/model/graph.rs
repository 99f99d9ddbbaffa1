use std::collections::HashMap;

use petgraph::Graph;
use petgraph::prelude::*;
use serde::Deserialize;
use serde::Serialize;

use crate::model::transaction::TransactionRecord;
use crate::utils;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GraphNode {
    Address {
        id: String,
        label: String,
        depth: usize,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        is_target: bool,
    },
    Transaction {
        id: String,
        label: String,
        depth: usize,
        is_coinbase: bool,
        timestamp: Option<i64>,
        size: Option<u64>,
        fee: Option<u64>,
    },
}

impl GraphNode {
    pub fn address(
        id: &str,
        depth: usize,
        is_target: bool,
    ) -> Self {
        GraphNode::Address {
            id: id.to_string(),
            label: utils::address_label(id),
            depth,
            is_target,
        }
    }

    pub fn transaction(
        record: &TransactionRecord,
        depth: usize,
    ) -> Self {
        GraphNode::Transaction {
            id: record.txid.clone(),
            label: utils::transaction_label(&record.txid),
            depth,
            is_coinbase: record.is_origin(),
            timestamp: record.block_time(),
            size: record.size,
            fee: record.fee,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            GraphNode::Address { id, .. } => id,
            GraphNode::Transaction { id, .. } => id,
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            GraphNode::Address { depth, .. } => *depth,
            GraphNode::Transaction { depth, .. } => *depth,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Transaction paid the target address
    Output,
    /// Source address funded the target transaction
    Input,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
}

impl GraphEdge {
    pub fn output(
        txid: &str,
        address: &str,
    ) -> Self {
        Self {
            source: txid.to_string(),
            target: address.to_string(),
            kind: EdgeKind::Output,
            amount: None,
        }
    }

    pub fn input(
        address: &str,
        txid: &str,
        amount: Option<u64>,
    ) -> Self {
        Self {
            source: address.to_string(),
            target: txid.to_string(),
            kind: EdgeKind::Input,
            amount,
        }
    }
}

/// Node/edge accumulator for one trace. Nodes are deduplicated by id through
/// the index map; the first discovery wins, so a node keeps the depth it was
/// first seen at. Insertion order is preserved in the emitted lists.
#[derive(Debug, Clone, Default)]
pub struct ProvenanceGraph {
    graph: Graph<GraphNode, GraphEdge>,
    node_indices: HashMap<String, NodeIndex>,
}

impl ProvenanceGraph {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            node_indices: HashMap::new(),
        }
    }

    pub fn add_node(
        &mut self,
        node: GraphNode,
    ) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(node.id()) {
            return idx;
        }

        let id = node.id().to_string();
        let idx = self.graph.add_node(node);
        self.node_indices.insert(id, idx);

        idx
    }

    /// Add an edge between two already-present nodes. Returns false when
    /// either endpoint is missing, so an edge never dangles.
    pub fn add_edge(
        &mut self,
        edge: GraphEdge,
    ) -> bool {
        let (Some(&source), Some(&target)) =
            (self.node_indices.get(&edge.source), self.node_indices.get(&edge.target))
        else {
            return false;
        };

        self.graph.add_edge(source, target, edge);
        true
    }

    pub fn contains(
        &self,
        id: &str,
    ) -> bool {
        self.node_indices.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn into_parts(self) -> (Vec<GraphNode>, Vec<GraphEdge>) {
        let (nodes, edges) = self.graph.into_nodes_edges();
        (
            nodes.into_iter().map(|node| node.weight).collect(),
            edges.into_iter().map(|edge| edge.weight).collect(),
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TraceStats {
    /// Distinct addresses discovered beyond the root
    pub total_addresses: usize,
    /// Transactions successfully detailed and added to the graph
    pub total_transactions: usize,
    pub max_depth_reached: usize,
    pub coinbase_found: bool,
    /// Minimum depth at which an origin transaction was found
    pub coinbase_distance: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TraceResult {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub stats: TraceStats,
    pub target_address: String,
    pub educational_note: String,
}
