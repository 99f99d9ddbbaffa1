use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use silsila::model::graph::{EdgeKind, GraphNode, TraceResult};
use silsila::test_utils::fixtures::TestFixtures;
use silsila::test_utils::mocks::MockLedgerSource;
use silsila::tracer::{LineageTracer, TraceLimits};

/// A synthetic ledger: address `addr-{i}` received `tx-{i}`, funded by the
/// listed addresses. Empty funders make `tx-{i}` a coinbase. Indices may
/// form cycles; the tracer's visited sets must cope.
#[derive(Debug, Clone)]
struct SyntheticLedger {
    funders: Vec<Vec<usize>>,
}

fn arbitrary_ledger() -> impl Strategy<Value = SyntheticLedger> {
    (1usize..=10).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(0..n, 0..=3), n)
            .prop_map(move |raw| SyntheticLedger {
                funders: raw
                    .into_iter()
                    .enumerate()
                    .map(|(i, list)| {
                        list.into_iter().filter(|&j| j != i).collect::<Vec<_>>()
                    })
                    .collect(),
            })
    })
}

fn build_source(ledger: &SyntheticLedger) -> Arc<MockLedgerSource> {
    let source = MockLedgerSource::new();

    for (i, funders) in ledger.funders.iter().enumerate() {
        let address = format!("addr-{}", i);
        let txid = format!("tx-{}", i);
        source.register_address(&address, &[txid.as_str()]);

        if funders.is_empty() {
            source.register_transaction(TestFixtures::coinbase_tx(&txid, &address, 1_000));
        } else {
            let funder_names: Vec<String> =
                funders.iter().map(|j| format!("addr-{}", j)).collect();
            let funder_refs: Vec<(&str, u64)> = funder_names
                .iter()
                .enumerate()
                .map(|(k, name)| (name.as_str(), 1_000 + k as u64))
                .collect();
            source.register_transaction(TestFixtures::spend_tx(&txid, &funder_refs));
        }
    }

    Arc::new(source)
}

fn check_invariants(
    result: &TraceResult,
    max_depth: usize,
    max_addresses: usize,
) -> Result<(), TestCaseError> {
    // Dedup: every id appears as at most one node
    let mut seen = HashSet::new();
    for node in &result.nodes {
        prop_assert!(seen.insert(node.id().to_string()), "duplicate node {}", node.id());
        prop_assert!(node.depth() <= max_depth, "node {} beyond depth limit", node.id());
    }

    // Address budget is a hard cap, root included
    let address_nodes = result
        .nodes
        .iter()
        .filter(|node| matches!(node, GraphNode::Address { .. }))
        .count();
    prop_assert!(address_nodes <= max_addresses);
    prop_assert_eq!(result.stats.total_addresses, address_nodes.saturating_sub(1));

    // Edges connect nodes present in the same result, with the right
    // endpoint kinds, and input edges step exactly one hop deeper
    for edge in &result.edges {
        let source = result.nodes.iter().find(|node| node.id() == edge.source);
        let target = result.nodes.iter().find(|node| node.id() == edge.target);
        let (Some(source), Some(target)) = (source, target) else {
            return Err(TestCaseError::fail(format!(
                "edge {} -> {} dangles",
                edge.source, edge.target
            )));
        };

        match edge.kind {
            EdgeKind::Output => {
                prop_assert!(
                    matches!(source, GraphNode::Transaction { .. }),
                    "output edge source must be a transaction node"
                );
                prop_assert!(
                    matches!(target, GraphNode::Address { .. }),
                    "output edge target must be an address node"
                );
            },
            EdgeKind::Input => {
                prop_assert!(
                    matches!(source, GraphNode::Address { .. }),
                    "input edge source must be an address node"
                );
                prop_assert!(
                    matches!(target, GraphNode::Transaction { .. }),
                    "input edge target must be a transaction node"
                );
                prop_assert_eq!(source.depth(), target.depth() + 1);
                prop_assert!(edge.amount.is_some());
            },
        }
    }

    // Coinbase statistics agree with the emitted nodes
    let origin_depths: Vec<usize> = result
        .nodes
        .iter()
        .filter_map(|node| match node {
            GraphNode::Transaction { is_coinbase: true, depth, .. } => Some(*depth),
            _ => None,
        })
        .collect();
    prop_assert_eq!(result.stats.coinbase_found, !origin_depths.is_empty());
    prop_assert_eq!(result.stats.coinbase_distance, origin_depths.iter().copied().min());

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn trace_invariants_hold_on_random_ledgers(
        ledger in arbitrary_ledger(),
        max_depth in 0usize..=5,
        max_addresses in 1usize..=15,
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let source = build_source(&ledger);
            let tracer = LineageTracer::new(
                source.clone(),
                TraceLimits { max_depth, max_addresses },
                Duration::ZERO,
            );

            let result = tracer.trace("addr-0").await.unwrap();
            check_invariants(&result, max_depth, max_addresses)?;

            // At-most-once fetch per key, regardless of topology
            for i in 0..ledger.funders.len() {
                prop_assert!(
                    source.address_call_count(&format!("addr-{}", i)) <= 1,
                    "addr-{} fetched more than once",
                    i
                );
                prop_assert!(
                    source.transaction_call_count(&format!("tx-{}", i)) <= 1,
                    "tx-{} fetched more than once",
                    i
                );
            }

            Ok(())
        })?;
    }

    #[test]
    fn traversal_is_deterministic(
        ledger in arbitrary_ledger(),
        max_depth in 0usize..=4,
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let limits = TraceLimits { max_depth, max_addresses: 15 };

            let first = LineageTracer::new(build_source(&ledger), limits, Duration::ZERO)
                .trace("addr-0")
                .await
                .unwrap();
            let second = LineageTracer::new(build_source(&ledger), limits, Duration::ZERO)
                .trace("addr-0")
                .await
                .unwrap();

            prop_assert_eq!(first, second);
            Ok(())
        })?;
    }
}
