//! Property-based tests for the engines.
//!
//! Uses proptest to check structural invariants over random inputs.

use std::collections::{BTreeMap, BTreeSet};

use algoscope_core::graph::{shortest_paths, Edge, Graph};
use algoscope_core::hashing::HashTable;
use algoscope_core::heap::{Heap, HeapKind};
use algoscope_core::search::binary_search;
use algoscope_core::sort::bubble_sort;
use algoscope_core::tree::{AvlTree, Bst, TraversalOrder};
use algoscope_core::NoTrace;
use proptest::prelude::*;

// -----------------------------------------------------------------------------
// Strategies
// -----------------------------------------------------------------------------

fn values_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000i64..1_000, 0..200)
}

fn heap_kind_strategy() -> impl Strategy<Value = HeapKind> {
    prop_oneof![Just(HeapKind::Max), Just(HeapKind::Min)]
}

/// A vertex count plus weighted edges between vertices below it.
fn graph_strategy() -> impl Strategy<Value = (u32, Vec<(u32, u32, u64)>)> {
    (1u32..10).prop_flat_map(|n| {
        let edge = (0..n, 0..n, 0u64..50);
        (Just(n), prop::collection::vec(edge, 0..30))
    })
}

/// Distances by repeated relaxation of every edge.
fn bellman_ford(n: u32, edges: &[(u32, u32, u64)], source: u32) -> Vec<Option<u64>> {
    let mut dist = vec![None; n as usize];
    dist[source as usize] = Some(0);
    for _ in 0..n {
        for &(from, to, weight) in edges {
            if let Some(d) = dist[from as usize] {
                let candidate = d + weight;
                if dist[to as usize].map_or(true, |cur| candidate < cur) {
                    dist[to as usize] = Some(candidate);
                }
            }
        }
    }
    dist
}

// -----------------------------------------------------------------------------
// Trees
// -----------------------------------------------------------------------------

proptest! {
    /// Every AVL node keeps its balance factor within one and heights stay
    /// logarithmic.
    #[test]
    fn avl_stays_balanced(values in values_strategy()) {
        let tree = AvlTree::from_values(values.iter().copied());
        prop_assert!(tree.check_invariants());

        let distinct: BTreeSet<_> = values.iter().copied().collect();
        prop_assert_eq!(tree.len(), distinct.len());
        // 1.44 * log2(n + 2) bounds AVL height.
        let bound = (1.45 * ((distinct.len() + 2) as f64).log2()).ceil() as u32;
        prop_assert!(tree.height() <= bound);
    }

    /// Inorder traversal of an AVL tree is the distinct input, sorted.
    #[test]
    fn avl_inorder_is_sorted_distinct(values in values_strategy()) {
        let tree = AvlTree::from_values(values.iter().copied());
        let distinct: BTreeSet<_> = values.iter().copied().collect();
        let expected: Vec<_> = distinct.into_iter().collect();
        let inorder: Vec<_> = tree.traverse(TraversalOrder::Inorder).collect();
        prop_assert_eq!(inorder, expected);
    }

    /// Inorder traversal of a BST is the full input, sorted, duplicates kept.
    #[test]
    fn bst_inorder_is_sorted(values in values_strategy()) {
        let bst = Bst::from_values(values.iter().copied());
        let mut expected = values.clone();
        expected.sort();
        let inorder: Vec<_> = bst.traverse(TraversalOrder::Inorder).collect();
        prop_assert_eq!(inorder, expected);
    }

    /// Deleting from a BST removes exactly one occurrence.
    #[test]
    fn bst_delete_removes_one(values in values_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!values.is_empty());
        let target = values[pick.index(values.len())];
        let mut bst = Bst::from_values(values.iter().copied());
        prop_assert!(bst.delete(target));

        let mut expected = values.clone();
        expected.sort();
        let at = expected.iter().position(|&v| v == target).unwrap();
        expected.remove(at);
        let inorder: Vec<_> = bst.traverse(TraversalOrder::Inorder).collect();
        prop_assert_eq!(inorder, expected);
    }

    /// All three traversals visit every node exactly once.
    #[test]
    fn traversals_visit_every_node(values in values_strategy()) {
        let tree = AvlTree::from_values(values.iter().copied());
        let orders = [TraversalOrder::Inorder, TraversalOrder::Preorder, TraversalOrder::Postorder];
        for order in orders {
            let mut seen: Vec<_> = tree.traverse(order).collect();
            seen.sort();
            let expected: Vec<_> = tree.traverse(TraversalOrder::Inorder).collect();
            prop_assert_eq!(seen, expected);
        }
    }
}

// -----------------------------------------------------------------------------
// Heap, hashing, arrays
// -----------------------------------------------------------------------------

proptest! {
    /// Draining a heap yields its values in rank order.
    #[test]
    fn heap_drains_in_order(values in values_strategy(), kind in heap_kind_strategy()) {
        let mut heap = Heap::new();
        for &v in &values {
            heap.insert(v, kind);
            prop_assert!(heap.is_valid(kind));
        }

        let mut expected = values.clone();
        expected.sort();
        if kind == HeapKind::Max {
            expected.reverse();
        }
        prop_assert_eq!(heap.drain_ordered(kind), expected);
        prop_assert!(heap.is_empty());
    }

    /// Re-heapifying under the other ordering restores validity.
    #[test]
    fn heapify_restores_order(values in values_strategy()) {
        let mut heap: Heap = values.iter().copied().collect();
        heap.heapify(HeapKind::Min);
        prop_assert!(heap.is_valid(HeapKind::Min));
    }

    /// Search agrees with a plain map for any sequence of distinct-key
    /// inserts that fits in the table.
    #[test]
    fn hash_table_agrees_with_map(
        pairs in prop::collection::vec(("[a-z]{1,6}", "[a-z0-9]{0,4}"), 0..24),
        capacity in 24usize..40,
    ) {
        let mut table = HashTable::new(capacity).unwrap();
        let mut model = BTreeMap::new();
        for (key, value) in &pairs {
            table.insert(key, value).unwrap();
            model.insert(key.clone(), value.clone());
        }

        prop_assert_eq!(table.len(), model.len());
        for (key, value) in &model {
            prop_assert_eq!(table.search(key), Some(value.as_str()));
        }
    }

    /// Tombstones keep every surviving key reachable after deletes.
    #[test]
    fn hash_table_delete_keeps_survivors(
        keys in prop::collection::btree_set("[a-z]{1,5}", 1..16),
        stride in 1usize..4,
    ) {
        let mut table = HashTable::new(16).unwrap();
        for key in &keys {
            table.insert(key, key).unwrap();
        }
        let (gone, kept): (Vec<_>, Vec<_>) =
            keys.iter().enumerate().partition(|(i, _)| i % (stride + 1) == 0);

        for (_, key) in &gone {
            prop_assert!(table.delete(key).is_some());
        }
        for (_, key) in &gone {
            prop_assert!(!table.contains_key(key));
        }
        for (_, key) in &kept {
            prop_assert_eq!(table.search(key), Some(key.as_str()));
        }
    }

    /// Bubble sort agrees with the standard library sort.
    #[test]
    fn bubble_sort_sorts(mut values in values_strategy()) {
        let mut expected = values.clone();
        expected.sort();
        bubble_sort(&mut values, &mut NoTrace);
        prop_assert_eq!(values, expected);
    }

    /// Binary search finds exactly the values present in a sorted array.
    #[test]
    fn binary_search_finds_present(
        values in prop::collection::btree_set(-500i64..500, 0..64),
        target in -500i64..500,
    ) {
        let sorted: Vec<_> = values.iter().copied().collect();
        let found = binary_search(&sorted, target, &mut NoTrace);
        prop_assert_eq!(found, sorted.iter().position(|&v| v == target));
    }
}

// -----------------------------------------------------------------------------
// Graphs
// -----------------------------------------------------------------------------

proptest! {
    /// Dijkstra agrees with exhaustive edge relaxation on non-negative weights.
    #[test]
    fn dijkstra_matches_relaxation((n, edges) in graph_strategy()) {
        let graph = Graph::from_edges(
            0..n,
            edges.iter().map(|&(from, to, weight)| Edge::new(from, to, weight)),
        )
        .unwrap();

        let paths = shortest_paths(&graph, &0).unwrap();
        let expected = bellman_ford(n, &edges, 0);
        for v in 0..n {
            prop_assert_eq!(paths.distance(&v), expected[v as usize], "vertex {}", v);
        }
    }

    /// Every reconstructed path starts at the source, ends at the target and
    /// sums to the reported distance.
    #[test]
    fn dijkstra_paths_are_consistent((n, edges) in graph_strategy()) {
        let graph = Graph::from_edges(
            0..n,
            edges.iter().map(|&(from, to, weight)| Edge::new(from, to, weight)),
        )
        .unwrap();
        let paths = shortest_paths(&graph, &0).unwrap();

        for v in 0..n {
            match (paths.distance(&v), paths.path_to(&v)) {
                (Some(distance), Some(path)) => {
                    prop_assert_eq!(path.first(), Some(&0));
                    prop_assert_eq!(path.last(), Some(&v));
                    let total: u64 = path
                        .windows(2)
                        .map(|hop| {
                            edges
                                .iter()
                                .filter(|&&(f, t, _)| f == hop[0] && t == hop[1])
                                .map(|&(_, _, w)| w)
                                .min()
                                .unwrap_or(u64::MAX)
                        })
                        .sum();
                    prop_assert_eq!(total, distance);
                }
                (None, None) => {}
                other => prop_assert!(false, "distance and path disagree: {:?}", other),
            }
        }
    }
}
