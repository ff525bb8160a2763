//! Structural validation of raw graph input.
//!
//! This module turns an untrusted node list and is-a edge list into a dense, index-based
//! adjacency structure, or reports the first structural defect it finds. Checks run in a fixed
//! order so that the same input always reports the same error:
//!
//! 1. duplicate nodes
//! 2. dangling edges
//! 3. duplicate edges
//! 4. root count
//! 5. cycles
//! 6. reachability from the root
//!
//! A non-empty graph where every node has a parent must contain a cycle, so that case is
//! reported as a cycle rather than as a root count problem.
//!
//! Nodes are indexed in identifier order. Every traversal here is iterative, so adversarially
//! deep input cannot exhaust the call stack.

use crate::{GraphError, GraphResult};
use hpotk_term_id::TermId;
use std::collections::{HashMap, HashSet, VecDeque};

/// Validated, index-based form of a graph. Index `i` refers to `ids[i]`.
#[derive(Debug)]
pub(crate) struct IndexedGraph {
    pub ids: Vec<TermId>,
    pub index: HashMap<TermId, usize>,
    pub parents: Vec<Vec<usize>>,
    pub children: Vec<Vec<usize>>,
    pub root: usize,
    pub edge_count: usize,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Colour {
    Unvisited,
    InProgress,
    Done,
}

/// Validates raw nodes and `(child, parent)` edges.
///
/// # Errors
///
/// Returns the first [`GraphError`] found, in the priority order described in the module docs.
pub(crate) fn validate_graph_input(
    nodes: &[TermId],
    edges: &[(TermId, TermId)],
) -> GraphResult<IndexedGraph> {
    let mut seen = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if !seen.insert(node) {
            return Err(GraphError::DuplicateNode(node.clone()));
        }
    }

    let mut ids = nodes.to_vec();
    ids.sort();
    let index: HashMap<TermId, usize> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| (id.clone(), i))
        .collect();

    let mut indexed_edges = Vec::with_capacity(edges.len());
    for (child, parent) in edges {
        let lookup = |id: &TermId| {
            index
                .get(id)
                .copied()
                .ok_or_else(|| GraphError::DanglingEdge {
                    child: child.clone(),
                    parent: parent.clone(),
                    missing: id.clone(),
                })
        };
        indexed_edges.push((lookup(child)?, lookup(parent)?));
    }

    let mut unique_edges = HashSet::with_capacity(indexed_edges.len());
    for (i, edge) in indexed_edges.iter().enumerate() {
        if !unique_edges.insert(*edge) {
            let (child, parent) = &edges[i];
            return Err(GraphError::DuplicateEdge {
                child: child.clone(),
                parent: parent.clone(),
            });
        }
    }

    let mut parents = vec![Vec::new(); ids.len()];
    let mut children = vec![Vec::new(); ids.len()];
    for &(child, parent) in &indexed_edges {
        parents[child].push(parent);
        children[parent].push(child);
    }
    for list in parents.iter_mut().chain(children.iter_mut()) {
        list.sort_unstable();
    }

    let roots: Vec<usize> = (0..ids.len()).filter(|&i| parents[i].is_empty()).collect();
    let root_count_error = || GraphError::RootCountError {
        roots: roots.iter().map(|&i| ids[i].clone()).collect(),
    };
    // Zero roots in a non-empty graph implies a cycle, which is the more useful report.
    if roots.len() > 1 || ids.is_empty() {
        return Err(root_count_error());
    }

    if let Some(cycle) = find_cycle(&parents) {
        return Err(GraphError::CycleDetected {
            cycle: cycle.into_iter().map(|i| ids[i].clone()).collect(),
        });
    }

    let root = match roots.as_slice() {
        [root] => *root,
        _ => return Err(root_count_error()),
    };

    let reached = reachable_from(root, &children);
    if let Some(orphan) = reached.iter().position(|r| !r) {
        return Err(GraphError::DisconnectedNode {
            node: ids[orphan].clone(),
            root: ids[root].clone(),
        });
    }

    Ok(IndexedGraph {
        ids,
        index,
        parents,
        children,
        root,
        edge_count: indexed_edges.len(),
    })
}

/// Walks parent edges from every node with three-colour marking.
///
/// Starting from every node, not only from the root, catches cycles in components the root
/// cannot see. Returns the nodes of the first cycle found, in walk order.
fn find_cycle(parents: &[Vec<usize>]) -> Option<Vec<usize>> {
    let mut colour = vec![Colour::Unvisited; parents.len()];
    // (node, position of the next parent to visit)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for start in 0..parents.len() {
        if colour[start] != Colour::Unvisited {
            continue;
        }
        colour[start] = Colour::InProgress;
        stack.push((start, 0));

        while let Some((node, next)) = stack.last_mut() {
            let node = *node;
            match parents[node].get(*next) {
                Some(&parent) => {
                    *next += 1;
                    match colour[parent] {
                        Colour::Unvisited => {
                            colour[parent] = Colour::InProgress;
                            stack.push((parent, 0));
                        }
                        Colour::InProgress => {
                            // `parent` is on the stack; the cycle is the stack from there up.
                            let from = stack
                                .iter()
                                .position(|&(n, _)| n == parent)
                                .unwrap_or_default();
                            return Some(stack[from..].iter().map(|&(n, _)| n).collect());
                        }
                        Colour::Done => {}
                    }
                }
                None => {
                    colour[node] = Colour::Done;
                    stack.pop();
                }
            }
        }
    }

    None
}

fn reachable_from(root: usize, children: &[Vec<usize>]) -> Vec<bool> {
    let mut reached = vec![false; children.len()];
    let mut queue = VecDeque::from([root]);
    reached[root] = true;

    while let Some(node) = queue.pop_front() {
        for &child in &children[node] {
            if !reached[child] {
                reached[child] = true;
                queue.push_back(child);
            }
        }
    }

    reached
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> TermId {
        TermId::parse(value).expect("valid term id")
    }

    fn edge(child: &str, parent: &str) -> (TermId, TermId) {
        (id(child), id(parent))
    }

    #[test]
    fn test_accepts_single_node() {
        let graph = validate_graph_input(&[id("HP:1")], &[]).expect("single root is valid");
        assert_eq!(graph.ids, vec![id("HP:1")]);
        assert_eq!(graph.root, 0);
        assert_eq!(graph.edge_count, 0);
    }

    #[test]
    fn test_indexes_in_identifier_order() {
        let nodes = [id("HP:3"), id("HP:1"), id("HP:2")];
        let edges = [edge("HP:2", "HP:1"), edge("HP:3", "HP:1")];
        let graph = validate_graph_input(&nodes, &edges).expect("valid");
        assert_eq!(graph.ids, vec![id("HP:1"), id("HP:2"), id("HP:3")]);
        assert_eq!(graph.children[0], vec![1, 2]);
        assert_eq!(graph.parents[2], vec![0]);
    }

    #[test]
    fn test_rejects_duplicate_node() {
        let nodes = [id("HP:1"), id("HP:2"), id("HP:1")];
        let err = validate_graph_input(&nodes, &[]).expect_err("should reject");
        assert_eq!(err, GraphError::DuplicateNode(id("HP:1")));
    }

    #[test]
    fn test_rejects_dangling_edge() {
        let nodes = [id("HP:1"), id("HP:2")];
        let edges = [edge("HP:2", "HP:1"), edge("HP:2", "HP:9")];
        let err = validate_graph_input(&nodes, &edges).expect_err("should reject");
        assert_eq!(
            err,
            GraphError::DanglingEdge {
                child: id("HP:2"),
                parent: id("HP:9"),
                missing: id("HP:9"),
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_edge() {
        let nodes = [id("HP:1"), id("HP:2")];
        let edges = [edge("HP:2", "HP:1"), edge("HP:2", "HP:1")];
        let err = validate_graph_input(&nodes, &edges).expect_err("should reject");
        assert_eq!(
            err,
            GraphError::DuplicateEdge {
                child: id("HP:2"),
                parent: id("HP:1"),
            }
        );
    }

    #[test]
    fn test_dangling_edge_wins_over_duplicate_edge() {
        let nodes = [id("HP:1"), id("HP:2")];
        let edges = [
            edge("HP:2", "HP:1"),
            edge("HP:2", "HP:1"),
            edge("HP:3", "HP:1"),
        ];
        let err = validate_graph_input(&nodes, &edges).expect_err("should reject");
        assert!(matches!(err, GraphError::DanglingEdge { .. }));
    }

    #[test]
    fn test_rejects_empty_input_as_root_count() {
        let err = validate_graph_input(&[], &[]).expect_err("should reject");
        assert_eq!(err, GraphError::RootCountError { roots: vec![] });
    }

    #[test]
    fn test_rejects_two_roots() {
        let nodes = [id("HP:1"), id("HP:2")];
        let err = validate_graph_input(&nodes, &[]).expect_err("should reject");
        assert_eq!(
            err,
            GraphError::RootCountError {
                roots: vec![id("HP:1"), id("HP:2")]
            }
        );
    }

    #[test]
    fn test_two_node_cycle_reports_cycle() {
        let nodes = [id("HP:1"), id("HP:2")];
        let edges = [edge("HP:1", "HP:2"), edge("HP:2", "HP:1")];
        let err = validate_graph_input(&nodes, &edges).expect_err("should reject");
        assert_eq!(
            err,
            GraphError::CycleDetected {
                cycle: vec![id("HP:1"), id("HP:2")]
            }
        );
    }

    #[test]
    fn test_extra_root_wins_over_cycle() {
        let nodes = [id("HP:1"), id("HP:2"), id("HP:3"), id("HP:4")];
        let edges = [edge("HP:3", "HP:4"), edge("HP:4", "HP:3")];
        let err = validate_graph_input(&nodes, &edges).expect_err("should reject");
        assert_eq!(
            err,
            GraphError::RootCountError {
                roots: vec![id("HP:1"), id("HP:2")]
            }
        );
    }

    #[test]
    fn test_detects_cycle_detached_from_root() {
        let nodes = [id("HP:1"), id("HP:2"), id("HP:3")];
        let edges = [edge("HP:2", "HP:3"), edge("HP:3", "HP:2")];
        let err = validate_graph_input(&nodes, &edges).expect_err("should reject");
        match err {
            GraphError::CycleDetected { cycle } => {
                assert_eq!(cycle, vec![id("HP:2"), id("HP:3")]);
            }
            other => panic!("expected CycleDetected, got {other:?}"),
        }
    }

    #[test]
    fn test_detects_self_loop() {
        let nodes = [id("HP:1"), id("HP:2")];
        let edges = [edge("HP:2", "HP:1"), edge("HP:2", "HP:2")];
        let err = validate_graph_input(&nodes, &edges).expect_err("should reject");
        assert_eq!(
            err,
            GraphError::CycleDetected {
                cycle: vec![id("HP:2")]
            }
        );
    }

    #[test]
    fn test_detects_cycle_below_root() {
        // HP:2 reaches the root, but is also part of the cycle 2 -> 4 -> 3 -> 2.
        let nodes = [id("HP:1"), id("HP:2"), id("HP:3"), id("HP:4")];
        let edges = [
            edge("HP:2", "HP:1"),
            edge("HP:3", "HP:2"),
            edge("HP:4", "HP:3"),
            edge("HP:2", "HP:4"),
        ];
        let err = validate_graph_input(&nodes, &edges).expect_err("should reject");
        match err {
            GraphError::CycleDetected { cycle } => {
                assert_eq!(cycle.len(), 3);
                for node in ["HP:2", "HP:3", "HP:4"] {
                    assert!(cycle.contains(&id(node)));
                }
            }
            other => panic!("expected CycleDetected, got {other:?}"),
        }
    }

    #[test]
    fn test_accepts_deep_chain() {
        let nodes: Vec<TermId> = (0..50_000).map(|i| id(&format!("HP:{i:07}"))).collect();
        let edges: Vec<(TermId, TermId)> = nodes
            .windows(2)
            .map(|pair| (pair[1].clone(), pair[0].clone()))
            .collect();
        let graph = validate_graph_input(&nodes, &edges).expect("deep chain is valid");
        assert_eq!(graph.ids[graph.root], id("HP:0000000"));
    }

    #[test]
    fn test_reachable_from_marks_only_reachable_nodes() {
        let children = vec![vec![1], vec![], vec![]];
        assert_eq!(reachable_from(0, &children), vec![true, true, false]);
    }
}
