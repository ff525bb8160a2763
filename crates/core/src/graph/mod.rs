//! The frozen is-a graph and its read-only query surface.
//!
//! An [`OntologyGraph`] is produced only by [`GraphBuilder::build`], after structural
//! validation. It has no mutating methods, so it can be shared across threads and queried
//! concurrently without locking.
//!
//! Internally every node is addressed by its position in the identifier-sorted node list, and
//! both adjacency views (child to parents, parent to children) are stored as sorted index lists.
//! Transitive closures are memoised per node the first time they are requested.

mod builder;

pub use builder::GraphBuilder;

use crate::validation::IndexedGraph;
use crate::{GraphError, GraphResult};
use dashmap::DashMap;
use hpotk_term_id::TermId;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

/// Anything that carries an [`OntologyGraph`].
///
/// Consumers that only need the hierarchy (annotation loaders, algorithms) should accept
/// `&impl GraphAware` so they work with a bare graph and with either ontology flavour.
pub trait GraphAware {
    fn graph(&self) -> &OntologyGraph;
}

#[derive(Clone, Copy)]
enum Direction {
    Up,
    Down,
}

/// Validated, immutable directed acyclic graph of is-a relations.
#[derive(Debug)]
pub struct OntologyGraph {
    ids: Vec<TermId>,
    index: HashMap<TermId, usize>,
    parents: Vec<Vec<usize>>,
    children: Vec<Vec<usize>>,
    root: usize,
    edge_count: usize,
    ancestors: DashMap<usize, Arc<[usize]>>,
    descendants: DashMap<usize, Arc<[usize]>>,
}

impl GraphAware for OntologyGraph {
    fn graph(&self) -> &OntologyGraph {
        self
    }
}

impl OntologyGraph {
    /// Validates `nodes` and `(child, parent)` edges in one step.
    ///
    /// Equivalent to feeding a [`GraphBuilder`] and calling [`GraphBuilder::build`].
    pub fn from_parts(
        nodes: impl IntoIterator<Item = TermId>,
        edges: impl IntoIterator<Item = (TermId, TermId)>,
    ) -> GraphResult<Self> {
        let mut builder = GraphBuilder::new();
        builder.add_nodes(nodes).add_edges(edges);
        builder.build()
    }

    pub(crate) fn from_indexed(indexed: IndexedGraph) -> Self {
        let IndexedGraph {
            ids,
            index,
            parents,
            children,
            root,
            edge_count,
        } = indexed;

        Self {
            ids,
            index,
            parents,
            children,
            root,
            edge_count,
            ancestors: DashMap::new(),
            descendants: DashMap::new(),
        }
    }

    /// The single node without parents.
    pub fn root(&self) -> &TermId {
        &self.ids[self.root]
    }

    /// All nodes in identifier order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &TermId> + '_ {
        self.ids.iter()
    }

    /// All `(child, parent)` edges, ordered by child then parent.
    pub fn edges(&self) -> impl Iterator<Item = (&TermId, &TermId)> + '_ {
        self.parents.iter().enumerate().flat_map(move |(child, parents)| {
            parents
                .iter()
                .map(move |&parent| (&self.ids[child], &self.ids[parent]))
        })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Always false: a valid graph has at least its root.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains(&self, id: &TermId) -> bool {
        self.index.contains_key(id)
    }

    /// Direct parents of `id`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownTermId`] if `id` is not a node.
    pub fn parents_of(&self, id: &TermId) -> GraphResult<BTreeSet<TermId>> {
        let node = self.node(id)?;
        Ok(self.to_ids(&self.parents[node]))
    }

    /// Direct children of `id`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownTermId`] if `id` is not a node.
    pub fn children_of(&self, id: &TermId) -> GraphResult<BTreeSet<TermId>> {
        let node = self.node(id)?;
        Ok(self.to_ids(&self.children[node]))
    }

    /// True if `id` has no children.
    pub fn is_leaf(&self, id: &TermId) -> GraphResult<bool> {
        let node = self.node(id)?;
        Ok(self.children[node].is_empty())
    }

    /// Every node reachable from `id` by following parent edges, up to and including the root.
    ///
    /// With `include_self` the result also contains `id`. The root has no ancestors.
    pub fn ancestors_of(&self, id: &TermId, include_self: bool) -> GraphResult<BTreeSet<TermId>> {
        let node = self.node(id)?;
        Ok(self.closure_ids(node, Direction::Up, include_self))
    }

    /// Every node reachable from `id` by following child edges.
    ///
    /// With `include_self` the result also contains `id`.
    pub fn descendants_of(
        &self,
        id: &TermId,
        include_self: bool,
    ) -> GraphResult<BTreeSet<TermId>> {
        let node = self.node(id)?;
        Ok(self.closure_ids(node, Direction::Down, include_self))
    }

    /// True if `a` is a proper ancestor of `b`.
    pub fn is_ancestor_of(&self, a: &TermId, b: &TermId) -> GraphResult<bool> {
        let a = self.node(a)?;
        let b = self.node(b)?;
        Ok(self.reaches(b, a, Direction::Up))
    }

    /// True if `a` is a proper descendant of `b`.
    pub fn is_descendant_of(&self, a: &TermId, b: &TermId) -> GraphResult<bool> {
        let a = self.node(a)?;
        let b = self.node(b)?;
        Ok(self.reaches(a, b, Direction::Up))
    }

    /// True if `a == b` or one is an ancestor of the other.
    pub fn exists_path(&self, a: &TermId, b: &TermId) -> GraphResult<bool> {
        let a = self.node(a)?;
        let b = self.node(b)?;
        Ok(a == b || self.reaches(a, b, Direction::Up) || self.reaches(b, a, Direction::Up))
    }

    /// The most specific common ancestors of `a` and `b` (each term counts as its own ancestor).
    ///
    /// In a DAG there may be several incomparable answers; none of the returned terms is an
    /// ancestor of another.
    pub fn lowest_common_ancestors(
        &self,
        a: &TermId,
        b: &TermId,
    ) -> GraphResult<BTreeSet<TermId>> {
        let a = self.node(a)?;
        let b = self.node(b)?;

        let of_a = self.closure(a, Direction::Up);
        let of_b = self.closure(b, Direction::Up);

        let mut common: BTreeSet<usize> = of_a
            .iter()
            .copied()
            .chain(std::iter::once(a))
            .filter(|n| *n == b || of_b.binary_search(n).is_ok())
            .collect();

        let candidates: Vec<usize> = common.iter().copied().collect();
        for candidate in candidates {
            for ancestor in self.closure(candidate, Direction::Up).iter() {
                common.remove(ancestor);
            }
        }

        Ok(common.into_iter().map(|n| self.ids[n].clone()).collect())
    }

    fn node(&self, id: &TermId) -> GraphResult<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownTermId(id.clone()))
    }

    fn to_ids(&self, nodes: &[usize]) -> BTreeSet<TermId> {
        nodes.iter().map(|&n| self.ids[n].clone()).collect()
    }

    fn closure_ids(&self, node: usize, direction: Direction, include_self: bool) -> BTreeSet<TermId> {
        let mut ids = self.to_ids(&self.closure(node, direction));
        if include_self {
            ids.insert(self.ids[node].clone());
        }
        ids
    }

    fn adjacency(&self, direction: Direction) -> &[Vec<usize>] {
        match direction {
            Direction::Up => &self.parents,
            Direction::Down => &self.children,
        }
    }

    /// Sorted proper ancestors (`Up`) or descendants (`Down`) of `node`, memoised.
    fn closure(&self, node: usize, direction: Direction) -> Arc<[usize]> {
        let cache = match direction {
            Direction::Up => &self.ancestors,
            Direction::Down => &self.descendants,
        };
        if let Some(hit) = cache.get(&node) {
            return Arc::clone(hit.value());
        }

        let adjacency = self.adjacency(direction);
        let mut seen = vec![false; self.ids.len()];
        let mut stack: Vec<usize> = adjacency[node].clone();
        let mut found = Vec::new();
        while let Some(next) = stack.pop() {
            if seen[next] {
                continue;
            }
            seen[next] = true;
            found.push(next);
            stack.extend(adjacency[next].iter().copied().filter(|n| !seen[*n]));
        }
        found.sort_unstable();

        let computed: Arc<[usize]> = found.into();
        Arc::clone(cache.entry(node).or_insert(computed).value())
    }

    /// True if `target` is a proper neighbour-closure member of `from` in `direction`.
    ///
    /// Uses a cached closure when one exists and a short-circuiting walk otherwise.
    fn reaches(&self, from: usize, target: usize, direction: Direction) -> bool {
        if from == target {
            return false;
        }
        let cache = match direction {
            Direction::Up => &self.ancestors,
            Direction::Down => &self.descendants,
        };
        if let Some(hit) = cache.get(&from) {
            return hit.binary_search(&target).is_ok();
        }

        let adjacency = self.adjacency(direction);
        let mut seen = vec![false; self.ids.len()];
        let mut stack: Vec<usize> = adjacency[from].clone();
        while let Some(next) = stack.pop() {
            if next == target {
                return true;
            }
            if !seen[next] {
                seen[next] = true;
                stack.extend(adjacency[next].iter().copied().filter(|n| !seen[*n]));
            }
        }
        false
    }
}
