//! Mutable construction phase of an [`OntologyGraph`].

use super::OntologyGraph;
use crate::validation::validate_graph_input;
use crate::GraphResult;
use hpotk_term_id::TermId;

/// Collects raw nodes and is-a edges, then validates them into an [`OntologyGraph`].
///
/// The builder performs no checks while collecting: duplicates and unknown nodes are recorded
/// as given and reported by [`GraphBuilder::build`], so nothing is silently dropped.
///
/// # Examples
///
/// ```
/// use hpotk_core::GraphBuilder;
/// use hpotk_term_id::TermId;
///
/// let root = TermId::parse("HP:0000001").unwrap();
/// let child = TermId::parse("HP:0000118").unwrap();
///
/// let mut builder = GraphBuilder::new();
/// builder
///     .add_node(root.clone())
///     .add_node(child.clone())
///     .add_is_a(child.clone(), root.clone());
///
/// let graph = builder.build().unwrap();
/// assert_eq!(graph.root(), &root);
/// assert!(graph.is_ancestor_of(&root, &child).unwrap());
/// ```
#[derive(Debug, Default, Clone)]
pub struct GraphBuilder {
    nodes: Vec<TermId>,
    edges: Vec<(TermId, TermId)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a node.
    pub fn add_node(&mut self, id: TermId) -> &mut Self {
        self.nodes.push(id);
        self
    }

    pub fn add_nodes(&mut self, ids: impl IntoIterator<Item = TermId>) -> &mut Self {
        self.nodes.extend(ids);
        self
    }

    /// Records the edge "`child` is-a `parent`".
    pub fn add_is_a(&mut self, child: TermId, parent: TermId) -> &mut Self {
        self.edges.push((child, parent));
        self
    }

    /// Records `(child, parent)` is-a edges.
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = (TermId, TermId)>) -> &mut Self {
        self.edges.extend(edges);
        self
    }

    /// Validates the collected input and freezes it.
    ///
    /// # Errors
    ///
    /// Returns the first structural defect, checked in this order: `DuplicateNode`,
    /// `DanglingEdge`, `DuplicateEdge`, `RootCountError`, `CycleDetected`, `DisconnectedNode`.
    pub fn build(self) -> GraphResult<OntologyGraph> {
        match validate_graph_input(&self.nodes, &self.edges) {
            Ok(indexed) => {
                let graph = OntologyGraph::from_indexed(indexed);
                tracing::debug!(
                    nodes = graph.len(),
                    edges = graph.edge_count(),
                    root = %graph.root(),
                    "built ontology graph"
                );
                Ok(graph)
            }
            Err(err) => {
                tracing::warn!(
                    nodes = self.nodes.len(),
                    edges = self.edges.len(),
                    error = %err,
                    "rejected ontology graph input"
                );
                Err(err)
            }
        }
    }
}
