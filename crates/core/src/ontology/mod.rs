//! Ontologies: a validated graph paired with term metadata.
//!
//! The metadata flavour is chosen when loading:
//! - [`MinimalOntology`] keeps ids, names and obsolescence flags only
//! - [`Ontology`] keeps full [`Term`] records
//!
//! Both are [`GenericOntology`] instances and expose the same query surface. Graph queries are
//! delegated unchanged to the wrapped [`OntologyGraph`]; the wrapper itself only adds metadata
//! lookup and alternative-id resolution. The graph is held behind an [`Arc`], so ontologies
//! derived from one another share the same frozen graph and its memoised closures.

pub mod term;

pub use term::{MinimalTerm, Synonym, SynonymCategory, SynonymType, Term, TermLike};

use crate::graph::{GraphAware, OntologyGraph};
use crate::{GraphResult, OntologyError, OntologyResult};
use hpotk_term_id::TermId;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

/// Ontology with full term metadata.
pub type Ontology = GenericOntology<Term>;

/// Ontology with ids, names and obsolescence flags only.
pub type MinimalOntology = GenericOntology<MinimalTerm>;

/// A frozen [`OntologyGraph`] plus one metadata record per node.
#[derive(Debug)]
pub struct GenericOntology<T: TermLike> {
    graph: Arc<OntologyGraph>,
    terms: HashMap<TermId, T>,
    alt_to_primary: HashMap<TermId, TermId>,
    version: Option<String>,
}

impl<T: TermLike> GraphAware for GenericOntology<T> {
    fn graph(&self) -> &OntologyGraph {
        self.graph.as_ref()
    }
}

impl<T: TermLike> GenericOntology<T> {
    /// Pairs `graph` with `terms`.
    ///
    /// # Errors
    ///
    /// - [`OntologyError::MetadataMismatch`] if the term ids and graph nodes differ.
    /// - [`OntologyError::MisfiledTerm`] if two terms share an id.
    /// - [`OntologyError::AmbiguousAlternativeId`] or [`OntologyError::AlternativeIdIsPrimary`]
    ///   for conflicting alternative ids.
    pub fn new(
        graph: impl Into<Arc<OntologyGraph>>,
        terms: impl IntoIterator<Item = T>,
        version: Option<String>,
    ) -> OntologyResult<Self> {
        let graph: Arc<OntologyGraph> = graph.into();
        let mut by_id: HashMap<TermId, T> = HashMap::with_capacity(graph.len());
        for term in terms {
            if let Some(previous) = by_id.insert(term.id().clone(), term) {
                return Err(OntologyError::MisfiledTerm {
                    key: previous.id().clone(),
                    id: previous.id().clone(),
                });
            }
        }
        Self::from_map(graph, by_id, version)
    }

    /// Pairs `graph` with a prepared id-to-term map.
    ///
    /// # Errors
    ///
    /// - [`OntologyError::MisfiledTerm`] if a term is stored under a key other than its own id.
    /// - [`OntologyError::MetadataMismatch`] if the map keys and graph nodes differ.
    /// - [`OntologyError::AmbiguousAlternativeId`] if two terms claim the same alternative id.
    /// - [`OntologyError::AlternativeIdIsPrimary`] if an alternative id is a graph node.
    pub fn from_map(
        graph: impl Into<Arc<OntologyGraph>>,
        terms: HashMap<TermId, T>,
        version: Option<String>,
    ) -> OntologyResult<Self> {
        let graph = graph.into();
        if let Some((key, term)) = terms.iter().find(|(key, term)| *key != term.id()) {
            return Err(OntologyError::MisfiledTerm {
                key: key.clone(),
                id: term.id().clone(),
            });
        }

        let missing: Vec<TermId> = graph
            .nodes()
            .filter(|id| !terms.contains_key(*id))
            .cloned()
            .collect();
        let mut orphaned: Vec<TermId> = terms
            .keys()
            .filter(|id| !graph.contains(id))
            .cloned()
            .collect();
        if !missing.is_empty() || !orphaned.is_empty() {
            orphaned.sort();
            let err = OntologyError::MetadataMismatch { missing, orphaned };
            tracing::warn!(error = %err, "rejected ontology metadata");
            return Err(err);
        }

        let alt_to_primary = match index_alternative_ids(&graph, &terms) {
            Ok(index) => index,
            Err(err) => {
                tracing::warn!(error = %err, "rejected ontology metadata");
                return Err(err);
            }
        };

        tracing::debug!(
            terms = terms.len(),
            alt_ids = alt_to_primary.len(),
            version = version.as_deref().unwrap_or("unknown"),
            "built ontology"
        );

        Ok(Self {
            graph,
            terms,
            alt_to_primary,
            version,
        })
    }

    /// Release identifier of the ontology, when the source declared one.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn graph(&self) -> &OntologyGraph {
        self.graph.as_ref()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Metadata for `id`. Obsolete terms are returned too; check [`TermLike::is_obsolete`].
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::UnknownTermId`] if `id` is not a primary term id.
    pub fn term_for(&self, id: &TermId) -> OntologyResult<&T> {
        self.terms
            .get(id)
            .ok_or_else(|| OntologyError::UnknownTermId(id.clone()))
    }

    /// All primary term ids, in identifier order.
    pub fn all_term_ids(&self) -> impl ExactSizeIterator<Item = &TermId> + '_ {
        self.graph.nodes()
    }

    /// Iterates terms in identifier order.
    pub fn terms(&self) -> impl Iterator<Item = &T> + '_ {
        self.graph.nodes().filter_map(|id| self.terms.get(id))
    }

    /// Ids of terms flagged obsolete, in identifier order.
    pub fn obsolete_term_ids(&self) -> impl Iterator<Item = &TermId> + '_ {
        self.terms().filter(|t| t.is_obsolete()).map(TermLike::id)
    }

    /// Resolves a primary or alternative id to the primary id.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::UnknownTermId`] if `id` is neither.
    pub fn primary_term_id<'a>(&'a self, id: &'a TermId) -> OntologyResult<&'a TermId> {
        if self.graph.contains(id) {
            return Ok(id);
        }
        self.alt_to_primary
            .get(id)
            .ok_or_else(|| OntologyError::UnknownTermId(id.clone()))
    }

    pub fn root(&self) -> &TermId {
        self.graph.root()
    }

    pub fn contains(&self, id: &TermId) -> bool {
        self.graph.contains(id)
    }

    pub fn parents_of(&self, id: &TermId) -> GraphResult<BTreeSet<TermId>> {
        self.graph.parents_of(id)
    }

    pub fn children_of(&self, id: &TermId) -> GraphResult<BTreeSet<TermId>> {
        self.graph.children_of(id)
    }

    pub fn is_leaf(&self, id: &TermId) -> GraphResult<bool> {
        self.graph.is_leaf(id)
    }

    pub fn ancestors_of(&self, id: &TermId, include_self: bool) -> GraphResult<BTreeSet<TermId>> {
        self.graph.ancestors_of(id, include_self)
    }

    pub fn descendants_of(
        &self,
        id: &TermId,
        include_self: bool,
    ) -> GraphResult<BTreeSet<TermId>> {
        self.graph.descendants_of(id, include_self)
    }

    pub fn is_ancestor_of(&self, a: &TermId, b: &TermId) -> GraphResult<bool> {
        self.graph.is_ancestor_of(a, b)
    }

    pub fn is_descendant_of(&self, a: &TermId, b: &TermId) -> GraphResult<bool> {
        self.graph.is_descendant_of(a, b)
    }

    pub fn exists_path(&self, a: &TermId, b: &TermId) -> GraphResult<bool> {
        self.graph.exists_path(a, b)
    }

    pub fn lowest_common_ancestors(
        &self,
        a: &TermId,
        b: &TermId,
    ) -> GraphResult<BTreeSet<TermId>> {
        self.graph.lowest_common_ancestors(a, b)
    }
}

impl Ontology {
    /// Drops everything but ids, names and obsolescence flags. The graph is shared, not copied.
    pub fn to_minimal(&self) -> MinimalOntology {
        let terms = self
            .terms
            .iter()
            .map(|(id, term)| (id.clone(), MinimalTerm::from(term)))
            .collect();
        MinimalOntology {
            graph: Arc::clone(&self.graph),
            terms,
            alt_to_primary: HashMap::new(),
            version: self.version.clone(),
        }
    }
}

/// Maps every alternative id to its primary id, visiting terms in identifier order.
fn index_alternative_ids<T: TermLike>(
    graph: &OntologyGraph,
    terms: &HashMap<TermId, T>,
) -> OntologyResult<HashMap<TermId, TermId>> {
    let mut index: HashMap<TermId, TermId> = HashMap::new();
    for term in graph.nodes().filter_map(|id| terms.get(id)) {
        for alt in term.alt_term_ids() {
            if graph.contains(alt) {
                return Err(OntologyError::AlternativeIdIsPrimary {
                    alt: alt.clone(),
                    term: term.id().clone(),
                });
            }
            match index.get(alt) {
                Some(first) if first != term.id() => {
                    return Err(OntologyError::AmbiguousAlternativeId {
                        alt: alt.clone(),
                        first: first.clone(),
                        second: term.id().clone(),
                    });
                }
                Some(_) => {}
                None => {
                    index.insert(alt.clone(), term.id().clone());
                }
            }
        }
    }
    Ok(index)
}
