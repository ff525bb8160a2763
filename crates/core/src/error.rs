use hpotk_term_id::{TermId, TermIdError};

/// Structural and lookup errors raised by the ontology graph.
///
/// The first six variants are construction-time errors: no partial graph is ever returned when
/// one of them is reported. [`GraphError::UnknownTermId`] is a per-query error and leaves the
/// graph untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("node {0} is declared more than once")]
    DuplicateNode(TermId),
    #[error("edge {child} -> {parent} references unknown node {missing}")]
    DanglingEdge {
        child: TermId,
        parent: TermId,
        missing: TermId,
    },
    #[error("edge {child} -> {parent} is declared more than once")]
    DuplicateEdge { child: TermId, parent: TermId },
    #[error("is-a edges form a cycle through {}", join_ids(.cycle))]
    CycleDetected { cycle: Vec<TermId> },
    #[error("expected exactly one root (node without parents), found {}: [{}]", .roots.len(), join_ids(.roots))]
    RootCountError { roots: Vec<TermId> },
    #[error("node {node} is not reachable from root {root}")]
    DisconnectedNode { node: TermId, root: TermId },

    #[error("unknown term id {0}")]
    UnknownTermId(TermId),
}

pub type GraphResult<T> = std::result::Result<T, GraphError>;

/// Errors raised while pairing a graph with term metadata.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OntologyError {
    #[error(
        "term metadata does not match graph nodes (missing metadata: [{}]; orphaned metadata: [{}])",
        join_ids(.missing),
        join_ids(.orphaned)
    )]
    MetadataMismatch {
        missing: Vec<TermId>,
        orphaned: Vec<TermId>,
    },
    #[error("term registered under {key} carries id {id}")]
    MisfiledTerm { key: TermId, id: TermId },
    #[error("invalid term {id}: {reason}")]
    InvalidTerm { id: TermId, reason: String },
    #[error("alternative id {alt} is claimed by both {first} and {second}")]
    AmbiguousAlternativeId {
        alt: TermId,
        first: TermId,
        second: TermId,
    },
    #[error("alternative id {alt} of {term} is itself a primary term id")]
    AlternativeIdIsPrimary { alt: TermId, term: TermId },
    #[error("unknown term id {0}")]
    UnknownTermId(TermId),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
    #[error(transparent)]
    TermId(#[from] TermIdError),
}

pub type OntologyResult<T> = std::result::Result<T, OntologyError>;

/// Errors raised by the disease annotation loader.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnnotationError {
    #[error("disease {disease} references term {term} which is not in the ontology")]
    UnknownAnnotationTerm { disease: TermId, term: TermId },
    #[error("disease {disease}, term {term}: invalid frequency {numerator}/{denominator}")]
    InvalidFrequency {
        disease: TermId,
        term: TermId,
        numerator: u32,
        denominator: u32,
    },
    #[error("disease {disease}, term {term}: merged counts overflow a 32-bit counter")]
    CountOverflow { disease: TermId, term: TermId },
    #[error("disease {disease}, term {term}: at least one reference is required")]
    MissingReferences { disease: TermId, term: TermId },
    #[error("disease {disease} is named both '{first}' and '{second}'")]
    InconsistentDisease {
        disease: TermId,
        first: String,
        second: String,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type AnnotationResult<T> = std::result::Result<T, AnnotationError>;

/// Errors raised while resolving runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

fn join_ids(ids: &[TermId]) -> String {
    ids.iter()
        .map(TermId::value)
        .collect::<Vec<_>>()
        .join(", ")
}
