//! # hpotk core
//!
//! In-memory ontology graphs for the Human Phenotype Ontology and similar is-a hierarchies.
//!
//! This crate contains pure, synchronous data operations:
//! - Validating node and edge input into a frozen single-rooted DAG ([`GraphBuilder`],
//!   [`OntologyGraph`])
//! - Pairing the graph with term metadata ([`Ontology`], [`MinimalOntology`])
//! - Disease annotation records and their loader ([`annotations`])
//! - Well-known HPO term identifiers ([`hpo`])
//! - Quality checks for sets of observed term ids ([`validate`])
//!
//! **No I/O**: reading ontology or annotation files belongs to callers, which hand parsed
//! identifiers, edges and rows to the builders here.

pub mod annotations;
pub mod config;
pub mod constants;
pub mod error;
pub mod graph;
pub mod hpo;
pub mod ontology;
pub mod validate;

mod validation;

pub use annotations::{
    EvidenceCode, HpoDisease, HpoDiseaseAnnotation, HpoDiseases, RawAnnotation, Reference,
    SimpleDiseaseLoader,
};
pub use config::{cohort_size_from_env_value, CoreConfig};
pub use error::{
    AnnotationError, AnnotationResult, ConfigError, ConfigResult, GraphError, GraphResult,
    OntologyError, OntologyResult,
};
pub use graph::{GraphAware, GraphBuilder, OntologyGraph};
pub use hpotk_term_id::{TermId, TermIdError};
pub use ontology::{
    GenericOntology, MinimalOntology, MinimalTerm, Ontology, Synonym, SynonymCategory,
    SynonymType, Term, TermLike,
};
pub use validate::{
    AnnotationPropagationValidator, DescendantValidator, ObsoleteTermIdsValidator, RuleValidator,
    ValidationLevel, ValidationResult, ValidationResults, ValidationRunner,
};
