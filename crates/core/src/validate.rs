//! Quality checks for sets of term ids, typically the phenotype terms of one patient or disease.
//!
//! Each [`RuleValidator`] inspects a slice of observed (present) term ids against an ontology
//! and reports findings as [`ValidationResult`]s. Findings never abort the check; callers decide
//! what to do with warnings and errors. [`ValidationRunner`] applies several validators in turn.

use crate::hpo::base;
use crate::ontology::{GenericOntology, TermLike};
use crate::{OntologyError, OntologyResult};
use hpotk_term_id::TermId;
use serde::Serialize;
use std::collections::BTreeSet;

/// Severity of a finding. Ordered so that `Error > Warning`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationLevel {
    Warning,
    Error,
}

/// One finding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub level: ValidationLevel,
    /// Stable machine-readable category, e.g. `obsolete_term_id_is_used`.
    pub category: &'static str,
    pub message: String,
}

/// Findings of one or more validators, in the order they were reported.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResults {
    results: Vec<ValidationResult>,
}

impl ValidationResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: ValidationLevel, category: &'static str, message: String) {
        self.results.push(ValidationResult {
            level,
            category,
            message,
        });
    }

    pub fn extend(&mut self, other: ValidationResults) {
        self.results.extend(other.results);
    }

    /// True if no finding has [`ValidationLevel::Error`]. Warnings are allowed.
    pub fn is_ok(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationResult> + '_ {
        self.results
            .iter()
            .filter(|r| r.level == ValidationLevel::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationResult> + '_ {
        self.results
            .iter()
            .filter(|r| r.level == ValidationLevel::Warning)
    }
}

/// A single check over a set of observed term ids.
pub trait RuleValidator {
    fn validate(&self, items: &[TermId]) -> ValidationResults;
}

/// Unique primary ids of `items`, in identifier order. Unknown ids are dropped.
fn resolve_known<T: TermLike>(ontology: &GenericOntology<T>, items: &[TermId]) -> BTreeSet<TermId> {
    items
        .iter()
        .filter_map(|item| ontology.primary_term_id(item).ok())
        .cloned()
        .collect()
}

fn name_of<'a, T: TermLike>(ontology: &'a GenericOntology<T>, id: &TermId) -> &'a str {
    ontology.term_for(id).map(|term| term.name()).unwrap_or("unknown")
}

/// Warns about alternative ids and ids of terms flagged obsolete.
#[derive(Debug)]
pub struct ObsoleteTermIdsValidator<'a, T: TermLike> {
    ontology: &'a GenericOntology<T>,
}

impl<'a, T: TermLike> ObsoleteTermIdsValidator<'a, T> {
    pub const CATEGORY: &'static str = "obsolete_term_id_is_used";

    pub fn new(ontology: &'a GenericOntology<T>) -> Self {
        Self { ontology }
    }
}

impl<T: TermLike> RuleValidator for ObsoleteTermIdsValidator<'_, T> {
    fn validate(&self, items: &[TermId]) -> ValidationResults {
        let mut results = ValidationResults::new();
        for item in items {
            let Ok(primary) = self.ontology.primary_term_id(item) else {
                continue;
            };
            if primary != item {
                results.push(
                    ValidationLevel::Warning,
                    Self::CATEGORY,
                    format!(
                        "using the alternative id {item} instead of {primary} for {}",
                        name_of(self.ontology, primary)
                    ),
                );
            } else if self.ontology.term_for(primary).is_ok_and(|term| term.is_obsolete()) {
                results.push(
                    ValidationLevel::Warning,
                    Self::CATEGORY,
                    format!(
                        "{item} ({}) is flagged obsolete",
                        name_of(self.ontology, primary)
                    ),
                );
            }
        }
        results
    }
}

/// Rejects sets that contain a term together with one of its ancestors.
///
/// Annotations are implicitly propagated up the hierarchy, so listing an ancestor next to a more
/// specific term adds nothing and usually indicates a curation error.
#[derive(Debug)]
pub struct AnnotationPropagationValidator<'a, T: TermLike> {
    ontology: &'a GenericOntology<T>,
}

impl<'a, T: TermLike> AnnotationPropagationValidator<'a, T> {
    pub const CATEGORY: &'static str = "annotation_propagation";

    pub fn new(ontology: &'a GenericOntology<T>) -> Self {
        Self { ontology }
    }
}

impl<T: TermLike> RuleValidator for AnnotationPropagationValidator<'_, T> {
    fn validate(&self, items: &[TermId]) -> ValidationResults {
        let mut results = ValidationResults::new();
        let observed = resolve_known(self.ontology, items);
        for term in &observed {
            let Ok(ancestors) = self.ontology.ancestors_of(term, false) else {
                continue;
            };
            for ancestor in ancestors.intersection(&observed) {
                results.push(
                    ValidationLevel::Error,
                    Self::CATEGORY,
                    format!(
                        "{term} ({}) is listed together with its ancestor {ancestor} ({})",
                        name_of(self.ontology, term),
                        name_of(self.ontology, ancestor)
                    ),
                );
            }
        }
        results
    }
}

/// Requires every item to be a known term below a fixed branch root, by default
/// [`base::PHENOTYPIC_ABNORMALITY`].
#[derive(Debug)]
pub struct DescendantValidator<'a, T: TermLike> {
    ontology: &'a GenericOntology<T>,
    branch: TermId,
}

impl<'a, T: TermLike> DescendantValidator<'a, T> {
    pub const CATEGORY: &'static str = "not_a_branch_descendant";

    /// # Errors
    ///
    /// Returns [`OntologyError::UnknownTermId`] if `branch` is not in the ontology.
    pub fn new(ontology: &'a GenericOntology<T>, branch: TermId) -> OntologyResult<Self> {
        if !ontology.contains(&branch) {
            return Err(OntologyError::UnknownTermId(branch));
        }
        Ok(Self { ontology, branch })
    }

    /// Validator for the phenotypic abnormality branch.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::UnknownTermId`] if the ontology lacks the branch root.
    pub fn phenotypic_abnormality(ontology: &'a GenericOntology<T>) -> OntologyResult<Self> {
        let branch = TermId::parse(base::PHENOTYPIC_ABNORMALITY)?;
        Self::new(ontology, branch)
    }
}

impl<T: TermLike> RuleValidator for DescendantValidator<'_, T> {
    fn validate(&self, items: &[TermId]) -> ValidationResults {
        let mut results = ValidationResults::new();
        for item in items {
            let Ok(primary) = self.ontology.primary_term_id(item) else {
                results.push(
                    ValidationLevel::Error,
                    Self::CATEGORY,
                    format!("{item} is not in the ontology"),
                );
                continue;
            };
            if !self
                .ontology
                .is_descendant_of(primary, &self.branch)
                .unwrap_or(false)
            {
                results.push(
                    ValidationLevel::Error,
                    Self::CATEGORY,
                    format!(
                        "{item} ({}) is not a descendant of {} ({})",
                        name_of(self.ontology, primary),
                        self.branch,
                        name_of(self.ontology, &self.branch)
                    ),
                );
            }
        }
        results
    }
}

/// Applies validators in registration order and concatenates their findings.
#[derive(Default)]
pub struct ValidationRunner<'a> {
    validators: Vec<Box<dyn RuleValidator + 'a>>,
}

impl<'a> ValidationRunner<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_validator(mut self, validator: impl RuleValidator + 'a) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    pub fn validate_all(&self, items: &[TermId]) -> ValidationResults {
        let mut results = ValidationResults::new();
        for validator in &self.validators {
            results.extend(validator.validate(items));
        }
        tracing::debug!(
            validators = self.validators.len(),
            items = items.len(),
            findings = results.len(),
            errors = results.errors().count(),
            "validated term ids"
        );
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::OntologyGraph;
    use crate::ontology::{MinimalOntology, Ontology, Term};

    fn id(value: &str) -> TermId {
        TermId::parse(value).expect("valid term id")
    }

    const TERMS: [(&str, &str); 8] = [
        ("HP:0000001", "All"),
        ("HP:0000005", "Mode of inheritance"),
        ("HP:0000006", "Autosomal dominant inheritance"),
        ("HP:0000118", "Phenotypic abnormality"),
        ("HP:0000999", "Retired abnormality"),
        ("HP:0001167", "Abnormality of finger"),
        ("HP:0001238", "Slender finger"),
        ("HP:0040064", "Abnormality of limbs"),
    ];

    const EDGES: [(&str, &str); 7] = [
        ("HP:0000005", "HP:0000001"),
        ("HP:0000006", "HP:0000005"),
        ("HP:0000118", "HP:0000001"),
        ("HP:0000999", "HP:0000118"),
        ("HP:0040064", "HP:0000118"),
        ("HP:0001167", "HP:0040064"),
        ("HP:0001238", "HP:0001167"),
    ];

    fn toy_hpo() -> Ontology {
        let graph = OntologyGraph::from_parts(
            TERMS.iter().map(|(term, _)| id(term)),
            EDGES.iter().map(|(child, parent)| (id(child), id(parent))),
        )
        .expect("valid toy graph");
        let terms = TERMS.iter().map(|(term, name)| {
            let term_id = id(term);
            let obsolete = term_id == id("HP:0000999");
            let alts = if term_id == id("HP:0001238") {
                vec![id("HP:0001239")]
            } else {
                vec![]
            };
            Term::new(term_id, name)
                .expect("valid term")
                .with_obsolete(obsolete)
                .with_alt_term_ids(alts)
        });
        Ontology::new(graph, terms, None).expect("valid toy ontology")
    }

    #[test]
    fn test_obsolete_validator_flags_alternative_and_obsolete_ids() {
        let hpo = toy_hpo();
        let validator = ObsoleteTermIdsValidator::new(&hpo);
        let results =
            validator.validate(&[id("HP:0001239"), id("HP:0000999"), id("HP:0001167")]);

        assert_eq!(results.len(), 2);
        assert!(results.is_ok());
        assert_eq!(results.warnings().count(), 2);
        assert!(results.results()[0].message.contains("HP:0001238"));
        assert!(results.results()[1].message.contains("obsolete"));
        assert!(results
            .results()
            .iter()
            .all(|r| r.category == "obsolete_term_id_is_used"));
    }

    #[test]
    fn test_obsolete_validator_ignores_unknown_ids() {
        let hpo = toy_hpo();
        let results = ObsoleteTermIdsValidator::new(&hpo).validate(&[id("HP:7777777")]);
        assert!(results.is_empty());
    }

    #[test]
    fn test_propagation_validator_reports_ancestor_pairs() {
        let hpo = toy_hpo();
        let validator = AnnotationPropagationValidator::new(&hpo);
        let results =
            validator.validate(&[id("HP:0001238"), id("HP:0040064"), id("HP:0000006")]);

        assert!(!results.is_ok());
        assert_eq!(results.errors().count(), 1);
        let message = &results.results()[0].message;
        assert!(message.starts_with("HP:0001238 (Slender finger)"));
        assert!(message.contains("HP:0040064"));
    }

    #[test]
    fn test_propagation_validator_resolves_alternative_ids() {
        let hpo = toy_hpo();
        let validator = AnnotationPropagationValidator::new(&hpo);
        let results = validator.validate(&[id("HP:0001239"), id("HP:0001167")]);
        assert_eq!(results.errors().count(), 1);

        // the same term twice is not an ancestor pair
        let results = validator.validate(&[id("HP:0001239"), id("HP:0001238")]);
        assert!(results.is_empty());
    }

    #[test]
    fn test_descendant_validator_requires_phenotypic_abnormality() {
        let hpo = toy_hpo();
        let validator =
            DescendantValidator::phenotypic_abnormality(&hpo).expect("branch root present");
        let results = validator.validate(&[
            id("HP:0001238"),
            id("HP:0000006"),
            id("HP:0000118"),
            id("HP:7777777"),
        ]);

        let flagged: Vec<_> = results
            .errors()
            .map(|r| r.message.split(' ').next().unwrap_or_default().to_owned())
            .collect();
        assert_eq!(flagged, vec!["HP:0000006", "HP:0000118", "HP:7777777"]);
    }

    #[test]
    fn test_descendant_validator_rejects_unknown_branch() {
        let hpo = toy_hpo();
        let err = DescendantValidator::new(&hpo, id("HP:0000707")).expect_err("unknown branch");
        assert_eq!(err, OntologyError::UnknownTermId(id("HP:0000707")));
    }

    #[test]
    fn test_runner_concatenates_findings_in_order() {
        let hpo = toy_hpo();
        let minimal: MinimalOntology = hpo.to_minimal();
        let runner = ValidationRunner::new()
            .with_validator(ObsoleteTermIdsValidator::new(&hpo))
            .with_validator(AnnotationPropagationValidator::new(&minimal))
            .with_validator(DescendantValidator::phenotypic_abnormality(&hpo).unwrap());
        assert_eq!(runner.len(), 3);

        let results = runner.validate_all(&[id("HP:0000999"), id("HP:0000118")]);
        let levels: Vec<_> = results.results().iter().map(|r| r.level).collect();
        assert_eq!(
            levels,
            vec![
                ValidationLevel::Warning,
                ValidationLevel::Error,
                ValidationLevel::Error,
            ]
        );
        assert!(!results.is_ok());
        assert!(ValidationLevel::Error > ValidationLevel::Warning);
    }

    #[test]
    fn test_results_serialise_with_snake_case_levels() {
        let mut results = ValidationResults::new();
        results.push(ValidationLevel::Warning, "obsolete_term_id_is_used", "x".into());
        let json = serde_json::to_value(&results).expect("serialize");
        assert_eq!(json["results"][0]["level"], "warning");
        assert_eq!(json["results"][0]["category"], "obsolete_term_id_is_used");
    }
}
