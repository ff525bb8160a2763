//! Term metadata attached to graph nodes.
//!
//! Two flavours exist so that memory-constrained callers can load identifiers and names only:
//! - [`MinimalTerm`]: id, name and obsolescence flag
//! - [`Term`]: everything in `MinimalTerm` plus definition, comment, alternative ids, synonyms
//!   and cross-references
//!
//! Both implement [`TermLike`], which is all the ontology wrapper needs to know about them.

use crate::{OntologyError, OntologyResult};
use hpotk_term_id::TermId;
use serde::{Deserialize, Serialize};

/// Capabilities shared by every term flavour.
pub trait TermLike {
    fn id(&self) -> &TermId;

    fn name(&self) -> &str;

    /// Obsolete terms stay in the graph but should not be used for new annotations.
    fn is_obsolete(&self) -> bool;

    /// Alternative (usually retired) identifiers that resolve to this term.
    fn alt_term_ids(&self) -> &[TermId] {
        &[]
    }
}

fn validated_name(id: &TermId, name: impl AsRef<str>) -> OntologyResult<String> {
    let trimmed = name.as_ref().trim();
    if trimmed.is_empty() {
        return Err(OntologyError::InvalidTerm {
            id: id.clone(),
            reason: "name cannot be empty".into(),
        });
    }
    Ok(trimmed.to_owned())
}

/// Identifier, name and obsolescence flag of a term.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MinimalTerm {
    id: TermId,
    name: String,
    is_obsolete: bool,
}

impl MinimalTerm {
    /// Creates a term; the name is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::InvalidTerm`] if the trimmed name is empty.
    pub fn new(id: TermId, name: impl AsRef<str>, is_obsolete: bool) -> OntologyResult<Self> {
        let name = validated_name(&id, name)?;
        Ok(Self {
            id,
            name,
            is_obsolete,
        })
    }
}

impl TermLike for MinimalTerm {
    fn id(&self) -> &TermId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_obsolete(&self) -> bool {
        self.is_obsolete
    }
}

impl From<&Term> for MinimalTerm {
    fn from(term: &Term) -> Self {
        Self {
            id: term.id.clone(),
            name: term.name.clone(),
            is_obsolete: term.is_obsolete,
        }
    }
}

/// Full term metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Term {
    id: TermId,
    name: String,
    is_obsolete: bool,
    definition: Option<String>,
    comment: Option<String>,
    alt_term_ids: Vec<TermId>,
    synonyms: Vec<Synonym>,
    xrefs: Vec<TermId>,
}

impl Term {
    /// Creates a non-obsolete term with no optional metadata; the name is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::InvalidTerm`] if the trimmed name is empty.
    pub fn new(id: TermId, name: impl AsRef<str>) -> OntologyResult<Self> {
        let name = validated_name(&id, name)?;
        Ok(Self {
            id,
            name,
            is_obsolete: false,
            definition: None,
            comment: None,
            alt_term_ids: Vec::new(),
            synonyms: Vec::new(),
            xrefs: Vec::new(),
        })
    }

    pub fn with_obsolete(mut self, is_obsolete: bool) -> Self {
        self.is_obsolete = is_obsolete;
        self
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Order is preserved.
    pub fn with_alt_term_ids(mut self, alt_term_ids: impl IntoIterator<Item = TermId>) -> Self {
        self.alt_term_ids = alt_term_ids.into_iter().collect();
        self
    }

    pub fn with_synonyms(mut self, synonyms: impl IntoIterator<Item = Synonym>) -> Self {
        self.synonyms = synonyms.into_iter().collect();
        self
    }

    pub fn with_xrefs(mut self, xrefs: impl IntoIterator<Item = TermId>) -> Self {
        self.xrefs = xrefs.into_iter().collect();
        self
    }

    pub fn definition(&self) -> Option<&str> {
        self.definition.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn synonyms(&self) -> &[Synonym] {
        &self.synonyms
    }

    pub fn xrefs(&self) -> &[TermId] {
        &self.xrefs
    }

    /// Synonyms not tagged as obsolete.
    pub fn current_synonyms(&self) -> impl Iterator<Item = &Synonym> + '_ {
        self.synonyms
            .iter()
            .filter(|s| s.synonym_type != Some(SynonymType::ObsoleteSynonym))
    }
}

impl TermLike for Term {
    fn id(&self) -> &TermId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_obsolete(&self) -> bool {
        self.is_obsolete
    }

    fn alt_term_ids(&self) -> &[TermId] {
        &self.alt_term_ids
    }
}

/// Scope of a synonym relative to the term name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynonymCategory {
    Exact,
    Related,
    Broad,
    Narrow,
}

impl SynonymCategory {
    /// Parse from the ontology-exchange predicate name, e.g. `hasExactSynonym`.
    pub fn from_predicate(predicate: &str) -> Option<Self> {
        match predicate {
            "hasExactSynonym" => Some(SynonymCategory::Exact),
            "hasRelatedSynonym" => Some(SynonymCategory::Related),
            "hasBroadSynonym" => Some(SynonymCategory::Broad),
            "hasNarrowSynonym" => Some(SynonymCategory::Narrow),
            _ => None,
        }
    }
}

/// Optional synonym type tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynonymType {
    LaypersonTerm,
    Abbreviation,
    UkSpelling,
    ObsoleteSynonym,
    PluralForm,
    AllelicRequirement,
}

impl SynonymType {
    /// Parse from the HPO synonym type id suffix, e.g. `layperson` or `uk_spelling`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "layperson" => Some(SynonymType::LaypersonTerm),
            "abbreviation" => Some(SynonymType::Abbreviation),
            "uk_spelling" => Some(SynonymType::UkSpelling),
            "obsolete_synonym" => Some(SynonymType::ObsoleteSynonym),
            "plural_form" => Some(SynonymType::PluralForm),
            "allelic_requirement" => Some(SynonymType::AllelicRequirement),
            _ => None,
        }
    }
}

/// Alternative wording of a term name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Synonym {
    pub text: String,
    pub category: SynonymCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonym_type: Option<SynonymType>,
}

impl Synonym {
    pub fn new(text: impl Into<String>, category: SynonymCategory) -> Self {
        Self {
            text: text.into(),
            category,
            synonym_type: None,
        }
    }

    pub fn with_type(mut self, synonym_type: SynonymType) -> Self {
        self.synonym_type = Some(synonym_type);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> TermId {
        TermId::parse(value).expect("valid term id")
    }

    #[test]
    fn test_minimal_term_trims_name() {
        let term = MinimalTerm::new(id("HP:0001167"), "  Abnormality of finger  ", false)
            .expect("valid term");
        assert_eq!(term.name(), "Abnormality of finger");
        assert_eq!(term.id(), &id("HP:0001167"));
        assert!(!term.is_obsolete());
        assert!(term.alt_term_ids().is_empty());
    }

    #[test]
    fn test_rejects_blank_name() {
        let err = MinimalTerm::new(id("HP:0001167"), "   ", false).expect_err("blank name");
        assert!(matches!(err, OntologyError::InvalidTerm { reason, .. } if reason.contains("empty")));

        assert!(Term::new(id("HP:0001167"), "").is_err());
    }

    #[test]
    fn test_full_term_carries_metadata() {
        let term = Term::new(id("HP:0001238"), "Slender finger")
            .expect("valid term")
            .with_definition("Thin, slim fingers.")
            .with_comment("Also applies to toes in older releases.")
            .with_alt_term_ids([id("HP:0001239"), id("HP:0001240")])
            .with_synonyms([
                Synonym::new("Thin fingers", SynonymCategory::Exact)
                    .with_type(SynonymType::LaypersonTerm),
                Synonym::new("Skinny fingers", SynonymCategory::Related)
                    .with_type(SynonymType::ObsoleteSynonym),
            ])
            .with_xrefs([id("UMLS:C1863258")]);

        assert_eq!(term.definition(), Some("Thin, slim fingers."));
        assert!(term.comment().is_some());
        assert_eq!(term.alt_term_ids(), &[id("HP:0001239"), id("HP:0001240")]);
        assert_eq!(term.synonyms().len(), 2);
        assert_eq!(term.current_synonyms().count(), 1);
        assert_eq!(term.xrefs(), &[id("UMLS:C1863258")]);
        assert!(!term.is_obsolete());
    }

    #[test]
    fn test_minimal_term_from_full_term() {
        let term = Term::new(id("HP:0000005"), "Mode of inheritance")
            .expect("valid")
            .with_obsolete(true)
            .with_alt_term_ids([id("HP:0001425")]);
        let minimal = MinimalTerm::from(&term);
        assert_eq!(minimal.id(), term.id());
        assert_eq!(minimal.name(), term.name());
        assert!(minimal.is_obsolete());
        assert!(minimal.alt_term_ids().is_empty());
    }

    #[test]
    fn test_synonym_category_from_predicate() {
        assert_eq!(
            SynonymCategory::from_predicate("hasExactSynonym"),
            Some(SynonymCategory::Exact)
        );
        assert_eq!(
            SynonymCategory::from_predicate("hasNarrowSynonym"),
            Some(SynonymCategory::Narrow)
        );
        assert_eq!(SynonymCategory::from_predicate("hasSynonym"), None);
    }

    #[test]
    fn test_synonym_type_from_tag() {
        assert_eq!(SynonymType::from_tag("uk_spelling"), Some(SynonymType::UkSpelling));
        assert_eq!(SynonymType::from_tag("layperson"), Some(SynonymType::LaypersonTerm));
        assert_eq!(SynonymType::from_tag("unknown"), None);
    }

    #[test]
    fn test_synonym_serialises_without_empty_type() {
        let synonym = Synonym::new("Thin fingers", SynonymCategory::Exact);
        let json = serde_json::to_string(&synonym).expect("serialize");
        assert_eq!(json, r#"{"text":"Thin fingers","category":"exact"}"#);

        let typed: Synonym =
            serde_json::from_str(r#"{"text":"Thin fingers","category":"broad","synonym_type":"plural_form"}"#)
                .expect("deserialize");
        assert_eq!(typed.synonym_type, Some(SynonymType::PluralForm));
        assert_eq!(typed.category, SynonymCategory::Broad);
    }

    #[test]
    fn test_term_serialises_id_as_string() {
        let term = MinimalTerm::new(id("HP:0000118"), "Phenotypic abnormality", false)
            .expect("valid");
        let json = serde_json::to_value(&term).expect("serialize");
        assert_eq!(json["id"], "HP:0000118");
        assert_eq!(json["is_obsolete"], false);
    }
}
