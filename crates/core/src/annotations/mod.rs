//! Disease-to-phenotype annotations.
//!
//! An [`HpoDisease`] lists the HPO terms observed in (or explicitly excluded from) a disease,
//! each as an [`HpoDiseaseAnnotation`] with a `numerator / denominator` frequency. The records
//! are assembled by [`SimpleDiseaseLoader`], which checks every referenced term against an
//! ontology first.

mod loader;

pub use loader::{RawAnnotation, SimpleDiseaseLoader};

use hpotk_term_id::TermId;
use serde::Serialize;
use std::collections::BTreeMap;

/// Evidence code attached to a reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EvidenceCode {
    /// Inferred from electronic annotation.
    Iea,
    /// Published clinical study.
    Pcs,
    /// Traceable author statement.
    Tas,
}

impl EvidenceCode {
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim() {
            "IEA" => Some(EvidenceCode::Iea),
            "PCS" => Some(EvidenceCode::Pcs),
            "TAS" => Some(EvidenceCode::Tas),
            _ => None,
        }
    }
}

/// Source backing an annotation, e.g. `PMID:1234567` or the disease record itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Reference {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<EvidenceCode>,
}

impl Reference {
    pub fn new(id: impl Into<String>, evidence: Option<EvidenceCode>) -> Self {
        Self {
            id: id.into(),
            evidence,
        }
    }
}

/// One phenotype term annotated to a disease.
///
/// A `numerator` of zero marks the term as excluded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HpoDiseaseAnnotation {
    id: TermId,
    numerator: u32,
    denominator: u32,
    modifiers: Vec<TermId>,
    references: Vec<Reference>,
}

impl HpoDiseaseAnnotation {
    pub(crate) fn new(
        id: TermId,
        numerator: u32,
        denominator: u32,
        modifiers: Vec<TermId>,
        references: Vec<Reference>,
    ) -> Self {
        Self {
            id,
            numerator,
            denominator,
            modifiers,
            references,
        }
    }

    pub fn id(&self) -> &TermId {
        &self.id
    }

    pub fn numerator(&self) -> u32 {
        self.numerator
    }

    pub fn denominator(&self) -> u32 {
        self.denominator
    }

    pub fn is_present(&self) -> bool {
        self.numerator > 0
    }

    pub fn is_excluded(&self) -> bool {
        self.numerator == 0
    }

    /// Fraction of the cohort with the phenotype, in `0.0..=1.0`.
    pub fn frequency(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }

    /// Clinical modifiers such as severity or onset, unique, in first-seen order.
    pub fn modifiers(&self) -> &[TermId] {
        &self.modifiers
    }

    /// Never empty.
    pub fn references(&self) -> &[Reference] {
        &self.references
    }
}

/// A disease with its phenotype annotations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HpoDisease {
    id: TermId,
    name: String,
    annotations: BTreeMap<TermId, HpoDiseaseAnnotation>,
}

impl HpoDisease {
    pub fn id(&self) -> &TermId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Annotations in term id order.
    pub fn annotations(&self) -> impl ExactSizeIterator<Item = &HpoDiseaseAnnotation> + '_ {
        self.annotations.values()
    }

    pub fn annotation(&self, term: &TermId) -> Option<&HpoDiseaseAnnotation> {
        self.annotations.get(term)
    }

    pub fn present_annotations(&self) -> impl Iterator<Item = &HpoDiseaseAnnotation> + '_ {
        self.annotations().filter(|a| a.is_present())
    }

    pub fn excluded_annotations(&self) -> impl Iterator<Item = &HpoDiseaseAnnotation> + '_ {
        self.annotations().filter(|a| a.is_excluded())
    }
}

/// A keyed collection of diseases from one annotation release.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HpoDiseases {
    diseases: BTreeMap<TermId, HpoDisease>,
    version: Option<String>,
}

impl HpoDiseases {
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn len(&self) -> usize {
        self.diseases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty()
    }

    pub fn get(&self, id: &TermId) -> Option<&HpoDisease> {
        self.diseases.get(id)
    }

    /// Disease ids in identifier order.
    pub fn item_ids(&self) -> impl ExactSizeIterator<Item = &TermId> + '_ {
        self.diseases.keys()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &HpoDisease> + '_ {
        self.diseases.values()
    }
}
