//! Assembly of [`HpoDiseases`] from annotation rows.

use super::{HpoDisease, HpoDiseaseAnnotation, HpoDiseases, Reference};
use crate::config::CoreConfig;
use crate::ontology::{GenericOntology, TermLike};
use crate::{AnnotationError, AnnotationResult};
use hpotk_term_id::TermId;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// One annotation line as supplied by a reader, before any checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawAnnotation {
    pub disease_id: TermId,
    pub disease_name: String,
    /// The phenotype was explicitly ruled out.
    pub negated: bool,
    pub term_id: TermId,
    /// `(numerator, denominator)` as reported by the source.
    pub frequency: Option<(u32, u32)>,
    pub modifiers: Vec<TermId>,
    pub references: Vec<Reference>,
}

/// Checks annotation rows against an ontology and groups them into diseases.
#[derive(Debug)]
pub struct SimpleDiseaseLoader<'a, T: TermLike> {
    ontology: &'a GenericOntology<T>,
    cohort_size: u32,
}

impl<'a, T: TermLike> SimpleDiseaseLoader<'a, T> {
    pub fn new(ontology: &'a GenericOntology<T>, config: &CoreConfig) -> Self {
        Self {
            ontology,
            cohort_size: config.cohort_size(),
        }
    }

    /// Denominator used for negated rows and rows without a frequency.
    pub fn cohort_size(&self) -> u32 {
        self.cohort_size
    }

    /// Builds the disease collection from `rows`.
    ///
    /// Rows for the same disease and term are merged: counts are summed and references and
    /// modifiers are unioned. Alternative term ids are replaced by their primary ids.
    ///
    /// # Errors
    ///
    /// Returns the first offending row's error; no partial collection is produced.
    pub fn load(
        &self,
        rows: impl IntoIterator<Item = RawAnnotation>,
        version: Option<String>,
    ) -> AnnotationResult<HpoDiseases> {
        let mut diseases: BTreeMap<TermId, HpoDisease> = BTreeMap::new();
        let mut row_count = 0usize;

        for row in rows {
            row_count += 1;
            if let Err(err) = self.add_row(&mut diseases, row) {
                tracing::warn!(row = row_count, error = %err, "rejected disease annotation");
                return Err(err);
            }
        }

        tracing::debug!(
            rows = row_count,
            diseases = diseases.len(),
            version = version.as_deref().unwrap_or("unknown"),
            "loaded disease annotations"
        );

        Ok(HpoDiseases { diseases, version })
    }

    fn add_row(
        &self,
        diseases: &mut BTreeMap<TermId, HpoDisease>,
        row: RawAnnotation,
    ) -> AnnotationResult<()> {
        let RawAnnotation {
            disease_id,
            disease_name,
            negated,
            term_id,
            frequency,
            modifiers,
            references,
        } = row;

        let disease_name = disease_name.trim();
        if disease_name.is_empty() {
            return Err(AnnotationError::InvalidInput(format!(
                "disease {disease_id} has an empty name"
            )));
        }

        let term = self.resolve(&disease_id, &term_id)?;
        let modifiers = modifiers
            .iter()
            .map(|modifier| self.resolve(&disease_id, modifier))
            .collect::<AnnotationResult<Vec<_>>>()?;

        if references.is_empty() {
            return Err(AnnotationError::MissingReferences {
                disease: disease_id,
                term,
            });
        }

        let (numerator, denominator) = match (negated, frequency) {
            (true, _) => (0, self.cohort_size),
            (false, None) => (self.cohort_size, self.cohort_size),
            (false, Some((n, d))) if d > 0 && n <= d => (n, d),
            (false, Some((n, d))) => {
                return Err(AnnotationError::InvalidFrequency {
                    disease: disease_id,
                    term,
                    numerator: n,
                    denominator: d,
                });
            }
        };

        let disease = match diseases.entry(disease_id.clone()) {
            Entry::Vacant(slot) => slot.insert(HpoDisease {
                id: disease_id,
                name: disease_name.to_owned(),
                annotations: BTreeMap::new(),
            }),
            Entry::Occupied(slot) => {
                let disease = slot.into_mut();
                if disease.name != disease_name {
                    return Err(AnnotationError::InconsistentDisease {
                        disease: disease_id,
                        first: disease.name.clone(),
                        second: disease_name.to_owned(),
                    });
                }
                disease
            }
        };

        match disease.annotations.entry(term.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(HpoDiseaseAnnotation::new(
                    term,
                    numerator,
                    denominator,
                    unique(modifiers),
                    unique(references),
                ));
            }
            Entry::Occupied(slot) => {
                let annotation = slot.into_mut();
                let (Some(merged_numerator), Some(merged_denominator)) = (
                    annotation.numerator.checked_add(numerator),
                    annotation.denominator.checked_add(denominator),
                ) else {
                    return Err(AnnotationError::CountOverflow {
                        disease: disease.id.clone(),
                        term,
                    });
                };
                annotation.numerator = merged_numerator;
                annotation.denominator = merged_denominator;
                extend_unique(&mut annotation.modifiers, modifiers);
                extend_unique(&mut annotation.references, references);
            }
        }

        Ok(())
    }

    fn resolve(&self, disease: &TermId, term: &TermId) -> AnnotationResult<TermId> {
        self.ontology
            .primary_term_id(term)
            .cloned()
            .map_err(|_| AnnotationError::UnknownAnnotationTerm {
                disease: disease.clone(),
                term: term.clone(),
            })
    }
}

fn unique<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len());
    extend_unique(&mut out, items);
    out
}

fn extend_unique<T: PartialEq>(target: &mut Vec<T>, items: Vec<T>) {
    for item in items {
        if !target.contains(&item) {
            target.push(item);
        }
    }
}
