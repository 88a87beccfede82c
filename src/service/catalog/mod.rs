//! Read-only benefit catalog
//!
//! Built once at startup and shared behind an `Arc`; nothing mutates it.

use std::collections::HashSet;

use rand::seq::SliceRandom;

use crate::model::{BenefitCategory, BenefitRecord};

mod data;

/// Number of records shown for the `Unknown` category
pub const UNKNOWN_CATEGORY_PREFIX_LEN: usize = 4;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("Duplicate benefit id: {0}")]
    DuplicateId(String),

    #[error("Benefit {0} has the Unknown category")]
    UnknownCategory(String),
}

#[derive(Debug, Clone)]
pub struct BenefitCatalog {
    records: Vec<BenefitRecord>,
}

impl BenefitCatalog {
    /// Build a catalog, rejecting duplicate ids and `Unknown` categories
    pub fn new(records: Vec<BenefitRecord>) -> Result<Self, CatalogError> {
        validate(&records)?;
        Ok(Self { records })
    }

    /// The built-in benefit table
    pub fn builtin() -> Result<Self, CatalogError> {
        let catalog = Self::new(data::builtin_records())?;
        tracing::debug!(records = catalog.len(), "Benefit catalog loaded");
        Ok(catalog)
    }

    pub fn all(&self) -> &[BenefitRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records of a category, in catalog order
    ///
    /// `Unknown` yields the first few records of the catalog rather than an
    /// empty list, so the visitor always has something to browse.
    pub fn by_category(&self, category: BenefitCategory) -> Vec<BenefitRecord> {
        if category == BenefitCategory::Unknown {
            return self
                .records
                .iter()
                .take(UNKNOWN_CATEGORY_PREFIX_LEN)
                .cloned()
                .collect();
        }

        self.records
            .iter()
            .filter(|r| r.category == category)
            .cloned()
            .collect()
    }

    pub fn by_id(&self, id: &str) -> Option<&BenefitRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Up to `count` distinct records picked at random
    pub fn sample(&self, count: usize) -> Vec<BenefitRecord> {
        let mut rng = rand::thread_rng();
        self.records
            .choose_multiple(&mut rng, count)
            .cloned()
            .collect()
    }
}

fn validate(records: &[BenefitRecord]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for record in records {
        if record.category == BenefitCategory::Unknown {
            return Err(CatalogError::UnknownCategory(record.id.clone()));
        }
        if !seen.insert(record.id.as_str()) {
            return Err(CatalogError::DuplicateId(record.id.clone()));
        }
    }
    Ok(())
}
