use crate::errors::{ApiSurfError, Result};
use std::collections::BTreeSet;

/// Features emitted in one run. Set semantics, lexicographic order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FeatureSet {
    features: BTreeSet<String>,
}

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a feature that must not already be present.
    ///
    /// # Errors
    ///
    /// `DuplicateFeature` if the exact string was inserted before.
    pub fn insert(&mut self, feature: String) -> Result<()> {
        if self.features.contains(&feature) {
            return Err(ApiSurfError::DuplicateFeature { feature });
        }
        self.features.insert(feature);
        Ok(())
    }

    pub fn contains(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }

    /// All features, sorted.
    pub fn list(&self) -> Vec<String> {
        self.features.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
