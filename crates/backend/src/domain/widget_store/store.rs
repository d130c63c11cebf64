use crate::shared::config::WidgetSeed;
use contracts::shared::host_state::{WidgetKind, WidgetRecord};
use contracts::shared::option_registry::OptionItem;
use contracts::shared::widgets::PropsUpdate;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors of the widget property store
#[derive(Debug, Error, PartialEq)]
pub enum WidgetStoreError {
    #[error("Widget not found: {0}")]
    NotFound(String),

    #[error("Update does not match widget {id} of kind {kind:?}")]
    KindMismatch { id: String, kind: WidgetKind },
}

/// Host-side copy of every widget's properties, keyed by widget id
#[derive(Debug, Default)]
pub struct WidgetStore {
    records: BTreeMap<String, WidgetRecord>,
}

impl WidgetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seeds(seeds: &[WidgetSeed]) -> Self {
        let mut store = Self::new();
        for seed in seeds {
            let mut record = WidgetRecord::new(seed.id.clone(), seed.kind);
            record.value = seed.value.clone();
            record.options = seed.options.clone();
            store.records.insert(seed.id.clone(), record);
        }
        store
    }

    pub fn list(&self) -> Vec<WidgetRecord> {
        self.records.values().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Result<&WidgetRecord, WidgetStoreError> {
        self.records
            .get(id)
            .ok_or_else(|| WidgetStoreError::NotFound(id.to_string()))
    }

    /// Merges a partial state reported by the widget
    pub fn apply_props(
        &mut self,
        id: &str,
        update: PropsUpdate,
    ) -> Result<&WidgetRecord, WidgetStoreError> {
        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| WidgetStoreError::NotFound(id.to_string()))?;
        if !record.apply(update) {
            return Err(WidgetStoreError::KindMismatch {
                id: id.to_string(),
                kind: record.kind,
            });
        }
        Ok(record)
    }

    /// Replaces the host's option list with the one the widget widened
    pub fn replace_options(
        &mut self,
        id: &str,
        options: Vec<OptionItem>,
    ) -> Result<&WidgetRecord, WidgetStoreError> {
        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| WidgetStoreError::NotFound(id.to_string()))?;
        if record.kind == WidgetKind::IntervalLoader {
            return Err(WidgetStoreError::KindMismatch {
                id: id.to_string(),
                kind: record.kind,
            });
        }
        record.options = options;
        Ok(record)
    }
}
