use super::store::{WidgetStore, WidgetStoreError};
use crate::shared::config::WidgetSeed;
use contracts::shared::host_state::WidgetRecord;
use contracts::shared::option_registry::OptionItem;
use contracts::shared::widgets::PropsUpdate;
use once_cell::sync::Lazy;
use std::sync::RwLock;

static WIDGET_STORE: Lazy<RwLock<WidgetStore>> = Lazy::new(|| RwLock::new(WidgetStore::new()));

fn poisoned() -> anyhow::Error {
    anyhow::anyhow!("widget store lock poisoned")
}

/// Replace the store contents with the configured seeds
pub fn seed(seeds: &[WidgetSeed]) -> anyhow::Result<()> {
    let mut store = WIDGET_STORE.write().map_err(|_| poisoned())?;
    *store = WidgetStore::from_seeds(seeds);
    tracing::info!("Seeded {} widgets", seeds.len());
    Ok(())
}

pub fn list_all() -> anyhow::Result<Vec<WidgetRecord>> {
    let store = WIDGET_STORE.read().map_err(|_| poisoned())?;
    Ok(store.list())
}

pub fn get_by_id(id: &str) -> anyhow::Result<Result<WidgetRecord, WidgetStoreError>> {
    let store = WIDGET_STORE.read().map_err(|_| poisoned())?;
    Ok(store.get(id).cloned())
}

pub fn apply_props(
    id: &str,
    update: PropsUpdate,
) -> anyhow::Result<Result<WidgetRecord, WidgetStoreError>> {
    let mut store = WIDGET_STORE.write().map_err(|_| poisoned())?;
    Ok(store.apply_props(id, update).cloned())
}

pub fn replace_options(
    id: &str,
    options: Vec<OptionItem>,
) -> anyhow::Result<Result<WidgetRecord, WidgetStoreError>> {
    let mut store = WIDGET_STORE.write().map_err(|_| poisoned())?;
    let count = options.len();
    let result = store.replace_options(id, options).cloned();
    if result.is_ok() {
        tracing::info!("Widget {} now has {} options", id, count);
    }
    Ok(result)
}
