use crate::shared::host_api;
use contracts::shared::host_state::{WidgetKind, WidgetRecord, WidgetValue};
use contracts::shared::option_registry::{OptionItem, Scalar};
use contracts::shared::widgets::{Interval, PropsUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Host-side properties of one mounted widget.
///
/// Inbound properties are derived from `record`; the callbacks write the
/// widget's updates into `record` and forward them to the host store.
#[derive(Clone, Copy)]
pub struct HostWidget {
    pub id: &'static str,
    pub record: RwSignal<WidgetRecord>,
}

impl HostWidget {
    pub fn new(id: &'static str, kind: WidgetKind, value: Option<WidgetValue>) -> Self {
        let mut record = WidgetRecord::new(id, kind);
        record.value = value;
        Self {
            id,
            record: RwSignal::new(record),
        }
    }

    pub fn value(&self) -> Signal<Option<Scalar>> {
        let record = self.record;
        Signal::derive(move || record.with(|r| r.value.as_ref().and_then(|v| v.as_one().cloned())))
    }

    pub fn values(&self) -> Signal<Vec<Scalar>> {
        let record = self.record;
        Signal::derive(move || {
            record.with(|r| r.value.as_ref().map(|v| v.as_many().to_vec()).unwrap_or_default())
        })
    }

    pub fn options(&self) -> Signal<Vec<OptionItem>> {
        let record = self.record;
        Signal::derive(move || record.with(|r| r.options.clone()))
    }

    pub fn current_color(&self) -> Signal<Option<String>> {
        let record = self.record;
        Signal::derive(move || record.with(|r| r.current_color.clone()))
    }

    pub fn data(&self) -> Signal<Vec<Interval>> {
        let record = self.record;
        Signal::derive(move || record.with(|r| r.data.clone()))
    }

    pub fn set_props(&self) -> Callback<PropsUpdate> {
        let (id, record) = (self.id, self.record);
        Callback::new(move |update: PropsUpdate| {
            record.update(|r| {
                if !r.apply(update.clone()) {
                    log::warn!("Widget {} reported an update of the wrong shape", id);
                }
            });
            spawn_local(async move {
                if let Err(e) = host_api::post_props(id, &update).await {
                    log::warn!("Failed to store props of {}: {}", id, e);
                }
            });
        })
    }

    pub fn set_options(&self) -> Callback<Vec<OptionItem>> {
        let (id, record) = (self.id, self.record);
        Callback::new(move |options: Vec<OptionItem>| {
            record.update(|r| r.options = options.clone());
            spawn_local(async move {
                if let Err(e) = host_api::put_options(id, &options).await {
                    log::warn!("Failed to store options of {}: {}", id, e);
                }
            });
        })
    }
}
