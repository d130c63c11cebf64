use super::host_widget::HostWidget;
use crate::shared::components::{
    EventRender, EventSelection, GroupDropdown, GroupSelection, IntervalLoader,
};
use crate::shared::host_api;
use contracts::shared::host_state::{WidgetKind, WidgetValue};
use contracts::shared::option_registry::Scalar;
use contracts::shared::widgets::variants::loading_sentinel;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// One instance of every selection widget, wired to the host store
#[component]
pub fn WidgetBoard() -> impl IntoView {
    // frozen until the host answers
    let group_dropdown = HostWidget::new(
        "group-dropdown",
        WidgetKind::GroupDropdown,
        Some(WidgetValue::One(loading_sentinel())),
    );
    let group_selection = HostWidget::new(
        "group-selection",
        WidgetKind::GroupSelection,
        Some(WidgetValue::Many(Vec::new())),
    );
    let event_selection = HostWidget::new("event-selection", WidgetKind::EventSelection, None);
    let event_render = HostWidget::new(
        "event-selection-average",
        WidgetKind::EventRender,
        Some(WidgetValue::One(Scalar::text("freezing"))),
    );
    let intervals = HostWidget::new("interval-loader", WidgetKind::IntervalLoader, None);

    let widgets = [
        group_dropdown,
        group_selection,
        event_selection,
        event_render,
        intervals,
    ];

    spawn_local(async move {
        match host_api::list_widgets().await {
            Ok(response) => {
                for record in response.widgets {
                    if let Some(widget) = widgets.iter().find(|w| w.id == record.id) {
                        widget.record.set(record);
                    }
                }
            }
            Err(e) => {
                log::warn!("Host store unavailable, using defaults: {}", e);
                group_dropdown
                    .record
                    .update(|r| r.value = Some(WidgetValue::One(Scalar::Number(1))));
            }
        }
    });

    let row_style = "display: flex; align-items: center; gap: 20px; margin-bottom: 20px;";

    view! {
        <div style="padding: 20px;">
            <h2>"Session Dashboard"</h2>
            <div style=row_style>
                <GroupSelection
                    id=group_selection.id
                    value=group_selection.values()
                    options=group_selection.options()
                    set_props=group_selection.set_props()
                />
                <GroupDropdown
                    id=group_dropdown.id
                    value=group_dropdown.value()
                    additional_options=group_dropdown.options()
                    current_color=group_dropdown.current_color()
                    set_props=group_dropdown.set_props()
                />
            </div>
            <div style=row_style>
                <EventSelection
                    id=event_selection.id
                    value=event_selection.value()
                    options=event_selection.options()
                    set_props=event_selection.set_props()
                    set_options=event_selection.set_options()
                />
                <EventRender
                    id=event_render.id
                    value=event_render.value()
                    options=event_render.options()
                    set_props=event_render.set_props()
                />
            </div>
            <IntervalLoader
                id=intervals.id
                data=intervals.data()
                set_props=intervals.set_props()
            />
        </div>
    }
}
