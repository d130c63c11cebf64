use crate::dashboards::d100_widget_board::WidgetBoard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <WidgetBoard />
    }
}
