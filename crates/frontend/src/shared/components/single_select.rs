use super::swatch::Swatch;
use contracts::shared::option_registry::Scalar;
use contracts::shared::widgets::{PropsUpdate, SingleSelect};
use leptos::prelude::*;

const PANEL_STYLE: &str = "position: absolute; top: calc(100% + 5px); left: 0; right: 0; border: 1px solid #ccc; border-radius: 5px; background-color: white; z-index: 1; min-width: max-content; max-height: 200px; overflow-y: auto;";

/// Control plus option panel shared by every single-select widget
#[component]
pub fn SingleSelectControl(
    /// ID for the control element
    #[prop(into)]
    id: String,
    /// Widget state owned by the caller
    state: RwSignal<SingleSelect>,
    /// Value update callback
    set_props: Callback<PropsUpdate>,
    /// Text shown when the panel has nothing to offer
    #[prop(optional, into)]
    empty_text: MaybeProp<String>,
) -> impl IntoView {
    let label = Memo::new(move |_| state.with(|s| s.control_label()));
    let is_open = Memo::new(move |_| state.with(|s| s.dropdown().is_open()));
    let is_disabled = Memo::new(move |_| state.with(|s| s.dropdown().is_disabled()));

    let choose = move |value: Scalar| {
        if let Some(update) = state.try_update(|s| s.choose(value)).flatten() {
            set_props.run(update);
        }
    };

    view! {
        <div
            id=id
            class="single-select"
            on:click=move |_| state.update(|s| {
                s.click_control();
            })
            style=move || format!(
                "padding: 10px; border-radius: 5px; border: 1px solid #ccc; display: flex; align-items: center; justify-content: space-between; position: relative; cursor: {};",
                if is_disabled.get() { "not-allowed" } else { "pointer" }
            )
        >
            <div style="display: flex; align-items: center;">
                <Swatch color=Signal::derive(move || label.get().color) />
                <span>{move || label.get().text}</span>
            </div>
            <span style="font-size: 12px; color: #888;">
                {move || if is_open.get() { "▲" } else { "▼" }}
            </span>
            <Show when=move || is_open.get()>
                <div style=PANEL_STYLE>
                    {move || {
                        let options: Vec<_> = state.with(|s| {
                            s.selectable_options().into_iter().cloned().collect()
                        });
                        if options.is_empty() {
                            let text = empty_text.get().unwrap_or_default();
                            return view! {
                                <div style="padding: 10px; color: #888; text-align: center;">{text}</div>
                            }.into_any();
                        }
                        options
                            .into_iter()
                            .map(|option| {
                                let value = option.value.clone();
                                let color = option.color.clone().unwrap_or_default();
                                view! {
                                    <div
                                        style="padding: 10px; cursor: pointer; display: flex; align-items: center; margin-bottom: 5px;"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            if let Some(value) = value.clone() {
                                                choose(value);
                                            }
                                        }
                                    >
                                        <Swatch color=color />
                                        {option.text}
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}
