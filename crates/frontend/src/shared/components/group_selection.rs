use super::swatch::Swatch;
use contracts::shared::option_registry::{OptionItem, Scalar};
use contracts::shared::widgets::{MultiSelect, PropsUpdate};
use leptos::prelude::*;

/// Multi-select list of experimental groups.
///
/// Toggling an entry reports the whole selection and leaves the panel open.
#[component]
pub fn GroupSelection(
    #[prop(into)] id: String,
    /// Selected groups, in selection order
    #[prop(into)]
    value: Signal<Vec<Scalar>>,
    /// Host groups merged after Recent/Remote/Control
    #[prop(into)]
    options: Signal<Vec<OptionItem>>,
    set_props: Callback<PropsUpdate>,
) -> impl IntoView {
    let state = RwSignal::new(MultiSelect::group_selection(
        &options.get_untracked(),
        value.get_untracked(),
    ));

    Effect::new(move |_| {
        let external = options.get();
        state.update(|s| s.refresh(&external));
    });
    Effect::new(move |_| {
        let selected = value.get();
        state.update(|s| s.set_value(selected));
    });

    let toggle = move |value: Scalar| {
        if let Some(update) = state.try_update(|s| s.toggle(&value)) {
            set_props.run(update);
        }
    };

    view! {
        <div id=id style="position: relative; display: inline-block;">
            <div
                on:click=move |_| state.update(|s| {
                    s.click_control();
                })
                style="padding: 10px; border-radius: 5px; border: 1px solid #ccc; cursor: pointer;"
            >
                {move || state.with(|s| s.header_label())}
            </div>
            <Show when=move || state.with(|s| s.dropdown().is_open())>
                <div style="position: absolute; top: 100%; left: 0; right: 0; border: 1px solid #ccc; border-radius: 5px; background-color: white; z-index: 1; min-width: max-content;">
                    {move || {
                        let rows: Vec<(OptionItem, bool)> = state.with(|s| {
                            s.options()
                                .iter()
                                .map(|o| {
                                    let checked = o.value.as_ref().is_some_and(|v| s.is_selected(v));
                                    (o.clone(), checked)
                                })
                                .collect()
                        });
                        rows.into_iter()
                            .map(|(option, checked)| {
                                let value = option.value.clone();
                                let color = option.color.clone().unwrap_or_default();
                                let opacity = if checked { "1" } else { "0.5" };
                                view! {
                                    <div
                                        style="padding: 10px; cursor: pointer; display: flex; align-items: center; justify-content: space-between;"
                                        on:click=move |_| {
                                            if let Some(value) = value.clone() {
                                                toggle(value);
                                            }
                                        }
                                    >
                                        <Swatch color=color />
                                        <span style=format!("opacity: {};", opacity)>{option.text}</span>
                                        <input
                                            type="checkbox"
                                            prop:checked=checked
                                            readonly=true
                                            style=format!("margin-left: auto; opacity: {};", opacity)
                                        />
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
