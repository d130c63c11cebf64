use contracts::shared::widgets::interval::describe;
use contracts::shared::widgets::{Interval, IntervalForm, PropsUpdate};
use leptos::prelude::*;

/// Entry form for `{start, end}` intervals plus the list of recorded ones.
///
/// Non-numeric or empty bounds are ignored; reversed bounds are kept as is.
#[component]
pub fn IntervalLoader(
    #[prop(into)] id: String,
    /// Intervals held by the host
    #[prop(into)]
    data: Signal<Vec<Interval>>,
    set_props: Callback<PropsUpdate>,
) -> impl IntoView {
    let form = RwSignal::new(IntervalForm::new());

    let add_interval = move |_| {
        let current = data.get_untracked();
        match form.try_update(|f| f.submit(&current)).flatten() {
            Some(update) => set_props.run(update),
            None => log::debug!("Interval rejected: non-numeric bounds"),
        }
    };

    let input_style = "padding: 10px; margin-right: 10px; border-radius: 5px; border: 1px solid #ccc; width: calc(50% - 20px);";

    view! {
        <div id=id style="width: 100%;">
            <div style="display: flex; align-items: center; margin-bottom: 10px;">
                <input
                    type="number"
                    placeholder="Start time (s)"
                    prop:value=move || form.with(|f| f.start().to_string())
                    on:input=move |ev| form.update(|f| f.set_start(event_target_value(&ev)))
                    style=input_style
                />
                <input
                    type="number"
                    placeholder="End time (s)"
                    prop:value=move || form.with(|f| f.end().to_string())
                    on:input=move |ev| form.update(|f| f.set_end(event_target_value(&ev)))
                    style=input_style
                />
                <button
                    on:click=add_interval
                    style="padding: 10px 20px; border-radius: 5px; border: 1px solid #ccc; background-color: #007bff; color: white; cursor: pointer;"
                >
                    "Add Interval"
                </button>
            </div>
            <div>
                {move || {
                    data.get()
                        .iter()
                        .map(|interval| view! {
                            <div style="padding: 10px; border: 1px solid #ccc; border-radius: 5px; margin-bottom: 5px; background-color: #f9f9f9;">
                                {describe(interval)}
                            </div>
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
