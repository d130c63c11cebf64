use super::single_select::SingleSelectControl;
use contracts::shared::option_registry::{KeyingConvention, OptionItem, Scalar};
use contracts::shared::widgets::{PropsUpdate, SingleSelect};
use leptos::prelude::*;

/// Event picker with a free-text field for registering new events.
///
/// A created event becomes the selection (`set_props`) and the widened list
/// is handed to `set_options` so the host keeps it.
#[component]
pub fn EventSelection(
    #[prop(into)] id: String,
    #[prop(into)] value: Signal<Option<Scalar>>,
    #[prop(into)] options: Signal<Vec<OptionItem>>,
    set_props: Callback<PropsUpdate>,
    set_options: Callback<Vec<OptionItem>>,
    /// Key assignment for created events
    #[prop(optional)]
    keying: KeyingConvention,
) -> impl IntoView {
    let state = RwSignal::new(SingleSelect::event_selection(
        &options.get_untracked(),
        keying,
    ));

    Effect::new(move |_| {
        let external = options.get();
        state.update(|s| s.refresh(&external));
    });
    Effect::new(move |_| {
        let v = value.get();
        state.update(|s| s.set_value(v));
    });

    let add_event = move |_| {
        let outbound = state.try_update(|s| s.submit_pending()).unwrap_or_default();
        if let Some(update) = outbound.props {
            set_props.run(update);
        }
        if let Some(widened) = outbound.options {
            log::debug!("Event created, {} options now", widened.len());
            set_options.run(widened);
        }
    };

    view! {
        <div style="position: relative; display: inline-block; width: 400px;">
            <SingleSelectControl
                id=id
                state=state
                set_props=set_props
                empty_text="No events registered"
            />
            <div style="display: flex; align-items: center; margin-top: 10px;">
                <input
                    type="text"
                    placeholder="Enter event name"
                    prop:value=move || state.with(|s| s.pending_label().to_string())
                    on:input=move |ev| state.update(|s| s.set_pending_label(event_target_value(&ev)))
                    style="padding: 10px; width: calc(100% - 100px); margin-right: 10px; border-radius: 5px; border: 1px solid #ccc;"
                />
                <button
                    on:click=add_event
                    style="padding: 10px; border-radius: 5px; border: 1px solid #ccc; background-color: #007bff; color: white; cursor: pointer; white-space: nowrap;"
                >
                    "Add Event"
                </button>
            </div>
        </div>
    }
}
