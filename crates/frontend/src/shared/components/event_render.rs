use super::single_select::SingleSelectControl;
use contracts::shared::option_registry::{OptionItem, Scalar};
use contracts::shared::widgets::{PropsUpdate, SingleSelect};
use leptos::prelude::*;

/// Event picker that always offers `freezing` first
#[component]
pub fn EventRender(
    #[prop(into)] id: String,
    #[prop(into)] value: Signal<Option<Scalar>>,
    #[prop(into)] options: Signal<Vec<OptionItem>>,
    set_props: Callback<PropsUpdate>,
) -> impl IntoView {
    let state = RwSignal::new(SingleSelect::event_render(&options.get_untracked()));

    Effect::new(move |_| {
        let external = options.get();
        state.update(|s| s.refresh(&external));
    });
    Effect::new(move |_| {
        if let Some(v) = value.get() {
            state.update(|s| s.set_value(Some(v)));
        }
    });

    view! {
        <div style="position: relative; display: inline-block; width: 400px;">
            <SingleSelectControl id=id state=state set_props=set_props />
        </div>
    }
}
