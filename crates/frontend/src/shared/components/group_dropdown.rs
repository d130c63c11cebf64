use super::single_select::SingleSelectControl;
use contracts::shared::option_registry::{OptionItem, Scalar};
use contracts::shared::widgets::{PropsUpdate, SingleSelect};
use leptos::prelude::*;

/// Group 1..4 dropdown, augmentable by the host.
///
/// Reports `{value, currentColor}`. While `value` is the loading sentinel
/// the control does not open.
#[component]
pub fn GroupDropdown(
    #[prop(into)] id: String,
    /// Selected group
    #[prop(into)]
    value: Signal<Option<Scalar>>,
    /// Extra groups merged after the built-in ones
    #[prop(into)]
    additional_options: Signal<Vec<OptionItem>>,
    /// Swatch override from the host
    #[prop(into)]
    current_color: Signal<Option<String>>,
    set_props: Callback<PropsUpdate>,
) -> impl IntoView {
    let state = RwSignal::new(SingleSelect::group(
        &additional_options.get_untracked(),
        value.get_untracked(),
    ));

    Effect::new(move |_| {
        let external = additional_options.get();
        state.update(|s| s.refresh(&external));
    });
    Effect::new(move |_| {
        let v = value.get();
        state.update(|s| s.set_value(v));
    });
    Effect::new(move |_| {
        let color = current_color.get();
        state.update(|s| s.set_current_color(color));
    });

    view! {
        <div style="position: relative; display: inline-block; width: 200px;">
            <SingleSelectControl id=id state=state set_props=set_props />
        </div>
    }
}
