use leptos::prelude::*;

/// Round color dot shown next to option labels
#[component]
pub fn Swatch(
    /// CSS color
    #[prop(into)]
    color: Signal<String>,
) -> impl IntoView {
    view! {
        <span
            class="option-swatch"
            style=move || format!(
                "display: inline-block; width: 10px; height: 10px; border-radius: 50%; margin-right: 5px; background-color: {};",
                color.get()
            )
        ></span>
    }
}
