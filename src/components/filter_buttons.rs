//! Filter Buttons Component
//!
//! Reusable button group for choosing one filter value.

use leptos::prelude::*;

use crate::filters::FilterOption;

/// Row of filter buttons, the option equal to `current` is highlighted
#[component]
pub fn Filters<T>(
    #[prop(into)] options: Signal<Vec<FilterOption<T>>>,
    #[prop(into)] current: Signal<Option<T>>,
    #[prop(into)] on_select: Callback<Option<T>>,
) -> impl IntoView
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    view! {
        <div class="filters">
            <For
                each=move || options.get()
                key=|option| option.label.clone()
                children=move |option| {
                    let FilterOption { label, value } = option;
                    let selected = value.clone();
                    let is_active = move || current.with(|c| *c == value);
                    view! {
                        <button
                            class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                            on:click=move |_| on_select.run(selected.clone())
                        >
                            {label}
                        </button>
                    }
                }
            />
        </div>
    }
}
