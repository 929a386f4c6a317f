//! Category filter dropdown shared by the list pages.

use leptos::prelude::*;

use crate::consts::ALL_CATEGORIES;
use crate::data::types::Category;
use crate::state::catalog::CategoryFilter;

#[component]
pub fn CategorySelect(
    categories: Vec<Category>,
    #[prop(into)] value: Signal<CategoryFilter>,
    on_change: Callback<CategoryFilter>,
) -> impl IntoView {
    view! {
        <label class="category-select">
            <span class="category-select__label">"Filter by category:"</span>
            <select
                class="category-select__input"
                prop:value=move || value.get().as_value().to_owned()
                on:change=move |ev| on_change.run(CategoryFilter::parse(&event_target_value(&ev)))
            >
                <option value=ALL_CATEGORIES>"All categories"</option>
                {categories
                    .into_iter()
                    .map(|c| view! { <option value=c.value>{c.label}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}
