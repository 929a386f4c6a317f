//! Events grid with category filter and "load more".

use leptos::prelude::*;

use crate::components::category_select::CategorySelect;
use crate::components::event_card::EventCard;
use crate::consts::EVENTS_PAGE_SIZE;
use crate::data::dataset::campus;
use crate::state::catalog::{CategoryFilter, Pager};

#[component]
pub fn EventsPage() -> impl IntoView {
    let dataset = campus();
    let pager = RwSignal::new(Pager::new(EVENTS_PAGE_SIZE));

    let visible = move || pager.with(|p| p.visible(&dataset.events));
    let filtered_len = move || pager.with(|p| p.filtered(&dataset.events).len());
    let has_more = move || pager.with(|p| p.has_more(p.filtered(&dataset.events).len()));
    let on_filter = Callback::new(move |filter: CategoryFilter| pager.update(|p| p.set_filter(filter)));

    view! {
        <div class="list-page">
            <header class="page-header">
                <h1>"Events"</h1>
                <p class="page-header__subtitle">
                    {move || format!("Showing {} of {} events", visible().len(), filtered_len())}
                </p>
            </header>
            <CategorySelect
                categories=dataset.categories_in(&dataset.events)
                value=Signal::derive(move || pager.with(|p| p.filter().clone()))
                on_change=on_filter
            />
            <Show
                when=move || { filtered_len() > 0 }
                fallback=|| view! {
                    <div class="empty-state">
                        <h3>"No events found"</h3>
                        <p>"Try selecting a different category"</p>
                    </div>
                }
            >
                <div class="card-grid">
                    <For each=visible key=|event| event.id let:event>
                        <EventCard event=event selected=false />
                    </For>
                </div>
            </Show>
            <Show when=has_more>
                <button class="btn btn--secondary load-more" on:click=move |_| pager.update(Pager::load_more)>
                    "Load more"
                </button>
            </Show>
        </div>
    }
}
