//! Home page: events list beside the campus map.
//!
//! SYSTEM CONTEXT
//! ==============
//! The one route where list and map share a selection. Cards and markers both
//! call `select`, the list highlights `selection.selected()`, and the map
//! flies to `selection.view()`. Selection and markers both resolve ids
//! against the shown events only, through `BrowseState`. Locations are always shown as markers; events
//! follow the category filter and the "load more" page.

use leptos::prelude::*;

use crate::components::category_select::CategorySelect;
use crate::components::event_card::EventCard;
use crate::components::map_host::MapHost;
use crate::consts::EVENTS_PAGE_SIZE;
use crate::data::dataset::campus;
use crate::data::types::ItemId;
use crate::state::browse::BrowseState;
use crate::state::catalog::CategoryFilter;

#[component]
pub fn HomePage() -> impl IntoView {
    let dataset = campus();
    let browse = RwSignal::new(BrowseState::new(EVENTS_PAGE_SIZE));

    let select = Callback::new(move |id: ItemId| {
        browse.update(|b| {
            b.select_shown(Some(id), &dataset.events, &dataset.locations);
        });
    });
    let clear = move |_| browse.update(|b| b.selection.clear());
    let on_filter = Callback::new(move |filter: CategoryFilter| browse.update(|b| b.set_filter(filter)));

    let visible = move || browse.with(|b| b.pager.visible(&dataset.events));
    let filtered_len = move || browse.with(|b| b.pager.filtered(&dataset.events).len());
    let has_more = move || browse.with(|b| b.pager.has_more(b.pager.filtered(&dataset.events).len()));
    let selected = move || browse.with(|b| b.selection.selected());

    let markers = Signal::derive(move || browse.with(|b| b.shown_markers(&dataset.events, &dataset.locations)));
    let view_target = Signal::derive(move || browse.with(|b| b.selection.view()));

    let selected_name = move || {
        selected().and_then(|id| {
            dataset
                .event(id)
                .map(|e| e.name.clone())
                .or_else(|| dataset.location(id).map(|l| l.name.clone()))
        })
    };

    view! {
        <div class="home-page">
            <section class="home-page__list">
                <header class="page-header">
                    <h1>"Discover campus events"</h1>
                    <p class="page-header__subtitle">"Pick an event or a place to find it on the map."</p>
                </header>
                <CategorySelect
                    categories=dataset.categories_in(&dataset.events)
                    value=Signal::derive(move || browse.with(|b| b.pager.filter().clone()))
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
                    <div class="card-list">
                        <For each=visible key=|event| event.id let:event>
                            <EventCard
                                event=event
                                selected=Signal::derive(move || selected() == Some(event.id))
                                on_select=select
                            />
                        </For>
                    </div>
                </Show>
                <Show when=has_more>
                    <button class="btn btn--secondary load-more" on:click=move |_| browse.update(BrowseState::load_more)>
                        "Load more"
                    </button>
                </Show>
            </section>
            <section class="home-page__map">
                <Show when=move || selected().is_some()>
                    <div class="map-selection">
                        <span class="map-selection__name">{selected_name}</span>
                        <button class="map-selection__clear" on:click=clear>"Show all"</button>
                    </div>
                </Show>
                <MapHost markers=markers view=view_target on_select=select class="home-page__map-host" />
            </section>
        </div>
    }
}
