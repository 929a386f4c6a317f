//! Locations grid with a "view on map" modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! The modal map shows every filtered location and shares this page's
//! `BrowseState` selection: "View on Map" and marker clicks both go through
//! `select`, so the card highlight, marker emphasis and modal title agree.

use leptos::prelude::*;

use crate::components::category_select::CategorySelect;
use crate::components::location_card::LocationCard;
use crate::components::map_host::MapHost;
use crate::consts::LOCATIONS_PAGE_SIZE;
use crate::data::dataset::campus;
use crate::data::types::{Event, ItemId};
use crate::state::browse::BrowseState;
use crate::state::catalog::CategoryFilter;
use crate::state::map_view::marker_specs;

#[component]
pub fn LocationsPage() -> impl IntoView {
    let dataset = campus();
    let browse = RwSignal::new(BrowseState::new(LOCATIONS_PAGE_SIZE));
    let map_open = RwSignal::new(false);

    let select = Callback::new(move |id: ItemId| {
        browse.update(|b| {
            let filtered = b.pager.filtered(&dataset.locations);
            b.selection.select(Some(id), std::iter::empty::<&Event>(), filtered);
        });
    });
    let view_on_map = Callback::new(move |id: ItemId| {
        select.run(id);
        map_open.set(true);
    });
    let on_filter = Callback::new(move |filter: CategoryFilter| browse.update(|b| b.set_filter(filter)));

    let visible = move || browse.with(|b| b.pager.visible(&dataset.locations));
    let filtered_len = move || browse.with(|b| b.pager.filtered(&dataset.locations).len());
    let has_more = move || browse.with(|b| b.pager.has_more(b.pager.filtered(&dataset.locations).len()));
    let selected = move || browse.with(|b| b.selection.selected());

    let markers = Signal::derive(move || {
        let filtered = browse.with(|b| b.pager.filtered(&dataset.locations));
        marker_specs(&[], &filtered, selected())
    });
    let view_target = Signal::derive(move || browse.with(|b| b.selection.view()));
    let modal_title = move || {
        selected()
            .and_then(|id| dataset.location(id))
            .map_or_else(|| "Location".to_owned(), |l| l.name.clone())
    };

    view! {
        <div class="list-page">
            <header class="page-header">
                <h1>"Locations"</h1>
                <p class="page-header__subtitle">"Browse places and discover more on the map"</p>
            </header>
            <CategorySelect
                categories=dataset.categories_in(&dataset.locations)
                value=Signal::derive(move || browse.with(|b| b.pager.filter().clone()))
                on_change=on_filter
            />
            <Show
                when=move || { filtered_len() > 0 }
                fallback=|| view! {
                    <div class="empty-state">
                        <div class="empty-state__icon">"📍"</div>
                        <h3>"No locations found"</h3>
                        <p>"Try selecting a different category"</p>
                    </div>
                }
            >
                <div class="card-grid">
                    <For each=visible key=|location| location.id let:location>
                        <LocationCard
                            location=location
                            selected=Signal::derive(move || selected() == Some(location.id))
                            on_view_on_map=view_on_map
                        />
                    </For>
                </div>
            </Show>
            <Show when=has_more>
                <button class="btn btn--secondary load-more" on:click=move |_| browse.update(BrowseState::load_more)>
                    "Load more"
                </button>
            </Show>
            <Show when=move || map_open.get()>
                <div class="modal-overlay" on:click=move |_| map_open.set(false)>
                    <div class="modal modal--map" on:click=|ev| ev.stop_propagation()>
                        <header class="modal__header">
                            <h2>{modal_title}</h2>
                            <button class="modal__close" aria-label="Close" on:click=move |_| map_open.set(false)>
                                "×"
                            </button>
                        </header>
                        <MapHost markers=markers view=view_target on_select=select class="modal__map" />
                        <footer class="modal__footer">
                            <button class="btn btn--secondary" on:click=move |_| map_open.set(false)>
                                "Close"
                            </button>
                        </footer>
                    </div>
                </div>
            </Show>
        </div>
    }
}
