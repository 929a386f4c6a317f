//! List card for one event.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::data::dataset::campus;
use crate::data::types::{Event, ItemId};
use crate::util::format::{clock_time, short_date};

/// Event summary. Clicking the card selects it when `on_select` is set.
#[component]
pub fn EventCard(
    event: &'static Event,
    #[prop(into)] selected: Signal<bool>,
    #[prop(optional)] on_select: Option<Callback<ItemId>>,
) -> impl IntoView {
    let id = event.id;
    let href = format!("/event/{id}");
    let category = campus().category_label(&event.category);
    let when = format!("{} · {}", short_date(event.starts_at), clock_time(event.starts_at));

    view! {
        <article
            class="event-card"
            class:event-card--selected=move || selected.get()
            class:event-card--clickable=on_select.is_some()
            on:click=move |_| {
                if let Some(on_select) = on_select {
                    on_select.run(id);
                }
            }
        >
            <h3 class="event-card__name">{event.name.as_str()}</h3>
            <span class="event-card__category">{category}</span>
            <p class="event-card__meta">{event.location.as_str()}</p>
            <p class="event-card__meta">{when}</p>
            <A href=href attr:class="btn event-card__details">
                "View Details"
            </A>
        </article>
    }
}
