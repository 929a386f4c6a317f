//! Event detail page with registration and a single-marker map.
//!
//! ERROR HANDLING
//! ==============
//! An id that does not parse or is not in the dataset renders the not-found
//! card with a link back to `/events`; nothing propagates past the route.

#[cfg(test)]
#[path = "event_detail_test.rs"]
mod event_detail_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::map_host::MapHost;
use crate::data::dataset::campus;
use crate::data::types::{Event, ItemId};
use crate::state::leaderboard::LeaderboardState;
use crate::state::map_view::{GeoBounds, MapViewState, marker_specs};
use crate::util::clock::now_ms;
use crate::util::format::{clock_time, long_date, month_short};

/// Parse the `:id` route segment.
pub(crate) fn parse_event_id(raw: &str) -> Option<ItemId> {
    raw.trim().parse().ok()
}

#[component]
pub fn EventDetailPage() -> impl IntoView {
    let params = use_params_map();
    let event = move || {
        params
            .with(|p| p.get("id"))
            .and_then(|raw| parse_event_id(&raw))
            .and_then(|id| campus().event(id))
    };

    move || match event() {
        Some(event) => view! { <EventDetail event=event /> }.into_any(),
        None => view! { <EventNotFound /> }.into_any(),
    }
}

#[component]
fn EventNotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Event Not Found"</h1>
            <p>"The event you're looking for doesn't exist."</p>
            <A href="/events" attr:class="btn">"← Back to Events"</A>
        </div>
    }
}

#[component]
fn EventDetail(event: &'static Event) -> impl IntoView {
    let leaderboard = expect_context::<RwSignal<LeaderboardState>>();
    let attending = RwSignal::new(false);

    let on_register = move |_| {
        let joining = !attending.get_untracked();
        attending.set(joining);
        if joining {
            leaderboard.update(|s| {
                s.join_event(event.id, now_ms());
            });
        }
    };

    let markers = marker_specs(&[event], &[], Some(event.id));
    let view_target = MapViewState::focused_on(event.coordinates, &GeoBounds::campus());
    let category = campus().category_label(&event.category);
    let host = event.host_id.as_deref().and_then(|id| leaderboard.with_untracked(|s| s.user(id).map(|u| u.username.clone())));
    let capacity = event.capacity.map(|cap| format!("{} / {cap} going", event.participant_ids.len()));

    view! {
        <div class="detail-page">
            <div class="detail-page__main">
                <A href="/events" attr:class="btn btn--secondary">"← Back to Events"</A>
                <article class="detail-card">
                    <header class="detail-card__header">
                        <div>
                            <h1 class="detail-card__title">{event.name.as_str()}</h1>
                            <span class="detail-card__category">{category}</span>
                        </div>
                        <div class="date-badge">
                            <span class="date-badge__month">{month_short(event.starts_at)}</span>
                            <span class="date-badge__day">{event.starts_at.day()}</span>
                            <span class="date-badge__year">{event.starts_at.year()}</span>
                        </div>
                    </header>
                    <dl class="detail-card__facts">
                        <div><dt>"Date"</dt><dd>{long_date(event.starts_at)}</dd></div>
                        <div><dt>"Time"</dt><dd>{clock_time(event.starts_at)}</dd></div>
                        <div><dt>"Location"</dt><dd>{event.location.as_str()}</dd></div>
                        <div><dt>"Category"</dt><dd>{category}</dd></div>
                        {host.map(|name| view! { <div><dt>"Host"</dt><dd>{name}</dd></div> })}
                        {capacity.map(|text| view! { <div><dt>"Capacity"</dt><dd>{text}</dd></div> })}
                    </dl>
                    {event.description.as_deref().map(|text| view! {
                        <section class="detail-card__about">
                            <h3>"About This Event"</h3>
                            <p>{text}</p>
                        </section>
                    })}
                    <div class="detail-card__actions">
                        <button
                            class="btn detail-card__register"
                            class:detail-card__register--attending=move || attending.get()
                            on:click=on_register
                        >
                            {move || if attending.get() { "✓ Attending" } else { "Register for Event" }}
                        </button>
                    </div>
                </article>
            </div>
            <aside class="detail-page__map">
                <MapHost markers=markers view=view_target class="detail-page__map-host" />
            </aside>
        </div>
    }
}
