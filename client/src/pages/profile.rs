//! Per-user profile reached from the leaderboard.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::data::dataset::campus;
use crate::data::types::Event;
use crate::state::leaderboard::LeaderboardState;
use crate::util::format::short_date;

fn event_links(events: Vec<&'static Event>, empty: &'static str) -> AnyView {
    if events.is_empty() {
        return view! { <p class="profile__empty">{empty}</p> }.into_any();
    }
    view! {
        <ul class="profile__events">
            {events
                .into_iter()
                .map(|e| view! {
                    <li>
                        <A href=format!("/event/{}", e.id)>{e.name.as_str()}</A>
                        <span class="profile__date">{short_date(e.starts_at)}</span>
                    </li>
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let leaderboard = expect_context::<RwSignal<LeaderboardState>>();
    let params = use_params_map();
    let user = move || {
        let id = params.with(|p| p.get("user_id"))?;
        leaderboard.with(|s| s.user(&id).cloned())
    };

    move || match user() {
        None => view! {
            <div class="not-found">
                <p>"User not found."</p>
                <A href="/leaderboard" attr:class="btn">"Back to Leaderboard"</A>
            </div>
        }
        .into_any(),
        Some(user) => {
            let dataset = campus();
            let hosted = dataset.hosted_by(&user.id);
            let joined = dataset.joined_by(&user.id);
            view! {
                <div class="profile">
                    <header class="profile__header">
                        <A href="/leaderboard" attr:class="btn btn--secondary">"← Leaderboard"</A>
                        <h1>{format!("{}'s Profile ({} XP)", user.username, user.xp)}</h1>
                    </header>
                    <section class="profile__section">
                        <h2>"Hosted Events"</h2>
                        {event_links(hosted, "No hosted events yet.")}
                    </section>
                    <section class="profile__section">
                        <h2>"Joined Events"</h2>
                        {event_links(joined, "No joined events yet.")}
                    </section>
                </div>
            }
            .into_any()
        }
    }
}
