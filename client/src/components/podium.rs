//! Top-three podium for the leaderboard page.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;

use crate::state::leaderboard::{LeaderboardState, Medal, RankBadge, RankedUser};
use crate::util::format::initial;

fn podium_icon(medal: Medal) -> &'static str {
    match medal {
        Medal::Gold => "🏆",
        Medal::Silver | Medal::Bronze => medal.icon(),
    }
}

#[component]
fn PodiumCard(ranked: RankedUser) -> impl IntoView {
    let RankBadge::Medal(medal) = ranked.badge else {
        return ().into_any();
    };
    let user = ranked.user;
    let href = format!("/leaderboard/{}", user.id);
    let you = user.is_current_user;

    view! {
        <A href=href attr:class=format!("podium__card podium__card--{} {}", ranked.position, medal.css_class())>
            <span class="podium__icon">{podium_icon(medal)}</span>
            <span class="podium__avatar">{initial(&user.username)}</span>
            <span class="podium__name">
                {user.username}
                <Show when=move || you>
                    <span class="podium__you">"You"</span>
                </Show>
            </span>
            <span class="podium__xp">{format!("{} XP", user.xp)}</span>
        </A>
    }
    .into_any()
}

/// Second, first, third from left to right.
#[component]
pub fn Podium() -> impl IntoView {
    let leaderboard = expect_context::<RwSignal<LeaderboardState>>();
    let ordered = move || {
        let mut top = leaderboard.with(LeaderboardState::podium);
        if top.len() >= 2 {
            top.swap(0, 1);
        }
        top
    };

    view! {
        <div class="podium">
            {move || ordered().into_iter().map(|ranked| view! { <PodiumCard ranked=ranked /> }).collect_view()}
        </div>
    }
}
