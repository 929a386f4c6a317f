//! Paginated leaderboard ranking list.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;

use crate::state::leaderboard::{LeaderboardState, RankBadge, RankedUser};

fn badge_class(badge: RankBadge) -> &'static str {
    match badge {
        RankBadge::Medal(medal) => medal.css_class(),
        RankBadge::Numeric(_) => "rank-normal",
    }
}

#[component]
fn RankingRow(ranked: RankedUser) -> impl IntoView {
    let RankedUser { badge, user, .. } = ranked;
    let href = format!("/leaderboard/{}", user.id);
    let rank = match badge {
        RankBadge::Medal(medal) => view! { <span class="ranking-row__medal">{medal.icon()}</span> }.into_any(),
        RankBadge::Numeric(n) => view! { <span class="ranking-row__number">{format!("#{n}")}</span> }.into_any(),
    };
    let name = if user.is_current_user {
        view! { <span class="ranking-row__you">"You"</span> }.into_any()
    } else {
        view! { <span class="ranking-row__name">{user.username}</span> }.into_any()
    };

    view! {
        <A
            href=href
            attr:class=format!(
                "ranking-row {}{}",
                badge_class(badge),
                if user.is_current_user { " ranking-row--current" } else { "" },
            )
        >
            <span class="ranking-row__rank">{rank}</span>
            <span class="ranking-row__player">{name}</span>
            <span class="ranking-row__xp">{format!("{} XP", user.xp)}</span>
        </A>
    }
}

#[component]
pub fn RankingList() -> impl IntoView {
    let leaderboard = expect_context::<RwSignal<LeaderboardState>>();
    let page = move || leaderboard.with(LeaderboardState::ranking_page);
    let page_count = move || leaderboard.with(LeaderboardState::ranking_page_count);

    view! {
        <section class="ranking">
            <h2 class="ranking__title">"LEADERBOARD RANKINGS"</h2>
            <div class="ranking__list">
                <For
                    each=move || leaderboard.with(LeaderboardState::ranking_page_items)
                    key=|ranked| (ranked.user.id.clone(), ranked.position, ranked.user.xp)
                    let:ranked
                >
                    <RankingRow ranked=ranked />
                </For>
            </div>
            <Show when=move || { page_count() > 1 }>
                <div class="ranking__pagination">
                    <button
                        class="ranking__arrow"
                        disabled=move || page() == 1
                        aria-label="Previous page"
                        on:click=move |_| leaderboard.update(LeaderboardState::prev_ranking_page)
                    >
                        "‹"
                    </button>
                    <span class="ranking__page">{move || format!("Page {} of {}", page(), page_count())}</span>
                    <button
                        class="ranking__arrow"
                        disabled=move || page() == page_count()
                        aria-label="Next page"
                        on:click=move |_| leaderboard.update(LeaderboardState::next_ranking_page)
                    >
                        "›"
                    </button>
                </div>
            </Show>
        </section>
    }
}
