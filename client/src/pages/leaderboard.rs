//! Leaderboard page: podium, today's stats, XP actions and rankings.

use leptos::prelude::*;

use crate::components::podium::Podium;
use crate::components::ranking::RankingList;
use crate::consts::{XP_HOST_EVENT, XP_JOIN_EVENT};
use crate::state::leaderboard::{LeaderboardState, XpAction};
use crate::state::ui::UiState;
use crate::util::clock::now_ms;

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let leaderboard = expect_context::<RwSignal<LeaderboardState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let record = move |action: XpAction| leaderboard.update(|s| s.record(action, now_ms()));
    let stats = move || {
        leaderboard.with(|s| {
            let rank = s.current_user_rank().map_or_else(|| "-".to_owned(), |r| format!("#{r}"));
            (s.xp_gained(), rank, s.total_users())
        })
    };

    view! {
        <div class="leaderboard-page">
            <header class="page-header leaderboard-page__header">
                <h1>"Leaderboard"</h1>
                <button
                    class="leaderboard-page__info"
                    aria-label="How to earn XP"
                    on:click=move |_| ui.update(UiState::toggle_xp_info)
                >
                    "i"
                </button>
            </header>

            <Show when=move || ui.with(|u| u.xp_info_open)>
                <div class="modal-overlay" on:click=move |_| ui.update(UiState::toggle_xp_info)>
                    <div class="modal xp-info" on:click=|ev| ev.stop_propagation()>
                        <header class="modal__header xp-info__header">
                            <h3>"How to Earn XP"</h3>
                            <button class="modal__close" aria-label="Close" on:click=move |_| ui.update(UiState::toggle_xp_info)>
                                "×"
                            </button>
                        </header>
                        <div class="xp-info__rule">
                            <span>"Joining Events"</span>
                            <span class="xp-info__amount">{format!("+{XP_JOIN_EVENT} XP")}</span>
                        </div>
                        <div class="xp-info__rule">
                            <span>"Hosting Events"</span>
                            <span class="xp-info__amount">{format!("+{XP_HOST_EVENT} XP")}</span>
                        </div>
                    </div>
                </div>
            </Show>

            <Podium />

            <p class="daily-stats">
                "You earned "
                <span class="daily-stats__xp">{move || format!("{} XP", stats().0)}</span>
                " today and you are ranked "
                <span class="daily-stats__rank">{move || stats().1}</span>
                " out of "
                <span class="daily-stats__users">{move || format!("{} users", stats().2)}</span>
            </p>

            <div class="xp-actions">
                <button class="xp-actions__button xp-actions__button--join" on:click=move |_| record(XpAction::JoinEvent)>
                    {format!("🎯 Join Event (+{XP_JOIN_EVENT} XP)")}
                </button>
                <button class="xp-actions__button xp-actions__button--host" on:click=move |_| record(XpAction::HostEvent)>
                    {format!("🎪 Host Event (+{XP_HOST_EVENT} XP)")}
                </button>
                <button
                    class="xp-actions__button xp-actions__button--reset"
                    on:click=move |_| leaderboard.update(|s| {
                        s.reset_xp(now_ms());
                    })
                >
                    "🔄 Reset XP"
                </button>
            </div>

            <RankingList />
        </div>
    }
}
