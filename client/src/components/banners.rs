//! Transient XP pop-up and notification bar.

use leptos::prelude::*;

use crate::state::leaderboard::LeaderboardState;

/// "+N XP" pop-up shown after an award.
#[component]
pub fn XpPopup() -> impl IntoView {
    let leaderboard = expect_context::<RwSignal<LeaderboardState>>();
    let award = move || leaderboard.with(|s| s.xp_animation().payload().cloned());

    view! {
        {move || {
            award()
                .map(|award| {
                    view! {
                        <div class="xp-popup" role="status">
                            <span class="xp-popup__icon">"🔥"</span>
                            <span class="xp-popup__amount">{format!("+{} XP", award.amount)}</span>
                            <span class="xp-popup__reason">{award.reason}</span>
                        </div>
                    }
                })
        }}
    }
}

#[component]
pub fn NotificationBar() -> impl IntoView {
    let leaderboard = expect_context::<RwSignal<LeaderboardState>>();
    let notification = move || leaderboard.with(|s| s.notification().payload().cloned());

    view! {
        {move || {
            notification()
                .map(|note| {
                    view! {
                        <div class=format!("notification-bar notification-bar--{}", note.kind.css_modifier()) role="status">
                            {note.message}
                        </div>
                    }
                })
        }}
    }
}
