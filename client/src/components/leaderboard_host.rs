//! Browser-side wiring for the shared leaderboard: storage sync and banner
//! timers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by `App`. `LeaderboardState` itself is pure; this component
//! owns the side effects that keep it in step with localStorage and the
//! clock.
//!
//! DESIGN
//! ======
//! - Rehydration runs once, after hydration, so SSR and the first client
//!   render agree on the seed roster.
//! - Storage writes follow `pending_write()` through a memo, so banner-only
//!   changes never rewrite storage.
//! - Each banner gets one `TaskSlot`. A new ticket replaces the pending task,
//!   and the task expires only its own sequence number.

use leptos::prelude::*;

use super::banners::{NotificationBar, XpPopup};
use crate::consts::LEADERBOARD_STORAGE_KEY;
use crate::state::banner::BannerTicket;
use crate::state::leaderboard::{LeaderboardState, LeaderboardUser, StoreWrite};
use crate::util::clock::now_ms;
use crate::util::storage::{load_json, remove_key, save_json};
use crate::util::timer::TaskSlot;

#[component]
pub fn LeaderboardHost() -> impl IntoView {
    let leaderboard = expect_context::<RwSignal<LeaderboardState>>();

    Effect::new(move || {
        let stored = load_json::<Vec<LeaderboardUser>>(LEADERBOARD_STORAGE_KEY);
        leaderboard.update(|s| s.rehydrate(stored));
    });

    let pending = Memo::new(move |_| leaderboard.with(LeaderboardState::pending_write));
    Effect::new(move || match pending.get() {
        Some(StoreWrite::Save(users)) => save_json(LEADERBOARD_STORAGE_KEY, &users),
        Some(StoreWrite::Erase) => remove_key(LEADERBOARD_STORAGE_KEY),
        None => {}
    });

    let xp_ticket = Memo::new(move |_| leaderboard.with(|s| s.xp_animation().ticket()));
    expire_on_deadline(xp_ticket, move |seq| {
        leaderboard.update(|s| {
            s.expire_xp_animation(seq);
        });
    });

    let note_ticket = Memo::new(move |_| leaderboard.with(|s| s.notification().ticket()));
    expire_on_deadline(note_ticket, move |seq| {
        leaderboard.update(|s| {
            s.expire_notification(seq);
        });
    });

    view! {
        <XpPopup />
        <NotificationBar />
    }
}

fn expire_on_deadline(ticket: Memo<Option<BannerTicket>>, expire: impl Fn(u64) + Copy + 'static) {
    let slot = TaskSlot::default();
    Effect::new(move || match ticket.get() {
        Some(ticket) => slot.schedule(ticket.remaining_ms(now_ms()), move || expire(ticket.seq)),
        None => slot.cancel(),
    });
}
