//! Top navigation bar with the collapsible menu and the current user's XP.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by `App` above the routed outlet. Reads `UiState` for the
//! menu toggle and `LeaderboardState` for the XP chip.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::leaderboard::LeaderboardState;
use crate::state::ui::UiState;

const NAV_LINKS: [(&str, &str); 4] =
    [("/", "Home"), ("/events", "Events"), ("/locations", "Locations"), ("/leaderboard", "Leaderboard")];

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let leaderboard = expect_context::<RwSignal<LeaderboardState>>();

    let my_xp = move || leaderboard.with(|s| s.current_user().map_or(0, |u| u.xp));
    let close = move |_| ui.update(UiState::close_menu);

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"nearU."</A>
            <span class="navbar__spacer"></span>
            <A href="/leaderboard" attr:class="navbar__xp" attr:title="Your XP">
                {move || format!("{} XP", my_xp())}
            </A>
            <button
                class="navbar__menu-toggle"
                class:navbar__menu-toggle--open=move || ui.with(|u| u.menu_open)
                aria-label="Toggle menu"
                on:click=move |_| ui.update(UiState::toggle_menu)
            >
                <span></span>
                <span></span>
                <span></span>
            </button>
            <Show when=move || ui.with(|u| u.menu_open)>
                <div class="navbar__overlay" on:click=close></div>
                <div class="navbar__dropdown">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <A href=href attr:class="navbar__item" on:click=close>
                                    {label}
                                </A>
                            }
                        })
                        .collect_view()}
                    <div class="navbar__divider"></div>
                    <A href="/login" attr:class="navbar__item navbar__item--sign-in" on:click=close>
                        "Sign In"
                    </A>
                </div>
            </Show>
        </nav>
    }
}
