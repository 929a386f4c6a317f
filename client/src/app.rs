//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::leaderboard_host::LeaderboardHost;
use crate::components::navbar::Navbar;
use crate::pages::{
    event_detail::EventDetailPage, events::EventsPage, home::HomePage, leaderboard::LeaderboardPage,
    locations::LocationsPage, login::LoginPage, not_found::NotFoundPage, profile::ProfilePage, signup::SignupPage,
};
use crate::state::{leaderboard::LeaderboardState, ui::UiState};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// HTML shell rendered on the server for SSR + hydration.
///
/// Leaflet is loaded before the hydration scripts so the `L` global exists
/// by the time the map host mounts.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href=LEAFLET_CSS/>
                <script src=LEAFLET_JS></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared leaderboard and UI state and sets up routing. Browse
/// state is route-scoped and lives in the pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let leaderboard = RwSignal::new(LeaderboardState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(leaderboard);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/nearu.css"/>
        <Title text="nearU."/>

        <Router>
            <Navbar/>
            <LeaderboardHost/>
            <main class="app-main">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("events") view=EventsPage/>
                    <Route path=(StaticSegment("event"), ParamSegment("id")) view=EventDetailPage/>
                    <Route path=StaticSegment("locations") view=LocationsPage/>
                    <Route path=StaticSegment("leaderboard") view=LeaderboardPage/>
                    <Route path=(StaticSegment("leaderboard"), ParamSegment("user_id")) view=ProfilePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                </Routes>
            </main>
        </Router>
    }
}
