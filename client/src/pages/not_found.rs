//! Fallback for unknown paths.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page Not Found"</h1>
            <p>"There is nothing at this address."</p>
            <A href="/" attr:class="btn">"← Back Home"</A>
        </div>
    }
}
