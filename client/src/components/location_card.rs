//! List card for one location.

use leptos::prelude::*;

use crate::data::dataset::campus;
use crate::data::types::{ItemId, Location};
use crate::util::format::rating;

#[component]
pub fn LocationCard(
    location: &'static Location,
    #[prop(into)] selected: Signal<bool>,
    on_view_on_map: Callback<ItemId>,
) -> impl IntoView {
    let id = location.id;
    let category = campus().category_label(&location.category);

    view! {
        <article class="location-card" class:location-card--selected=move || selected.get()>
            <header class="location-card__header">
                <div>
                    <h3 class="location-card__name">{location.name.as_str()}</h3>
                    <span class="location-card__category">{category}</span>
                </div>
                <div class="location-card__rating" title="Rating">
                    <span class="location-card__rating-value">{rating(location.rating)}</span>
                    <span class="location-card__rating-star">"★"</span>
                </div>
            </header>
            <p class="location-card__place">{location.location.as_str()}</p>
            <p class="location-card__description">{location.description.as_str()}</p>
            <button class="btn location-card__map" on:click=move |_| on_view_on_map.run(id)>
                "View on Map"
            </button>
        </article>
    }
}
