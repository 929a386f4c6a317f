//! Leaflet map host: markers plus fly-to camera transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages hand this component the markers to draw and the view target derived
//! from their `SelectionState`. Marker clicks come back through `on_select`,
//! which pages route into the same `select` call list rows use, so map and
//! list can never disagree about what is selected.
//!
//! ARCHITECTURE
//! ============
//! During SSR only the container div renders. After hydration one effect
//! mounts the Leaflet map; a second redraws markers whenever the marker list
//! changes; a third forwards view changes to `flyTo`, gated by a
//! `FlyTransition` so an unchanged target never restarts the flight. When the
//! host unmounts (modal closed, route left) the Leaflet map is removed so its
//! tile layer and window listeners go with it.

use leptos::prelude::*;

use crate::data::types::ItemId;
use crate::state::map_view::{MapViewState, MarkerSpec};

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;
#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::Closure;

#[cfg(feature = "hydrate")]
use crate::util::leaflet::{self, LayerGroup, LeafletMap};

#[cfg(feature = "hydrate")]
struct MountedMap {
    map: LeafletMap,
    markers: LayerGroup,
    // Click handlers must outlive the markers that reference them.
    handlers: Vec<Closure<dyn FnMut()>>,
}

/// Interactive campus map.
#[component]
pub fn MapHost(
    #[prop(into)] markers: Signal<Vec<MarkerSpec>>,
    #[prop(into)] view: Signal<MapViewState>,
    #[prop(optional)] on_select: Option<Callback<ItemId>>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::consts::{FLY_DURATION_MS, TILE_ATTRIBUTION, TILE_URL};
        use crate::state::map_view::{FlyTransition, GeoBounds};
        use crate::util::clock::now_ms;
        use wasm_bindgen::JsValue;

        let mounted = Rc::new(RefCell::new(None::<MountedMap>));
        let flight = Rc::new(RefCell::new(None::<FlyTransition>));
        let ready = RwSignal::new(false);
        // Handle for teardown; `on_cleanup` needs a Send + Sync capture.
        let live_map = StoredValue::new_local(None::<LeafletMap>);

        on_cleanup(move || {
            if let Some(Some(map)) = live_map.try_update_value(Option::take) {
                map.remove();
            }
        });

        {
            let mounted = Rc::clone(&mounted);
            let flight = Rc::clone(&flight);
            let container_ref = container_ref.clone();
            Effect::new(move || {
                let Some(container) = container_ref.get() else {
                    return;
                };
                if mounted.borrow().is_some() {
                    return;
                }
                let bounds = GeoBounds::campus();
                let initial = view.get_untracked();
                let element: &web_sys::HtmlElement = &container;
                let map = leaflet::create_map(
                    element,
                    &leaflet::options(&[
                        ("maxBounds", leaflet::lat_lng_bounds(&bounds).into()),
                        ("maxBoundsViscosity", JsValue::from_f64(1.0)),
                        ("scrollWheelZoom", JsValue::TRUE),
                    ]),
                );
                map.set_view(&leaflet::lat_lng(initial.center), initial.zoom);
                leaflet::tile_layer(
                    TILE_URL,
                    &leaflet::options(&[("attribution", JsValue::from_str(TILE_ATTRIBUTION))]),
                )
                .add_to(&map);
                let markers = leaflet::layer_group();
                markers.add_to(&map);
                map.invalidate_size();

                live_map.set_value(Some(map.clone()));
                *flight.borrow_mut() = Some(FlyTransition::settled(initial));
                *mounted.borrow_mut() = Some(MountedMap { map, markers, handlers: Vec::new() });
                ready.set(true);
            });
        }

        {
            let mounted = Rc::clone(&mounted);
            Effect::new(move || {
                let specs = markers.get();
                if !ready.get() {
                    return;
                }
                let mut guard = mounted.borrow_mut();
                let Some(mounted) = guard.as_mut() else {
                    return;
                };
                mounted.markers.clear_layers();
                mounted.handlers.clear();
                for spec in &specs {
                    let icon = leaflet::div_icon(&leaflet::options(&[
                        ("className", JsValue::from_str(&spec.class_list())),
                        ("html", JsValue::from_str("<span class=\"map-marker__dot\"></span>")),
                        ("iconSize", leaflet::point(28.0, 28.0).into()),
                    ]));
                    let marker = leaflet::marker(
                        &leaflet::lat_lng(spec.coordinates),
                        &leaflet::options(&[
                            ("icon", icon),
                            ("title", JsValue::from_str(&spec.name)),
                            ("zIndexOffset", JsValue::from_f64(if spec.selected { 1000.0 } else { 0.0 })),
                        ]),
                    );
                    let id = spec.id;
                    let handler = Closure::<dyn FnMut()>::new(move || {
                        if let Some(on_select) = on_select {
                            on_select.run(id);
                        }
                    });
                    marker.on("click", handler.as_ref().unchecked_ref());
                    marker.add_to(&mounted.markers);
                    mounted.handlers.push(handler);
                }
            });
        }

        Effect::new(move || {
            let target = view.get();
            if !ready.get() {
                return;
            }
            let mut flight = flight.borrow_mut();
            let Some(flight) = flight.as_mut() else {
                return;
            };
            if !flight.retarget(target, now_ms()) {
                return;
            }
            if let Some(mounted) = mounted.borrow().as_ref() {
                mounted.map.fly_to(
                    &leaflet::lat_lng(target.center),
                    target.zoom,
                    &leaflet::options(&[("duration", JsValue::from_f64(FLY_DURATION_MS / 1000.0))]),
                );
            }
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (markers, view, on_select);
    }

    view! {
        <div class=format!("map-host {class}") node_ref=container_ref>
            <noscript>"The map needs JavaScript."</noscript>
        </div>
    }
}
