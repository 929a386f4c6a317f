//! Leaflet bindings used by the map host.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leaflet is loaded from a `<script>` tag in the document shell and exposes
//! the global `L`. Only the handful of calls the map host makes are bound.
//! Hydrate-only: nothing here exists during SSR.
//!
//! ERROR HANDLING
//! ==============
//! Option-object construction can only fail on frozen objects, which never
//! happens for fresh `Object`s; failures are still logged rather than ignored.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::data::types::LatLng;
use crate::state::map_view::GeoBounds;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L, js_name = Map)]
    #[derive(Clone)]
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn create_map(container: &web_sys::HtmlElement, options: &Object) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &LeafletMap, center: &Array, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = flyTo)]
    pub fn fly_to(this: &LeafletMap, center: &Array, zoom: f64, options: &Object) -> LeafletMap;

    #[wasm_bindgen(method, js_name = invalidateSize)]
    pub fn invalidate_size(this: &LeafletMap) -> LeafletMap;

    /// Destroy the map: DOM, layers and window listeners.
    #[wasm_bindgen(method)]
    pub fn remove(this: &LeafletMap) -> LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = TileLayer)]
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url: &str, options: &Object) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = LayerGroup)]
    pub type LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    pub fn layer_group() -> LayerGroup;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &LayerGroup, map: &LeafletMap) -> LayerGroup;

    #[wasm_bindgen(method, js_name = clearLayers)]
    pub fn clear_layers(this: &LayerGroup) -> LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = Marker)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn marker(at: &Array, options: &Object) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, group: &LayerGroup) -> Marker;

    #[wasm_bindgen(method)]
    pub fn on(this: &Marker, event: &str, handler: &js_sys::Function) -> Marker;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    pub fn div_icon(options: &Object) -> JsValue;
}

/// `[lat, lng]` as Leaflet expects it.
pub fn lat_lng(point: LatLng) -> Array {
    Array::of2(&JsValue::from_f64(point.lat), &JsValue::from_f64(point.lng))
}

/// Pixel `[x, y]` pair.
pub fn point(x: f64, y: f64) -> Array {
    Array::of2(&JsValue::from_f64(x), &JsValue::from_f64(y))
}

/// `[[south, west], [north, east]]`.
pub fn lat_lng_bounds(bounds: &GeoBounds) -> Array {
    Array::of2(&lat_lng(bounds.south_west), &lat_lng(bounds.north_east))
}

/// Build a plain options object from key/value pairs.
pub fn options(entries: &[(&str, JsValue)]) -> Object {
    let object = Object::new();
    for (key, value) in entries {
        if Reflect::set(&object, &JsValue::from_str(key), value).is_err() {
            leptos::logging::warn!("failed to set Leaflet option {key}");
        }
    }
    object
}
