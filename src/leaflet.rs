//! Leaflet Bindings
//!
//! Typed wrappers over the `L` global the host page loads, covering only
//! what the map uses: map, tiles, layer groups, markers, div icons,
//! attribution control and the geocoder plugin.

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    // ========================
    // Geometry
    // ========================

    pub type LatLng;

    #[wasm_bindgen(js_namespace = L, js_name = latLng)]
    pub fn lat_lng(lat: f64, lng: f64) -> LatLng;

    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &LatLng) -> f64;

    // ========================
    // Map
    // ========================

    #[derive(Clone)]
    pub type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn new_map(element_id: &str) -> Map;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &LatLng, zoom: f64) -> Map;

    #[wasm_bindgen(method)]
    pub fn on(this: &Map, event: &str, handler: &js_sys::Function) -> Map;

    #[wasm_bindgen(method)]
    pub fn off(this: &Map, event: &str, handler: &js_sys::Function) -> Map;

    #[wasm_bindgen(method, js_name = removeLayer)]
    pub fn remove_layer(this: &Map, layer: &Layer) -> Map;

    /// Payload of map mouse events
    pub type MapMouseEvent;

    #[wasm_bindgen(method, getter)]
    pub fn latlng(this: &MapMouseEvent) -> LatLng;

    // ========================
    // Layers
    // ========================

    pub type Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Layer, map: &Map) -> Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to_group(this: &Layer, group: &LayerGroup) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(extends = Layer)]
    pub type LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    pub fn layer_group() -> LayerGroup;

    #[wasm_bindgen(method, js_name = clearLayers)]
    pub fn clear_layers(this: &LayerGroup) -> LayerGroup;

    #[wasm_bindgen(method, js_name = getLayers)]
    pub fn get_layers(this: &LayerGroup) -> js_sys::Array;

    #[wasm_bindgen(extends = Layer)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn marker(position: &LatLng, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, content: &str) -> Marker;

    pub type DivIcon;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    pub fn div_icon(options: &JsValue) -> DivIcon;

    // ========================
    // Controls
    // ========================

    pub type Control;

    #[wasm_bindgen(js_namespace = ["L", "control"], js_name = attribution)]
    pub fn attribution_control(options: &JsValue) -> Control;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Control, map: &Map) -> Control;

    #[wasm_bindgen(method, js_name = setPrefix)]
    pub fn set_prefix(this: &Control, prefix: &str) -> Control;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Control) -> Control;

    /// `leaflet-control-geocoder` plugin
    #[wasm_bindgen(js_namespace = ["L", "Control"], js_name = geocoder)]
    pub fn geocoder(options: &JsValue) -> Control;

    #[wasm_bindgen(method)]
    pub fn on(this: &Control, event: &str, handler: &js_sys::Function) -> Control;

    /// Payload of the geocoder's `markgeocode` event
    pub type GeocodeEvent;

    #[wasm_bindgen(method, getter)]
    pub fn geocode(this: &GeocodeEvent) -> GeocodeResult;

    pub type GeocodeResult;

    #[wasm_bindgen(method, getter)]
    pub fn center(this: &GeocodeResult) -> LatLng;
}

// ========================
// Option objects
// ========================

#[derive(Serialize)]
pub struct TileLayerOptions<'a> {
    pub attribution: &'a str,
}

#[derive(Serialize)]
pub struct ControlOptions<'a> {
    pub position: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocoderOptions {
    pub default_mark_geocode: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivIconOptions<'a> {
    pub class_name: &'a str,
    pub html: &'a str,
    pub icon_size: [u32; 2],
}

/// Serialize an option struct into the plain object Leaflet expects
pub fn options<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or_else(|err| {
        tracing::warn!("[MAP] Failed to serialize Leaflet options: {}", err);
        JsValue::UNDEFINED
    })
}

/// `{ icon }` marker options
pub fn marker_options_with_icon(icon: &DivIcon) -> JsValue {
    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&options, &JsValue::from_str("icon"), icon);
    options.into()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("not an option object"))
        }
    }

    #[wasm_bindgen_test]
    fn test_options_become_plain_objects() {
        let value = options(&ControlOptions { position: "bottomright" });
        let position = js_sys::Reflect::get(&value, &JsValue::from_str("position")).unwrap();
        assert_eq!(position.as_string().as_deref(), Some("bottomright"));
    }

    #[wasm_bindgen_test]
    fn test_failed_options_fall_back_to_undefined() {
        assert!(options(&Unserializable).is_undefined());
    }
}
