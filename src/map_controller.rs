//! Map Controller
//!
//! Owns the Leaflet map, the idea marker group, the add-mode click
//! listener and the temporary markers of the current add flow.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::add_mode::ADD_MODE_HINT;
use crate::config::{MapConfig, GEOCODE_ZOOM, MAP_ELEMENT_ID, TILE_ATTRIBUTION, TILE_URL};
use crate::leaflet::{self, Control, LayerGroup, Map, MapMouseEvent, Marker};
use crate::popup::IdeaMarker;

const TEMP_MARKER_HTML: &str = r#"<div style="background-color: #dc3545; width: 20px; height: 20px; border-radius: 50%; border: 2px solid white;"></div>"#;

#[derive(Default)]
pub struct MapController {
    map: Option<Map>,
    markers: Option<LayerGroup>,
    _geocode_handler: Option<Closure<dyn FnMut(leaflet::GeocodeEvent)>>,
    click_handler: Option<Closure<dyn FnMut(MapMouseEvent)>>,
    add_mode_hint: Option<Control>,
    temp_markers: Vec<Marker>,
}

impl MapController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.map.is_some()
    }

    /// Create the map once. Returns false when it already exists.
    pub fn initialize(&mut self, config: &MapConfig) -> bool {
        if self.map.is_some() {
            return false;
        }

        let map = leaflet::new_map(MAP_ELEMENT_ID);
        map.set_view(&leaflet::lat_lng(config.lat, config.lng), config.zoom as f64);

        leaflet::tile_layer(
            TILE_URL,
            &leaflet::options(&leaflet::TileLayerOptions { attribution: TILE_ATTRIBUTION }),
        )
        .add_to(&map);

        let markers = leaflet::layer_group();
        markers.add_to(&map);

        let target = map.clone();
        let on_geocode = Closure::<dyn FnMut(leaflet::GeocodeEvent)>::new(move |ev: leaflet::GeocodeEvent| {
            target.set_view(&ev.geocode().center(), GEOCODE_ZOOM);
        });
        Control::geocoder(&leaflet::options(&leaflet::GeocoderOptions { default_mark_geocode: false }))
            .on("markgeocode", on_geocode.as_ref().unchecked_ref())
            .add_to(&map);

        tracing::info!(
            "[MAP] Initialized at {}, {} (zoom {})",
            config.lat,
            config.lng,
            config.zoom
        );
        self.map = Some(map);
        self.markers = Some(markers);
        self._geocode_handler = Some(on_geocode);
        true
    }

    pub fn recenter(&self, lat: f64, lng: f64, zoom: i32) {
        if let Some(map) = &self.map {
            map.set_view(&leaflet::lat_lng(lat, lng), zoom as f64);
        }
    }

    // ========================
    // Idea markers
    // ========================

    pub fn clear_markers(&self) {
        if let Some(markers) = &self.markers {
            markers.clear_layers();
        }
    }

    /// Add one popup marker per idea; returns how many are in the group.
    pub fn place_markers(&self, ideas: &[IdeaMarker]) -> usize {
        let Some(group) = &self.markers else {
            return 0;
        };
        for idea in ideas {
            let marker = leaflet::marker(&leaflet::lat_lng(idea.lat, idea.lng), &JsValue::UNDEFINED);
            marker.add_to_group(group);
            marker.bind_popup(&idea.popup_html);
        }
        group.get_layers().length() as usize
    }

    // ========================
    // Add mode
    // ========================

    /// Route map clicks to `on_click(lat, lng)` and show the hint.
    pub fn arm_click<F>(&mut self, on_click: F)
    where
        F: FnMut(f64, f64) + 'static,
    {
        self.disarm_click();
        let Some(map) = &self.map else {
            return;
        };

        let mut on_click = on_click;
        let handler = Closure::<dyn FnMut(MapMouseEvent)>::new(move |ev: MapMouseEvent| {
            let position = ev.latlng();
            on_click(position.lat(), position.lng());
        });
        map.on("click", handler.as_ref().unchecked_ref());
        self.click_handler = Some(handler);

        let hint = leaflet::attribution_control(&leaflet::options(&leaflet::ControlOptions {
            position: "bottomright",
        }));
        hint.add_to(map).set_prefix(ADD_MODE_HINT);
        self.add_mode_hint = Some(hint);
    }

    pub fn disarm_click(&mut self) {
        if let (Some(map), Some(handler)) = (&self.map, self.click_handler.take()) {
            map.off("click", handler.as_ref().unchecked_ref());
        }
        if let Some(hint) = self.add_mode_hint.take() {
            hint.remove();
        }
    }

    // ========================
    // Temporary markers
    // ========================

    pub fn add_temp_marker(&mut self, lat: f64, lng: f64) {
        let Some(map) = &self.map else {
            return;
        };
        let icon = leaflet::div_icon(&leaflet::options(&leaflet::DivIconOptions {
            class_name: "temp-marker",
            html: TEMP_MARKER_HTML,
            icon_size: [24, 24],
        }));
        let marker = leaflet::marker(&leaflet::lat_lng(lat, lng), &leaflet::marker_options_with_icon(&icon));
        marker.add_to(map);
        self.temp_markers.push(marker);
    }

    /// Remove every temporary marker placed since the modal opened
    pub fn clear_temp_markers(&mut self) {
        let Some(map) = &self.map else {
            return;
        };
        for marker in self.temp_markers.drain(..) {
            map.remove_layer(&marker);
        }
    }
}
