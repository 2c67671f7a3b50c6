//! Application Context
//!
//! Shared state provided via Leptos Context API. JS handles live in a
//! local arena value; everything else is plain signals.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::add_mode::AddIdeaMode;
use crate::api::{self, IdeaFilter};
use crate::browser::format_coordinate;
use crate::config::{MapConfig, REFRESH_DELAY_MS};
use crate::map_controller::MapController;
use crate::popup::idea_markers;
use crate::store::{MapStateStoreFields, MapStore};

/// Sequence number of a marker refresh. Only the response of the most
/// recent refresh may touch the map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshGeneration(u32);

impl RefreshGeneration {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn is_latest(self, latest: Self) -> bool {
        self == latest
    }
}

/// Handle to the map widget and its reload trigger
#[derive(Clone, Copy)]
pub struct MapContext {
    controller: StoredValue<MapController, LocalStorage>,
    generation: StoredValue<RefreshGeneration>,
    pub config: MapConfig,
    /// Bumped to reload markers from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped to reload markers from the backend - write
    set_reload_trigger: WriteSignal<u32>,
}

impl MapContext {
    pub fn new(config: MapConfig) -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            controller: StoredValue::new_local(MapController::new()),
            generation: StoredValue::new(RefreshGeneration::default()),
            config,
            reload_trigger,
            set_reload_trigger,
        }
    }

    /// Create the map widget; later calls do nothing
    pub fn initialize(&self) {
        let config = self.config;
        self.controller.update_value(|controller| {
            if !controller.initialize(&config) {
                tracing::debug!("[MAP] Already initialized");
            }
        });
    }

    pub fn update_controller(&self, f: impl FnOnce(&mut MapController)) {
        self.controller.update_value(f);
    }

    pub fn recenter(&self, lat: f64, lng: f64, zoom: i32) {
        self.controller.with_value(|controller| controller.recenter(lat, lng, zoom));
    }

    /// Trigger a marker reload
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Reload markers after the post-create delay
    pub fn schedule_refresh(&self) {
        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(REFRESH_DELAY_MS).await;
            ctx.reload();
        });
    }

    /// Clear the marker group and repopulate it from `GET /api/ideas`.
    /// A failed load is logged and leaves the group empty. Responses of
    /// refreshes superseded by a later one are dropped.
    pub fn refresh_markers(&self, store: MapStore) {
        if !self.controller.with_value(MapController::is_initialized) {
            return;
        }
        self.controller.with_value(MapController::clear_markers);

        let generation = self.generation.get_value().next();
        self.generation.set_value(generation);

        let filter = IdeaFilter {
            city_id: store.current_city_id().get_untracked(),
            status: self.config.status,
        };
        let controller = self.controller;
        let latest = self.generation;
        spawn_local(async move {
            let result = api::list_ideas(&filter).await;
            let is_latest = latest
                .try_get_value()
                .is_some_and(|current| generation.is_latest(current));
            if !is_latest {
                tracing::debug!("[MAP] Dropping stale refresh {:?}", generation);
                return;
            }
            match result {
                Ok(ideas) => {
                    let markers = idea_markers(&ideas);
                    let placed = controller
                        .try_with_value(|controller| {
                            controller.clear_markers();
                            controller.place_markers(&markers)
                        })
                        .unwrap_or_default();
                    tracing::info!("[MAP] Loaded {} ideas, {} markers on map", ideas.len(), placed);
                    *store.ideas().write() = ideas;
                }
                Err(err) => tracing::warn!("[MAP] Failed to load ideas: {}", err),
            }
        });
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub map: MapContext,
    /// Add-idea mode - read
    pub add_mode: ReadSignal<AddIdeaMode>,
    /// Add-idea mode - write
    set_add_mode: WriteSignal<AddIdeaMode>,
    /// Whether the add-idea modal is shown - read
    pub modal_open: ReadSignal<bool>,
    /// Whether the add-idea modal is shown - write
    set_modal_open: WriteSignal<bool>,
    /// Coordinate fields of the add-idea form
    pub modal_lat: RwSignal<String>,
    pub modal_lng: RwSignal<String>,
}

impl AppContext {
    pub fn new(map: MapContext) -> Self {
        let (add_mode, set_add_mode) = signal(AddIdeaMode::default());
        let (modal_open, set_modal_open) = signal(false);
        Self {
            map,
            add_mode,
            set_add_mode,
            modal_open,
            set_modal_open,
            modal_lat: RwSignal::new(String::new()),
            modal_lng: RwSignal::new(String::new()),
        }
    }

    /// Flip add-idea mode, arming or disarming the map click listener
    pub fn toggle_add_mode(&self) {
        let next = self.add_mode.get_untracked().toggled();
        self.set_add_mode.set(next);

        let ctx = *self;
        if next.is_active() {
            self.map.update_controller(move |controller| {
                controller.arm_click(move |lat, lng| ctx.on_map_click(lat, lng));
            });
        } else {
            self.map.update_controller(MapController::disarm_click);
        }
        tracing::debug!("[MODE] Add-idea mode {:?}", next);
    }

    fn on_map_click(&self, lat: f64, lng: f64) {
        tracing::debug!("[MODE] Map clicked at {}, {}", lat, lng);
        self.open_modal(lat, lng);
        self.map.update_controller(|controller| controller.add_temp_marker(lat, lng));
    }

    pub fn open_modal(&self, lat: f64, lng: f64) {
        self.modal_lat.set(format_coordinate(lat));
        self.modal_lng.set(format_coordinate(lng));
        self.set_modal_open.set(true);
    }

    /// Hide the modal and drop the temporary markers of this add flow
    pub fn close_modal(&self) {
        self.set_modal_open.set(false);
        self.map.update_controller(MapController::clear_temp_markers);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_generations_advance() {
        let first = RefreshGeneration::default().next();
        let second = first.next();
        assert_ne!(first, second);
        assert!(second.is_latest(second));
    }

    #[test]
    fn test_superseded_refresh_is_not_latest() {
        // City A is requested, then city B before A's response arrives
        let city_a = RefreshGeneration::default().next();
        let city_b = city_a.next();
        assert!(!city_a.is_latest(city_b));
        assert!(city_b.is_latest(city_b));
    }

    #[test]
    fn test_generation_wraps_around() {
        let last = RefreshGeneration(u32::MAX);
        assert_eq!(last.next(), RefreshGeneration(0));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use leptos::task::Executor;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Minimal `window.L` recording click listeners, controls and layers
    const LEAFLET_STUB: &str = r#"
(function () {
  const stub = { maps: [] };
  function layer() {
    return {
      addTo(target) { target.addLayer(this); return this; },
      bindPopup(content) { this.popup = content; return this; },
    };
  }
  function control() {
    return {
      addTo(map) { map.controls.push(this); this.map = map; return this; },
      setPrefix(prefix) { this.prefix = prefix; return this; },
      remove() {
        if (this.map) {
          this.map.controls = this.map.controls.filter((c) => c !== this);
          this.map = null;
        }
        return this;
      },
      on() { return this; },
    };
  }
  window.L = {
    latLng: (lat, lng) => ({ lat, lng }),
    map: () => {
      const map = {
        layers: [], controls: [], handlers: [], removed: 0,
        setView(center, zoom) { this.center = center; this.zoom = zoom; return this; },
        on(event, fn) { if (event === "click") this.handlers.push(fn); return this; },
        off(event, fn) {
          if (event === "click") this.handlers = this.handlers.filter((h) => h !== fn);
          return this;
        },
        addLayer(l) { this.layers.push(l); return this; },
        removeLayer(l) {
          this.removed += 1;
          this.layers = this.layers.filter((x) => x !== l);
          return this;
        },
      };
      stub.maps.push(map);
      return map;
    },
    tileLayer: () => layer(),
    layerGroup: () => {
      const group = layer();
      group.children = [];
      group.addLayer = function (l) { this.children.push(l); return this; };
      group.clearLayers = function () { this.children = []; return this; };
      group.getLayers = function () { return this.children.slice(); };
      return group;
    },
    marker: () => layer(),
    divIcon: (options) => ({ options }),
    control: { attribution: () => control() },
    Control: { geocoder: () => control() },
  };
  const current = () => stub.maps[stub.maps.length - 1];
  stub.clickHandlers = () => current().handlers.length;
  stub.controls = () => current().controls.length;
  stub.layers = () => current().layers.length;
  stub.removed = () => current().removed;
  stub.fireClick = (lat, lng) =>
    current().handlers.slice().forEach((h) => h({ latlng: window.L.latLng(lat, lng) }));
  window.leafletStub = stub;
})();
"#;

    fn stub_count(call: &str) -> f64 {
        js_sys::eval(&format!("window.leafletStub.{}", call))
            .unwrap()
            .as_f64()
            .unwrap()
    }

    fn app_with_map() -> AppContext {
        js_sys::eval(LEAFLET_STUB).unwrap();
        let owner = Owner::new();
        owner.set();
        let ctx = AppContext::new(MapContext::new(MapConfig::default()));
        ctx.map.initialize();
        ctx
    }

    #[wasm_bindgen_test]
    fn test_toggle_twice_detaches_click_and_hint() {
        let ctx = app_with_map();
        let controls_before = stub_count("controls()");
        assert_eq!(stub_count("clickHandlers()"), 0.0);

        ctx.toggle_add_mode();
        assert!(ctx.add_mode.get_untracked().is_active());
        assert_eq!(stub_count("clickHandlers()"), 1.0);
        assert_eq!(stub_count("controls()"), controls_before + 1.0);

        ctx.toggle_add_mode();
        assert!(!ctx.add_mode.get_untracked().is_active());
        assert_eq!(stub_count("clickHandlers()"), 0.0);
        assert_eq!(stub_count("controls()"), controls_before);
    }

    #[wasm_bindgen_test]
    fn test_closing_modal_removes_temp_markers() {
        let ctx = app_with_map();
        let layers_before = stub_count("layers()");
        ctx.toggle_add_mode();

        js_sys::eval("window.leafletStub.fireClick(55.1, 37.2)").unwrap();
        js_sys::eval("window.leafletStub.fireClick(55.3, 37.4)").unwrap();
        assert!(ctx.modal_open.get_untracked());
        assert_eq!(ctx.modal_lat.get_untracked(), "55.300000");
        assert_eq!(stub_count("layers()"), layers_before + 2.0);

        ctx.close_modal();
        assert!(!ctx.modal_open.get_untracked());
        assert_eq!(stub_count("layers()"), layers_before);
        assert_eq!(stub_count("removed()"), 2.0);
    }

    #[wasm_bindgen_test]
    async fn test_refresh_waits_for_delay() {
        let _ = Executor::init_wasm_bindgen();
        let map = MapContext::new(MapConfig::default());

        map.schedule_refresh();
        TimeoutFuture::new(REFRESH_DELAY_MS - 100).await;
        assert_eq!(map.reload_trigger.get_untracked(), 0);

        TimeoutFuture::new(300).await;
        assert_eq!(map.reload_trigger.get_untracked(), 1);
    }
}
