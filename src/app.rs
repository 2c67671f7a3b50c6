//! Idea Map App
//!
//! Root component: map toolbar, add-idea modal and notification banners.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddIdeaButton, AddIdeaModal, CityPicker, NotificationStack, Notifier};
use crate::config::MapConfig;
use crate::context::{AppContext, MapContext};
use crate::store::{MapState, MapStateStoreFields};

/// `config` is `None` when the host page has no `#map` element; the
/// map and its controls are then left out.
#[component]
pub fn App(config: Option<MapConfig>) -> impl IntoView {
    let has_map = config.is_some();
    let config = config.unwrap_or_default();

    // State
    let store = Store::new(MapState::new(config.city_id));
    let map = MapContext::new(config);
    let ctx = AppContext::new(map);

    // Provide context to all children
    provide_context(store);
    provide_context(Notifier::new());
    provide_context(ctx);

    // Create the map once, then reload markers whenever the trigger changes
    Effect::new(move |_| {
        let trigger = map.reload_trigger.get();
        if !has_map {
            return;
        }
        map.initialize();
        tracing::debug!("[APP] Refreshing markers, trigger={}", trigger);
        map.refresh_markers(store);
    });

    view! {
        <Show when=move || has_map>
            <div class="map-toolbar d-flex gap-2 my-2">
                <AddIdeaButton />
                <CityPicker />
            </div>
            <p class="idea-count text-muted small">
                {move || format!("Идей на карте: {}", store.ideas().read().len())}
            </p>
        </Show>
        <AddIdeaModal />
        <NotificationStack />
    }
}
