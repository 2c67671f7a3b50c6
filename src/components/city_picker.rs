//! City Picker Component
//!
//! Scopes the map to one city: recentres it, filters the idea list and
//! pre-fills the city of new ideas.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::store::{find_city, use_map_store, MapStateStoreFields};

#[component]
pub fn CityPicker() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_map_store();

    // Load cities on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_cities().await {
                Ok(cities) => {
                    tracing::debug!("[CITY] Loaded {} cities", cities.len());
                    *store.cities().write() = cities;
                }
                Err(err) => tracing::warn!("[CITY] Failed to load cities: {}", err),
            }
        });
    });

    let on_change = move |ev: web_sys::Event| {
        let city_id = event_target_value(&ev).parse::<u32>().ok();
        if let Some(city) = city_id.and_then(|id| store.cities().with_untracked(|cities| find_city(cities, id))) {
            ctx.map.recenter(city.latitude, city.longitude, city.zoom);
        }
        *store.current_city_id().write() = city_id;
        ctx.map.reload();
    };

    view! {
        <Show when=move || !store.cities().read().is_empty()>
            <select id="cityPicker" class="form-select form-select-sm" on:change=on_change>
                <option value="" selected=move || store.current_city_id().get().is_none()>
                    "Все города"
                </option>
                <For
                    each=move || store.cities().get()
                    key=|city| city.id
                    children=move |city| {
                        let id = city.id;
                        view! {
                            <option
                                value=id.to_string()
                                selected=move || store.current_city_id().get() == Some(id)
                            >
                                {city.name.clone()}
                            </option>
                        }
                    }
                />
            </select>
        </Show>
    }
}
