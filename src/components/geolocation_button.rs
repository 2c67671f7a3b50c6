//! Geolocation Button Component
//!
//! Fills the coordinate fields from the device position.

use leptos::prelude::*;

use crate::browser::{self, format_coordinate};

#[component]
pub fn GeolocationButton(
    latitude: RwSignal<String>,
    longitude: RwSignal<String>,
) -> impl IntoView {
    let locate = move |_| {
        browser::request_position(move |lat, lng| {
            let _ = latitude.try_set(format_coordinate(lat));
            let _ = longitude.try_set(format_coordinate(lng));
        });
    };

    view! {
        <button
            type="button"
            id="getLocationBtn"
            class="btn btn-outline-secondary btn-sm"
            on:click=locate
        >
            "📍 Моё местоположение"
        </button>
    }
}
