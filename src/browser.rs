//! Browser Helpers
//!
//! Blocking alerts, geolocation and coordinate formatting.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Blocking `window.alert`
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Coordinates as written into form fields: six decimals
pub fn format_coordinate(value: f64) -> String {
    format!("{:.6}", value)
}

/// One-shot device position. Failures are logged, never shown.
pub fn request_position<F>(on_position: F)
where
    F: FnOnce(f64, f64) + 'static,
{
    let geolocation = match web_sys::window().map(|w| w.navigator().geolocation()) {
        Some(Ok(geolocation)) => geolocation,
        _ => {
            tracing::warn!("[GEO] Geolocation is not available");
            return;
        }
    };

    let on_success = Closure::once(move |position: web_sys::Position| {
        let coords = position.coords();
        tracing::debug!("[GEO] Position {}, {}", coords.latitude(), coords.longitude());
        on_position(coords.latitude(), coords.longitude());
    });
    let on_error = Closure::once(move |err: web_sys::PositionError| {
        tracing::error!("[GEO] Geolocation failed ({}): {}", err.code(), err.message());
    });

    if let Err(err) = geolocation.get_current_position_with_error_callback(
        on_success.as_ref().unchecked_ref(),
        Some(on_error.as_ref().unchecked_ref()),
    ) {
        tracing::error!("[GEO] Could not request position: {:?}", err);
    }
    on_success.forget();
    on_error.forget();
}
