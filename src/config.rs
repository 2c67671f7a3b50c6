//! Configuration
//!
//! Fixed endpoints and timings, plus the map settings the host page passes
//! through `data-*` attributes on the `#map` element.

use crate::models::IdeaStatus;

pub const IDEAS_ENDPOINT: &str = "/api/ideas";
pub const CREATE_IDEA_ENDPOINT: &str = "/api/add_idea_from_map";
pub const CITIES_ENDPOINT: &str = "/api/cities";

/// Id of the host element the map widget attaches to
pub const MAP_ELEMENT_ID: &str = "map";

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Zoom applied when jumping to a geocoder search result
pub const GEOCODE_ZOOM: f64 = 16.0;

/// Delay between a successful create and the marker refresh
pub const REFRESH_DELAY_MS: u32 = 1_000;

/// Lifetime of a notification banner
pub const NOTIFICATION_TTL_MS: u32 = 5_000;

/// Popup descriptions are cut to this many characters
pub const POPUP_DESCRIPTION_CHARS: usize = 100;

pub const DEFAULT_LAT: f64 = 55.7558;
pub const DEFAULT_LNG: f64 = 37.6173;
pub const DEFAULT_ZOOM: i32 = 10;

/// Categories offered by the add-idea form
pub const CATEGORIES: &[&str] = &[
    "спорт",
    "культура",
    "детский досуг",
    "экология",
    "транспорт",
    "благоустройство",
    "образование",
    "здравоохранение",
];

/// Map settings read from the host page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    pub lat: f64,
    pub lng: f64,
    pub zoom: i32,
    pub city_id: Option<u32>,
    pub status: IdeaStatus,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            lat: DEFAULT_LAT,
            lng: DEFAULT_LNG,
            zoom: DEFAULT_ZOOM,
            city_id: None,
            status: IdeaStatus::default(),
        }
    }
}

impl MapConfig {
    /// Build from raw dataset values. A missing, malformed or zero value
    /// takes the fallback.
    pub fn from_attributes(
        lat: Option<&str>,
        lng: Option<&str>,
        zoom: Option<&str>,
        city_id: Option<&str>,
        status: Option<&str>,
    ) -> Self {
        Self {
            lat: parse_coordinate(lat, DEFAULT_LAT),
            lng: parse_coordinate(lng, DEFAULT_LNG),
            zoom: parse_zoom(zoom, DEFAULT_ZOOM),
            city_id: city_id.and_then(|raw| raw.trim().parse().ok()),
            status: status.map(IdeaStatus::parse).unwrap_or_default(),
        }
    }

    /// Read `data-lat`, `data-lng`, `data-zoom`, `data-city-id` and
    /// `data-status` from the `#map` element. `None` when the page has no map.
    pub fn from_document() -> Option<Self> {
        use wasm_bindgen::JsCast;

        let element = web_sys::window()?
            .document()?
            .get_element_by_id(MAP_ELEMENT_ID)?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()?;
        let data = element.dataset();
        let lat = data.get("lat");
        let lng = data.get("lng");
        let zoom = data.get("zoom");
        let city_id = data.get("cityId");
        let status = data.get("status");

        Some(Self::from_attributes(
            lat.as_deref(),
            lng.as_deref(),
            zoom.as_deref(),
            city_id.as_deref(),
            status.as_deref(),
        ))
    }
}

pub fn parse_coordinate(raw: Option<&str>, fallback: f64) -> f64 {
    match raw.and_then(|value| value.trim().parse::<f64>().ok()) {
        Some(value) if value.is_finite() && value != 0.0 => value,
        _ => fallback,
    }
}

/// Zoom is an integer; a fractional value is truncated.
pub fn parse_zoom(raw: Option<&str>, fallback: i32) -> i32 {
    let raw = match raw {
        Some(raw) => raw.trim(),
        None => return fallback,
    };
    let parsed = raw
        .parse::<i32>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v.trunc() as i32));
    match parsed {
        Some(zoom) if zoom != 0 => zoom,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_attributes_use_fallbacks() {
        let config = MapConfig::from_attributes(None, None, None, None, None);
        assert_eq!(config, MapConfig::default());
        assert_eq!(config.lat, 55.7558);
        assert_eq!(config.lng, 37.6173);
        assert_eq!(config.zoom, 10);
    }

    #[test]
    fn test_valid_attributes_are_parsed() {
        let config = MapConfig::from_attributes(
            Some("59.9343"),
            Some(" 30.3351 "),
            Some("12"),
            Some("3"),
            Some("implemented"),
        );
        assert_eq!(config.lat, 59.9343);
        assert_eq!(config.lng, 30.3351);
        assert_eq!(config.zoom, 12);
        assert_eq!(config.city_id, Some(3));
        assert_eq!(config.status, IdeaStatus::Implemented);
    }

    #[test]
    fn test_malformed_and_zero_values_fall_back() {
        assert_eq!(parse_coordinate(Some("abc"), 1.5), 1.5);
        assert_eq!(parse_coordinate(Some(""), 1.5), 1.5);
        assert_eq!(parse_coordinate(Some("0"), 1.5), 1.5);
        assert_eq!(parse_coordinate(Some("NaN"), 1.5), 1.5);
        assert_eq!(parse_zoom(Some("0"), 10), 10);
        assert_eq!(parse_zoom(Some("x"), 10), 10);
    }

    #[test]
    fn test_fractional_zoom_truncates() {
        assert_eq!(parse_zoom(Some("13.7"), 10), 13);
    }

    #[test]
    fn test_categories_match_backend_list() {
        assert_eq!(
            CATEGORIES,
            [
                "спорт",
                "культура",
                "детский досуг",
                "экология",
                "транспорт",
                "благоустройство",
                "образование",
                "здравоохранение",
            ]
        );
    }

    #[test]
    fn test_blank_city_id_is_none() {
        let config = MapConfig::from_attributes(None, None, None, Some(""), None);
        assert_eq!(config.city_id, None);
    }
}
