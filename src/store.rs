//! Map State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{City, Idea};

/// Data loaded from the backend, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct MapState {
    /// Ideas currently shown as markers
    pub ideas: Vec<Idea>,
    /// Cities offered by the city picker
    pub cities: Vec<City>,
    /// City the idea list and new ideas are scoped to
    pub current_city_id: Option<u32>,
}

impl MapState {
    pub fn new(current_city_id: Option<u32>) -> Self {
        Self {
            current_city_id,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type MapStore = Store<MapState>;

/// Get the map store from context
pub fn use_map_store() -> MapStore {
    expect_context::<MapStore>()
}

/// Look up a loaded city by id
pub fn find_city(cities: &[City], id: u32) -> Option<City> {
    cities.iter().find(|city| city.id == id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_keeps_city() {
        let state = MapState::new(Some(3));
        assert_eq!(state.current_city_id, Some(3));
        assert!(state.ideas.is_empty());
    }

    #[test]
    fn test_find_city() {
        let cities = vec![
            City { id: 1, name: "Москва".into(), latitude: 55.7558, longitude: 37.6173, zoom: 10 },
            City { id: 2, name: "Казань".into(), latitude: 55.7963, longitude: 49.1088, zoom: 12 },
        ];
        assert_eq!(find_city(&cities, 2).map(|c| c.zoom), Some(12));
        assert!(find_city(&cities, 9).is_none());
    }
}
