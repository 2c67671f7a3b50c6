//! UI Components
//!
//! Leptos components rendered around the map.

mod add_idea_button;
mod add_idea_modal;
mod city_picker;
mod geolocation_button;
mod notification_banner;

pub use add_idea_button::AddIdeaButton;
pub use add_idea_modal::AddIdeaModal;
pub use city_picker::CityPicker;
pub use geolocation_button::GeolocationButton;
pub use notification_banner::{NotificationStack, Notifier, Severity};
