//! Marker Popups
//!
//! Pure rendering of idea markers: where they go and what their popup says.

use crate::config::POPUP_DESCRIPTION_CHARS;
use crate::models::Idea;

/// A marker ready to be placed on the map
#[derive(Debug, Clone, PartialEq)]
pub struct IdeaMarker {
    pub lat: f64,
    pub lng: f64,
    pub popup_html: String,
}

/// One marker per idea, in the order the backend returned them
pub fn idea_markers(ideas: &[Idea]) -> Vec<IdeaMarker> {
    ideas
        .iter()
        .map(|idea| IdeaMarker {
            lat: idea.lat,
            lng: idea.lng,
            popup_html: render_popup(idea),
        })
        .collect()
}

/// First `POPUP_DESCRIPTION_CHARS` characters followed by `...`.
/// The ellipsis is appended even to short descriptions.
pub fn truncate_description(description: &str) -> String {
    let mut excerpt: String = description.chars().take(POPUP_DESCRIPTION_CHARS).collect();
    excerpt.push_str("...");
    excerpt
}

pub fn render_popup(idea: &Idea) -> String {
    let image = idea
        .image_url
        .as_deref()
        .map(|url| format!(r#"<img src="{}" class="map-popup-image" alt="">"#, escape_html(url)))
        .unwrap_or_default();

    format!(
        r#"<div class="map-popup">{image}<h6>{title}</h6><p><small>{category} | 👍 {votes}</small></p><p>{description}</p><a href="/idea/{id}" class="btn btn-sm btn-primary">Подробнее</a></div>"#,
        image = image,
        title = escape_html(&idea.title),
        category = escape_html(&idea.category),
        votes = idea.votes,
        description = escape_html(&truncate_description(&idea.description)),
        id = idea.id,
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
