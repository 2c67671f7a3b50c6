//! Frontend Models
//!
//! Data structures matching the backend's JSON payloads.

use serde::{Deserialize, Serialize};

/// Idea as returned by `GET /api/ideas`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub votes: i64,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Body of `POST /api/add_idea_from_map`.
///
/// Coordinates travel as the strings typed into the form; the backend
/// converts them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewIdeaRequest {
    pub title: String,
    pub description: String,
    pub category: String,
    pub latitude: String,
    pub longitude: String,
    pub city_id: Option<String>,
}

/// Reply to `POST /api/add_idea_from_map`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateIdeaResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub idea_id: Option<u32>,
}

/// City as returned by `GET /api/cities`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: u32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: i32,
}

/// Which ideas the map shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdeaStatus {
    #[default]
    Approved,
    Implemented,
}

impl IdeaStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            IdeaStatus::Approved => "approved",
            IdeaStatus::Implemented => "implemented",
        }
    }

    /// Anything the backend would not accept falls back to `Approved`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "implemented" => IdeaStatus::Implemented,
            _ => IdeaStatus::Approved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idea_decodes_backend_payload() {
        let json = r#"{
            "id": 7,
            "title": "Bike lane",
            "description": "Along the river",
            "category": "транспорт",
            "lat": 55.75,
            "lng": 37.61,
            "votes": 5,
            "user": "anna",
            "created_at": "2024-05-01 10:00:00",
            "status": "approved"
        }"#;
        let idea: Idea = serde_json::from_str(json).unwrap();
        assert_eq!(idea.id, 7);
        assert_eq!(idea.votes, 5);
        assert_eq!(idea.user.as_deref(), Some("anna"));
        assert!(idea.image_url.is_none());
    }

    #[test]
    fn test_idea_decodes_minimal_payload() {
        let json = r#"{"id":1,"title":"t","description":"d","category":"c","lat":1.0,"lng":2.0}"#;
        let idea: Idea = serde_json::from_str(json).unwrap();
        assert_eq!(idea.votes, 0);
        assert!(idea.status.is_none());
    }

    #[test]
    fn test_new_idea_request_serializes_null_city() {
        let request = NewIdeaRequest {
            title: "t".into(),
            description: "d".into(),
            category: "спорт".into(),
            latitude: "55.750000".into(),
            longitude: "37.610000".into(),
            city_id: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["city_id"], serde_json::Value::Null);
        assert_eq!(value["latitude"], "55.750000");
    }

    #[test]
    fn test_create_response_without_message() {
        let response: CreateIdeaResponse = serde_json::from_str(r#"{"success":true,"idea_id":12}"#).unwrap();
        assert!(response.success);
        assert_eq!(response.idea_id, Some(12));
        assert!(response.message.is_none());
    }

    #[test]
    fn test_status_parse_falls_back_to_approved() {
        assert_eq!(IdeaStatus::parse("implemented"), IdeaStatus::Implemented);
        assert_eq!(IdeaStatus::parse("rejected"), IdeaStatus::Approved);
        assert_eq!(IdeaStatus::parse(""), IdeaStatus::Approved);
    }
}
