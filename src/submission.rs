//! Idea Submission
//!
//! Form-to-request conversion and the UI reaction to each create result.

use crate::error::{ApiError, ValidationError};
use crate::models::{CreateIdeaResponse, NewIdeaRequest};

pub const SUCCESS_MESSAGE: &str = "Идея успешно добавлена! Она появится после модерации.";
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Произошла ошибка при отправке";
pub const SUBMIT_LABEL: &str = "Добавить идею";
pub const SUBMITTING_LABEL: &str = "Отправка...";

/// Raw values of the add-idea form fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdeaForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub latitude: String,
    pub longitude: String,
    pub city_id: String,
}

impl IdeaForm {
    /// Title, description and category must be non-empty. Values are sent
    /// as typed; a blank city becomes `null`.
    pub fn into_request(self) -> Result<NewIdeaRequest, ValidationError> {
        let missing: Vec<&'static str> = [
            ("title", &self.title),
            ("description", &self.description),
            ("category", &self.category),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        let city_id = if self.city_id.is_empty() { None } else { Some(self.city_id) };

        Ok(NewIdeaRequest {
            title: self.title,
            description: self.description,
            category: self.category,
            latitude: self.latitude,
            longitude: self.longitude,
            city_id,
        })
    }
}

/// What the UI does once the create request settles
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Close the modal, notify, refresh markers after a delay
    Created { idea_id: Option<u32> },
    /// The backend said no; alert with its message and keep the modal open
    Rejected { message: String },
    /// The request or its response was unusable
    Failed,
}

impl SubmitOutcome {
    pub fn from_result(result: &Result<CreateIdeaResponse, ApiError>) -> Self {
        match result {
            Ok(response) if response.success => SubmitOutcome::Created { idea_id: response.idea_id },
            Ok(response) => SubmitOutcome::Rejected {
                message: response
                    .message
                    .clone()
                    .unwrap_or_else(|| "неизвестная ошибка".to_string()),
            },
            Err(_) => SubmitOutcome::Failed,
        }
    }

    pub fn closes_modal(&self) -> bool {
        matches!(self, SubmitOutcome::Created { .. })
    }

    pub fn schedules_refresh(&self) -> bool {
        matches!(self, SubmitOutcome::Created { .. })
    }

    /// Success notification, if any
    pub fn notification(&self) -> Option<&'static str> {
        match self {
            SubmitOutcome::Created { .. } => Some(SUCCESS_MESSAGE),
            _ => None,
        }
    }

    /// Blocking alert text, if any
    pub fn alert(&self) -> Option<String> {
        match self {
            SubmitOutcome::Created { .. } => None,
            SubmitOutcome::Rejected { message } => Some(format!("Ошибка: {}", message)),
            SubmitOutcome::Failed => Some(TRANSPORT_FAILURE_MESSAGE.to_string()),
        }
    }
}

/// Submit button state: (disabled, label)
pub fn submit_button_state(submitting: bool) -> (bool, &'static str) {
    if submitting {
        (true, SUBMITTING_LABEL)
    } else {
        (false, SUBMIT_LABEL)
    }
}
