//! Idea Endpoints

use gloo_net::http::Request;

use super::decode;
use crate::config::{CREATE_IDEA_ENDPOINT, IDEAS_ENDPOINT};
use crate::error::ApiError;
use crate::models::{CreateIdeaResponse, Idea, IdeaStatus, NewIdeaRequest};

/// Query for `GET /api/ideas`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IdeaFilter {
    pub city_id: Option<u32>,
    pub status: IdeaStatus,
}

impl IdeaFilter {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(city_id) = self.city_id {
            pairs.push(("city_id", city_id.to_string()));
        }
        if self.status != IdeaStatus::default() {
            pairs.push(("status", self.status.as_str().to_string()));
        }
        pairs
    }
}

pub async fn list_ideas(filter: &IdeaFilter) -> Result<Vec<Idea>, ApiError> {
    let response = Request::get(IDEAS_ENDPOINT)
        .query(filter.query_pairs())
        .send()
        .await
        .map_err(|source| ApiError::Network { endpoint: IDEAS_ENDPOINT, source })?;
    decode(IDEAS_ENDPOINT, response).await
}

pub async fn create_idea(request: &NewIdeaRequest) -> Result<CreateIdeaResponse, ApiError> {
    let response = Request::post(CREATE_IDEA_ENDPOINT)
        .json(request)
        .map_err(ApiError::Serialize)?
        .send()
        .await
        .map_err(|source| ApiError::Network { endpoint: CREATE_IDEA_ENDPOINT, source })?;
    decode(CREATE_IDEA_ENDPOINT, response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_sends_no_query() {
        assert!(IdeaFilter::default().query_pairs().is_empty());
    }

    #[test]
    fn test_filter_query_pairs() {
        let filter = IdeaFilter { city_id: Some(4), status: IdeaStatus::Implemented };
        assert_eq!(
            filter.query_pairs(),
            vec![("city_id", "4".to_string()), ("status", "implemented".to_string())]
        );
    }
}
