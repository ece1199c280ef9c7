// src/clients/reviews.rs
use crate::core::{error::require_positive_id, ApiResult, RequestDescriptor, ServiceClient};
use crate::types::{PRReview, ReviewQuery, ReviewStats};

const REVIEWS_ENDPOINT: &str = "/reviews";
const STATS_ENDPOINT: &str = "/reviews/stats";

/// Pull-request reviews; the main API and the reviewer serve the same routes
#[derive(Debug, Clone, Copy)]
pub struct ReviewsApi<'a> {
    client: &'a ServiceClient,
}

impl<'a> ReviewsApi<'a> {
    pub fn new(client: &'a ServiceClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ReviewQuery) -> ApiResult<Vec<PRReview>> {
        let repository_id = query
            .repository_id
            .map(|id| require_positive_id("repository", id))
            .transpose()?;
        let request = RequestDescriptor::get(REVIEWS_ENDPOINT)
            .query_opt("repository_id", repository_id)
            .query_opt("period", query.period.as_deref());
        self.client.execute(request).await
    }

    /// Review with its breaking changes and comments
    pub async fn get(&self, id: u64) -> ApiResult<PRReview> {
        let id = require_positive_id("review", id)?;
        self.client
            .execute(RequestDescriptor::get(format!("{}/{}", REVIEWS_ENDPOINT, id)))
            .await
    }

    pub async fn stats(&self, period: Option<&str>) -> ApiResult<ReviewStats> {
        let request = RequestDescriptor::get(STATS_ENDPOINT).query_opt("period", period);
        self.client.execute(request).await
    }
}
