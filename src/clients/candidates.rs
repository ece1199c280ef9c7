// src/clients/candidates.rs
use crate::core::{error::require_positive_id, ApiResult, RequestDescriptor, ServiceClient};
use crate::types::{Candidate, CandidateDraft, CandidateStats, CreatedId};

const CANDIDATES_ENDPOINT: &str = "/candidates";
const STATS_ENDPOINT: &str = "/candidates/stats/overview";

/// Candidate records of the main API
#[derive(Debug, Clone, Copy)]
pub struct CandidatesApi<'a> {
    client: &'a ServiceClient,
}

impl<'a> CandidatesApi<'a> {
    pub fn new(client: &'a ServiceClient) -> Self {
        Self { client }
    }

    /// All candidates, optionally narrowed by free-text search
    pub async fn list(&self, search: Option<&str>) -> ApiResult<Vec<Candidate>> {
        let search = search.filter(|s| !s.is_empty());
        let request = RequestDescriptor::get(CANDIDATES_ENDPOINT).query_opt("search", search);
        self.client.execute(request).await
    }

    pub async fn get(&self, id: u64) -> ApiResult<Candidate> {
        let id = require_positive_id("candidate", id)?;
        self.client
            .execute(RequestDescriptor::get(format!("{}/{}", CANDIDATES_ENDPOINT, id)))
            .await
    }

    pub async fn create(&self, candidate: &CandidateDraft) -> ApiResult<CreatedId> {
        let request = RequestDescriptor::post(CANDIDATES_ENDPOINT).json(candidate)?;
        self.client.execute(request).await
    }

    pub async fn update(&self, id: u64, candidate: &CandidateDraft) -> ApiResult<()> {
        let id = require_positive_id("candidate", id)?;
        let request =
            RequestDescriptor::put(format!("{}/{}", CANDIDATES_ENDPOINT, id)).json(candidate)?;
        self.client.execute_empty(request).await
    }

    pub async fn delete(&self, id: u64) -> ApiResult<()> {
        let id = require_positive_id("candidate", id)?;
        self.client
            .execute_empty(RequestDescriptor::delete(format!("{}/{}", CANDIDATES_ENDPOINT, id)))
            .await
    }

    pub async fn stats(&self) -> ApiResult<CandidateStats> {
        self.client.execute(RequestDescriptor::get(STATS_ENDPOINT)).await
    }
}
