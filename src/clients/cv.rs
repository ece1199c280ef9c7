// src/clients/cv.rs
use serde::Serialize;

use crate::app_log;
use crate::core::{error::require_positive_id, ApiResult, RequestDescriptor, ServiceClient};
use crate::files::{ExportedCsv, UploadFile};
use crate::types::{AskResponse, Candidate, CandidatePage, FilterResponse, Page, UploadResponse};

const UPLOAD_ENDPOINT: &str = "/cv/upload";
const ASK_ENDPOINT: &str = "/cv/ask";
const CANDIDATES_ENDPOINT: &str = "/cv/candidates";
const FILTER_ENDPOINT: &str = "/cv/filter";
const EXPORT_ENDPOINT: &str = "/cv/filter/csv";

pub const DEFAULT_ASK_TOP_K: u32 = 5;
pub const DEFAULT_FILTER_TOP_K: u32 = 50;

#[derive(Serialize)]
struct AskRequest<'a> {
    question: &'a str,
    top_k: u32,
}

#[derive(Serialize)]
struct FilterRequest {
    job_id: u64,
    min_score: f64,
    top_k: u32,
    include_explanations: bool,
}

/// Scoring options for matching candidates against a job
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterOptions {
    pub min_score: f64,
    pub top_k: u32,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            min_score: 0.0,
            top_k: DEFAULT_FILTER_TOP_K,
        }
    }
}

/// CV screening endpoints of the AI service
#[derive(Debug, Clone, Copy)]
pub struct CvApi<'a> {
    client: &'a ServiceClient,
}

impl<'a> CvApi<'a> {
    pub fn new(client: &'a ServiceClient) -> Self {
        Self { client }
    }

    /// Upload CV files; the service parses each one into a candidate
    pub async fn upload(&self, files: Vec<UploadFile>) -> ApiResult<UploadResponse> {
        app_log!(info, "Uploading {} CV file(s)", files.len());
        let parts = files.into_iter().map(UploadFile::into_part).collect();
        self.client
            .execute(RequestDescriptor::post(UPLOAD_ENDPOINT).multipart(parts))
            .await
    }

    /// Semantic question over the candidate pool
    pub async fn ask(&self, question: &str, top_k: Option<u32>) -> ApiResult<AskResponse> {
        let body = AskRequest {
            question,
            top_k: top_k.unwrap_or(DEFAULT_ASK_TOP_K),
        };
        self.client
            .execute(RequestDescriptor::post(ASK_ENDPOINT).json(&body)?)
            .await
    }

    pub async fn list_candidates(&self, page: Page) -> ApiResult<CandidatePage> {
        let request = RequestDescriptor::get(CANDIDATES_ENDPOINT)
            .query("skip", page.skip)
            .query("limit", page.limit);
        self.client.execute(request).await
    }

    /// Full candidate details
    pub async fn get(&self, id: u64) -> ApiResult<Candidate> {
        let id = require_positive_id("candidate", id)?;
        self.client
            .execute(RequestDescriptor::get(format!("{}/{}", CANDIDATES_ENDPOINT, id)))
            .await
    }

    /// Score candidates against a job description
    pub async fn filter(&self, job_id: u64, options: FilterOptions) -> ApiResult<FilterResponse> {
        let job_id = require_positive_id("job", job_id)?;
        let body = FilterRequest {
            job_id,
            min_score: options.min_score,
            top_k: options.top_k,
            include_explanations: true,
        };
        self.client
            .execute(RequestDescriptor::post(FILTER_ENDPOINT).json(&body)?)
            .await
    }

    /// Scored candidates for a job as CSV
    pub async fn export_csv(&self, job_id: u64, min_score: f64) -> ApiResult<ExportedCsv> {
        let job_id = require_positive_id("job", job_id)?;
        let request = RequestDescriptor::get(EXPORT_ENDPOINT)
            .query("job_id", job_id)
            .query("min_score", min_score);
        let bytes = self.client.execute_bytes(request).await?;
        Ok(ExportedCsv::new(bytes))
    }
}
