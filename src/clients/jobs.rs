// src/clients/jobs.rs
use crate::core::{error::require_positive_id, ApiResult, RequestDescriptor, ServiceClient};
use crate::types::{JobDescription, JobUpdate, NewJob};

const JOBS_ENDPOINT: &str = "/jobs";

#[derive(Debug, Clone, Copy)]
pub struct JobsApi<'a> {
    client: &'a ServiceClient,
}

impl<'a> JobsApi<'a> {
    pub fn new(client: &'a ServiceClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, active_only: bool) -> ApiResult<Vec<JobDescription>> {
        let request = RequestDescriptor::get(JOBS_ENDPOINT).query("active_only", active_only);
        self.client.execute(request).await
    }

    pub async fn get(&self, id: u64) -> ApiResult<JobDescription> {
        let id = require_positive_id("job", id)?;
        self.client
            .execute(RequestDescriptor::get(format!("{}/{}", JOBS_ENDPOINT, id)))
            .await
    }

    pub async fn create(&self, job: &NewJob) -> ApiResult<JobDescription> {
        self.client
            .execute(RequestDescriptor::post(JOBS_ENDPOINT).json(job)?)
            .await
    }

    pub async fn update(&self, id: u64, job: &JobUpdate) -> ApiResult<JobDescription> {
        let id = require_positive_id("job", id)?;
        let request = RequestDescriptor::put(format!("{}/{}", JOBS_ENDPOINT, id)).json(job)?;
        self.client.execute(request).await
    }

    pub async fn delete(&self, id: u64) -> ApiResult<()> {
        let id = require_positive_id("job", id)?;
        self.client
            .execute_empty(RequestDescriptor::delete(format!("{}/{}", JOBS_ENDPOINT, id)))
            .await
    }
}
