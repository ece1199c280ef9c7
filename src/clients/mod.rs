// src/clients/mod.rs
//! Resource clients, one namespace per backend resource

pub mod candidates;
pub mod chat;
pub mod cv;
pub mod dashboard;
pub mod jobs;
pub mod repositories;
pub mod reviews;

pub use candidates::CandidatesApi;
pub use chat::{ChatApi, SmartChatApi};
pub use cv::{CvApi, FilterOptions};
pub use dashboard::DashboardApi;
pub use jobs::JobsApi;
pub use repositories::RepositoriesApi;
pub use reviews::ReviewsApi;

use crate::core::{ApiResult, ServiceClient};
use crate::environment::EnvironmentConfig;

/// One executor per backend, built once at startup and borrowed by the resource clients
#[derive(Debug, Clone)]
pub struct ApiClients {
    api: ServiceClient,
    ai: ServiceClient,
    reviewer: ServiceClient,
}

impl ApiClients {
    pub fn new(api: ServiceClient, ai: ServiceClient, reviewer: ServiceClient) -> Self {
        Self { api, ai, reviewer }
    }

    pub fn from_config(config: &EnvironmentConfig) -> ApiResult<Self> {
        let build = |base_url: &str| -> ApiResult<ServiceClient> {
            let mut client = ServiceClient::new(base_url, config.timeout_seconds)?;
            for (name, value) in &config.default_headers {
                client = client.with_default_header(name, value)?;
            }
            Ok(client)
        };

        Ok(Self::new(
            build(&config.api_url)?,
            build(&config.ai_url)?,
            build(&config.reviewer_url)?,
        ))
    }

    pub fn candidates(&self) -> CandidatesApi<'_> {
        CandidatesApi::new(&self.api)
    }

    pub fn chat(&self) -> ChatApi<'_> {
        ChatApi::new(&self.api)
    }

    pub fn cv(&self) -> CvApi<'_> {
        CvApi::new(&self.ai)
    }

    pub fn jobs(&self) -> JobsApi<'_> {
        JobsApi::new(&self.ai)
    }

    pub fn smart_chat(&self) -> SmartChatApi<'_> {
        SmartChatApi::new(&self.ai)
    }

    /// Reviews as served by the main API (review list and statistics pages)
    pub fn reviews(&self) -> ReviewsApi<'_> {
        ReviewsApi::new(&self.api)
    }

    /// Repositories and their settings as served by the main API
    pub fn repositories(&self) -> RepositoriesApi<'_> {
        RepositoriesApi::new(&self.api)
    }

    /// Reviews of the code reviewer service (review detail, repository page)
    pub fn reviewer_reviews(&self) -> ReviewsApi<'_> {
        ReviewsApi::new(&self.reviewer)
    }

    pub fn reviewer_repositories(&self) -> RepositoriesApi<'_> {
        RepositoriesApi::new(&self.reviewer)
    }

    pub fn dashboard(&self) -> DashboardApi<'_> {
        DashboardApi::new(
            self.candidates(),
            self.reviews(),
            self.reviewer_reviews(),
            self.reviewer_repositories(),
        )
    }
}
