// src/clients/repositories.rs
use crate::core::{error::require_positive_id, ApiResult, RequestDescriptor, ServiceClient};
use crate::types::{RepoConfig, RepoConfigUpdate, Repository};

const REPOSITORIES_ENDPOINT: &str = "/repositories";

#[derive(Debug, Clone, Copy)]
pub struct RepositoriesApi<'a> {
    client: &'a ServiceClient,
}

impl<'a> RepositoriesApi<'a> {
    pub fn new(client: &'a ServiceClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<Repository>> {
        self.client
            .execute(RequestDescriptor::get(REPOSITORIES_ENDPOINT))
            .await
    }

    pub async fn get(&self, id: u64) -> ApiResult<Repository> {
        let id = require_positive_id("repository", id)?;
        self.client
            .execute(RequestDescriptor::get(format!("{}/{}", REPOSITORIES_ENDPOINT, id)))
            .await
    }

    pub async fn config(&self, id: u64) -> ApiResult<RepoConfig> {
        let id = require_positive_id("repository", id)?;
        self.client
            .execute(RequestDescriptor::get(config_path(id)))
            .await
    }

    /// Save settings; returns the stored configuration
    pub async fn save_config(&self, id: u64, config: &RepoConfigUpdate) -> ApiResult<RepoConfig> {
        let id = require_positive_id("repository", id)?;
        self.client
            .execute(RequestDescriptor::post(config_path(id)).json(config)?)
            .await
    }
}

fn config_path(id: u64) -> String {
    format!("{}/{}/config", REPOSITORIES_ENDPOINT, id)
}
