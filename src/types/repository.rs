// src/types/repository.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::review::PRReview;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: i64,
    pub owner: String,
    pub name: String,
    pub full_name: String,
    pub installation_id: i64,
    pub is_active: bool,
    #[serde(default)]
    pub connected_at: Option<String>,
    #[serde(default)]
    pub last_review_at: Option<String>,
}

/// Review settings of one repository.
///
/// The main API and the reviewer expose slightly different settings; the fields
/// one of them does not know about are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoConfig {
    pub id: i64,
    pub repository_id: i64,
    pub enabled: bool,
    pub auto_review: bool,
    #[serde(default)]
    pub include_patterns: Vec<String>,
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
    #[serde(default)]
    pub slack_channel: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_drafts: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_on: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_on_update: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack_notify_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_comment: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agents: Option<BTreeMap<String, bool>>,
}

/// Partial settings update; only set fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepoConfigUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_review: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_drafts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack_channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agents: Option<BTreeMap<String, bool>>,
}

/// Repository page data; either half may be missing when its backend call failed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryOverview {
    pub repository: Option<Repository>,
    pub reviews: Vec<PRReview>,
}
