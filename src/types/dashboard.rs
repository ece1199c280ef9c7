// src/types/dashboard.rs
use serde::{Deserialize, Serialize};

use super::candidate::CandidateStats;
use super::review::ReviewStats;

/// Dashboard figures. Always complete: unavailable parts are zero-valued.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub candidates: CandidateStats,
    pub reviews: ReviewStats,
}
