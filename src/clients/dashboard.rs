// src/clients/dashboard.rs
//! Fault-tolerant composites of several resource calls

use super::{CandidatesApi, RepositoriesApi, ReviewsApi};
use crate::app_log;
use crate::core::{settle_or, settle_or_default};
use crate::types::{DashboardOverview, RepositoryOverview, ReviewQuery};

/// Period the dashboard summarizes review activity over
pub const DASHBOARD_REVIEW_PERIOD: &str = "month";

#[derive(Debug, Clone, Copy)]
pub struct DashboardApi<'a> {
    candidates: CandidatesApi<'a>,
    reviews: ReviewsApi<'a>,
    reviewer_reviews: ReviewsApi<'a>,
    reviewer_repositories: RepositoriesApi<'a>,
}

impl<'a> DashboardApi<'a> {
    /// `reviews` feeds the overview; the reviewer pair feeds the repository page.
    pub fn new(
        candidates: CandidatesApi<'a>,
        reviews: ReviewsApi<'a>,
        reviewer_reviews: ReviewsApi<'a>,
        reviewer_repositories: RepositoriesApi<'a>,
    ) -> Self {
        Self {
            candidates,
            reviews,
            reviewer_reviews,
            reviewer_repositories,
        }
    }

    /// Candidate and review figures. Never fails: an unavailable part is zero-valued.
    pub async fn overview(&self) -> DashboardOverview {
        let (candidates, reviews) = tokio::join!(
            settle_or_default("Candidate stats", self.candidates.stats()),
            settle_or_default("Review stats", self.reviews.stats(Some(DASHBOARD_REVIEW_PERIOD))),
        );

        app_log!(
            debug,
            "Dashboard overview: {} candidates, {} reviews",
            candidates.total,
            reviews.total_reviews
        );

        DashboardOverview {
            candidates,
            reviews,
        }
    }

    /// A repository and its reviews. Never fails: missing parts are `None` / empty.
    pub async fn repository_detail(&self, repository_id: u64) -> RepositoryOverview {
        let query = ReviewQuery::for_repository(repository_id);
        let (repository, reviews) = tokio::join!(
            settle_or(
                "Repository",
                async { self.reviewer_repositories.get(repository_id).await.map(Some) },
                None,
            ),
            settle_or_default("Repository reviews", self.reviewer_reviews.list(&query)),
        );

        RepositoryOverview {
            repository,
            reviews,
        }
    }
}
