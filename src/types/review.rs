// src/types/review.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffectedCaller {
    pub id: i64,
    pub file_path: String,
    #[serde(default)]
    pub line_number: Option<u32>,
    #[serde(default)]
    pub call_text: Option<String>,
    #[serde(default)]
    pub break_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakingChange {
    pub id: i64,
    pub file_path: String,
    #[serde(default)]
    pub line_number: Option<u32>,
    #[serde(default)]
    pub entity_type: Option<String>,
    #[serde(default)]
    pub entity_name: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub change_type: Option<String>,
    #[serde(default)]
    pub change_detail: Option<String>,
    #[serde(default)]
    pub old_definition: Option<String>,
    #[serde(default)]
    pub new_definition: Option<String>,
    pub severity: String,
    #[serde(default)]
    pub affected_count: u32,
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub affected_callers: Vec<AffectedCaller>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffectedFile {
    pub path: String,
    pub line: u32,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewComment {
    pub id: i64,
    pub file_path: String,
    #[serde(default)]
    pub line_number: Option<u32>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub affected_files: Option<Vec<AffectedFile>>,
    #[serde(default)]
    pub github_comment_id: Option<i64>,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PRReview {
    pub id: i64,
    pub repository_id: i64,
    pub pr_number: u64,
    #[serde(default)]
    pub pr_title: Option<String>,
    #[serde(default)]
    pub pr_author: Option<String>,
    pub pr_link: String,
    #[serde(default)]
    pub base_branch: Option<String>,
    #[serde(default)]
    pub head_branch: Option<String>,
    pub status: String,
    #[serde(default)]
    pub skip_reason: Option<String>,
    #[serde(default)]
    pub total_files: u32,
    #[serde(default)]
    pub total_changes: u32,
    #[serde(default)]
    pub total_comments: u32,
    #[serde(default)]
    pub count_critical: u32,
    #[serde(default)]
    pub count_warning: u32,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breaking_changes: Option<Vec<BreakingChange>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<ReviewComment>>,
}

impl PRReview {
    pub fn has_issues(&self) -> bool {
        self.count_critical > 0 || self.count_warning > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperStat {
    pub name: String,
    pub errors: u64,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorTypes {
    pub syntax: u64,
    pub logic: u64,
    pub security: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPoint {
    pub week: String,
    pub errors: u64,
}

/// Zero-valued by default; the dashboard falls back to it when stats are unavailable
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub total_reviews: u64,
    pub total_errors: u64,
    pub avg_errors_per_review: f64,
    pub security_issues: u64,
    #[serde(default)]
    pub developer_stats: Vec<DeveloperStat>,
    #[serde(default)]
    pub error_types: ErrorTypes,
    #[serde(default)]
    pub weekly_trend: Vec<WeeklyPoint>,
}

/// Query parameters accepted by the review listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewQuery {
    pub repository_id: Option<u64>,
    pub period: Option<String>,
}

impl ReviewQuery {
    pub fn for_repository(repository_id: u64) -> Self {
        Self {
            repository_id: Some(repository_id),
            period: None,
        }
    }

    pub fn for_period(period: impl Into<String>) -> Self {
        Self {
            repository_id: None,
            period: Some(period.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReviewStatusFilter {
    #[default]
    All,
    Issues,
    Clean,
}

/// Client-side narrowing of an already fetched review list
#[derive(Debug, Clone, Default)]
pub struct ReviewFilter {
    pub search: String,
    pub status: ReviewStatusFilter,
}

impl ReviewFilter {
    pub fn matches(&self, review: &PRReview) -> bool {
        // Search text is compared as typed, surrounding whitespace included
        let needle = self.search.to_lowercase();
        let matches_search = self.search.is_empty()
            || contains_ci(review.pr_title.as_deref(), &needle)
            || contains_ci(review.pr_author.as_deref(), &needle)
            || review.pr_number.to_string().contains(&self.search);

        let matches_status = match self.status {
            ReviewStatusFilter::All => true,
            ReviewStatusFilter::Issues => review.has_issues(),
            ReviewStatusFilter::Clean => !review.has_issues(),
        };

        matches_search && matches_status
    }

    pub fn apply<'a>(&self, reviews: &'a [PRReview]) -> Vec<&'a PRReview> {
        reviews.iter().filter(|r| self.matches(r)).collect()
    }
}

fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack
        .map(|h| h.to_lowercase().contains(needle))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn review(pr_number: u64, title: &str, author: &str, critical: u32, warning: u32) -> PRReview {
        serde_json::from_value(json!({
            "id": pr_number,
            "repository_id": 1,
            "pr_number": pr_number,
            "pr_title": title,
            "pr_author": author,
            "pr_link": format!("https://github.com/acme/api/pull/{}", pr_number),
            "status": "completed",
            "count_critical": critical,
            "count_warning": warning
        }))
        .unwrap()
    }

    #[test]
    fn test_review_stats_default_is_zeroed() {
        assert_eq!(
            serde_json::to_value(ReviewStats::default()).unwrap(),
            json!({
                "totalReviews": 0,
                "totalErrors": 0,
                "avgErrorsPerReview": 0.0,
                "securityIssues": 0,
                "developerStats": [],
                "errorTypes": { "syntax": 0, "logic": 0, "security": 0 },
                "weeklyTrend": []
            })
        );
    }

    #[test]
    fn test_filter_by_status() {
        let reviews = vec![
            review(10, "Add login", "alice", 1, 0),
            review(11, "Fix typo", "bob", 0, 0),
        ];

        let issues = ReviewFilter {
            status: ReviewStatusFilter::Issues,
            ..Default::default()
        };
        assert_eq!(issues.apply(&reviews).len(), 1);
        assert_eq!(issues.apply(&reviews)[0].pr_number, 10);

        let clean = ReviewFilter {
            status: ReviewStatusFilter::Clean,
            ..Default::default()
        };
        assert_eq!(clean.apply(&reviews)[0].pr_number, 11);
    }

    #[test]
    fn test_filter_search_is_case_insensitive() {
        let reviews = vec![
            review(10, "Add Login", "alice", 0, 2),
            review(42, "Refactor", "Bob", 0, 0),
        ];

        let by_title = ReviewFilter {
            search: "login".to_string(),
            ..Default::default()
        };
        assert_eq!(by_title.apply(&reviews).len(), 1);

        let by_author = ReviewFilter {
            search: "BOB".to_string(),
            ..Default::default()
        };
        assert_eq!(by_author.apply(&reviews)[0].pr_number, 42);

        let by_number = ReviewFilter {
            search: "42".to_string(),
            ..Default::default()
        };
        assert_eq!(by_number.apply(&reviews).len(), 1);
    }

    #[test]
    fn test_filter_search_keeps_surrounding_whitespace() {
        let reviews = vec![review(10, "Add Login", "alice", 0, 0)];

        let trailing = ReviewFilter {
            search: "login ".to_string(),
            ..Default::default()
        };
        assert!(trailing.apply(&reviews).is_empty());

        let blank = ReviewFilter {
            search: "  ".to_string(),
            ..Default::default()
        };
        assert!(blank.apply(&reviews).is_empty());

        let inner = ReviewFilter {
            search: "d l".to_string(),
            ..Default::default()
        };
        assert_eq!(inner.apply(&reviews).len(), 1);
    }
}
