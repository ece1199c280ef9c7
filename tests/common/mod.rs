#![allow(dead_code)]

use serde_json::{json, Value};
use talentdesk_client::core::ServiceClient;
use talentdesk_client::ApiClients;
use wiremock::MockServer;

/// All three backends served by one mock server
pub fn clients_for(server: &MockServer) -> ApiClients {
    let client = ServiceClient::new(server.uri(), 5).expect("client");
    ApiClients::new(client.clone(), client.clone(), client)
}

/// One mock server per backend: main API, AI service, reviewer
pub fn clients_for_backends(api: &MockServer, ai: &MockServer, reviewer: &MockServer) -> ApiClients {
    let client = |server: &MockServer| ServiceClient::new(server.uri(), 5).expect("client");
    ApiClients::new(client(api), client(ai), client(reviewer))
}

/// Number of requests a mock server has received so far
pub async fn hits(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or_default()
}

pub fn candidate_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "phone": null,
        "location": "Berlin",
        "current_role": "Backend Engineer",
        "years_experience": 6,
        "seniority_level": "senior",
        "summary": null,
        "social_links": { "github": "https://github.com/example" },
        "spoken_languages": ["en", "de"],
        "availability": null,
        "risk_summary": null,
        "skills": ["Rust", "Go"],
        "match_score": 82.5,
        "hr_score": null,
        "hr_score_breakdown": null,
        "vector_id": null,
        "created_at": "2024-06-01T09:00:00"
    })
}

pub fn review_stats_json() -> Value {
    json!({
        "totalReviews": 14,
        "totalErrors": 31,
        "avgErrorsPerReview": 2.2,
        "securityIssues": 3,
        "developerStats": [{ "name": "alice", "errors": 12, "color": "#f97316" }],
        "errorTypes": { "syntax": 10, "logic": 18, "security": 3 },
        "weeklyTrend": [{ "week": "W22", "errors": 9 }]
    })
}

pub fn review_json(id: u64, repository_id: u64, critical: u32) -> Value {
    json!({
        "id": id,
        "repository_id": repository_id,
        "pr_number": 100 + id,
        "pr_title": "Add payment retries",
        "pr_author": "alice",
        "pr_link": format!("https://github.com/acme/api/pull/{}", 100 + id),
        "base_branch": "main",
        "head_branch": "feature/retries",
        "status": "completed",
        "skip_reason": null,
        "total_files": 4,
        "total_changes": 120,
        "total_comments": 2,
        "count_critical": critical,
        "count_warning": 1,
        "started_at": null,
        "completed_at": null,
        "created_at": "2024-06-02T10:00:00"
    })
}
