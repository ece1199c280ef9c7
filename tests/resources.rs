mod common;

use common::{candidate_json, clients_for, review_json, review_stats_json};
use serde_json::json;
use talentdesk_client::clients::FilterOptions;
use talentdesk_client::core::ApiError;
use talentdesk_client::files::UploadFile;
use talentdesk_client::types::{
    CandidateDraft, ConversationId, JobUpdate, NewJob, Page, RepoConfigUpdate, ReviewQuery,
};
use wiremock::matchers::{
    body_json, body_string_contains, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn cv_candidates_page_returns_items_and_total() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cv/candidates"))
        .and(query_param("skip", "0"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                candidate_json(1, "Ada"),
                candidate_json(2, "Grace"),
                candidate_json(3, "Linus")
            ],
            "total": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let clients = clients_for(&server);
    let page = clients.cv().list_candidates(Page::default()).await.unwrap();

    assert_eq!(page.candidates.len(), 3);
    assert_eq!(page.total, 3);
    assert_eq!(page.candidates[2].profile.name, "Linus");
}

#[tokio::test]
async fn create_job_unwraps_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/jobs"))
        .and(body_json(json!({
            "title": "Backend Engineer",
            "required_skills": ["Go"],
            "nice_to_have_skills": [],
            "remote_allowed": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "data": {
                "id": 7,
                "title": "Backend Engineer",
                "required_skills": ["Go"],
                "nice_to_have_skills": [],
                "remote_allowed": false,
                "is_active": true,
                "created_at": "2024-06-03T08:00:00"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let clients = clients_for(&server);
    let job = NewJob::new("Backend Engineer").with_required_skills(["Go"]);
    let created = clients.jobs().create(&job).await.unwrap();

    assert_eq!(created.id, 7);
    assert_eq!(created.required_skills, vec!["Go".to_string()]);
}

#[tokio::test]
async fn export_csv_returns_opaque_bytes() {
    let server = MockServer::start().await;
    let csv = "id,name,final_score\n1,Ada,91.5\n";
    Mock::given(method("GET"))
        .and(path("/cv/filter/csv"))
        .and(query_param("job_id", "5"))
        .and(query_param("min_score", "0"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/csv")
                .set_body_string(csv),
        )
        .expect(1)
        .mount(&server)
        .await;

    let clients = clients_for(&server);
    let export = clients.cv().export_csv(5, 0.0).await.unwrap();

    assert!(!export.is_empty());
    assert_eq!(export.as_bytes(), csv.as_bytes());
    assert_eq!(export.rows().unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_missing_candidate_is_404() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/candidates/999999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "Not found" })))
        .expect(1)
        .mount(&server)
        .await;

    let clients = clients_for(&server);
    let err = clients.candidates().delete(999999).await.unwrap_err();

    assert!(matches!(err, ApiError::Http { status: 404, .. }), "unexpected error: {err:?}");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn get_by_id_is_repeatable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/candidates/4"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true, "data": candidate_json(4, "Ada") })),
        )
        .expect(2)
        .mount(&server)
        .await;

    let clients = clients_for(&server);
    let first = clients.candidates().get(4).await.unwrap();
    let second = clients.candidates().get(4).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.profile.skills, vec!["Rust".to_string(), "Go".to_string()]);
}

#[tokio::test]
async fn zero_id_never_reaches_the_network() {
    let server = MockServer::start().await;
    let clients = clients_for(&server);

    let err = clients.candidates().get(0).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidId { resource: "candidate", id: 0 }));
    assert!(clients.jobs().delete(0).await.is_err());
    assert!(clients.cv().export_csv(0, 0.0).await.is_err());

    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}

#[tokio::test]
async fn candidate_search_is_url_encoded_and_optional() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/candidates"))
        .and(query_param("search", "rust & go"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([candidate_json(1, "Ada")])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/candidates"))
        .and(query_param_is_missing("search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    let clients = clients_for(&server);
    assert_eq!(clients.candidates().list(Some("rust & go")).await.unwrap().len(), 1);
    assert!(clients.candidates().list(None).await.unwrap().is_empty());
    assert!(clients.candidates().list(Some("")).await.unwrap().is_empty());
}

#[tokio::test]
async fn candidate_create_and_update() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/candidates"))
        .and(body_json(json!({ "name": "Ada", "skills": ["Rust"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": { "id": 11 } })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/candidates/11"))
        .and(body_json(json!({ "location": "Paris" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let clients = clients_for(&server);
    let created = clients
        .candidates()
        .create(&CandidateDraft {
            name: Some("Ada".to_string()),
            skills: Some(vec!["Rust".to_string()]),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.id, 11);

    clients
        .candidates()
        .update(
            11,
            &CandidateDraft {
                location: Some("Paris".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn update_reporting_failure_propagates_message() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/candidates/11"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": false, "error": "Email already used" })),
        )
        .mount(&server)
        .await;

    let clients = clients_for(&server);
    let err = clients
        .candidates()
        .update(11, &CandidateDraft::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Email already used");
}

#[tokio::test]
async fn upload_sends_one_part_per_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cv/upload"))
        .and(body_string_contains("filename=\"ada.pdf\""))
        .and(body_string_contains("filename=\"grace.docx\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uploaded": 1,
            "failed": 1,
            "results": [
                { "filename": "ada.pdf", "success": true, "candidate_id": 21, "error": null },
                { "filename": "grace.docx", "success": false, "candidate_id": null, "error": "Unreadable file" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let clients = clients_for(&server);
    let response = clients
        .cv()
        .upload(vec![
            UploadFile::new("ada.pdf", "application/pdf", b"%PDF-1.7".to_vec()),
            UploadFile::new(
                "grace.docx",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                b"PK".to_vec(),
            ),
        ])
        .await
        .unwrap();

    assert_eq!(response.uploaded, 1);
    assert_eq!(response.failed, 1);
    assert_eq!(response.results[0].candidate_id, Some(21));
    assert_eq!(response.results[1].error.as_deref(), Some("Unreadable file"));

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert_eq!(body.matches("name=\"files\"").count(), 2);
}

#[tokio::test]
async fn ask_and_filter_send_expected_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cv/ask"))
        .and(body_json(json!({ "question": "Who knows Kafka?", "top_k": 5 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "question": "Who knows Kafka?",
            "candidates": [{ "id": 2, "name": "Grace", "score": 0.91, "current_role": null, "skills": ["Kafka"], "summary": null }],
            "total": 1
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/cv/filter"))
        .and(body_json(json!({ "job_id": 5, "min_score": 60.0, "top_k": 50, "include_explanations": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job_title": "Backend Engineer",
            "total_candidates": 10,
            "filtered_count": 1,
            "min_score_applied": 60.0,
            "candidates": [{
                "id": 2,
                "name": "Grace",
                "skills": ["Go"],
                "final_score": 77.0,
                "recommendation": "interview",
                "score_breakdown": {
                    "skill_match_score": 80.0,
                    "experience_score": 70.0,
                    "role_similarity_score": 75.0,
                    "stability_score": 90.0,
                    "red_flag_penalty": 0.0,
                    "final_score": 77.0,
                    "matched_required_skills": ["Go"],
                    "matched_nice_to_have_skills": [],
                    "missing_required_skills": [],
                    "red_flags": []
                }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let clients = clients_for(&server);

    let answer = clients.cv().ask("Who knows Kafka?", None).await.unwrap();
    assert_eq!(answer.candidates[0].name, "Grace");

    let filtered = clients
        .cv()
        .filter(
            5,
            FilterOptions {
                min_score: 60.0,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(filtered.filtered_count, 1);
    assert_eq!(filtered.candidates[0].score_breakdown.final_score, 77.0);
    assert!(filtered.candidates[0].explanation.is_none());
}

#[tokio::test]
async fn jobs_list_passes_active_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .and(query_param("active_only", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1, "title": "SRE" }])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .and(query_param("active_only", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "title": "SRE" },
            { "id": 2, "title": "Designer", "is_active": false }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let clients = clients_for(&server);
    assert_eq!(clients.jobs().list(true).await.unwrap().len(), 1);

    let all = clients.jobs().list(false).await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(!all[1].is_active);
}

#[tokio::test]
async fn reviews_list_forwards_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reviews"))
        .and(query_param("repository_id", "3"))
        .and(query_param("period", "month"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([review_json(1, 3, 2)])))
        .expect(1)
        .mount(&server)
        .await;

    let clients = clients_for(&server);
    let reviews = clients
        .reviews()
        .list(&ReviewQuery {
            repository_id: Some(3),
            period: Some("month".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(reviews.len(), 1);
    assert!(reviews[0].has_issues());
}

#[tokio::test]
async fn review_detail_includes_breaking_changes() {
    let server = MockServer::start().await;
    let mut review = review_json(9, 3, 1);
    review["breaking_changes"] = json!([{
        "id": 1,
        "file_path": "src/payments.rs",
        "line_number": 42,
        "entity_type": "function",
        "entity_name": "charge",
        "class_name": null,
        "change_type": "signature",
        "change_detail": "added currency parameter",
        "old_definition": "fn charge(amount: u64)",
        "new_definition": "fn charge(amount: u64, currency: Currency)",
        "severity": "critical",
        "affected_count": 1,
        "recommendation": null,
        "affected_callers": [{ "id": 1, "file_path": "src/checkout.rs", "line_number": 10, "call_text": "charge(total)", "break_reason": "missing argument" }]
    }]);
    review["comments"] = json!([]);

    Mock::given(method("GET"))
        .and(path("/reviews/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(review))
        .mount(&server)
        .await;

    let clients = clients_for(&server);
    let review = clients.reviews().get(9).await.unwrap();
    let changes = review.breaking_changes.unwrap();
    assert_eq!(changes[0].affected_callers[0].file_path, "src/checkout.rs");
    assert_eq!(review.comments.map(|c| c.len()), Some(0));
}

#[tokio::test]
async fn repository_config_round_trip() {
    let server = MockServer::start().await;
    let stored = json!({
        "id": 1,
        "repository_id": 3,
        "enabled": true,
        "auto_review": true,
        "review_drafts": false,
        "min_severity": "warning",
        "include_patterns": [],
        "exclude_patterns": ["*.lock"],
        "slack_channel": null,
        "notify_on": "critical"
    });
    Mock::given(method("GET"))
        .and(path("/repositories/3/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored.clone()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repositories/3/config"))
        .and(body_json(json!({ "min_severity": "warning" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": stored })))
        .expect(1)
        .mount(&server)
        .await;

    let clients = clients_for(&server);
    let config = clients.repositories().config(3).await.unwrap();
    assert_eq!(config.exclude_patterns, vec!["*.lock".to_string()]);

    let saved = clients
        .repositories()
        .save_config(
            3,
            &RepoConfigUpdate {
                min_severity: Some("warning".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(saved, config);
}

#[tokio::test]
async fn chat_queries_use_their_backend_field_names() {
    let server = MockServer::start().await;
    let conversation = ConversationId::from("conv_42".to_string());

    Mock::given(method("POST"))
        .and(path("/chat/query"))
        .and(body_json(json!({ "message": "top rust candidates", "conversation_id": "conv_42" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Ada and Grace",
            "data": [{ "id": 1 }, { "id": 2 }],
            "sources": ["candidates"]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/query"))
        .and(body_json(json!({ "message": "hello" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "hi",
            "timestamp": "2024-06-01T09:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/chat/history"))
        .and(query_param("sessionId", "s-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "role": "user", "content": "hello" },
            { "role": "assistant", "content": "hi", "timestamp": "2024-06-01T09:00:00Z" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let clients = clients_for(&server);

    let answer = clients
        .smart_chat()
        .query("top rust candidates", Some(&conversation))
        .await
        .unwrap();
    assert_eq!(answer.sources, Some(vec!["candidates".to_string()]));

    let reply = clients.chat().query("hello", None).await.unwrap();
    assert_eq!(reply.message, "hi");

    let history = clients.chat().history("s-1").await.unwrap();
    assert_eq!(history.len(), 2);
}

#[tokio::test]
async fn job_update_is_partial_put() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/jobs/7"))
        .and(body_json(json!({ "is_active": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "title": "Backend Engineer",
            "is_active": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let clients = clients_for(&server);
    let job = clients
        .jobs()
        .update(
            7,
            &JobUpdate {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(!job.is_active);
}

#[tokio::test]
async fn repositories_and_review_stats() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repositories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{
                "id": 3,
                "owner": "acme",
                "name": "api",
                "full_name": "acme/api",
                "installation_id": 77,
                "is_active": true
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/reviews/stats"))
        .and(query_param_is_missing("period"))
        .respond_with(ResponseTemplate::new(200).set_body_json(review_stats_json()))
        .expect(1)
        .mount(&server)
        .await;

    let clients = clients_for(&server);
    let repositories = clients.repositories().list().await.unwrap();
    assert_eq!(repositories[0].full_name, "acme/api");
    assert!(repositories[0].last_review_at.is_none());

    let stats = clients.reviews().stats(None).await.unwrap();
    assert_eq!(stats.security_issues, 3);
    assert_eq!(stats.developer_stats[0].name, "alice");
}
