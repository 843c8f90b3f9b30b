#![cfg(feature = "ssr")]

mod common;

use axum::http::StatusCode;
use serde_json::json;

use stellenwerk::api::feedback::{FeedbackRating, FeedbackSink};

#[tokio::test]
async fn feedback_post_echoes_payload() {
    let env = common::TestEnv::new();
    let server = env.server();

    let response = server
        .post("/api/v1/feedback")
        .json(&json!({
            "summaryId": "sum-j-7",
            "feedback": "positive",
            "timestamp": 1_700_000_000_000_i64,
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["summaryId"], "sum-j-7");
    assert_eq!(body["feedback"], "positive");
    assert_eq!(body["timestamp"], 1_700_000_000_000_i64);
    assert_eq!(body["status"], "recorded");
}

#[tokio::test]
async fn feedback_null_rating_is_accepted() {
    let env = common::TestEnv::new();
    let server = env.server();

    let response = server
        .post("/api/v1/feedback")
        .json(&json!({
            "summaryId": "sum-j-7",
            "feedback": null,
            "timestamp": 1,
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["feedback"], serde_json::Value::Null);
}

#[tokio::test]
async fn feedback_missing_summary_id_returns_400() {
    let env = common::TestEnv::new();
    let server = env.server();

    let response = server
        .post("/api/v1/feedback")
        .json(&json!({ "feedback": "positive", "timestamp": 1 }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn feedback_invalid_rating_returns_400() {
    let env = common::TestEnv::new();
    let server = env.server();

    let response = server
        .post("/api/v1/feedback")
        .json(&json!({ "summaryId": "sum-1", "feedback": "great", "timestamp": 1 }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn feedback_missing_timestamp_returns_400() {
    let env = common::TestEnv::new();
    let server = env.server();

    let response = server
        .post("/api/v1/feedback")
        .json(&json!({ "summaryId": "sum-1", "feedback": null }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn feedback_get_returns_405() {
    let env = common::TestEnv::new();
    let server = env.server();

    let response = server.get("/api/v1/feedback").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn feedback_entries_are_recorded_in_the_sink() {
    let env = common::TestEnv::new();
    let server = env.server();

    server
        .post("/api/v1/feedback")
        .json(&json!({
            "summaryId": "sum-a",
            "feedback": "negative",
            "timestamp": 42,
        }))
        .await
        .assert_status_ok();

    // Rejected submissions must not be recorded.
    server
        .post("/api/v1/feedback")
        .json(&json!({ "summaryId": "", "feedback": null, "timestamp": 42 }))
        .await
        .assert_status_bad_request();

    let entries = env.sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].summary_id, "sum-a");
    assert_eq!(entries[0].feedback, Some(FeedbackRating::Negative));
    assert_eq!(entries[0].timestamp, 42);
}
