use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// User verdict on an AI-generated summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackRating {
    Positive,
    Negative,
}

/// One validated feedback submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntry {
    pub summary_id: String,
    pub feedback: Option<FeedbackRating>,
    pub timestamp: i64,
}

/// Echo payload returned on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackAck {
    pub summary_id: String,
    pub feedback: Option<FeedbackRating>,
    pub timestamp: i64,
    pub status: String,
}

/// Where accepted feedback ends up.
///
/// A trait so tests can inspect what was recorded; the default
/// implementation keeps entries in memory.
pub trait FeedbackSink: Send + Sync {
    fn record(&self, entry: FeedbackEntry);
    fn entries(&self) -> Vec<FeedbackEntry>;
}

/// In-memory sink used by the server and by tests.
#[derive(Debug, Default)]
pub struct MemoryFeedbackSink {
    entries: std::sync::RwLock<Vec<FeedbackEntry>>,
}

impl MemoryFeedbackSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeedbackSink for MemoryFeedbackSink {
    fn record(&self, entry: FeedbackEntry) {
        if let Ok(mut entries) = self.entries.write() {
            entries.push(entry);
        }
    }

    fn entries(&self) -> Vec<FeedbackEntry> {
        self.entries
            .read()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

/// Core validation — separated from the HTTP layer for testability.
///
/// Validation is done by hand on a raw JSON value so every missing or
/// invalid field maps to a 400, matching the endpoint contract.
pub fn process_feedback(body: &Value) -> Result<FeedbackEntry, AppError> {
    let summary_id = body
        .get("summaryId")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("summaryId is required".into()))?;

    let feedback = match body.get("feedback") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s == "positive" => Some(FeedbackRating::Positive),
        Some(Value::String(s)) if s == "negative" => Some(FeedbackRating::Negative),
        Some(_) => {
            return Err(AppError::BadRequest(
                "feedback must be \"positive\", \"negative\" or null".into(),
            ))
        }
    };

    let timestamp = body
        .get("timestamp")
        .and_then(Value::as_i64)
        .ok_or_else(|| AppError::BadRequest("timestamp is required".into()))?;

    Ok(FeedbackEntry {
        summary_id: summary_id.to_string(),
        feedback,
        timestamp,
    })
}

fn ack(entry: &FeedbackEntry) -> FeedbackAck {
    FeedbackAck {
        summary_id: entry.summary_id.clone(),
        feedback: entry.feedback,
        timestamp: entry.timestamp,
        status: "recorded".to_string(),
    }
}

/// Axum handler for `POST /api/v1/feedback`.
///
/// Non-POST methods are answered with 405 by the method router.
#[cfg(feature = "ssr")]
pub async fn feedback_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
    axum::Json(body): axum::Json<Value>,
) -> Result<axum::Json<FeedbackAck>, AppError> {
    let entry = process_feedback(&body)?;
    tracing::info!(summary_id = %entry.summary_id, "feedback received");
    state.feedback_sink.record(entry.clone());
    Ok(axum::Json(ack(&entry)))
}

/// Server function used by the hydrated UI; shares the handler's
/// validation and sink.
#[leptos::server]
pub async fn submit_summary_feedback(
    summary_id: String,
    feedback: Option<String>,
    timestamp: i64,
) -> Result<FeedbackAck, leptos::prelude::ServerFnError> {
    use leptos::prelude::use_context;

    let body = serde_json::json!({
        "summaryId": summary_id,
        "feedback": feedback,
        "timestamp": timestamp,
    });
    let entry =
        process_feedback(&body).map_err(|e| leptos::prelude::ServerFnError::new(e.to_string()))?;

    let state = use_context::<crate::state::AppState>()
        .ok_or_else(|| leptos::prelude::ServerFnError::new("AppState not found in context"))?;
    state.feedback_sink.record(entry.clone());

    Ok(ack(&entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_submission_echoes_fields() {
        let entry = process_feedback(&json!({
            "summaryId": "sum-j-1",
            "feedback": "positive",
            "timestamp": 1_700_000_000_000_i64,
        }))
        .unwrap();

        assert_eq!(entry.summary_id, "sum-j-1");
        assert_eq!(entry.feedback, Some(FeedbackRating::Positive));
        assert_eq!(entry.timestamp, 1_700_000_000_000);
    }

    #[test]
    fn test_null_feedback_clears_the_rating() {
        let entry = process_feedback(&json!({
            "summaryId": "sum-j-1",
            "feedback": null,
            "timestamp": 1,
        }))
        .unwrap();
        assert_eq!(entry.feedback, None);
    }

    #[test]
    fn test_missing_summary_id_is_rejected() {
        let err = process_feedback(&json!({ "feedback": "positive", "timestamp": 1 })).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_empty_summary_id_is_rejected() {
        let err =
            process_feedback(&json!({ "summaryId": "", "feedback": null, "timestamp": 1 }))
                .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_invalid_rating_is_rejected() {
        let err = process_feedback(&json!({
            "summaryId": "sum-1",
            "feedback": "meh",
            "timestamp": 1,
        }))
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_missing_timestamp_is_rejected() {
        let err =
            process_feedback(&json!({ "summaryId": "sum-1", "feedback": null })).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_sink_records_entries() {
        let sink = MemoryFeedbackSink::new();
        sink.record(FeedbackEntry {
            summary_id: "sum-1".into(),
            feedback: Some(FeedbackRating::Negative),
            timestamp: 7,
        });
        assert_eq!(sink.entries().len(), 1);
        assert_eq!(sink.entries()[0].summary_id, "sum-1");
    }
}
