use std::sync::Arc;

use axum::routing::post;
use axum::Router;

use stellenwerk::api;
use stellenwerk::api::feedback::MemoryFeedbackSink;
use stellenwerk::state::AppState;

/// Provides the Axum router for integration tests.
///
/// Every backing service is an in-process mock, so no external containers
/// are needed; the sink is kept around so tests can inspect what the
/// endpoint recorded.
pub struct TestEnv {
    pub router: Router,
    pub sink: Arc<MemoryFeedbackSink>,
}

impl TestEnv {
    /// Build an Axum router wired to a fresh in-memory feedback sink.
    pub fn new() -> Self {
        let sink = Arc::new(MemoryFeedbackSink::new());

        let leptos_options = leptos::prelude::LeptosOptions::builder()
            .output_name("stellenwerk")
            .build();

        let app_state = AppState {
            feedback_sink: sink.clone(),
            leptos_options,
        };

        let router = Router::new()
            .route(
                "/api/v1/feedback",
                post(api::feedback::feedback_handler),
            )
            .with_state(app_state);

        Self { router, sink }
    }

    /// Build an `axum_test::TestServer` from this environment's router.
    pub fn server(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .build(self.router.clone())
    }
}
