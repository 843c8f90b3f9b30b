use std::sync::Arc;

use crate::api::feedback::FeedbackSink;

/// Server-side application state shared across axum handlers and server
/// functions.
#[derive(Clone)]
pub struct AppState {
    pub feedback_sink: Arc<dyn FeedbackSink>,
    pub leptos_options: leptos::prelude::LeptosOptions,
}

impl axum::extract::FromRef<AppState> for leptos::prelude::LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}
