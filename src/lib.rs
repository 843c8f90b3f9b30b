pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod models {
    pub mod job;
    pub mod search;
}
pub mod search_state {
    pub mod persist;
    pub mod reconcile;
    pub mod store;
    pub mod url;
}
pub mod services {
    pub mod cv;
    pub mod directory;
    pub mod latency;
    pub mod mock_directory;
}
pub mod util {
    pub mod generation;
}
pub mod auth {
    pub mod demo;
}
pub mod api {
    pub mod errors;
    pub mod feedback;
}
pub mod components {
    pub mod ai_panel;
    pub mod cv_upload;
    pub mod filter_panel;
    pub mod job_details_view;
    pub mod search_bar;
    pub mod search_results;
}
#[cfg(feature = "ssr")]
pub mod state;

/// Client-side entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
