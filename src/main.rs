#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use std::sync::Arc;
    use stellenwerk::api;
    use stellenwerk::api::feedback::MemoryFeedbackSink;
    use stellenwerk::app::App;
    use stellenwerk::config::Settings;
    use stellenwerk::state::AppState;
    use tower_http::services::ServeDir;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stellenwerk=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("Starting Stellenwerk server...");

    // Load Leptos options from Cargo.toml metadata
    let conf = get_configuration(None).unwrap();
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.to_string();

    let settings = Settings::from_env().unwrap_or_else(|e| {
        tracing::warn!("falling back to default settings: {e}");
        Settings::default()
    });
    tracing::info!(demo_mode = settings.demo_mode, "settings loaded");

    // Build application state
    let app_state = AppState {
        feedback_sink: Arc::new(MemoryFeedbackSink::new()),
        leptos_options: leptos_options.clone(),
    };

    // Generate the Leptos route list for SSR
    let routes = generate_route_list(App);

    // Build the Axum router
    let app = Router::new()
        // API routes
        .route(
            "/api/v1/feedback",
            axum::routing::post(api::feedback::feedback_handler),
        )
        // Server functions, with AppState available in context
        .route("/api/{*fn_name}", axum::routing::any(server_fn_handler))
        // Leptos SSR routes
        .leptos_routes_with_context(
            &app_state,
            routes,
            {
                let app_state = app_state.clone();
                let settings = settings.clone();
                move || {
                    provide_context(app_state.clone());
                    provide_context(settings.clone());
                }
            },
            App,
        )
        // Static files
        .fallback_service(ServeDir::new(&site_root))
        .with_state(app_state);

    // Start the server
    tracing::info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(feature = "ssr")]
async fn server_fn_handler(
    axum::extract::State(state): axum::extract::State<stellenwerk::state::AppState>,
    request: axum::extract::Request,
) -> impl axum::response::IntoResponse {
    use leptos::prelude::provide_context;

    leptos_axum::handle_server_fns_with_context(
        move || {
            provide_context(state.clone());
        },
        request,
    )
    .await
}

// When compiled for WASM (client-side), there's no main function.
// The hydrate() function in lib.rs handles client-side initialization.
#[cfg(not(feature = "ssr"))]
fn main() {
    // This is intentionally empty.
    // Client-side hydration is handled by lib.rs::hydrate()
}
