use axum::{
    Router,
    routing::get,
};
use configuration::Settings;
use std::sync::Arc;
use store_client::{SalaryStore, SupabaseHandle};
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
///
/// The store is injected here once at startup; handlers never construct
/// clients of their own.
pub struct AppState {
    pub store: Arc<dyn SalaryStore>,
}

/// Builds the relay's router around an injected state.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route(
            "/api/salaries",
            get(handlers::get_salaries).post(handlers::post_salary),
        )
        .with_state(state)
        .layer(cors)
        // This middleware logs information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// The main function to configure and run the relay.
///
/// Starting without store coordinates is a fatal condition: the relay has
/// nothing to serve, so it refuses to come up rather than degrade.
pub async fn run_server(settings: &Settings) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let handle = SupabaseHandle::from_settings(settings)?;
    if !handle.is_configured() {
        anyhow::bail!(
            "the salary relay requires Supabase coordinates \
             (COMPTRACK_SUPABASE__URL and COMPTRACK_SUPABASE__ANON_KEY)"
        );
    }

    let state = Arc::new(AppState {
        store: Arc::new(handle),
    });
    let app = build_router(state);

    let addr = settings.server.socket_addr()?;
    tracing::info!("Salary relay listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
