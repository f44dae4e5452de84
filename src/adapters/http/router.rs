//! Top-level router: health check, `/api` modules and tower middleware.

use axum::http::{HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;

use super::analysis::analysis_routes;
use super::employees::employee_routes;
use super::error::ErrorResponse;
use super::response::HealthResponse;
use super::roles::role_routes;
use super::skills::skill_routes;
use super::state::AppState;

/// GET / - Liveness check
async fn health() -> impl IntoResponse {
    Json(HealthResponse::healthy())
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("NOT_FOUND", "Resource not found")),
    )
}

/// Builds the CORS layer. No configured origins means any origin.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

/// Assembles the full application router.
///
/// # Routes
///
/// - `GET /` - Health check
/// - `/api/analysis` - Gap analysis, predictions, recommendations
/// - `/api/employees` - Employees, their skills and training
/// - `/api/skills` - Skill catalogue
/// - `/api/roles` - Roles and requirements
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    let api = Router::new()
        .nest("/analysis", analysis_routes())
        .nest("/employees", employee_routes())
        .nest("/skills", skill_routes())
        .nest("/roles", role_routes());

    Router::new()
        .route("/", get(health))
        .nest("/api", api)
        .fallback(not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(server.request_timeout()))
                .layer(cors_layer(server)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_cors_origins_are_skipped() {
        let server = ServerConfig {
            cors_origins: Some("http://localhost:3000, bad\norigin".to_string()),
            ..Default::default()
        };
        // Builds without panicking; the bad origin is dropped.
        let _ = cors_layer(&server);
    }
}
