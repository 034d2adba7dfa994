// HTTP request handlers

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::pages;
use super::PortalServer;
use crate::router::RouteOutcome;

/// Clarification shown when the classified role/module is not in the catalogs.
const UNRECOGNIZED_MESSAGE: &str =
    "I couldn’t identify your module. Please mention if you are a general user or service provider.";

/// Generic message shown when the classification call or parse failed.
const FAILURE_MESSAGE: &str = "Sorry, something went wrong understanding your intent.";

/// Create the main application router
pub fn create_router(server: Arc<PortalServer>) -> Router {
    let mut app = Router::new()
        .route("/", get(pages::home_page))
        .route("/api/ai-route", post(ai_route))
        .route("/health", get(health_check));

    // One fixed page per catalog entry, registered straight off the tables
    for entry in server.catalog().all_modules() {
        app = app.route(entry.path, pages::module_page(entry));
    }

    app.with_state(server)
}

/// Request body for /api/ai-route
#[derive(Debug, Deserialize)]
pub struct AiRouteRequest {
    /// Free-form user request; tolerated empty or missing
    #[serde(rename = "userQuery", default)]
    pub user_query: String,
}

/// Response body for /api/ai-route
///
/// Success carries `route` and `role`; failure carries a null `route` and a
/// human-readable `message`. Both shapes answer HTTP 200.
#[derive(Debug, Serialize)]
pub struct AiRouteResponse {
    pub route: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl AiRouteResponse {
    fn resolved(route: &'static str, role: &'static str) -> Self {
        Self {
            route: Some(route),
            role: Some(role),
            message: None,
        }
    }

    fn unresolved(message: &'static str) -> Self {
        Self {
            route: None,
            role: None,
            message: Some(message),
        }
    }
}

/// Handle POST /api/ai-route - AI auto-navigation endpoint
async fn ai_route(
    State(server): State<Arc<PortalServer>>,
    Json(request): Json<AiRouteRequest>,
) -> Json<AiRouteResponse> {
    let outcome = server.intents().resolve(&request.user_query).await;

    let response = match outcome {
        RouteOutcome::Resolved { route, role } => AiRouteResponse::resolved(route, role.as_str()),
        RouteOutcome::Unrecognized => AiRouteResponse::unresolved(UNRECOGNIZED_MESSAGE),
        RouteOutcome::Upstream | RouteOutcome::Malformed => {
            AiRouteResponse::unresolved(FAILURE_MESSAGE)
        }
    };

    Json(response)
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub pages: usize,
}

/// Handle GET /health - Health check endpoint
async fn health_check(State(server): State<Arc<PortalServer>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        pages: server.catalog().all_modules().count(),
    })
}
