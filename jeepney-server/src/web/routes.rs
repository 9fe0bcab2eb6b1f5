//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::{debug, warn};

use crate::catalog::CatalogError;
use crate::domain::Point;
use crate::itinerary::{Itinerary, ItineraryError};
use crate::planner::{PlanError, Planner};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `static_dir`, if given, is served under `/static` (e.g. a map front end).
pub fn create_router(state: AppState, static_dir: Option<&str>) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .route("/routes", get(list_routes))
        .route("/route", get(plan_route))
        .route("/catalog/reload", post(reload_catalog));

    let router = match static_dir {
        Some(dir) => router.nest_service("/static", ServeDir::new(dir)),
        None => router,
    };

    router.layer(CorsLayer::permissive()).with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every route in the current catalog.
async fn list_routes(State(state): State<AppState>) -> Json<RoutesResponse> {
    let catalog = state.catalog.snapshot().await;
    Json(RoutesResponse::from_catalog(&catalog))
}

/// Plan a journey between two points.
async fn plan_route(
    State(state): State<AppState>,
    Query(req): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, AppError> {
    let start = Point::parse(&req.start).map_err(|e| AppError::BadRequest {
        message: format!("Invalid start {:?}: {}", req.start, e.reason()),
    })?;
    let end = Point::parse(&req.end).map_err(|e| AppError::BadRequest {
        message: format!("Invalid end {:?}: {}", req.end, e.reason()),
    })?;

    let catalog = state.catalog.snapshot().await;
    let plan = Planner::new(&catalog, &state.config).plan(start, end)?;

    let Some(itinerary) = Itinerary::from_plan(&plan, &state.config)? else {
        return Err(AppError::NotFound {
            message: format!("No jeepney route found from {start} to {end}"),
        });
    };

    debug!(title = %itinerary.title, distance_m = itinerary.total_distance_m, "Planned route");
    Ok(Json(RouteResponse::new(start, end, &plan, &itinerary)))
}

/// Reload the catalog from its source.
async fn reload_catalog(State(state): State<AppState>) -> Result<Json<ReloadResponse>, AppError> {
    let catalog = state.catalog.reload().await?;
    Ok(Json(ReloadResponse::from_catalog(&catalog)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    /// No journey exists between the requested points
    NotFound { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<ItineraryError> for AppError {
    fn from(e: ItineraryError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::NotFound { message } => {
                debug!(%message, "No route");
                (StatusCode::NOT_FOUND, Json(NoRouteResponse::new(message))).into_response()
            }
            AppError::BadRequest { message } => {
                debug!(%message, "Bad request");
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response()
            }
            AppError::Internal { message } => {
                warn!(%message, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse { error: message }),
                )
                    .into_response()
            }
        }
    }
}
