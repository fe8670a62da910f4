pub mod application;
pub mod docs;
pub mod employer;
pub mod health;
pub mod vacancy;

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, patch},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{middleware::auth::require_bearer_auth, AppState};

const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Full HTTP surface. Application endpoints sit behind bearer auth.
pub fn router(state: AppState) -> Router {
    let base_routes = Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(docs::openapi_json));

    let public_api = Router::new()
        .route("/api/employers/:id", get(employer::get_employer))
        .route("/api/vacancies", get(vacancy::list_vacancies))
        .route("/api/vacancies/:id", get(vacancy::get_vacancy));

    let applicant_api = Router::new()
        .route(
            "/api/applications",
            get(application::list_user_applications).post(application::apply_for_vacancy),
        )
        .route(
            "/api/applications/:id",
            patch(application::update_application),
        )
        .route(
            "/api/vacancies/:id/application",
            get(application::get_user_application_for_vacancy),
        )
        .route_layer(from_fn_with_state(state.clone(), require_bearer_auth));

    base_routes
        .merge(public_api)
        .merge(applicant_api)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
}
