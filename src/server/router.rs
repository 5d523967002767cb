use axum::{routing::get, Json, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{activity, root::root},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mergington High School API",
        description = "API for viewing and signing up for extracurricular activities"
    ),
    tags((name = "activity", description = "Activity listing and sign-ups"))
)]
struct ApiDoc;

/// Builds the application router.
///
/// Serves the JSON API, the generated OpenAPI document at `/openapi.json`, and the
/// front end from `static_dir` under `/static`.
pub fn router(static_dir: &str) -> Router<AppState> {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(activity::get_activities))
        .routes(routes!(activity::signup_for_activity))
        .routes(routes!(activity::unregister_from_activity))
        .split_for_parts();

    api_router
        .route("/", get(root))
        .route(
            "/openapi.json",
            get(move || {
                let api = api.clone();
                async move { Json(api) }
            }),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}
