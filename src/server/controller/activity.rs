use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        activity::ActivityDto,
        api::{ErrorDto, MessageDto},
    },
    server::{error::AppError, service::activity::ActivityService, state::AppState},
};

/// Tag for grouping activity endpoints in OpenAPI documentation
pub static ACTIVITY_TAG: &str = "activity";

/// Query parameters identifying the student by email.
#[derive(Deserialize)]
pub struct EmailParam {
    pub email: String,
}

/// List all activities.
///
/// Returns every activity with its capacity and the emails of enrolled students in
/// signup order.
///
/// # Returns
/// - `200 OK` - List of activities, empty if none exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/activities",
    tag = ACTIVITY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved activities", body = Vec<ActivityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activities(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let activities = ActivityService::new(&state.db).get_all().await?;

    let dtos: Vec<ActivityDto> = activities.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Sign a student up for an activity.
///
/// Creates the student on first reference. The email is not validated.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `activity_name` - Exact name of the activity
/// - `params` - Student email
///
/// # Returns
/// - `200 OK` - Student enrolled
/// - `400 Bad Request` - Student already signed up
/// - `404 Not Found` - Activity not found
/// - `409 Conflict` - Activity is full
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/activities/{activity_name}/signup",
    tag = ACTIVITY_TAG,
    params(
        ("activity_name" = String, Path, description = "Activity name"),
        ("email" = String, Query, description = "Student email")
    ),
    responses(
        (status = 200, description = "Successfully signed up", body = MessageDto),
        (status = 400, description = "Student is already signed up", body = ErrorDto),
        (status = 404, description = "Activity not found", body = ErrorDto),
        (status = 409, description = "Activity is full", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup_for_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<EmailParam>,
) -> Result<impl IntoResponse, AppError> {
    ActivityService::new(&state.db)
        .signup(&activity_name, &params.email)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Signed up {} for {}", params.email, activity_name),
        }),
    ))
}

/// Unregister a student from an activity.
///
/// # Returns
/// - `200 OK` - Student removed from the activity
/// - `400 Bad Request` - Student is not signed up for this activity
/// - `404 Not Found` - Activity not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/activities/{activity_name}/unregister",
    tag = ACTIVITY_TAG,
    params(
        ("activity_name" = String, Path, description = "Activity name"),
        ("email" = String, Query, description = "Student email")
    ),
    responses(
        (status = 200, description = "Successfully unregistered", body = MessageDto),
        (status = 400, description = "Student is not signed up for this activity", body = ErrorDto),
        (status = 404, description = "Activity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unregister_from_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<EmailParam>,
) -> Result<impl IntoResponse, AppError> {
    ActivityService::new(&state.db)
        .unregister(&activity_name, &params.email)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Unregistered {} from {}", params.email, activity_name),
        }),
    ))
}
