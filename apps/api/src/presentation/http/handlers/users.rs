use crate::{
    application::users::dto::{CreateUserRequest, UserResponse},
    domain::user::queries::GetUserByIdQuery,
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let Json(body) = payload?;
    let user = state.user_commands.create_user(body.into_command()?).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .user_queries
        .get_by_id(GetUserByIdQuery::new(user_id.clone()))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", user_id)))?;
    Ok(Json(user.into()))
}
