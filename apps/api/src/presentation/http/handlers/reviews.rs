use crate::{
    application::reviews::dto::{
        CreateReviewRequest, LikesResponse, ModifyLikeRequest, ReviewResponse,
    },
    domain::review::{
        commands::{AddLikeToReviewCommand, RemoveLikeFromReviewCommand},
        queries::{GetReviewByIdQuery, GetReviewsByProductIdQuery, GetReviewsByUserIdQuery},
    },
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

pub async fn get_review_by_id(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> Result<Json<ReviewResponse>, AppError> {
    let review = state
        .review_queries
        .get_by_id(GetReviewByIdQuery::new(review_id.clone()))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("review {}", review_id)))?;
    Ok(Json(review.into()))
}

pub async fn get_reviews_by_product_id(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Vec<ReviewResponse>>, AppError> {
    let reviews = state
        .review_queries
        .get_by_product_id(GetReviewsByProductIdQuery::new(product_id))
        .await?;
    Ok(Json(reviews.into_iter().map(ReviewResponse::from).collect()))
}

pub async fn get_reviews_by_user_id(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<ReviewResponse>>, AppError> {
    let reviews = state
        .review_queries
        .get_by_user_id(GetReviewsByUserIdQuery::new(user_id))
        .await?;
    Ok(Json(reviews.into_iter().map(ReviewResponse::from).collect()))
}

pub async fn create_review(
    State(state): State<AppState>,
    payload: Result<Json<CreateReviewRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ReviewResponse>), AppError> {
    let Json(body) = payload?;
    let command = body.into_command()?;
    let review = state.review_commands.create_review(command).await?;
    Ok((StatusCode::CREATED, Json(review.into())))
}

pub async fn add_like_to_review(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    payload: Result<Json<ModifyLikeRequest>, JsonRejection>,
) -> Result<Json<LikesResponse>, AppError> {
    let Json(body) = payload?;
    let command = AddLikeToReviewCommand::new(review_id, body.user_id.unwrap_or_default())?;
    let review_id = command.review_id.clone();
    let like_count = state.review_commands.add_like(command).await?;
    Ok(Json(LikesResponse {
        review_id,
        like_count,
    }))
}

pub async fn remove_like_from_review(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    payload: Result<Json<ModifyLikeRequest>, JsonRejection>,
) -> Result<Json<LikesResponse>, AppError> {
    let Json(body) = payload?;
    let command = RemoveLikeFromReviewCommand::new(review_id, body.user_id.unwrap_or_default())?;
    let review_id = command.review_id.clone();
    let like_count = state.review_commands.remove_like(command).await?;
    Ok(Json(LikesResponse {
        review_id,
        like_count,
    }))
}
