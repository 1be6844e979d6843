//! Runs the sqlx repositories and the router against a real database.
//! Every test returns early when `DATABASE_URL` is unset.

use super::helpers::{
    PRODUCT_ID, create_review, create_user, expect_status, get_request, json_request,
    postgres_pool, put_like, read_json, send, spawn_postgres_app, unique_email,
};
use axum::http::{Method, StatusCode};
use serde_json::{Value, json};
use std::sync::Arc;
use store_api::{
    domain::{
        product::repository::ProductRepository,
        review::{commands::CreateReviewCommand, entity::Review, repository::ReviewRepository},
        shared::errors::DomainError,
        user::{commands::CreateUserCommand, entity::User, repository::UserRepository},
    },
    infrastructure::repositories::{
        sqlx_product_repository::SqlxProductRepository,
        sqlx_review_repository::SqlxReviewRepository, sqlx_user_repository::SqlxUserRepository,
    },
};
use uuid::Uuid;

async fn stored_review(repo: &SqlxReviewRepository) -> Review {
    let review = Review::create(
        CreateReviewCommand::new(
            format!("prod-{}", Uuid::now_v7()),
            format!("author-{}", Uuid::now_v7()),
            "Solid build quality".into(),
            4,
        )
        .expect("valid review"),
    );
    repo.insert(&review).await.expect("insert review");
    review
}

fn user_with_email(email: &str) -> User {
    let command = CreateUserCommand::new(
        "Lucia".into(),
        "Mamani".into(),
        email.into(),
        "PgPassword789!".into(),
        "Peru".into(),
        "Cusco".into(),
        "Av. El Sol 300".into(),
        "08002".into(),
    )
    .expect("valid user");
    User::create(command, "$2b$04$not-a-real-hash".into())
}

#[tokio::test]
async fn like_sequence_keeps_set_semantics_in_postgres() {
    let Some(db) = postgres_pool().await else {
        return;
    };
    let repo = SqlxReviewRepository::new(db);
    let review = stored_review(&repo).await;
    let id = review.id.as_str();

    let counts = vec![
        repo.add_like(id, "u1").await.expect("like"),
        repo.add_like(id, "u1").await.expect("like"),
        repo.add_like(id, "u2").await.expect("like"),
        repo.remove_like(id, "u1").await.expect("unlike"),
        repo.remove_like(id, "u1").await.expect("unlike"),
        repo.remove_like(id, "u2").await.expect("unlike"),
    ];
    assert_eq!(
        counts,
        vec![Some(1), Some(1), Some(2), Some(1), Some(1), Some(0)]
    );

    let stored = repo
        .find_by_id(id)
        .await
        .expect("lookup")
        .expect("review exists");
    assert!(stored.liked_by.is_empty());
}

#[tokio::test]
async fn like_on_missing_review_creates_nothing_in_postgres() {
    let Some(db) = postgres_pool().await else {
        return;
    };
    let repo = SqlxReviewRepository::new(db);
    let missing = format!("missing-{}", Uuid::now_v7());

    assert_eq!(repo.add_like(&missing, "u1").await.expect("like"), None);
    assert_eq!(repo.remove_like(&missing, "u1").await.expect("unlike"), None);
    assert!(repo.find_by_id(&missing).await.expect("lookup").is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_likes_are_not_lost_in_postgres() {
    let Some(db) = postgres_pool().await else {
        return;
    };
    let repo = Arc::new(SqlxReviewRepository::new(db));
    let id = stored_review(&repo).await.id;

    // 50 distinct users, each liking twice
    let tasks: Vec<_> = (0..100)
        .map(|i| {
            let repo = repo.clone();
            let id = id.clone();
            tokio::spawn(async move { repo.add_like(&id, &format!("user-{}", i % 50)).await })
        })
        .collect();
    for task in tasks {
        let count = task.await.expect("task panicked").expect("like");
        assert!(count.is_some());
    }

    let stored = repo
        .find_by_id(&id)
        .await
        .expect("lookup")
        .expect("review exists");
    assert_eq!(stored.like_count(), 50);
}

#[tokio::test]
async fn duplicate_email_maps_to_conflict_in_postgres() {
    let Some(db) = postgres_pool().await else {
        return;
    };
    let repo = SqlxUserRepository::new(db);
    let email = unique_email("pg-dup");

    let first = user_with_email(&email);
    repo.insert(&first).await.expect("first insert");
    assert!(repo.exists(&first.id).await.expect("exists"));

    let second = user_with_email(&email);
    assert!(matches!(
        repo.insert(&second).await,
        Err(DomainError::Conflict(_))
    ));
    assert!(!repo.exists(&second.id).await.expect("exists"));
}

#[tokio::test]
async fn product_seeding_is_idempotent() {
    let Some(db) = postgres_pool().await else {
        return;
    };
    let repo = SqlxProductRepository::new(db);
    let ids = vec![
        format!("seed-{}", Uuid::now_v7()),
        format!("seed-{}", Uuid::now_v7()),
    ];

    assert_eq!(repo.register_all(&ids).await.expect("seed"), 2);
    assert_eq!(repo.register_all(&ids).await.expect("reseed"), 0);
    assert!(repo.exists(&ids[0]).await.expect("exists"));
    assert!(!repo.exists("seed-never-registered").await.expect("exists"));
}

#[tokio::test]
async fn review_flow_runs_against_postgres() {
    let Some(db) = postgres_pool().await else {
        return;
    };
    let app = spawn_postgres_app(db).await;
    let author = create_user(&app).await;
    let review_id = create_review(&app, PRODUCT_ID, &author).await;

    assert_eq!(put_like(&app, &review_id, "like", "u1").await["likeCount"], 1);
    assert_eq!(put_like(&app, &review_id, "like", "u1").await["likeCount"], 1);
    assert_eq!(put_like(&app, &review_id, "like", "u2").await["likeCount"], 2);
    assert_eq!(put_like(&app, &review_id, "unlike", "u1").await["likeCount"], 1);

    let res = expect_status(
        send(&app, get_request(&format!("/api/v1/reviews/user/{}", author))).await,
        StatusCode::OK,
    )
    .await;
    let listed: Vec<Value> = read_json(res).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["likedBy"], json!(["u2"]));

    let res = send(
        &app,
        json_request(
            Method::PUT,
            &format!("/api/v1/reviews/missing-{}/like", Uuid::now_v7()),
            json!({ "userId": "u1" }),
        ),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
