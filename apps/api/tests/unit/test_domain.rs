use store_api::domain::{
    review::{
        commands::{AddLikeToReviewCommand, CreateReviewCommand},
        entity::Review,
    },
    shared::errors::DomainError,
    user::value_objects::UserAddress,
};

fn review() -> Review {
    Review::create(
        CreateReviewCommand::new("p1".into(), "author".into(), "Great".into(), 5)
            .expect("valid command"),
    )
}

#[test]
fn repeated_like_is_idempotent() {
    let mut r = review();
    r.add_like("u1");
    let once = r.like_count();
    r.add_like("u1");
    assert_eq!(r.like_count(), once);
}

#[test]
fn like_then_unlike_restores_count() {
    let mut r = review();
    r.add_like("u0");
    let before = r.like_count();
    r.add_like("u1");
    r.remove_like("u1");
    assert_eq!(r.like_count(), before);
}

#[test]
fn scenario_counts_follow_the_likers_set() {
    let mut r = review();
    let mut counts = Vec::new();
    r.add_like("u1");
    counts.push(r.like_count());
    r.add_like("u1");
    counts.push(r.like_count());
    r.add_like("u2");
    counts.push(r.like_count());
    r.remove_like("u1");
    counts.push(r.like_count());
    assert_eq!(counts, vec![1, 1, 2, 1]);
}

#[test]
fn like_command_rejects_blank_user() {
    assert_eq!(
        AddLikeToReviewCommand::new("r1".into(), "".into()),
        Err(DomainError::ValidationError("userId is required".into()))
    );
}

#[test]
fn address_requires_every_part() {
    assert!(UserAddress::new("Peru".into(), "Lima".into(), "Av. Brasil 1".into(), "15072".into()).is_ok());
    assert!(UserAddress::new("Peru".into(), "".into(), "Av. Brasil 1".into(), "15072".into()).is_err());
}
