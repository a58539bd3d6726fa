//! Integration tests for session create / lookup / delete.

use sqlx::PgPool;

use rosseti_core::roles::Role;
use rosseti_core::sequence::{ALPHANUMERIC, SESSION_ID_LEN};
use rosseti_db::models::user::CreateUser;
use rosseti_db::repositories::{SessionRepo, UserRepo};

/// Create a user row to satisfy the sessions foreign key.
async fn create_test_user(pool: &PgPool, email: &str, phone: &str) -> i64 {
    let input = CreateUser {
        email: email.to_string(),
        phone: phone.to_string(),
        credential_hash: "0".repeat(64),
        role: Role::RestrictedUser,
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
        .id
}

/// Round trip: create a session, look it up, delete it, look it up again.
#[sqlx::test(migrations = "./migrations")]
async fn test_session_round_trip(pool: PgPool) {
    let user_id = create_test_user(&pool, "roundtrip@test.com", "+70000000001").await;

    let session = SessionRepo::create(&pool, user_id)
        .await
        .expect("session creation should succeed");
    assert_eq!(session.user_id, user_id);
    assert!(session.deleted_at.is_none());

    let found = SessionRepo::find_by_id(&pool, &session.id)
        .await
        .expect("lookup should succeed")
        .expect("created session must be found");
    assert_eq!(found.user_id, user_id);
    assert_eq!(found.id, session.id);

    let removed = SessionRepo::delete(&pool, &session.id)
        .await
        .expect("delete should succeed");
    assert_eq!(removed, 1);

    let gone = SessionRepo::find_by_id(&pool, &session.id)
        .await
        .expect("lookup should succeed");
    assert!(gone.is_none(), "deleted session must not resolve");
}

/// Session ids are 100 alphanumeric characters and unique per creation.
#[sqlx::test(migrations = "./migrations")]
async fn test_session_id_contract(pool: PgPool) {
    let user_id = create_test_user(&pool, "idcheck@test.com", "+70000000002").await;

    let first = SessionRepo::create(&pool, user_id).await.unwrap();
    let second = SessionRepo::create(&pool, user_id).await.unwrap();

    for session in [&first, &second] {
        assert_eq!(session.id.len(), SESSION_ID_LEN);
        assert!(session.id.bytes().all(|b| ALPHANUMERIC.contains(&b)));
    }
    assert_ne!(first.id, second.id);
}

/// Deleting an unknown session id is a no-op, never an error.
#[sqlx::test(migrations = "./migrations")]
async fn test_delete_unknown_session_is_noop(pool: PgPool) {
    let removed = SessionRepo::delete(&pool, "no-such-session")
        .await
        .expect("delete of unknown id should not error");
    assert_eq!(removed, 0);
}

/// An unknown session id resolves to `None`, not an error.
#[sqlx::test(migrations = "./migrations")]
async fn test_find_unknown_session(pool: PgPool) {
    let found = SessionRepo::find_by_id(&pool, "no-such-session")
        .await
        .expect("lookup should succeed");
    assert!(found.is_none());
}
