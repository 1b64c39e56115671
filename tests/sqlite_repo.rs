#![cfg(feature = "sqlite-store")]

use kalakriti::models::NewArtist;
use kalakriti::repo::{sqlite::SqliteRepo, ArtistRepo, RepoError};
use sqlx::sqlite::SqlitePoolOptions;

// One connection so the in-memory database is shared across queries.
async fn repo() -> SqliteRepo {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    let repo = SqliteRepo::new(pool);
    repo.init_schema().await.unwrap();
    repo
}

fn new_artist(email: &str, role: &str) -> NewArtist {
    NewArtist {
        email: email.into(),
        password_hash: "$2b$04$placeholderplaceholderplace".into(),
        role: role.into(),
    }
}

#[tokio::test]
async fn schema_bootstrap_is_idempotent() {
    let r = repo().await;
    r.init_schema().await.unwrap();
    assert!(r.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn insert_find_and_list() {
    let r = repo().await;

    let a = r.insert(new_artist("a@x.com", "customer")).await.unwrap();
    assert!(a.id > 0);

    let found = r.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(found.id, a.id);
    assert_eq!(found.password_hash, a.password_hash);

    assert!(r.find_by_email("missing@x.com").await.unwrap().is_none());
    assert_eq!(r.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn unique_constraint_maps_to_conflict() {
    let r = repo().await;

    r.insert(new_artist("dup@x.com", "customer")).await.unwrap();
    let err = r.insert(new_artist("dup@x.com", "artist")).await.unwrap_err();
    assert!(matches!(err, RepoError::Conflict));
    assert_eq!(r.list_all().await.unwrap().len(), 1);
}
