#![cfg(feature = "inmem-store")]

use kalakriti::models::NewArtist;
use kalakriti::repo::{inmem::InMemRepo, ArtistRepo, RepoError};
use tempfile::TempDir;

/// Helper that returns a fresh, empty repository for every test run. The
/// TempDir guard must stay alive so snapshots land in the isolated dir and
/// get cleaned up with it.
fn repo() -> (InMemRepo, TempDir) {
    // isolate state: do **not** persist to the default file path
    let tmp = tempfile::tempdir().unwrap();
    std::env::set_var("KALAKRITI_DATA_DIR", tmp.path());
    (InMemRepo::new(), tmp)
}

fn new_artist(email: &str, role: &str) -> NewArtist {
    NewArtist {
        email: email.into(),
        password_hash: "$2b$04$placeholderplaceholderplace".into(),
        role: role.into(),
    }
}

#[tokio::test]
async fn insert_find_and_list() {
    let (r, _tmp) = repo();

    // starts empty
    assert!(r.list_all().await.unwrap().is_empty());
    assert!(r.find_by_email("a@x.com").await.unwrap().is_none());

    let a = r.insert(new_artist("a@x.com", "customer")).await.unwrap();
    assert_eq!(a.email, "a@x.com");
    assert_eq!(a.role, "customer");

    let found = r.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(found.id, a.id);

    let all = r.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn duplicate_email_conflicts() {
    let (r, _tmp) = repo();

    r.insert(new_artist("dup@x.com", "customer")).await.unwrap();
    let err = r.insert(new_artist("dup@x.com", "artist")).await.unwrap_err();
    assert!(matches!(err, RepoError::Conflict));

    // only one row persists
    assert_eq!(r.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn ids_are_assigned_once_and_distinct() {
    let (r, _tmp) = repo();

    let a = r.insert(new_artist("a@x.com", "customer")).await.unwrap();
    let b = r.insert(new_artist("b@x.com", "artist")).await.unwrap();
    assert_ne!(a.id, b.id);

    // listing comes back in ascending id order
    let all = r.list_all().await.unwrap();
    assert_eq!(all[0].id, a.id);
    assert_eq!(all[1].id, b.id);
}

#[tokio::test]
async fn lookup_is_case_sensitive() {
    let (r, _tmp) = repo();

    r.insert(new_artist("Case@X.com", "customer")).await.unwrap();
    assert!(r.find_by_email("case@x.com").await.unwrap().is_none());
    assert!(r.find_by_email("Case@X.com").await.unwrap().is_some());
}
