use crate::models::{Artist, Id, NewArtist};

#[derive(thiserror::Error, Debug)]
pub enum RepoError {
    #[error("conflict")] Conflict,
    #[error("internal: {0}")] Internal(String),
}

pub type RepoResult<T> = Result<T, RepoError>;

use async_trait::async_trait;

/// Credential store: email is the natural key, looked up exactly as
/// provided (no normalization).
#[async_trait]
pub trait ArtistRepo: Send + Sync {
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Artist>>;
    /// Assigns a fresh id and persists the row. `Conflict` when the email
    /// is already taken, enforced at the storage layer.
    async fn insert(&self, new: NewArtist) -> RepoResult<Artist>;
    async fn list_all(&self) -> RepoResult<Vec<Artist>>;
}

#[cfg(feature = "inmem-store")]
pub mod inmem {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, RwLock};

    const SNAPSHOT_PATH: &str = "data/accounts.json";

    #[derive(Default, Serialize, Deserialize)]
    struct State {
        artists: HashMap<Id, Artist>,
        next_id: Id,
    }

    #[derive(Clone)]
    pub struct InMemRepo {
        state: Arc<RwLock<State>>,
        snapshot_path: Arc<PathBuf>,
    }

    impl InMemRepo {
        fn data_dir() -> PathBuf {
            std::env::var("KALAKRITI_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data"))
        }

        fn snapshot_path() -> PathBuf {
            if std::env::var("KALAKRITI_DATA_DIR").is_ok() {
                let mut p = Self::data_dir();
                p.push("accounts.json");
                p
            } else {
                PathBuf::from(SNAPSHOT_PATH)
            }
        }

        fn load_state_from(path: &Path) -> State {
            match std::fs::read(path) {
                Ok(bytes) => match serde_json::from_slice::<State>(&bytes) {
                    Ok(s) => {
                        log::info!("loaded snapshot '{}'", path.display());
                        s
                    }
                    Err(e) => {
                        log::warn!("failed to parse snapshot '{}': {e}. Starting empty.", path.display());
                        State::default()
                    }
                },
                Err(_) => State::default(),
            }
        }

        fn persist(&self) {
            let path = self.snapshot_path.clone();
            if let Ok(s) = serde_json::to_vec_pretty(&*self.state.read().unwrap()) {
                if let Some(dir) = path.parent() {
                    let _ = std::fs::create_dir_all(dir);
                }
                if let Err(e) = std::fs::write(&*path, s) {
                    log::error!("failed to write snapshot '{}': {e}", path.display());
                }
            }
        }

        pub fn new() -> Self {
            let snapshot_path = Self::snapshot_path();
            let state = Self::load_state_from(&snapshot_path);
            Self {
                state: Arc::new(RwLock::new(state)),
                snapshot_path: Arc::new(snapshot_path),
            }
        }

        fn next_id(state: &mut State) -> Id {
            state.next_id += 1;
            state.next_id
        }
    }

    impl Default for InMemRepo {
        fn default() -> Self { Self::new() }
    }

    #[async_trait]
    impl ArtistRepo for InMemRepo {
        async fn find_by_email(&self, email: &str) -> RepoResult<Option<Artist>> {
            let s = self.state.read().unwrap();
            Ok(s.artists.values().find(|a| a.email == email).cloned())
        }

        async fn insert(&self, new: NewArtist) -> RepoResult<Artist> {
            let mut s = self.state.write().unwrap();
            if s.artists.values().any(|a| a.email == new.email) {
                return Err(RepoError::Conflict);
            }
            let id = Self::next_id(&mut s);
            let artist = Artist {
                id,
                email: new.email,
                password_hash: new.password_hash,
                role: new.role,
            };
            s.artists.insert(id, artist.clone());
            drop(s); // release lock before persisting
            self.persist();
            Ok(artist)
        }

        async fn list_all(&self) -> RepoResult<Vec<Artist>> {
            let s = self.state.read().unwrap();
            let mut v: Vec<_> = s.artists.values().cloned().collect();
            v.sort_by_key(|a| a.id);
            Ok(v)
        }
    }
}

// Sqlite implementation (feature = "sqlite-store")
#[cfg(feature = "sqlite-store")]
pub mod sqlite {
    use super::*;
    use sqlx::{Pool, Sqlite};

    #[derive(Clone)]
    pub struct SqliteRepo { pool: Pool<Sqlite> }

    impl SqliteRepo {
        pub fn new(pool: Pool<Sqlite>) -> Self { Self { pool } }

        /// Creates the single table on startup. The UNIQUE column is what
        /// guards against concurrent duplicate registrations.
        pub async fn init_schema(&self) -> RepoResult<()> {
            sqlx::query(
                "CREATE TABLE IF NOT EXISTS artists (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    email TEXT NOT NULL UNIQUE,
                    password_hash TEXT NOT NULL,
                    role TEXT NOT NULL DEFAULT 'customer'
                )",
            )
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Internal(e.to_string()))?;
            Ok(())
        }
    }

    fn map_insert_err(e: sqlx::Error) -> RepoError {
        if let sqlx::Error::Database(db) = &e {
            if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) {
                return RepoError::Conflict;
            }
        }
        RepoError::Internal(e.to_string())
    }

    #[async_trait]
    impl ArtistRepo for SqliteRepo {
        async fn find_by_email(&self, email: &str) -> RepoResult<Option<Artist>> {
            let rec = sqlx::query_as::<_, Artist>(
                "SELECT id, email, password_hash, role FROM artists WHERE email = ?",
            )
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::Internal(e.to_string()))?;
            Ok(rec)
        }

        async fn insert(&self, new: NewArtist) -> RepoResult<Artist> {
            // Single statement, so a failure leaves no partial row.
            let rec = sqlx::query_as::<_, Artist>(
                "INSERT INTO artists (email, password_hash, role) VALUES (?, ?, ?)
                 RETURNING id, email, password_hash, role",
            )
            .bind(&new.email)
            .bind(&new.password_hash)
            .bind(&new.role)
            .fetch_one(&self.pool)
            .await
            .map_err(map_insert_err)?;
            Ok(rec)
        }

        async fn list_all(&self) -> RepoResult<Vec<Artist>> {
            let recs = sqlx::query_as::<_, Artist>(
                "SELECT id, email, password_hash, role FROM artists ORDER BY id",
            )
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::Internal(e.to_string()))?;
            Ok(recs)
        }
    }
}
