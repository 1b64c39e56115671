use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub type Id = i64;

/// Persisted account row. Serializes in full for the store snapshot; API
/// responses go through [`ArtistPublic`] so the hash never reaches a caller.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Artist {
    pub id: Id,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

/// Projection returned by the listing endpoint: id, email, role and nothing
/// else.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArtistPublic {
    pub id: Id,
    pub email: String,
    pub role: String,
}

impl From<Artist> for ArtistPublic {
    fn from(a: Artist) -> Self {
        Self { id: a.id, email: a.email, role: a.role }
    }
}

/// Fields the store needs to create a row; the id is assigned on insert.
#[derive(Debug, Clone)]
pub struct NewArtist {
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

// Boundary structs: fields are optional so the service can report missing
// ones explicitly instead of relying on deserialization failures.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub artist_id: Id,
    pub role: String,
}
