use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{Artist, ArtistPublic, LoginRequest, NewArtist, RegisterRequest};
use crate::password::PasswordHasher;
use crate::repo::ArtistRepo;

pub const DEFAULT_ROLE: &str = "customer";

/// Orchestrates registration and authentication over a credential store.
/// Holds its dependencies explicitly and is shared with handlers through
/// `AppState` rather than ambient globals.
#[derive(Clone)]
pub struct AccountService {
    repo: Arc<dyn ArtistRepo>,
    hasher: PasswordHasher,
}

impl AccountService {
    pub fn new(repo: Arc<dyn ArtistRepo>, hasher: PasswordHasher) -> Self {
        Self { repo, hasher }
    }

    /// Presence check shared by both operations. Empty strings count as
    /// missing, matching the registration form's behavior.
    fn require_credentials(
        email: Option<String>,
        password: Option<String>,
    ) -> Result<(String, String), ApiError> {
        match (email, password) {
            (Some(e), Some(p)) if !e.is_empty() && !p.is_empty() => Ok((e, p)),
            _ => Err(ApiError::MissingField),
        }
    }

    pub async fn register(&self, req: RegisterRequest) -> Result<Artist, ApiError> {
        let (email, password) = Self::require_credentials(req.email, req.password)?;
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(ApiError::AlreadyExists);
        }
        let password_hash = self.hasher.derive(&password).map_err(|e| {
            log::error!("password derivation failed: {e}");
            ApiError::Internal
        })?;
        let role = req.role.unwrap_or_else(|| DEFAULT_ROLE.to_string());
        let artist = self.repo.insert(NewArtist { email, password_hash, role }).await?;
        Ok(artist)
    }

    /// Unknown email and wrong password collapse into the same
    /// `InvalidCredentials` so callers cannot tell which check failed.
    pub async fn authenticate(&self, req: LoginRequest) -> Result<Artist, ApiError> {
        let (email, password) = Self::require_credentials(req.email, req.password)?;
        let artist = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;
        if !self.hasher.matches(&password, &artist.password_hash) {
            return Err(ApiError::InvalidCredentials);
        }
        Ok(artist)
    }

    pub async fn list(&self) -> Result<Vec<ArtistPublic>, ApiError> {
        let artists = self.repo.list_all().await?;
        Ok(artists.into_iter().map(ArtistPublic::from).collect())
    }
}
