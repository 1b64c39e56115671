use actix_web::{web, HttpResponse};

use crate::error::{ApiError, ApiErrorBody};
use crate::models::{ArtistPublic, LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
use crate::service::AccountService;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/register").route(web::post().to(register)))
        .service(web::resource("/login").route(web::post().to(login)))
        .service(web::resource("/artists").route(web::get().to(list_artists)));
}

/// Non-JSON or malformed bodies become a 400 with the same `{error}` shape
/// every other failure uses.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ApiErrorBody {
                error: "Request body must be JSON".to_string(),
            }),
        )
        .into()
    })
}

#[derive(Clone)]
pub struct AppState {
    pub service: AccountService,
}

#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = MessageResponse),
        (status = 400, description = "Missing email or password"),
        (status = 409, description = "Email already registered"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn register(
    data: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    let artist = data.service.register(payload.into_inner()).await?;
    tracing::info!(id = artist.id, role = %artist.role, "registered account");
    Ok(HttpResponse::Created().json(MessageResponse {
        message: "Artist registered successfully!".to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = LoginResponse),
        (status = 400, description = "Missing email or password"),
        (status = 401, description = "Invalid email or password")
    )
)]
pub async fn login(
    data: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let artist = data.service.authenticate(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(LoginResponse {
        message: "Login successful!".to_string(),
        artist_id: artist.id,
        role: artist.role,
    }))
}

#[utoipa::path(
    get,
    path = "/artists",
    responses(
        (status = 200, description = "All accounts (id, email, role only)", body = [ArtistPublic])
    )
)]
pub async fn list_artists(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let artists = data.service.list().await?;
    Ok(HttpResponse::Ok().json(artists))
}
