use crate::models::{ArtistPublic, LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::register,
        crate::routes::login,
        crate::routes::list_artists,
    ),
    components(schemas(
        ArtistPublic, RegisterRequest, LoginRequest, LoginResponse, MessageResponse
    )),
    tags(
        (name = "accounts", description = "Registration, login and account listing")
    )
)]
pub struct ApiDoc;
