use actix_web::{web, App, HttpServer, middleware::Compress};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;
use tracing_actix_web::TracingLogger;

use kalakriti::openapi::ApiDoc;
use kalakriti::password::PasswordHasher;
use kalakriti::routes::{config, json_config, AppState};
use kalakriti::service::AccountService;

#[cfg(all(feature = "inmem-store", not(feature = "sqlite-store")))]
use kalakriti::repo::inmem::InMemRepo;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env automatically only in debug builds to reduce manual setup
    // overhead; production gets its environment from the deployment.
    if cfg!(debug_assertions) {
        let _ = dotenv::dotenv();
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    info!("Bootstrapping kalakriti server");

    #[cfg(all(feature = "inmem-store", not(feature = "sqlite-store")))]
    let repo = {
        info!("Using in-memory repository backend");
        InMemRepo::new()
    };

    #[cfg(feature = "sqlite-store")]
    let repo = {
        use sqlx::sqlite::SqlitePoolOptions;
        let db_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://kalakriti.db?mode=rwc".to_string());
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&db_url)
            .await
            .expect("Failed to open sqlite database");
        info!("Using sqlite repository backend at {db_url}");
        let repo = kalakriti::repo::sqlite::SqliteRepo::new(pool);
        repo.init_schema().await.expect("Failed to initialize schema");
        repo
    };

    let service = AccountService::new(Arc::new(repo), PasswordHasher::from_env());
    let openapi = ApiDoc::openapi();
    info!("OpenAPI spec generated");

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5000);

    let server = HttpServer::new(move || {
        // Open CORS mirrors the original deployment; FRONTEND_URL narrows it.
        let cors = match std::env::var("FRONTEND_URL") {
            Ok(front) => Cors::default().allowed_origin(&front),
            Err(_) => Cors::default().allow_any_origin(),
        }
        .allow_any_header()
        .allowed_methods(["GET", "POST", "OPTIONS"])
        .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(Compress::default())
            .wrap(cors)
            .app_data(json_config())
            .app_data(web::Data::new(AppState { service: service.clone() }))
            .configure(config)
            .service(SwaggerUi::new("/docs/{_:.*}").url("/docs/openapi.json", openapi.clone()))
    })
    .bind(("0.0.0.0", port))?;

    info!("Listening on http://0.0.0.0:{port}");

    server.run().await
}
