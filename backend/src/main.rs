use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use diesel::r2d2::{self, ConnectionManager};
use diesel::sqlite::SqliteConnection;
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::ServeDir;
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod handlers {
    pub mod api_error;
    pub mod site_dtos;
    pub mod site_handlers;
    pub mod lead_handlers;
}
mod config {
    pub mod app_config;
    pub mod seed_data;
}
mod models {
    pub mod site_models;
}
mod repositories {
    pub mod error;
    pub mod site_repository;
    pub mod lead_repository;
}
mod db;
mod schema;

#[cfg(test)]
mod tests {
    mod api_tests;
}

use config::app_config::AppConfig;
use repositories::site_repository::SiteRepository;
use repositories::lead_repository::LeadRepository;

use handlers::site_handlers;
use handlers::lead_handlers;


type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub struct AppState {
    site_repository: Arc<SiteRepository>,
    lead_repository: Arc<LeadRepository>,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self {
            site_repository: Arc::new(SiteRepository::new(pool.clone())),
            lead_repository: Arc::new(LeadRepository::new(pool)),
        }
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(site_handlers::health_check))
        .route("/api/services", get(site_handlers::get_services))
        .route("/api/testimonials", get(site_handlers::get_testimonials))
        .route("/api/consultation-request", post(lead_handlers::create_consultation_request))
        .route("/api/contact", post(lead_handlers::create_contact_message))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any) // the site is public, any origin may read it and post leads
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = AppConfig::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(config.environment.clone().into()),
            debug: config.is_development(),
            ..Default::default()
        }))
    });

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    // Set up database connection pool
    let pool = db::establish_pool(&config.database_url, 10)?;
    let state = Arc::new(AppState::new(pool));

    if config.seed_sample_data {
        let (services, testimonials) = state.site_repository.seed_sample_data()?;
        if services + testimonials > 0 {
            info!("Seeded {} services and {} testimonials", services, testimonials);
        }
    }

    let mut router = app(state);
    if let Some(dir) = &config.static_dir {
        info!("Serving frontend from {}", dir);
        router = router.fallback_service(ServeDir::new(dir));
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Astro Consulting API listening on {}", config.bind_addr);
    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}
