//! # catalogd: Catalog and Ordering REST Backend
//!
//! `catalogd` is a small REST backend for a catalog/ordering domain:
//! categories, items, item-category associations, and orders, persisted in
//! PostgreSQL with soft-delete semantics.
//!
//! ## Overview
//!
//! Every request follows the same pipeline: the raw request surface (body
//! string, path parameters, query string parameters) is validated by the pure
//! functions in [`validation`] before any pooled connection is acquired; the
//! matching repository in [`db::handlers`] runs one or two parameterized
//! statements; and the typed error that comes back - validation failure,
//! not-found, soft-deleted target, database error - is mapped to an HTTP
//! status and `{"error": ...}` body in exactly one place, the
//! [`errors::Error`] `IntoResponse` impl.
//!
//! Categories and items are soft-deleted: `deleted` is flipped to true and
//! the row disappears from every subsequent read, update, and association.
//! "Never existed" and "soft-deleted" are indistinguishable to callers. The
//! association endpoint additionally runs active-row existence checks for
//! both sides of the link before inserting, and re-signals the join table's
//! uniqueness violation as a client error.
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum) for
//! the HTTP layer and uses PostgreSQL via SQLx for all persistence. The
//! **API layer** ([`api`]) exposes RESTful CRUD endpoints; the **database
//! layer** ([`db`]) uses the repository pattern to abstract data access. The
//! connection pool is constructed at startup from [`Config`] and injected
//! through [`AppState`] - there is no global connection state, which keeps
//! every operation testable against an injected pool.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use catalogd::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = catalogd::config::Args::parse();
//!     let config = Config::load(&args)?;
//!     catalogd::telemetry::init_telemetry();
//!     Application::new(config).await?.serve(std::future::pending::<()>()).await
//! }
//! ```

use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::instrument;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod openapi;
pub mod telemetry;
pub mod types;
pub mod validation;

#[cfg(test)]
mod test;

pub use config::Config;

/// Shared application state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
}

/// Get the catalogd database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Connect the pool with the configured bounds and run migrations.
#[instrument(skip_all)]
async fn setup_database(config: &Config) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await?;

    migrator().run(&pool).await?;

    Ok(pool)
}

/// Build the application router with all endpoints and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "OK" }))
        .route("/categories", get(api::handlers::categories::list_categories))
        .route("/categories", post(api::handlers::categories::create_category))
        .route("/categories/{id}", patch(api::handlers::categories::update_category))
        .route("/categories/{id}", delete(api::handlers::categories::delete_category))
        .route("/categories/{id}/items", get(api::handlers::item_categories::get_items_by_category))
        .route("/categories/{id}/items", post(api::handlers::item_categories::add_item_to_category))
        .route("/items", get(api::handlers::items::list_items))
        .route("/items", post(api::handlers::items::create_item))
        .route("/items/{id}", get(api::handlers::items::get_item))
        .route("/items/{id}", put(api::handlers::items::update_item))
        .route("/items/{id}", delete(api::handlers::items::delete_item))
        .route("/orders", post(api::handlers::orders::create_order))
        .merge(Scalar::with_url("/docs", openapi::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The assembled application: configuration plus the ready-to-serve router.
pub struct Application {
    config: Config,
    router: Router,
}

impl Application {
    /// Connect to the database per `config`, run migrations, and build the
    /// router.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let pool = setup_database(&config).await?;
        Ok(Self::from_state(AppState { db: pool, config }))
    }

    /// Build the application around an existing pool. Tests inject their
    /// `#[sqlx::test]` pools here; migrations are still applied (a no-op when
    /// already run).
    pub async fn new_with_pool(config: Config, pool: PgPool) -> anyhow::Result<Self> {
        migrator().run(&pool).await?;
        Ok(Self::from_state(AppState { db: pool, config }))
    }

    fn from_state(state: AppState) -> Self {
        let config = state.config.clone();
        let router = build_router(state);
        Self { config, router }
    }

    /// Serve until the `shutdown` future resolves.
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let bind_addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = TcpListener::bind(&bind_addr).await?;
        tracing::info!("Listening on {bind_addr}");

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }

    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to build test server")
    }
}
