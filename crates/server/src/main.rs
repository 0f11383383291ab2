use std::{net::SocketAddr, sync::Arc, time::Duration};

use assembler::{assemble_user_page, assemble_users_index, RenderContext};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use directory::{FixtureDirectory, HttpDirectory, UserDirectory};
use shared::domain::UserId;
use tracing::{info, warn};

mod config;
mod pages;

use config::{load_settings, prepare_upstream_base_url, DataSource};

#[derive(Clone)]
struct AppState {
    directory: Arc<dyn UserDirectory>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let directory: Arc<dyn UserDirectory> = match settings.data_source {
        DataSource::Fixture => {
            info!("serving built-in fixture data");
            Arc::new(FixtureDirectory::seeded())
        }
        DataSource::Upstream => {
            let base_url = prepare_upstream_base_url(&settings.upstream_base_url)?;
            info!(%base_url, "serving from upstream user directory");
            Arc::new(HttpDirectory::new(
                base_url,
                Duration::from_secs(settings.upstream_timeout_secs),
            )?)
        }
    };

    let app = build_router(Arc::new(AppState { directory }));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/", get(home))
        .route("/about", get(about))
        .route("/dashboard/users", get(users_index))
        .route("/dashboard/users/:user_id", get(user_detail))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn home() -> Html<String> {
    Html(pages::home_page())
}

async fn about() -> Html<String> {
    Html(pages::about_page())
}

async fn users_index(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    let ctx = RenderContext::new(state.directory.clone());
    let model = assemble_users_index(&ctx).await.map_err(|error| {
        warn!(%error, "users index assembly failed");
        not_found(&error.message)
    })?;
    Ok(Html(pages::users_index_page(&model)))
}

async fn user_detail(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    let ctx = RenderContext::new(state.directory.clone());
    let model = assemble_user_page(&ctx, UserId(user_id))
        .await
        .map_err(|error| not_found(&error.message))?;
    Ok(Html(pages::user_page(&model)))
}

fn not_found(message: &str) -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(pages::not_found_page(message)))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
