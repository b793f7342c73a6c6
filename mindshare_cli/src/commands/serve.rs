//! HTTP endpoint: `GET /api/check?username=<name>`.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use clap::Args;
use mindshare_lib::{Client, MindshareChecker, MindshareError};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,
}

pub type SharedChecker = Arc<MindshareChecker<Client>>;

#[derive(Deserialize)]
pub struct CheckParams {
    username: Option<String>,
}

/// Error body is always `{"error": "<message>"}`.
pub enum AppError {
    Check(MindshareError),
    BadQuery(QueryRejection),
}

impl From<MindshareError> for AppError {
    fn from(e: MindshareError) -> Self {
        Self::Check(e)
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadQuery(rejection)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Check(e) if e.is_client_error() => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::Check(e) => {
                tracing::error!("check failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            Self::BadQuery(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub async fn check_handler(
    State(checker): State<SharedChecker>,
    query: Result<Query<CheckParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = query?;
    let username = params.username.unwrap_or_default();
    let resp = checker.check(&username).await?;
    Ok(Json(resp))
}

pub fn router(checker: SharedChecker) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_origin(Any)
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/check", get(check_handler))
        .layer(cors)
        .with_state(checker)
}

pub async fn run(args: &ServeArgs, checker: MindshareChecker<Client>) -> Result<()> {
    let app = router(Arc::new(checker));

    let address = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
