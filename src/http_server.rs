use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json,
};
use prometheus_client::{encoding::text::encode, registry::Registry};
use tokio_util::sync::CancellationToken;

use crate::{
    context::AppContext,
    metrics,
    query::range::{retrieve, RangeRequest},
};

async fn get_data(context: AppContext, body: Bytes) -> Response {
    let request = match RangeRequest::from_body(&body) {
        Ok(request) => request,
        Err(err) => {
            tracing::warn!("Couldn't parse request body: {}", err);
            metrics::SERVER_ERROR.inc();
            return err.into_response();
        }
    };
    match retrieve(context.dataset(), request) {
        Ok(result) => {
            metrics::QUERY_OK.inc();
            Json(result).into_response()
        }
        Err(err) => {
            tracing::debug!(?request, "Rejected range query: {}", err);
            metrics::BAD_REQUEST.inc();
            err.into_response()
        }
    }
}

async fn get_status(context: AppContext) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "totalData": context.dataset().len(),
        "dataFile": context.data_file().as_str(),
    }))
}

async fn get_metrics(registry: Arc<Registry>) -> Result<String, StatusCode> {
    let mut buffer = String::new();
    encode(&mut buffer, &registry).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(buffer)
}

// Resolves `timeout` after the shutdown has been requested
async fn drain_deadline(cancellation_token: &CancellationToken, timeout: Duration) {
    cancellation_token.cancelled().await;
    tokio::time::sleep(timeout).await;
}

pub struct Server {
    router: axum::Router,
}

impl Server {
    pub fn new(context: AppContext, metrics_registry: Registry) -> Self {
        let metrics_registry = Arc::new(metrics_registry);
        let router = axum::Router::new()
            .route(
                "/data",
                post({
                    let context = context.clone();
                    move |body: Bytes| get_data(context, body)
                }),
            )
            .route("/status", get(move || get_status(context)))
            .route("/metrics", get(move || get_metrics(metrics_registry)));
        let router = Self::add_common_layers(router);
        Self { router }
    }

    pub async fn run(
        self,
        port: u16,
        shutdown_timeout: Duration,
        cancellation_token: CancellationToken,
    ) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
            .await
            .with_context(|| format!("Couldn't listen on port {port}"))?;
        tracing::info!("Server started at {}", listener.local_addr()?);
        self.serve(listener, shutdown_timeout, cancellation_token).await
    }

    async fn serve(
        self,
        listener: tokio::net::TcpListener,
        shutdown_timeout: Duration,
        cancellation_token: CancellationToken,
    ) -> anyhow::Result<()> {
        let serve = axum::serve(listener, self.router)
            .with_graceful_shutdown(cancellation_token.clone().cancelled_owned())
            .into_future();
        tokio::select! {
            result = serve => result.context("HTTP server failed")?,
            _ = drain_deadline(&cancellation_token, shutdown_timeout) => {
                tracing::warn!(
                    "Pending requests didn't finish in {:?}, shutting down anyway",
                    shutdown_timeout
                );
            }
        }
        Ok(())
    }

    fn add_common_layers(router: axum::Router) -> axum::Router {
        router
            .layer(sentry_tower::NewSentryLayer::new_from_top())
            .layer(sentry_tower::SentryHttpLayer::with_transaction())
            .layer(tower_http::catch_panic::CatchPanicLayer::new())
    }
}
